use serde::Deserialize;

use crate::core::wire::{envelope, list_node};

#[derive(Deserialize)]
pub(crate) struct FundamentalNode {
    #[serde(rename = "@Symbol", default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@Description", default)]
    pub(crate) description: Option<String>,
    #[serde(rename = "@DateTime", default)]
    pub(crate) date_time: Option<String>,
    #[serde(rename = "@Industry", default)]
    pub(crate) industry: Option<String>,
    #[serde(rename = "@Sector", default)]
    pub(crate) sector: Option<String>,
    #[serde(rename = "@Shares", default)]
    pub(crate) shares: Option<String>,
    #[serde(rename = "@MarketCap", default)]
    pub(crate) market_cap: Option<String>,
    #[serde(rename = "@PE", default)]
    pub(crate) pe: Option<String>,
    #[serde(rename = "@EPS", default)]
    pub(crate) eps: Option<String>,
    #[serde(rename = "@NTA", default)]
    pub(crate) nta: Option<String>,
    #[serde(rename = "@DivYield", default)]
    pub(crate) div_yield: Option<String>,
    #[serde(rename = "@Dividend", default)]
    pub(crate) dividend: Option<String>,
    #[serde(rename = "@DividendDate", default)]
    pub(crate) dividend_date: Option<String>,
    #[serde(rename = "@DPS", default)]
    pub(crate) dps: Option<String>,
    #[serde(rename = "@ImputationCredits", default)]
    pub(crate) imputation_credits: Option<String>,
    #[serde(rename = "@EBITDA", default)]
    pub(crate) ebitda: Option<String>,
    #[serde(rename = "@PEG", default)]
    pub(crate) peg: Option<String>,
    #[serde(rename = "@PtS", default)]
    pub(crate) pts: Option<String>,
    #[serde(rename = "@PtB", default)]
    pub(crate) ptb: Option<String>,
    #[serde(rename = "@Yield", default)]
    pub(crate) yield_: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct TechnicalNode {
    #[serde(rename = "@Symbol", default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@Description", default)]
    pub(crate) description: Option<String>,
    #[serde(rename = "@DateTime", default)]
    pub(crate) date_time: Option<String>,
    #[serde(rename = "@Previous", default)]
    pub(crate) previous: Option<String>,
    #[serde(rename = "@Change", default)]
    pub(crate) change: Option<String>,
    #[serde(rename = "@MA1", default)]
    pub(crate) ma1: Option<String>,
    #[serde(rename = "@MA2", default)]
    pub(crate) ma2: Option<String>,
    #[serde(rename = "@MA5", default)]
    pub(crate) ma5: Option<String>,
    #[serde(rename = "@MA20", default)]
    pub(crate) ma20: Option<String>,
    #[serde(rename = "@MA50", default)]
    pub(crate) ma50: Option<String>,
    #[serde(rename = "@MA100", default)]
    pub(crate) ma100: Option<String>,
    #[serde(rename = "@MA200", default)]
    pub(crate) ma200: Option<String>,
    #[serde(rename = "@MAPercent", default)]
    pub(crate) ma_percent: Option<String>,
    #[serde(rename = "@MAReturn", default)]
    pub(crate) ma_return: Option<String>,
    #[serde(rename = "@VolumeChange", default)]
    pub(crate) volume_change: Option<String>,
    #[serde(rename = "@ThreeMonthChange", default)]
    pub(crate) three_month_change: Option<String>,
    #[serde(rename = "@SixMonthChange", default)]
    pub(crate) six_month_change: Option<String>,
    #[serde(rename = "@WeekHigh", default)]
    pub(crate) week_high: Option<String>,
    #[serde(rename = "@WeekLow", default)]
    pub(crate) week_low: Option<String>,
    #[serde(rename = "@WeekChange", default)]
    pub(crate) week_change: Option<String>,
    #[serde(rename = "@MonthHigh", default)]
    pub(crate) month_high: Option<String>,
    #[serde(rename = "@MonthLow", default)]
    pub(crate) month_low: Option<String>,
    #[serde(rename = "@MonthChange", default)]
    pub(crate) month_change: Option<String>,
    #[serde(rename = "@YearHigh", default)]
    pub(crate) year_high: Option<String>,
    #[serde(rename = "@YearLow", default)]
    pub(crate) year_low: Option<String>,
    #[serde(rename = "@YearChange", default)]
    pub(crate) year_change: Option<String>,
    #[serde(rename = "@YTDChange", default)]
    pub(crate) ytd_change: Option<String>,
    #[serde(rename = "@RSI14", default)]
    pub(crate) rsi14: Option<String>,
    #[serde(rename = "@STO9", default)]
    pub(crate) sto9: Option<String>,
    #[serde(rename = "@WPR14", default)]
    pub(crate) wpr14: Option<String>,
    #[serde(rename = "@MTM14", default)]
    pub(crate) mtm14: Option<String>,
    #[serde(rename = "@ROC14", default)]
    pub(crate) roc14: Option<String>,
    #[serde(rename = "@SAR", default)]
    pub(crate) sar: Option<String>,
    #[serde(rename = "@Volatility", default)]
    pub(crate) volatility: Option<String>,
    #[serde(rename = "@Liquidity", default)]
    pub(crate) liquidity: Option<String>,
}

list_node!(FundamentalsNode, "FUNDAMENTAL" => FundamentalNode);
list_node!(TechnicalsNode, "TECHNICAL" => TechnicalNode);

envelope!(FundamentalsResponse, "FUNDAMENTALS" => FundamentalsNode);
envelope!(TechnicalsResponse, "TECHNICALS" => TechnicalsNode);
