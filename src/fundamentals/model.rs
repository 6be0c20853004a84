use chrono::NaiveDateTime;
use serde::Serialize;

/// Company fundamentals for one symbol, as of `date_time`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fundamental {
    pub symbol: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    pub shares: Option<u64>,
    pub market_cap: Option<f64>,
    /// Price / earnings.
    pub pe: Option<f64>,
    /// Earnings per share.
    pub eps: Option<f64>,
    /// Net tangible assets per share.
    pub nta: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub dividend: Option<f64>,
    pub dividend_date: Option<NaiveDateTime>,
    /// Dividend per share.
    pub dps: Option<f64>,
    pub imputation_credits: Option<f64>,
    pub ebitda: Option<f64>,
    /// PE / growth.
    pub peg: Option<f64>,
    pub price_to_sales: Option<f64>,
    pub price_to_book: Option<f64>,
    pub earnings_yield: Option<f64>,
}

/// Moving averages, ranges and oscillators for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technical {
    pub symbol: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub previous: Option<f64>,
    pub change: Option<f64>,
    pub ma1: Option<f64>,
    pub ma2: Option<f64>,
    pub ma5: Option<f64>,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub ma100: Option<f64>,
    pub ma200: Option<f64>,
    pub ma_percent: Option<f64>,
    pub ma_return: Option<f64>,
    pub volume_change: Option<f64>,
    pub three_month_change: Option<f64>,
    pub six_month_change: Option<f64>,
    pub week_high: Option<f64>,
    pub week_low: Option<f64>,
    pub week_change: Option<f64>,
    pub month_high: Option<f64>,
    pub month_low: Option<f64>,
    pub month_change: Option<f64>,
    pub year_high: Option<f64>,
    pub year_low: Option<f64>,
    pub year_change: Option<f64>,
    pub ytd_change: Option<f64>,
    pub rsi14: Option<f64>,
    pub sto9: Option<f64>,
    pub wpr14: Option<f64>,
    pub mtm14: Option<f64>,
    pub roc14: Option<f64>,
    /// Parabolic stop-and-reverse.
    pub sar: Option<f64>,
    pub volatility: Option<f64>,
    pub liquidity: Option<f64>,
}
