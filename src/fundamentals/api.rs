use std::collections::BTreeMap;

use crate::core::{
    EodClient, EodError, Operation,
    conversions::{parse_datetime, parse_f64, parse_u64, text},
};

use super::model::{Fundamental, Technical};
use super::wire::{FundamentalNode, FundamentalsResponse, TechnicalNode, TechnicalsResponse};

/* ---------- Mapping wire → public models ---------- */

fn map_fundamental(n: FundamentalNode) -> Fundamental {
    Fundamental {
        symbol: text(n.symbol).unwrap_or_default(),
        name: text(n.name),
        description: text(n.description),
        date_time: parse_datetime(n.date_time.as_deref()),
        industry: text(n.industry),
        sector: text(n.sector),
        shares: parse_u64(n.shares.as_deref()),
        market_cap: parse_f64(n.market_cap.as_deref()),
        pe: parse_f64(n.pe.as_deref()),
        eps: parse_f64(n.eps.as_deref()),
        nta: parse_f64(n.nta.as_deref()),
        dividend_yield: parse_f64(n.div_yield.as_deref()),
        dividend: parse_f64(n.dividend.as_deref()),
        dividend_date: parse_datetime(n.dividend_date.as_deref()),
        dps: parse_f64(n.dps.as_deref()),
        imputation_credits: parse_f64(n.imputation_credits.as_deref()),
        ebitda: parse_f64(n.ebitda.as_deref()),
        peg: parse_f64(n.peg.as_deref()),
        price_to_sales: parse_f64(n.pts.as_deref()),
        price_to_book: parse_f64(n.ptb.as_deref()),
        earnings_yield: parse_f64(n.yield_.as_deref()),
    }
}

fn map_technical(n: TechnicalNode) -> Technical {
    let f = |v: Option<String>| parse_f64(v.as_deref());
    Technical {
        symbol: text(n.symbol).unwrap_or_default(),
        name: text(n.name),
        description: text(n.description),
        date_time: parse_datetime(n.date_time.as_deref()),
        previous: f(n.previous),
        change: f(n.change),
        ma1: f(n.ma1),
        ma2: f(n.ma2),
        ma5: f(n.ma5),
        ma20: f(n.ma20),
        ma50: f(n.ma50),
        ma100: f(n.ma100),
        ma200: f(n.ma200),
        ma_percent: f(n.ma_percent),
        ma_return: f(n.ma_return),
        volume_change: f(n.volume_change),
        three_month_change: f(n.three_month_change),
        six_month_change: f(n.six_month_change),
        week_high: f(n.week_high),
        week_low: f(n.week_low),
        week_change: f(n.week_change),
        month_high: f(n.month_high),
        month_low: f(n.month_low),
        month_change: f(n.month_change),
        year_high: f(n.year_high),
        year_low: f(n.year_low),
        year_change: f(n.year_change),
        ytd_change: f(n.ytd_change),
        rsi14: f(n.rsi14),
        sto9: f(n.sto9),
        wpr14: f(n.wpr14),
        mtm14: f(n.mtm14),
        roc14: f(n.roc14),
        sar: f(n.sar),
        volatility: f(n.volatility),
        liquidity: f(n.liquidity),
    }
}

/* ---------- Entry points ---------- */

pub(crate) async fn fundamental_list(
    client: &EodClient,
    exchange: &str,
) -> Result<BTreeMap<String, Fundamental>, EodError> {
    let node = client
        .fetch_node::<FundamentalsResponse>(
            Operation::FundamentalList,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;

    let rows: BTreeMap<String, Fundamental> = node
        .items
        .into_iter()
        .map(map_fundamental)
        .map(|f| (f.symbol.clone(), f))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(exchange, count = rows.len(), "FundamentalList");

    Ok(rows)
}

pub(crate) async fn technical_list(
    client: &EodClient,
    exchange: &str,
) -> Result<BTreeMap<String, Technical>, EodError> {
    let node = client
        .fetch_node::<TechnicalsResponse>(
            Operation::TechnicalList,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;

    Ok(node
        .items
        .into_iter()
        .map(map_technical)
        .map(|t| (t.symbol.clone(), t))
        .collect())
}
