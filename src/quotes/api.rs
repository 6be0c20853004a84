use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::{
    CompactQuote, EodClient, EodError, Operation, Period, Quote,
    conversions::{display_date, wire_date},
    quotes::{by_symbol, grouped_by_symbol},
    wire::{CompactQuotesResponse, QuoteResponse, QuotesResponse},
};

pub(crate) async fn quote_get(
    client: &EodClient,
    exchange: &str,
    symbol: &str,
) -> Result<Quote, EodError> {
    let node = client
        .fetch_node::<QuoteResponse>(
            Operation::QuoteGet,
            &[
                ("Exchange", exchange.to_string()),
                ("Symbol", symbol.to_string()),
            ],
            &format!("{exchange}:{symbol}"),
        )
        .await?;
    Ok(Quote::from(node))
}

pub(crate) async fn quote_list(
    client: &EodClient,
    exchange: &str,
) -> Result<BTreeMap<String, Quote>, EodError> {
    let node = client
        .fetch_node::<QuotesResponse>(
            Operation::QuoteList,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;

    let quotes: BTreeMap<String, Quote> = by_symbol(node.items);

    #[cfg(feature = "tracing")]
    tracing::debug!(exchange, count = quotes.len(), "QuoteList");

    Ok(quotes)
}

pub(crate) async fn quote_list2(
    client: &EodClient,
    exchange: &str,
    symbols: &[String],
) -> Result<BTreeMap<String, Quote>, EodError> {
    if symbols.is_empty() {
        return Err(EodError::InvalidParams(
            "QuoteList2: at least one symbol required".into(),
        ));
    }
    let joined = symbols.join(",");
    let node = client
        .fetch_node::<QuotesResponse>(
            Operation::QuoteList2,
            &[
                ("Exchange", exchange.to_string()),
                ("Symbols", joined.clone()),
            ],
            &format!("{exchange}:{joined}"),
        )
        .await?;
    Ok(by_symbol(node.items))
}

pub(crate) async fn quote_list_by_date(
    client: &EodClient,
    exchange: &str,
    date: NaiveDate,
) -> Result<BTreeMap<String, Quote>, EodError> {
    let node = client
        .fetch_node::<QuotesResponse>(
            Operation::QuoteListByDate,
            &[
                ("Exchange", exchange.to_string()),
                ("QuoteDate", wire_date(date)),
            ],
            &format!("{exchange}, {}", display_date(date)),
        )
        .await?;
    Ok(by_symbol(node.items))
}

pub(crate) async fn quote_list_by_date2(
    client: &EodClient,
    exchange: &str,
    date: NaiveDate,
) -> Result<BTreeMap<String, CompactQuote>, EodError> {
    let node = client
        .fetch_node::<CompactQuotesResponse>(
            Operation::QuoteListByDate2,
            &[
                ("Exchange", exchange.to_string()),
                ("QuoteDate", wire_date(date)),
            ],
            &format!("{exchange}, {}", display_date(date)),
        )
        .await?;
    Ok(by_symbol(node.items))
}

pub(crate) async fn quote_list_by_date_period(
    client: &EodClient,
    exchange: &str,
    date: NaiveDate,
    period: Period,
) -> Result<BTreeMap<String, Vec<Quote>>, EodError> {
    let node = client
        .fetch_node::<QuotesResponse>(
            Operation::QuoteListByDatePeriod,
            &[
                ("Exchange", exchange.to_string()),
                ("QuoteDate", wire_date(date)),
                ("Period", period.code().to_string()),
            ],
            &format!("{exchange}, {}, {period}", display_date(date)),
        )
        .await?;
    Ok(grouped_by_symbol(node.items))
}

pub(crate) async fn quote_list_by_date_period2(
    client: &EodClient,
    exchange: &str,
    date: NaiveDate,
    period: Period,
) -> Result<BTreeMap<String, Vec<CompactQuote>>, EodError> {
    let node = client
        .fetch_node::<CompactQuotesResponse>(
            Operation::QuoteListByDatePeriod2,
            &[
                ("Exchange", exchange.to_string()),
                ("QuoteDate", wire_date(date)),
                ("Period", period.code().to_string()),
            ],
            &format!("{exchange}, {}, {period}", display_date(date)),
        )
        .await?;
    Ok(grouped_by_symbol(node.items))
}

/// `Top10Gains` / `Top10Losses`: ranked, so the server's order is kept.
pub(crate) async fn top_movers(
    client: &EodClient,
    op: Operation,
    exchange: &str,
) -> Result<Vec<Quote>, EodError> {
    let node = client
        .fetch_node::<QuotesResponse>(op, &[("Exchange", exchange.to_string())], exchange)
        .await?;
    Ok(node.items.into_iter().map(Quote::from).collect())
}
