use chrono::NaiveDate;

use crate::core::{
    EodClient, EodError, Operation, Period, Quote,
    conversions::{display_date, wire_date},
    wire::QuotesResponse,
};

async fn fetch_quotes(
    client: &EodClient,
    op: Operation,
    params: &[(&'static str, String)],
    context: &str,
) -> Result<Vec<Quote>, EodError> {
    let node = client
        .fetch_node::<QuotesResponse>(op, params, context)
        .await?;

    let quotes: Vec<Quote> = node.items.into_iter().map(Quote::from).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(operation = op.as_str(), context, count = quotes.len(), "history");

    Ok(quotes)
}

pub(crate) async fn symbol_history(
    client: &EodClient,
    exchange: &str,
    symbol: &str,
    start: NaiveDate,
) -> Result<Vec<Quote>, EodError> {
    fetch_quotes(
        client,
        Operation::SymbolHistory,
        &[
            ("Exchange", exchange.to_string()),
            ("Symbol", symbol.to_string()),
            ("StartDate", wire_date(start)),
        ],
        &format!("{exchange}:{symbol}, {}-", display_date(start)),
    )
    .await
}

pub(crate) async fn symbol_history_period(
    client: &EodClient,
    exchange: &str,
    symbol: &str,
    date: NaiveDate,
    period: Period,
) -> Result<Vec<Quote>, EodError> {
    fetch_quotes(
        client,
        Operation::SymbolHistoryPeriod,
        &[
            ("Exchange", exchange.to_string()),
            ("Symbol", symbol.to_string()),
            ("Date", wire_date(date)),
            ("Period", period.code().to_string()),
        ],
        &format!("{exchange}:{symbol}, {}, {period}", display_date(date)),
    )
    .await
}

pub(crate) async fn symbol_history_period_by_date_range(
    client: &EodClient,
    exchange: &str,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    period: Period,
) -> Result<Vec<Quote>, EodError> {
    fetch_quotes(
        client,
        Operation::SymbolHistoryPeriodByDateRange,
        &[
            ("Exchange", exchange.to_string()),
            ("Symbol", symbol.to_string()),
            ("StartDate", wire_date(start)),
            ("EndDate", wire_date(end)),
            ("Period", period.code().to_string()),
        ],
        &format!(
            "{exchange}:{symbol}, {}-{}, {period}",
            display_date(start),
            display_date(end)
        ),
    )
    .await
}
