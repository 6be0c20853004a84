use crate::core::{
    EodClient, EodError, Operation,
    conversions::{parse_datetime, text},
};

use super::model::{Split, parse_ratio};
use super::wire::{SplitNode, SplitsResponse};

fn map_split(n: SplitNode) -> Split {
    let ratio = text(n.ratio).unwrap_or_default();
    let parsed = parse_ratio(&ratio);
    Split {
        exchange: text(n.exchange),
        symbol: text(n.symbol).unwrap_or_default(),
        date_time: parse_datetime(n.date_time.as_deref()),
        numerator: parsed.map(|(n, _)| n),
        denominator: parsed.map(|(_, d)| d),
        ratio,
    }
}

/// The service reports an empty split history as a failure ("No Splits were found");
/// that is an empty result, not an error.
fn no_splits(err: &EodError) -> bool {
    matches!(err, EodError::Api { message, .. }
        if message.to_ascii_lowercase().contains("no splits"))
}

async fn fetch_splits(
    client: &EodClient,
    op: Operation,
    params: &[(&'static str, String)],
    context: &str,
) -> Result<Vec<Split>, EodError> {
    match client.fetch_node::<SplitsResponse>(op, params, context).await {
        Ok(node) => Ok(node.items.into_iter().map(map_split).collect()),
        Err(e) if no_splits(&e) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

pub(crate) async fn split_list_by_exchange(
    client: &EodClient,
    exchange: &str,
) -> Result<Vec<Split>, EodError> {
    fetch_splits(
        client,
        Operation::SplitListByExchange,
        &[("Exchange", exchange.to_string())],
        exchange,
    )
    .await
}

pub(crate) async fn split_list_by_symbol(
    client: &EodClient,
    exchange: &str,
    symbol: &str,
) -> Result<Vec<Split>, EodError> {
    fetch_splits(
        client,
        Operation::SplitListBySymbol,
        &[
            ("Exchange", exchange.to_string()),
            ("Symbol", symbol.to_string()),
        ],
        &format!("{exchange}:{symbol}"),
    )
    .await
}
