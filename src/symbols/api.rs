use std::collections::BTreeMap;

use crate::core::{
    EodClient, EodError, Operation,
    conversions::{parse_datetime, text},
};

use super::model::{Symbol, SymbolChange};
use super::wire::{
    SymbolChangeNode, SymbolChangesResponse, SymbolNamesResponse, SymbolNode, SymbolResponse,
    SymbolsResponse,
};

fn map_symbol(n: SymbolNode) -> Symbol {
    Symbol {
        code: text(n.code).unwrap_or_default(),
        name: text(n.name),
        long_name: text(n.long_name),
        date_time: parse_datetime(n.date_time.as_deref()),
    }
}

fn map_change(n: SymbolChangeNode) -> SymbolChange {
    SymbolChange {
        date: parse_datetime(n.date_stamp.as_deref()),
        old_symbol: text(n.old_symbol).unwrap_or_default(),
        new_symbol: text(n.new_symbol).unwrap_or_default(),
        exchange: text(n.exchange_code),
        new_exchange: text(n.new_exchange_code),
    }
}

pub(crate) async fn symbol_get(
    client: &EodClient,
    exchange: &str,
    symbol: &str,
) -> Result<Symbol, EodError> {
    let node = client
        .fetch_node::<SymbolResponse>(
            Operation::SymbolGet,
            &[
                ("Exchange", exchange.to_string()),
                ("Symbol", symbol.to_string()),
            ],
            &format!("{exchange}:{symbol}"),
        )
        .await?;
    Ok(map_symbol(node))
}

pub(crate) async fn symbol_list(
    client: &EodClient,
    exchange: &str,
) -> Result<BTreeMap<String, Symbol>, EodError> {
    let node = client
        .fetch_node::<SymbolsResponse>(
            Operation::SymbolList,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;

    let symbols: BTreeMap<String, Symbol> = node
        .items
        .into_iter()
        .map(map_symbol)
        .map(|s| (s.code.clone(), s))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(exchange, count = symbols.len(), "SymbolList");

    Ok(symbols)
}

pub(crate) async fn symbol_list2(
    client: &EodClient,
    exchange: &str,
) -> Result<BTreeMap<String, String>, EodError> {
    let node = client
        .fetch_node::<SymbolNamesResponse>(
            Operation::SymbolList2,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;

    Ok(node
        .items
        .into_iter()
        .filter_map(|s| Some((text(s.c)?, text(s.n).unwrap_or_default())))
        .collect())
}

pub(crate) async fn symbol_changes_by_exchange(
    client: &EodClient,
    exchange: &str,
) -> Result<Vec<SymbolChange>, EodError> {
    let node = client
        .fetch_node::<SymbolChangesResponse>(
            Operation::SymbolChangesByExchange,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;
    Ok(node.items.into_iter().map(map_change).collect())
}
