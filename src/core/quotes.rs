// src/core/quotes.rs
use std::collections::BTreeMap;

use crate::core::{
    CompactQuote, Quote,
    conversions::{parse_datetime, parse_decimal, parse_u64, text},
    wire::{CompactQuoteNode, QuoteNode},
};

impl From<QuoteNode> for Quote {
    fn from(n: QuoteNode) -> Self {
        Self {
            symbol: text(n.symbol).unwrap_or_default(),
            description: text(n.description),
            name: text(n.name),
            date_time: parse_datetime(n.date_time.as_deref()),
            open: parse_decimal(n.open.as_deref()),
            high: parse_decimal(n.high.as_deref()),
            low: parse_decimal(n.low.as_deref()),
            close: parse_decimal(n.close.as_deref()),
            volume: parse_u64(n.volume.as_deref()),
            open_interest: parse_u64(n.open_interest.as_deref()),
            previous: parse_decimal(n.previous.as_deref()),
            change: parse_decimal(n.change.as_deref()),
            bid: parse_decimal(n.bid.as_deref()),
            ask: parse_decimal(n.ask.as_deref()),
            previous_close: parse_decimal(n.previous_close.as_deref()),
            next_open: parse_decimal(n.next_open.as_deref()),
            modified: parse_datetime(n.modified.as_deref()),
        }
    }
}

impl From<CompactQuoteNode> for CompactQuote {
    fn from(n: CompactQuoteNode) -> Self {
        Self {
            symbol: text(n.s).unwrap_or_default(),
            date_time: parse_datetime(n.d.as_deref()),
            open: parse_decimal(n.o.as_deref()),
            high: parse_decimal(n.h.as_deref()),
            low: parse_decimal(n.l.as_deref()),
            close: parse_decimal(n.c.as_deref()),
            volume: parse_u64(n.v.as_deref()),
            open_interest: parse_u64(n.i.as_deref()),
        }
    }
}

/// Something that carries the symbol it is keyed by.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Quote {
    fn key(&self) -> &str {
        &self.symbol
    }
}

impl Keyed for CompactQuote {
    fn key(&self) -> &str {
        &self.symbol
    }
}

/// One record per symbol; a later duplicate replaces an earlier one.
pub(crate) fn by_symbol<N, T>(nodes: Vec<N>) -> BTreeMap<String, T>
where
    T: From<N> + Keyed,
{
    nodes
        .into_iter()
        .map(T::from)
        .map(|q| (q.key().to_string(), q))
        .collect()
}

/// All records per symbol, in document order. Used for intraday lists where a symbol
/// has one row per bar.
pub(crate) fn grouped_by_symbol<N, T>(nodes: Vec<N>) -> BTreeMap<String, Vec<T>>
where
    T: From<N> + Keyed,
{
    let mut out: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for q in nodes.into_iter().map(T::from) {
        out.entry(q.key().to_string()).or_default().push(q);
    }
    out
}
