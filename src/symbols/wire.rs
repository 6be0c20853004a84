use serde::Deserialize;

use crate::core::wire::{envelope, list_node};

#[derive(Deserialize)]
pub(crate) struct SymbolNode {
    #[serde(rename = "@Code", default)]
    pub(crate) code: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@LongName", default)]
    pub(crate) long_name: Option<String>,
    #[serde(rename = "@DateTime", default)]
    pub(crate) date_time: Option<String>,
}

/// `SymbolList2` rows: code and name only, under one-letter attributes.
#[derive(Deserialize)]
pub(crate) struct SymbolNameNode {
    #[serde(rename = "@c", default)]
    pub(crate) c: Option<String>,
    #[serde(rename = "@n", default)]
    pub(crate) n: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SymbolChangeNode {
    #[serde(rename = "@DateStamp", default)]
    pub(crate) date_stamp: Option<String>,
    #[serde(rename = "@OldSymbol", default)]
    pub(crate) old_symbol: Option<String>,
    #[serde(rename = "@NewSymbol", default)]
    pub(crate) new_symbol: Option<String>,
    #[serde(rename = "@ExchangeCode", default)]
    pub(crate) exchange_code: Option<String>,
    #[serde(rename = "@NewExchangeCode", default)]
    pub(crate) new_exchange_code: Option<String>,
}

list_node!(SymbolsNode, "SYMBOL" => SymbolNode);
list_node!(SymbolNamesNode, "SYMBOL2" => SymbolNameNode);
list_node!(SymbolChangesNode, "SYMBOLCHANGE" => SymbolChangeNode);

envelope!(SymbolResponse, "SYMBOL" => SymbolNode);
envelope!(SymbolsResponse, "SYMBOLS" => SymbolsNode);
envelope!(SymbolNamesResponse, "SYMBOLS2" => SymbolNamesNode);
envelope!(SymbolChangesResponse, "SYMBOLCHANGES" => SymbolChangesNode);
