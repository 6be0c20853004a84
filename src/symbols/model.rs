use chrono::NaiveDateTime;
use serde::Serialize;

/// A listed instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub code: String,
    pub name: Option<String>,
    pub long_name: Option<String>,
    pub date_time: Option<NaiveDateTime>,
}

/// A ticker rename or move between exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolChange {
    pub date: Option<NaiveDateTime>,
    pub old_symbol: String,
    pub new_symbol: String,
    pub exchange: Option<String>,
    pub new_exchange: Option<String>,
}
