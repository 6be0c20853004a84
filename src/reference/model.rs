use chrono::NaiveDateTime;
use serde::Serialize;

/// An export format offered by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFormat {
    pub code: String,
    pub name: Option<String>,
    pub header: Option<String>,
    pub date_format: Option<String>,
    pub extension: Option<String>,
    pub include_suffix: Option<bool>,
    pub tab_delimited: Option<bool>,
    pub include_header_row: Option<bool>,
}

/// Details of a single exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeInfo {
    pub code: String,
    pub name: Option<String>,
    /// Timestamp of the most recent trading data.
    pub last_trade: Option<NaiveDateTime>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub advances: Option<u64>,
    pub declines: Option<u64>,
    pub suffix: Option<String>,
    pub time_zone: Option<String>,
    pub is_intraday: Option<bool>,
    pub intraday_start: Option<NaiveDateTime>,
    pub has_intraday_product: Option<bool>,
}
