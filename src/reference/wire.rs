use serde::Deserialize;

use crate::core::wire::{envelope, list_node};

/* --- CountryList --- */

#[derive(Deserialize)]
pub(crate) struct CountryNode {
    #[serde(rename = "@Code", default)]
    pub(crate) code: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
}

list_node!(CountriesNode, "CountryBase" => CountryNode);
envelope!(CountriesResponse, "COUNTRIES" => CountriesNode);

/* --- DataFormats --- */

#[derive(Deserialize)]
pub(crate) struct DataFormatNode {
    #[serde(rename = "@Code", default)]
    pub(crate) code: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@Header", default)]
    pub(crate) header: Option<String>,
    #[serde(rename = "@DateFormat", default)]
    pub(crate) date_format: Option<String>,
    #[serde(rename = "@Extension", default)]
    pub(crate) extension: Option<String>,
    #[serde(rename = "@IncludeSuffix", default)]
    pub(crate) include_suffix: Option<String>,
    #[serde(rename = "@TabDelimited", default)]
    pub(crate) tab_delimited: Option<String>,
    #[serde(rename = "@IncludeHeaderRow", default)]
    pub(crate) include_header_row: Option<String>,
}

list_node!(DataFormatsNode, "DATAFORMAT" => DataFormatNode);
envelope!(DataFormatsResponse, "DATAFORMATS" => DataFormatsNode);

/* --- ExchangeGet / ExchangeList --- */

#[derive(Deserialize)]
pub(crate) struct ExchangeNode {
    #[serde(rename = "@Code", default)]
    pub(crate) code: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@LastTradeDateTime", default)]
    pub(crate) last_trade_date_time: Option<String>,
    #[serde(rename = "@Country", default)]
    pub(crate) country: Option<String>,
    #[serde(rename = "@Currency", default)]
    pub(crate) currency: Option<String>,
    #[serde(rename = "@Advances", default)]
    pub(crate) advances: Option<String>,
    #[serde(rename = "@Declines", default)]
    pub(crate) declines: Option<String>,
    #[serde(rename = "@Suffix", default)]
    pub(crate) suffix: Option<String>,
    #[serde(rename = "@TimeZone", default)]
    pub(crate) time_zone: Option<String>,
    #[serde(rename = "@IsIntraday", default)]
    pub(crate) is_intraday: Option<String>,
    #[serde(rename = "@IntradayStartDate", default)]
    pub(crate) intraday_start_date: Option<String>,
    #[serde(rename = "@HasIntradayProduct", default)]
    pub(crate) has_intraday_product: Option<String>,
}

list_node!(ExchangesNode, "EXCHANGE" => ExchangeNode);
envelope!(ExchangeResponse, "EXCHANGE" => ExchangeNode);
envelope!(ExchangesResponse, "EXCHANGES" => ExchangesNode);
