use std::collections::BTreeMap;

use crate::core::{
    EodClient, EodError, Operation,
    conversions::{parse_bool, parse_datetime, parse_u64, text},
};

use super::model::{DataFormat, ExchangeInfo};
use super::wire::{
    CountriesResponse, DataFormatNode, DataFormatsResponse, ExchangeNode, ExchangeResponse,
    ExchangesResponse,
};

/* ---------- Mapping wire → public models ---------- */

fn map_data_format(n: DataFormatNode) -> DataFormat {
    DataFormat {
        code: text(n.code).unwrap_or_default(),
        name: text(n.name),
        header: text(n.header),
        date_format: text(n.date_format),
        extension: text(n.extension),
        include_suffix: parse_bool(n.include_suffix.as_deref()),
        tab_delimited: parse_bool(n.tab_delimited.as_deref()),
        include_header_row: parse_bool(n.include_header_row.as_deref()),
    }
}

fn map_exchange(n: ExchangeNode) -> ExchangeInfo {
    ExchangeInfo {
        code: text(n.code).unwrap_or_default(),
        name: text(n.name),
        last_trade: parse_datetime(n.last_trade_date_time.as_deref()),
        country: text(n.country),
        currency: text(n.currency),
        advances: parse_u64(n.advances.as_deref()),
        declines: parse_u64(n.declines.as_deref()),
        suffix: text(n.suffix),
        time_zone: text(n.time_zone),
        is_intraday: parse_bool(n.is_intraday.as_deref()),
        intraday_start: parse_datetime(n.intraday_start_date.as_deref()),
        has_intraday_product: parse_bool(n.has_intraday_product.as_deref()),
    }
}

/* ---------- Entry points ---------- */

pub(crate) async fn country_list(client: &EodClient) -> Result<BTreeMap<String, String>, EodError> {
    let node = client
        .fetch_node::<CountriesResponse>(Operation::CountryList, &[], "")
        .await?;

    let countries: BTreeMap<String, String> = node
        .items
        .into_iter()
        .filter_map(|c| Some((text(c.code)?, text(c.name).unwrap_or_default())))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(count = countries.len(), "CountryList");

    Ok(countries)
}

pub(crate) async fn data_formats(
    client: &EodClient,
) -> Result<BTreeMap<String, DataFormat>, EodError> {
    let node = client
        .fetch_node::<DataFormatsResponse>(Operation::DataFormats, &[], "")
        .await?;

    Ok(node
        .items
        .into_iter()
        .map(map_data_format)
        .map(|f| (f.code.clone(), f))
        .collect())
}

pub(crate) async fn exchange_get(client: &EodClient, exchange: &str) -> Result<ExchangeInfo, EodError> {
    let node = client
        .fetch_node::<ExchangeResponse>(
            Operation::ExchangeGet,
            &[("Exchange", exchange.to_string())],
            exchange,
        )
        .await?;
    Ok(map_exchange(node))
}

pub(crate) async fn exchange_list(
    client: &EodClient,
) -> Result<BTreeMap<String, ExchangeInfo>, EodError> {
    let node = client
        .fetch_node::<ExchangesResponse>(Operation::ExchangeList, &[], "")
        .await?;

    let exchanges: BTreeMap<String, ExchangeInfo> = node
        .items
        .into_iter()
        .map(map_exchange)
        .map(|e| (e.code.clone(), e))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(count = exchanges.len(), "ExchangeList");

    Ok(exchanges)
}
