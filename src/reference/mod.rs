//! Service-wide reference data: countries, export formats and exchanges.

pub(crate) mod api;
mod model;
mod wire;

pub use model::{DataFormat, ExchangeInfo};

use std::collections::BTreeMap;

use crate::core::{EodClient, EodError};

impl EodClient {
    /// Fetches all countries, keyed by country code (`US` → `United States`).
    ///
    /// # Errors
    ///
    /// Returns an error if login or the request fails, or the response has no country list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn countries(&self) -> Result<BTreeMap<String, String>, EodError> {
        api::country_list(self).await
    }

    /// Fetches the export formats offered by the service, keyed by format code.
    ///
    /// # Errors
    ///
    /// Returns an error if login or the request fails, or the response has no format list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn data_formats(&self) -> Result<BTreeMap<String, DataFormat>, EodError> {
        api::data_formats(self).await
    }

    /// Fetches every exchange, keyed by exchange code.
    ///
    /// # Errors
    ///
    /// Returns an error if login or the request fails, or the response has no exchange list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn exchanges(&self) -> Result<BTreeMap<String, ExchangeInfo>, EodError> {
        api::exchange_list(self).await
    }
}
