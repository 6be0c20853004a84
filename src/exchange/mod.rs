//! Exchange-wide operations.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::{CompactQuote, EodClient, EodError, Operation, Period, Quote};
use crate::fundamentals::{self, Fundamental, Technical};
use crate::reference::{self, ExchangeInfo};
use crate::splits::{self, Split};
use crate::symbols::{self, Symbol, SymbolChange};
use crate::{quotes, ticker::Ticker};

/// A handle for one exchange, providing access to every exchange-wide list.
///
/// # Example
///
/// ```no_run
/// # use eoddata_rs::{EodClient, Exchange};
/// # #[tokio::main]
/// # async fn main() -> Result<(), eoddata_rs::EodError> {
/// let client = EodClient::builder().credentials("user", "secret").build()?;
/// let nasdaq = Exchange::new(&client, "NASDAQ");
///
/// let quotes = nasdaq.quotes().await?;
/// if let Some(goog) = quotes.get("GOOG") {
///     println!("GOOG closed at {:?}", goog.close);
/// }
///
/// for q in nasdaq.top_gainers().await? {
///     println!("{} {:?}", q.symbol, q.change_ratio());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Exchange {
    client: EodClient,
    code: String,
}

impl Exchange {
    /// Creates a handle for the exchange with the given code (e.g. `NASDAQ`, `NYSE`).
    pub fn new(client: &EodClient, code: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            code: code.into(),
        }
    }

    /// The exchange code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// A [`Ticker`] for `symbol` on this exchange.
    pub fn ticker(&self, symbol: impl Into<String>) -> Ticker {
        Ticker::new(&self.client, self.code.clone(), symbol)
    }

    /// Fetches the exchange's details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the exchange is unknown.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn info(&self) -> Result<ExchangeInfo, EodError> {
        reference::api::exchange_get(&self.client, &self.code).await
    }

    /* ---------------- Quotes ---------------- */

    /// Fetches the latest quote for every symbol, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn quotes(&self) -> Result<BTreeMap<String, Quote>, EodError> {
        quotes::api::quote_list(&self.client, &self.code).await
    }

    /// Fetches the latest quotes for just `symbols`, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::InvalidParams`] if `symbols` is empty, otherwise any request error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols), err, fields(exchange = %self.code)))]
    pub async fn quotes_for<I, S>(&self, symbols: I) -> Result<BTreeMap<String, Quote>, EodError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        quotes::api::quote_list2(&self.client, &self.code, &symbols).await
    }

    /// Fetches the end-of-day quotes for `date`, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn quotes_on(&self, date: NaiveDate) -> Result<BTreeMap<String, Quote>, EodError> {
        quotes::api::quote_list_by_date(&self.client, &self.code, date).await
    }

    /// Like [`quotes_on`](Self::quotes_on), using the service's compact row format.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn compact_quotes_on(
        &self,
        date: NaiveDate,
    ) -> Result<BTreeMap<String, CompactQuote>, EodError> {
        quotes::api::quote_list_by_date2(&self.client, &self.code, date).await
    }

    /// Fetches all `period` bars for `date`, grouped by symbol in time order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn quotes_on_period(
        &self,
        date: NaiveDate,
        period: Period,
    ) -> Result<BTreeMap<String, Vec<Quote>>, EodError> {
        quotes::api::quote_list_by_date_period(&self.client, &self.code, date, period).await
    }

    /// Like [`quotes_on_period`](Self::quotes_on_period), using the compact row format.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn compact_quotes_on_period(
        &self,
        date: NaiveDate,
        period: Period,
    ) -> Result<BTreeMap<String, Vec<CompactQuote>>, EodError> {
        quotes::api::quote_list_by_date_period2(&self.client, &self.code, date, period).await
    }

    /// The day's ten largest percentage gainers, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn top_gainers(&self) -> Result<Vec<Quote>, EodError> {
        quotes::api::top_movers(&self.client, Operation::Top10Gains, &self.code).await
    }

    /// The day's ten largest percentage losers, worst first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn top_losers(&self) -> Result<Vec<Quote>, EodError> {
        quotes::api::top_movers(&self.client, Operation::Top10Losses, &self.code).await
    }

    /* ---------------- Symbols ---------------- */

    /// Fetches every listed symbol, keyed by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no symbol list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn symbols(&self) -> Result<BTreeMap<String, Symbol>, EodError> {
        symbols::api::symbol_list(&self.client, &self.code).await
    }

    /// Fetches every listed symbol as a plain code → name map.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no symbol list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn symbol_names(&self) -> Result<BTreeMap<String, String>, EodError> {
        symbols::api::symbol_list2(&self.client, &self.code).await
    }

    /// Fetches recent symbol renames and exchange moves.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no change list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn symbol_changes(&self) -> Result<Vec<SymbolChange>, EodError> {
        symbols::api::symbol_changes_by_exchange(&self.client, &self.code).await
    }

    /* ---------------- Corporate actions & statistics ---------------- */

    /// Fetches the split history for the whole exchange. No splits is an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn splits(&self) -> Result<Vec<Split>, EodError> {
        splits::api::split_list_by_exchange(&self.client, &self.code).await
    }

    /// Fetches fundamentals for every symbol, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no fundamentals list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn fundamentals(&self) -> Result<BTreeMap<String, Fundamental>, EodError> {
        fundamentals::api::fundamental_list(&self.client, &self.code).await
    }

    /// Fetches technical indicators for every symbol, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no technicals list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.code)))]
    pub async fn technicals(&self) -> Result<BTreeMap<String, Technical>, EodError> {
        fundamentals::api::technical_list(&self.client, &self.code).await
    }
}
