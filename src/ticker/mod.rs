use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{EodClient, EodError, Period, Quote};
use crate::history::{self, HistoryBuilder};
use crate::splits::{self, Split};
use crate::symbols::{self, Symbol};
use crate::quotes;

/// A symbol's details together with its latest quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub symbol: Symbol,
    pub quote: Quote,
}

/// A high-level interface for a single symbol on one exchange.
///
/// A `Ticker` is created with an [`EodClient`], an exchange code and a symbol. It then
/// provides methods to fetch the symbol's quote, details, splits and price history.
///
/// # Example
///
/// ```no_run
/// # use chrono::NaiveDate;
/// # use eoddata_rs::{EodClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), eoddata_rs::EodError> {
/// let client = EodClient::builder().credentials("user", "secret").build()?;
/// let goog = Ticker::new(&client, "NASDAQ", "GOOG");
///
/// let quote = goog.quote().await?;
/// println!("GOOG last close: {:?}", quote.close);
///
/// let history = goog.history(NaiveDate::from_ymd_opt(2014, 9, 15).unwrap()).await?;
/// println!("Fetched {} days of history.", history.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Ticker {
    client: EodClient,
    exchange: String,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for `symbol` on `exchange`.
    pub fn new(client: &EodClient, exchange: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            exchange: exchange.into(),
            symbol: symbol.into(),
        }
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches the latest quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the symbol is unknown.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn quote(&self) -> Result<Quote, EodError> {
        quotes::api::quote_get(&self.client, &self.exchange, &self.symbol).await
    }

    /// Fetches the symbol's details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the symbol is unknown.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn info(&self) -> Result<Symbol, EodError> {
        symbols::api::symbol_get(&self.client, &self.exchange, &self.symbol).await
    }

    /// Fetches details and latest quote concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first error of either request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn snapshot(&self) -> Result<Snapshot, EodError> {
        let (symbol, quote) = futures::try_join!(self.info(), self.quote())?;
        Ok(Snapshot { symbol, quote })
    }

    /// Fetches the split history. No splits is an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn splits(&self) -> Result<Vec<Split>, EodError> {
        splits::api::split_list_by_symbol(&self.client, &self.exchange, &self.symbol).await
    }

    /* ---------------- History ---------------- */

    /// A [`HistoryBuilder`] for this symbol.
    pub fn history_builder(&self) -> HistoryBuilder {
        HistoryBuilder::new(&self.client, self.exchange.clone(), self.symbol.clone())
    }

    /// Daily bars from `start` to the latest trading day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn history(&self, start: NaiveDate) -> Result<Vec<Quote>, EodError> {
        history::api::symbol_history(&self.client, &self.exchange, &self.symbol, start).await
    }

    /// All `period` bars for the single trading day `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no quote list.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn history_period(
        &self,
        date: NaiveDate,
        period: Period,
    ) -> Result<Vec<Quote>, EodError> {
        history::api::symbol_history_period(&self.client, &self.exchange, &self.symbol, date, period)
            .await
    }

    /// `period` bars from `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::InvalidParams`] if `end` is before `start`, otherwise any request
    /// error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol)))]
    pub async fn history_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        period: Period,
    ) -> Result<Vec<Quote>, EodError> {
        self.history_builder()
            .start(start)
            .end(end)
            .period(period)
            .fetch()
            .await
    }
}
