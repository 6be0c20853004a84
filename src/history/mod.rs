//! Price history for a single symbol.

pub(crate) mod api;

use chrono::NaiveDate;

use crate::core::{EodClient, EodError, Period, Quote};

/// Which remote operation a [`HistoryBuilder`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryQuery {
    Since(NaiveDate),
    OnDate(NaiveDate, Period),
    Range(NaiveDate, NaiveDate, Period),
}

/// A builder for fetching price history for a single symbol.
///
/// The parameters that are set decide which service operation is used:
///
/// | set                  | operation                          |
/// |----------------------|------------------------------------|
/// | `start`              | daily bars from `start` to today   |
/// | `start` + `period`   | `period` bars for the single date  |
/// | `start` + `end`      | bars in the range (daily unless `period` is set) |
///
/// # Example
///
/// ```no_run
/// # use chrono::NaiveDate;
/// # use eoddata_rs::{EodClient, HistoryBuilder, Period};
/// # #[tokio::main]
/// # async fn main() -> Result<(), eoddata_rs::EodError> {
/// let client = EodClient::builder().credentials("user", "secret").build()?;
/// let bars = HistoryBuilder::new(&client, "NASDAQ", "GOOG")
///     .start(NaiveDate::from_ymd_opt(2014, 9, 15).unwrap())
///     .end(NaiveDate::from_ymd_opt(2014, 9, 24).unwrap())
///     .period(Period::Hour)
///     .fetch()
///     .await?;
/// println!("{} bars", bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HistoryBuilder {
    client: EodClient,
    exchange: String,
    symbol: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    period: Option<Period>,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for `symbol` on `exchange`.
    pub fn new(client: &EodClient, exchange: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            exchange: exchange.into(),
            symbol: symbol.into(),
            start: None,
            end: None,
            period: None,
        }
    }

    /// First date of the request (or the only date, without `end`).
    #[must_use]
    pub const fn start(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Last date of the request, inclusive.
    #[must_use]
    pub const fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    /// Bar size.
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub(crate) fn query(&self) -> Result<HistoryQuery, EodError> {
        let start = self.start.ok_or_else(|| {
            EodError::InvalidParams("history: a start date is required".into())
        })?;

        match (self.end, self.period) {
            (None, None) => Ok(HistoryQuery::Since(start)),
            (None, Some(p)) => Ok(HistoryQuery::OnDate(start, p)),
            (Some(end), _) if end < start => Err(EodError::InvalidParams(format!(
                "history: end {end} is before start {start}"
            ))),
            (Some(end), p) => Ok(HistoryQuery::Range(start, end, p.unwrap_or(Period::Day))),
        }
    }

    /// Executes the request. An empty history is an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EodError::InvalidParams`] for an unusable combination of parameters,
    /// otherwise any login, transport, status, XML or service error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(exchange = %self.exchange, symbol = %self.symbol))
    )]
    pub async fn fetch(self) -> Result<Vec<Quote>, EodError> {
        match self.query()? {
            HistoryQuery::Since(start) => {
                api::symbol_history(&self.client, &self.exchange, &self.symbol, start).await
            }
            HistoryQuery::OnDate(date, period) => {
                api::symbol_history_period(&self.client, &self.exchange, &self.symbol, date, period)
                    .await
            }
            HistoryQuery::Range(start, end, period) => {
                api::symbol_history_period_by_date_range(
                    &self.client,
                    &self.exchange,
                    &self.symbol,
                    start,
                    end,
                    period,
                )
                .await
            }
        }
    }
}
