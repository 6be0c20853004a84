//! eoddata-rs: an async client for the EODData market-data web service.
//!
//! The service is a set of XML-over-HTTP operations (`QuoteList`, `SymbolHistory`,
//! `SplitListBySymbol`, ...) that all require a session token obtained with `Login`.
//! [`EodClient`] owns the credentials and hands out a cached token to every call, so
//! callers never deal with the session directly.
//!
//! ```no_run
//! use eoddata_rs::{EodClientBuilder, Exchange, Ticker};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), eoddata_rs::EodError> {
//! let client = EodClientBuilder::from_env()?.build()?;
//!
//! let countries = client.countries().await?;
//! println!("{} countries", countries.len());
//!
//! let nasdaq = Exchange::new(&client, "NASDAQ");
//! let quotes = nasdaq.quotes_for(["AAPL", "GOOG"]).await?;
//! println!("{quotes:#?}");
//!
//! let goog = Ticker::new(&client, "NASDAQ", "GOOG");
//! println!("{:?}", goog.quote().await?.close);
//! # Ok(())
//! # }
//! ```
//!
//! Operations can also be driven with a completion callback through
//! [`callback::spawn_with_callback`].

pub mod core;
pub mod exchange;
pub mod fundamentals;
pub mod history;
pub mod quotes;
pub mod reference;
pub mod splits;
pub mod symbols;
pub mod ticker;

pub use crate::core::callback;
pub use crate::core::{CompactQuote, EodClient, EodClientBuilder, EodError, Operation, Period, Quote};
pub use exchange::Exchange;
pub use fundamentals::{Fundamental, Technical};
pub use history::HistoryBuilder;
pub use reference::{DataFormat, ExchangeInfo};
pub use splits::Split;
pub use symbols::{Symbol, SymbolChange};
pub use ticker::{Snapshot, Ticker};
