//! Core components of the `eoddata-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EodClient`] and its builder.
//! - The primary [`EodError`] type.
//! - Shared data models like [`Quote`] and [`Period`].
//! - Internal request dispatch, token handling and XML plumbing.

/// Callback-style adapter for running operations.
pub mod callback;
/// The main client (`EodClient`), builder, and configuration.
pub mod client;
/// Lenient attribute parsing and date formatting helpers.
pub mod conversions;
/// The primary error type (`EodError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules (e.g., `Quote`, `Period`).
pub mod models;
/// Names of the remote operations.
pub mod operation;
pub(crate) mod quotes;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EodClient`
pub use client::{EodClient, EodClientBuilder};
pub use error::EodError;
pub use models::{CompactQuote, Period, Quote};
pub use operation::Operation;
