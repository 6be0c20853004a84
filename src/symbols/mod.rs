//! Instrument listings and symbol changes.

pub(crate) mod api;
mod model;
mod wire;

pub use model::{Symbol, SymbolChange};
