//! Per-exchange fundamentals and technical indicators.

pub(crate) mod api;
mod model;
mod wire;

pub use model::{Fundamental, Technical};
