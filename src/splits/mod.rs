//! Stock split history.

pub(crate) mod api;
mod model;
mod wire;

pub use model::Split;
