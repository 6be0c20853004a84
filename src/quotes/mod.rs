//! Quote snapshots for an exchange: current lists, lists for a past date, and the
//! daily top movers.

pub(crate) mod api;
