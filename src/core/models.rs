use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::core::EodError;

/* ----- QUOTES (shared by quotes/, history/ and the top lists) ----- */

/// One end-of-day (or intraday bar) quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub description: Option<String>,
    pub name: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub previous: Option<Decimal>,
    pub change: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub next_open: Option<Decimal>,
    pub modified: Option<NaiveDateTime>,
}

impl Quote {
    /// Close relative to the previous close, as a fraction (`0.05` is +5%).
    ///
    /// `None` when either price is missing, the previous close is zero, or the ratio does
    /// not fit a `Decimal`.
    #[must_use]
    pub fn change_ratio(&self) -> Option<Decimal> {
        let close = self.close?;
        let previous = self.previous.or(self.previous_close)?;
        close.checked_div(previous)?.checked_sub(Decimal::ONE)
    }
}

/// The abbreviated quote returned by the `...2` list operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactQuote {
    pub symbol: String,
    pub date_time: Option<NaiveDateTime>,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
}

/* ----- PERIOD ----- */

/// Bar size for the period-based history and quote list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    Minute1,
    Minute5,
    Minute10,
    Minute15,
    Minute30,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    /// The wire code, e.g. `h` for [`Period::Hour`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Minute1 => "1",
            Self::Minute5 => "5",
            Self::Minute10 => "10",
            Self::Minute15 => "15",
            Self::Minute30 => "30",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "m",
            Self::Quarter => "q",
            Self::Year => "y",
        }
    }

    /// Whether bars of this size are shorter than a trading day.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::Minute1
                | Self::Minute5
                | Self::Minute10
                | Self::Minute15
                | Self::Minute30
                | Self::Hour
        )
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = EodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "1" => Self::Minute1,
            "5" => Self::Minute5,
            "10" => Self::Minute10,
            "15" => Self::Minute15,
            "30" => Self::Minute30,
            "h" | "H" => Self::Hour,
            "d" | "D" => Self::Day,
            "w" | "W" => Self::Week,
            "m" | "M" => Self::Month,
            "q" | "Q" => Self::Quarter,
            "y" | "Y" => Self::Year,
            other => {
                return Err(EodError::InvalidParams(format!(
                    "unknown period code: {other:?}"
                )));
            }
        })
    }
}
