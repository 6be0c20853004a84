use chrono::NaiveDateTime;
use serde::Serialize;

/// A stock split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    pub exchange: Option<String>,
    pub symbol: String,
    pub date_time: Option<NaiveDateTime>,
    /// The ratio as sent, e.g. `2-1`.
    pub ratio: String,
    /// New shares per `denominator` old shares, when `ratio` is parseable.
    pub numerator: Option<u32>,
    pub denominator: Option<u32>,
}

/// `2-1`, `2:1` and `2/1` all mean two new shares per old share.
pub(crate) fn parse_ratio(ratio: &str) -> Option<(u32, u32)> {
    let (num, den) = ratio.split_once(['-', ':', '/'])?;
    let num = num.trim().parse::<u32>().ok()?;
    let den = den.trim().parse::<u32>().ok()?;
    (num > 0 && den > 0).then_some((num, den))
}
