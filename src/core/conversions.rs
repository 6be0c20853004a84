//! Lenient parsing of attribute strings into typed values, and date formatting for
//! requests and error contexts.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a price-like attribute. Empty or unparsable values become `None`.
#[must_use]
pub fn parse_decimal(s: Option<&str>) -> Option<Decimal> {
    let s = non_empty(s)?;
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse a statistic attribute (ratios, indicators).
#[must_use]
pub fn parse_f64(s: Option<&str>) -> Option<f64> {
    non_empty(s)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a count attribute. Volumes are occasionally sent as `123.0`.
#[must_use]
pub fn parse_u64(s: Option<&str>) -> Option<u64> {
    let s = non_empty(s)?;
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        // Bounds and integrality checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(f as u64)
    } else {
        None
    }
}

/// Parse a flag attribute (`true`/`false`, `1`/`0`).
#[must_use]
pub fn parse_bool(s: Option<&str>) -> Option<bool> {
    match non_empty(s)?.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a timestamp attribute, e.g. `2014-09-23T00:00:00`.
#[must_use]
pub fn parse_datetime(s: Option<&str>) -> Option<NaiveDateTime> {
    let s = non_empty(s)?;
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%m/%d/%Y %I:%M:%S %p", "%m/%d/%Y %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Owned copy of a trimmed, non-empty attribute.
#[must_use]
pub fn text(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Date as sent on the wire: `YYYYMMDD`.
#[must_use]
pub fn wire_date(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

/// Date as shown in error contexts: `M/D/YYYY`.
#[must_use]
pub fn display_date(d: NaiveDate) -> String {
    d.format("%-m/%-d/%Y").to_string()
}
