//! Parse-or-default helpers.
//!
//! Every field read from a table file goes through one of these, so a bad
//! cell degrades to "no value" instead of failing the whole load.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Permissive calendar date parse. `None` is the "no date" sentinel.
pub fn date_or_none(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
}

/// Integer coercion: `"10"` and `"10.0"` give 10, anything else gives 0.
pub fn int_or_zero(raw: &str) -> i64 {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return v;
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

/// Text normalisation: blank cells and the literal `nan` become "".
pub fn text_or_empty(raw: &str) -> String {
    if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        raw.to_string()
    }
}

/// Split `H:M` on ':' into hour and minute.
///
/// The minute defaults to 0 when absent and extra segments are ignored, so
/// `"7"`, `"7:5"` and `"07:30:00"` all parse. Values that do not form a
/// valid clock time give `None`.
pub fn hour_minute(raw: &str) -> Option<(u32, u32)> {
    let mut parts = raw.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}
