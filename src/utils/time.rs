//! Time utilities: strict HH:MM parsing for user input and the default slots.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// First and last bookable hour offered by default.
pub const FIRST_SLOT_HOUR: u32 = 7;
pub const LAST_SLOT_HOUR: u32 = 22;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse a time typed by the user and normalise it to `HH:MM`.
pub fn normalize_time(t: &str) -> AppResult<String> {
    parse_time(t)
        .map(|v| v.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_time(s)).transpose()
}

/// Hourly booking slots, `07:00` to `22:00`.
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|h| format!("{h:02}:00"))
        .collect()
}
