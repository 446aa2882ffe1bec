use super::row_date::RowDate;
use clap::ValueEnum;
use serde::Serialize;

/// Time cell value marking an all-day coach event.
pub const ALL_DAY: &str = "all day";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum EventKind {
    #[value(name = "day-off")]
    DayOff,
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::DayOff => "day-off",
            EventKind::Other => "other",
        }
    }

    /// Table value → enum. Anything that is not a day off is "other".
    pub fn from_field(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "day-off" | "dayoff" | "day off" => EventKind::DayOff,
            _ => EventKind::Other,
        }
    }
}

/// Coach's personal calendar entry (day off or appointment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachEvent {
    pub date: RowDate,
    /// `HH:MM` or [`ALL_DAY`].
    pub time: String,
    pub subject: String,
    pub kind: EventKind,
    pub note: String,
}

impl CoachEvent {
    pub fn is_all_day(&self) -> bool {
        self.time == ALL_DAY
    }
}
