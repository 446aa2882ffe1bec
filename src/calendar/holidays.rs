use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public holiday shown on the calendar. `end` is handed to the widget as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    pub title: String,
}

impl Holiday {
    fn new(start: (i32, u32, u32), end: Option<(i32, u32, u32)>, title: &str) -> Option<Self> {
        let ymd = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d);
        Some(Self {
            start: ymd(start)?,
            end: match end {
                Some(e) => Some(ymd(e)?),
                None => None,
            },
            title: title.to_string(),
        })
    }
}

/// Built-in holiday set, used when the configuration does not list any.
pub fn default_holidays() -> Vec<Holiday> {
    [
        Holiday::new((2025, 12, 31), None, "New Year's Eve (bridge day)"),
        Holiday::new((2026, 1, 1), None, "New Year's Day"),
        Holiday::new((2026, 2, 17), Some((2026, 2, 23)), "Lunar New Year holidays"),
        Holiday::new((2026, 2, 28), None, "Peace Memorial Day"),
        Holiday::new((2026, 4, 4), Some((2026, 4, 7)), "Tomb Sweeping holidays"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
