//! Calendar entries in the shape consumed by the calendar widget.

pub mod agenda;
pub mod holidays;
pub mod projector;

pub use holidays::Holiday;
pub use projector::project;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    AllDay {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    Timed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Span {
    pub fn is_all_day(&self) -> bool {
        matches!(self, Span::AllDay { .. })
    }

    pub fn start_date(&self) -> NaiveDate {
        match self {
            Span::AllDay { start, .. } => *start,
            Span::Timed { start, .. } => start.date(),
        }
    }

    /// Last day touched by the span.
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Span::AllDay { start, end } => end.unwrap_or(*start),
            Span::Timed { end, .. } => end.date(),
        }
    }

    /// Sort key: day, then all-day before timed, then start time.
    pub fn sort_key(&self) -> (NaiveDate, bool, NaiveTime) {
        match self {
            Span::AllDay { start, .. } => (*start, false, NaiveTime::MIN),
            Span::Timed { start, .. } => (start.date(), true, start.time()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Lesson,
    CoachEvent,
    Holiday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryColors {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub title: String,
    pub span: Span,
    pub colors: EntryColors,
    pub source: EntrySource,
}

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetEntry<'a> {
    title: &'a str,
    start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    all_day: bool,
    background_color: &'a str,
    border_color: &'a str,
    text_color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<&'a str>,
}

impl Serialize for CalendarEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (start, end) = match self.span {
            Span::AllDay { start, end } => (
                start.format(DATE_FMT).to_string(),
                end.map(|e| e.format(DATE_FMT).to_string()),
            ),
            Span::Timed { start, end } => (
                start.format(DATETIME_FMT).to_string(),
                Some(end.format(DATETIME_FMT).to_string()),
            ),
        };

        WidgetEntry {
            title: &self.title,
            start,
            end,
            all_day: self.span.is_all_day(),
            background_color: self.colors.background,
            border_color: self.colors.border,
            text_color: self.colors.text,
            display: (self.source == EntrySource::Holiday).then_some("block"),
        }
        .serialize(serializer)
    }
}
