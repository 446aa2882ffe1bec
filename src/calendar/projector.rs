use super::{CalendarEntry, EntryColors, EntrySource, Holiday, Span};
use crate::core::color::color_for;
use crate::models::{CoachEvent, EventKind, Lesson};
use crate::utils::lenient::hour_minute;
use chrono::{NaiveDate, NaiveTime, TimeDelta};

pub const LESSON_FILL: &str = "#FFFFFF";
pub const DAY_OFF_COLOR: &str = "#757575";
pub const OTHER_EVENT_COLOR: &str = "#E65100";
pub const HOLIDAY_COLOR: &str = "#D32F2F";
pub const ON_COLOR_TEXT: &str = "#FFFFFF";

/// Build the calendar entry list from lessons, coach events and holidays.
///
/// Best effort: lessons without a valid date or hour are skipped, coach events
/// with an unreadable time fall back to all-day. Output order is not meaningful.
pub fn project(
    lessons: &[Lesson],
    coach_events: &[CoachEvent],
    holidays: &[Holiday],
) -> Vec<CalendarEntry> {
    let mut entries: Vec<CalendarEntry> = lessons.iter().filter_map(lesson_entry).collect();
    entries.extend(coach_events.iter().filter_map(coach_entry));
    entries.extend(holidays.iter().map(holiday_entry));

    tracing::debug!(
        lessons = lessons.len(),
        coach_events = coach_events.len(),
        entries = entries.len(),
        "calendar projected"
    );
    entries
}

/// One-hour span starting at `time` on `date`, or `None` if the time is unreadable.
fn one_hour(date: NaiveDate, time: &str) -> Option<Span> {
    let (h, m) = hour_minute(time)?;
    let start = date.and_time(NaiveTime::from_hms_opt(h, m, 0)?);
    Some(Span::Timed {
        start,
        end: start + TimeDelta::hours(1),
    })
}

fn lesson_entry(lesson: &Lesson) -> Option<CalendarEntry> {
    let date = lesson.date.date()?;
    let span = one_hour(date, &lesson.time)?;
    let color = color_for(&lesson.category);

    Some(CalendarEntry {
        title: lesson.student.clone(),
        span,
        colors: EntryColors {
            background: LESSON_FILL,
            border: color,
            text: color,
        },
        source: EntrySource::Lesson,
    })
}

fn coach_entry(event: &CoachEvent) -> Option<CalendarEntry> {
    let date = event.date.date()?;
    let all_day = Span::AllDay {
        start: date,
        end: None,
    };
    let span = if event.is_all_day() {
        all_day
    } else {
        one_hour(date, &event.time).unwrap_or(all_day)
    };

    let color = match event.kind {
        EventKind::DayOff => DAY_OFF_COLOR,
        EventKind::Other => OTHER_EVENT_COLOR,
    };

    Some(CalendarEntry {
        title: event.subject.clone(),
        span,
        colors: EntryColors {
            background: color,
            border: color,
            text: ON_COLOR_TEXT,
        },
        source: EntrySource::CoachEvent,
    })
}

fn holiday_entry(holiday: &Holiday) -> CalendarEntry {
    CalendarEntry {
        title: holiday.title.clone(),
        span: Span::AllDay {
            start: holiday.start,
            end: holiday.end,
        },
        colors: EntryColors {
            background: HOLIDAY_COLOR,
            border: HOLIDAY_COLOR,
            text: ON_COLOR_TEXT,
        },
        source: EntrySource::Holiday,
    }
}
