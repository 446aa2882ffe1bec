use super::{CalendarEntry, EntrySource, Span};
use chrono::NaiveDate;

/// Entries touching `[from, to]`, sorted for display.
pub fn within(entries: &[CalendarEntry], from: NaiveDate, to: NaiveDate) -> Vec<&CalendarEntry> {
    let mut out: Vec<&CalendarEntry> = entries
        .iter()
        .filter(|e| e.span.start_date() <= to && e.span.end_date() >= from)
        .collect();
    out.sort_by(|a, b| {
        a.span
            .sort_key()
            .cmp(&b.span.sort_key())
            .then_with(|| a.title.cmp(&b.title))
    });
    out
}

/// `HH:MM-HH:MM`, `all day` or a date range for holidays.
pub fn describe_span(span: &Span) -> String {
    match span {
        Span::AllDay {
            start,
            end: Some(end),
        } if end != start => format!("all day until {}", end.format("%Y-%m-%d")),
        Span::AllDay { .. } => "all day".to_string(),
        Span::Timed { start, end } => {
            format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
        }
    }
}

pub fn source_label(source: EntrySource) -> &'static str {
    match source {
        EntrySource::Lesson => "lesson",
        EntrySource::CoachEvent => "coach",
        EntrySource::Holiday => "holiday",
    }
}
