use chrono::NaiveDate;
use gymbook::calendar::agenda::{describe_span, within};
use gymbook::calendar::holidays::default_holidays;
use gymbook::calendar::projector::{
    DAY_OFF_COLOR, HOLIDAY_COLOR, LESSON_FILL, OTHER_EVENT_COLOR, project,
};
use gymbook::calendar::{EntrySource, Holiday, Span};
use gymbook::core::color::PRIMARY_COLOR;
use gymbook::models::coach_event::ALL_DAY;
use gymbook::models::{CoachEvent, EventKind, Lesson, RowDate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event(date: NaiveDate, time: &str, kind: EventKind) -> CoachEvent {
    CoachEvent {
        date: date.into(),
        time: time.to_string(),
        subject: "Coach".to_string(),
        kind,
        note: String::new(),
    }
}

#[test]
fn test_lesson_becomes_one_hour_entry() {
    let lessons = vec![Lesson::new(ymd(2025, 3, 10), "7:5", "Amy", "MA Body Shaping")];
    let entries = project(&lessons, &[], &[]);

    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.title, "Amy");
    assert_eq!(e.source, EntrySource::Lesson);
    assert_eq!(e.colors.background, LESSON_FILL);
    assert_eq!(e.colors.border, PRIMARY_COLOR);
    assert_eq!(e.colors.text, PRIMARY_COLOR);

    let json = serde_json::to_value(e).unwrap();
    assert_eq!(json["start"], "2025-03-10T07:05:00");
    assert_eq!(json["end"], "2025-03-10T08:05:00");
    assert_eq!(json["allDay"], false);
    assert!(json.get("display").is_none());
}

#[test]
fn test_unreadable_lessons_are_skipped() {
    let lessons = vec![
        Lesson::new(ymd(2025, 3, 10), "abc", "Amy", "Yoga"),
        Lesson::new(ymd(2025, 3, 10), "24:00", "Amy", "Yoga"),
        Lesson::new(RowDate::Missing("soon".into()), "09:00", "Amy", "Yoga"),
        Lesson::new(ymd(2025, 3, 10), "10", "Ben", "Yoga"),
    ];
    let entries = project(&lessons, &[], &[]);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Ben");
}

#[test]
fn test_late_lesson_rolls_into_next_day() {
    let lessons = vec![Lesson::new(ymd(2025, 3, 10), "23:30", "Amy", "Yoga")];
    let json = serde_json::to_value(&project(&lessons, &[], &[])[0]).unwrap();
    assert_eq!(json["end"], "2025-03-11T00:30:00");
}

#[test]
fn test_coach_events_colors_and_all_day_fallback() {
    let day = ymd(2025, 6, 3);
    let events = vec![
        event(day, ALL_DAY, EventKind::DayOff),
        event(day, "14:00", EventKind::Other),
        event(day, "later", EventKind::Other),
    ];
    let entries = project(&[], &events, &[]);
    assert_eq!(entries.len(), 3);

    assert!(entries[0].span.is_all_day());
    assert_eq!(entries[0].colors.background, DAY_OFF_COLOR);

    assert!(!entries[1].span.is_all_day());
    assert_eq!(entries[1].colors.background, OTHER_EVENT_COLOR);

    let json = serde_json::to_value(&entries[2]).unwrap();
    assert_eq!(json["start"], "2025-06-03");
    assert_eq!(json["allDay"], true);
    assert!(json.get("end").is_none());
}

#[test]
fn test_holidays_are_block_entries() {
    let holidays = vec![Holiday {
        start: ymd(2026, 2, 17),
        end: Some(ymd(2026, 2, 23)),
        title: "Lunar New Year holidays".to_string(),
    }];
    let entries = project(&[], &[], &holidays);

    let json = serde_json::to_value(&entries[0]).unwrap();
    assert_eq!(json["start"], "2026-02-17");
    assert_eq!(json["end"], "2026-02-23");
    assert_eq!(json["display"], "block");
    assert_eq!(json["backgroundColor"], HOLIDAY_COLOR);
    assert_eq!(describe_span(&entries[0].span), "all day until 2026-02-23");
}

#[test]
fn test_default_holidays_are_projected() {
    let holidays = default_holidays();
    assert_eq!(holidays.len(), 5);
    assert_eq!(project(&[], &[], &holidays).len(), 5);
}

#[test]
fn test_agenda_window_and_order() {
    let day = ymd(2025, 3, 10);
    let lessons = vec![
        Lesson::new(day, "18:00", "Late", "Yoga"),
        Lesson::new(day, "08:00", "Early", "Yoga"),
        Lesson::new(ymd(2025, 4, 1), "08:00", "April", "Yoga"),
    ];
    let events = vec![event(day, ALL_DAY, EventKind::DayOff)];
    let entries = project(&lessons, &events, &[]);

    let picked = within(&entries, ymd(2025, 3, 1), ymd(2025, 3, 31));
    let titles: Vec<&str> = picked.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Coach", "Early", "Late"]);
    assert!(matches!(picked[1].span, Span::Timed { .. }));
    assert_eq!(describe_span(&picked[1].span), "08:00-09:00");
}
