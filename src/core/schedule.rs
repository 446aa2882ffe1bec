use crate::models::Lesson;
use crate::utils::date::month_key;
use crate::utils::lenient::hour_minute;
use crate::utils::time::time_slots;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A lesson together with its position in the stored table.
#[derive(Debug, Clone, Copy)]
pub struct DayEntry<'a> {
    pub position: usize,
    pub lesson: &'a Lesson,
}

/// Lessons on `day`, ordered by time text. Rows without a valid date never match.
///
/// The order defines the 1-based `#` used by `lesson edit` and `lesson del`.
pub fn lessons_on(day: NaiveDate, lessons: &[Lesson]) -> Vec<DayEntry<'_>> {
    let mut out: Vec<DayEntry<'_>> = lessons
        .iter()
        .enumerate()
        .filter(|(_, l)| l.date.is_on(day))
        .map(|(position, lesson)| DayEntry { position, lesson })
        .collect();
    out.sort_by(|a, b| a.lesson.time.cmp(&b.lesson.time));
    out
}

/// Table position of the `index`-th (1-based) lesson of `day`.
pub fn position_on(day: NaiveDate, index: usize, lessons: &[Lesson]) -> Option<usize> {
    let entries = lessons_on(day, lessons);
    index
        .checked_sub(1)
        .and_then(|i| entries.get(i))
        .map(|e| e.position)
}

/// Default hourly slots with no lesson starting in that hour.
pub fn free_slots(day: NaiveDate, lessons: &[Lesson]) -> Vec<String> {
    let taken: Vec<u32> = lessons_on(day, lessons)
        .iter()
        .filter_map(|e| hour_minute(&e.lesson.time).map(|(h, _)| h))
        .collect();

    time_slots()
        .into_iter()
        .filter(|slot| match hour_minute(slot) {
            Some((h, _)) => !taken.contains(&h),
            None => false,
        })
        .collect()
}

/// Lesson count per month (`YYYY-MM`) and category.
pub type MonthlyReport = BTreeMap<String, BTreeMap<String, usize>>;

pub fn monthly_report(lessons: &[Lesson]) -> MonthlyReport {
    let mut report = MonthlyReport::new();
    for lesson in lessons {
        let Some(d) = lesson.date.date() else {
            continue;
        };
        *report
            .entry(month_key(d))
            .or_default()
            .entry(lesson.category.clone())
            .or_default() += 1;
    }
    report
}

/// Every category appearing in a report, sorted.
pub fn report_columns(report: &MonthlyReport) -> Vec<String> {
    let mut cols: Vec<String> = report
        .values()
        .flat_map(|m| m.keys().cloned())
        .collect();
    cols.sort();
    cols.dedup();
    cols
}
