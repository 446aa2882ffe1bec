use crate::errors::{AppError, AppResult};
use crate::models::coach_event::ALL_DAY;
use crate::models::{CoachEvent, EventKind};
use crate::store::TableStore;
use chrono::NaiveDate;

pub struct CoachEventLogic;

impl CoachEventLogic {
    /// Record a coach event. Without a time the event covers the whole day.
    pub fn add(
        store: &TableStore,
        date: NaiveDate,
        time: Option<String>,
        subject: &str,
        kind: EventKind,
        note: &str,
    ) -> AppResult<CoachEvent> {
        if subject.trim().is_empty() {
            return Err(AppError::InvalidInput("Event subject cannot be empty.".into()));
        }

        let event = CoachEvent {
            date: date.into(),
            time: time.unwrap_or_else(|| ALL_DAY.to_string()),
            subject: subject.trim().to_string(),
            kind,
            note: note.to_string(),
        };

        let mut events: Vec<CoachEvent> = store.load();
        events.push(event.clone());
        store.save(&events)?;

        Ok(event)
    }

    /// Events of `day` with their table positions; all-day events first, then by time.
    pub fn on_day(day: NaiveDate, events: &[CoachEvent]) -> Vec<(usize, &CoachEvent)> {
        let mut out: Vec<(usize, &CoachEvent)> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.date.is_on(day))
            .collect();
        out.sort_by_key(|(_, e)| (!e.is_all_day(), e.time.clone()));
        out
    }

    /// Delete the `index`-th (1-based) event of `date`.
    pub fn delete(store: &TableStore, date: NaiveDate, index: usize) -> AppResult<CoachEvent> {
        let mut events: Vec<CoachEvent> = store.load();
        let pos = index
            .checked_sub(1)
            .and_then(|i| Self::on_day(date, &events).get(i).map(|(p, _)| *p))
            .ok_or_else(|| AppError::RowNotFound {
                date: date.to_string(),
                index,
            })?;

        let removed = events.remove(pos);
        store.save(&events)?;
        Ok(removed)
    }
}
