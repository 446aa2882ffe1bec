//! Mapping between raw rows and typed records.
//!
//! Missing columns read as "", which every coercion below turns into its
//! default (0 for numbers, empty text, "no date").

use super::raw::RawRow;
use super::schema::TableKind;
use crate::models::{Category, CoachEvent, EventKind, Lesson, Request, RowDate, Student};
use crate::utils::lenient::{int_or_zero, text_or_empty};

pub trait Record: Sized {
    const KIND: TableKind;

    fn from_raw(row: &RawRow<'_>) -> Self;

    /// Cells in the order of `KIND.headers()`.
    fn to_fields(&self) -> Vec<String>;

    /// Rows used when the file is missing, unreadable or empty.
    fn fallback() -> Vec<Self> {
        Vec::new()
    }
}

impl Record for Lesson {
    const KIND: TableKind = TableKind::Lessons;

    fn from_raw(row: &RawRow<'_>) -> Self {
        Lesson {
            date: RowDate::parse(row.get("date")),
            time: row.get("time").to_string(),
            student: row.get("student").to_string(),
            category: text_or_empty(row.get("category")),
            note: text_or_empty(row.get("note")),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.date.to_field(),
            self.time.clone(),
            self.student.clone(),
            self.category.clone(),
            self.note.clone(),
        ]
    }
}

impl Record for Request {
    const KIND: TableKind = TableKind::Requests;

    fn from_raw(row: &RawRow<'_>) -> Self {
        Request {
            date: RowDate::parse(row.get("date")),
            time: row.get("time").to_string(),
            name: row.get("name").to_string(),
            message: text_or_empty(row.get("message")),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.date.to_field(),
            self.time.clone(),
            self.name.clone(),
            self.message.clone(),
        ]
    }
}

impl Record for Student {
    const KIND: TableKind = TableKind::Students;

    fn from_raw(row: &RawRow<'_>) -> Self {
        Student {
            name: row.get("name").to_string(),
            purchased: int_or_zero(row.get("purchased_count")),
            bound_category: text_or_empty(row.get("bound_category")),
            note: text_or_empty(row.get("note")),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.purchased.to_string(),
            self.bound_category.clone(),
            self.note.clone(),
        ]
    }
}

impl Record for Category {
    const KIND: TableKind = TableKind::Categories;

    fn from_raw(row: &RawRow<'_>) -> Self {
        Category::new(text_or_empty(row.get("category")))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.label.clone()]
    }

    fn fallback() -> Vec<Self> {
        Category::seed()
    }
}

impl Record for CoachEvent {
    const KIND: TableKind = TableKind::CoachEvents;

    fn from_raw(row: &RawRow<'_>) -> Self {
        CoachEvent {
            date: RowDate::parse(row.get("date")),
            time: row.get("time").to_string(),
            subject: row.get("subject").to_string(),
            kind: EventKind::from_field(row.get("kind")),
            note: text_or_empty(row.get("note")),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.date.to_field(),
            self.time.clone(),
            self.subject.clone(),
            self.kind.as_str().to_string(),
            self.note.clone(),
        ]
    }
}
