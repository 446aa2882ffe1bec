use crate::errors::{AppError, AppResult};
use crate::models::{Category, Lesson, Student};
use crate::store::TableStore;
use std::collections::BTreeSet;

/// Returned when no category is configured anywhere. Not bookable.
pub const PLACEHOLDER: &str = "(not configured)";

/// Effective category vocabulary.
///
/// Union of the explicit category table, every category used by a lesson and
/// every category bound to a student; blanks and `nan` are dropped. The result
/// is sorted and free of duplicates.
pub fn resolve(categories: &[Category], lessons: &[Lesson], students: &[Student]) -> Vec<String> {
    let labels: BTreeSet<&str> = categories
        .iter()
        .map(|c| c.label.as_str())
        .chain(lessons.iter().map(|l| l.category.as_str()))
        .chain(students.iter().map(|s| s.bound_category.as_str()))
        .filter(|l| is_usable(l))
        .collect();

    if labels.is_empty() {
        return vec![PLACEHOLDER.to_string()];
    }
    labels.into_iter().map(str::to_string).collect()
}

fn is_usable(label: &str) -> bool {
    !label.trim().is_empty() && !label.eq_ignore_ascii_case("nan")
}

/// Whether `label` may be used for a real booking.
pub fn is_bookable(label: &str, vocabulary: &[String]) -> bool {
    label != PLACEHOLDER && vocabulary.iter().any(|v| v == label)
}

/// Default category for a new booking: the student's bound category when it
/// is part of the vocabulary, otherwise the first label.
pub fn default_for<'a>(student: Option<&Student>, vocabulary: &'a [String]) -> Option<&'a str> {
    if let Some(s) = student
        && let Some(v) = vocabulary.iter().find(|v| **v == s.bound_category)
    {
        return Some(v.as_str());
    }
    vocabulary
        .first()
        .map(String::as_str)
        .filter(|v| *v != PLACEHOLDER)
}

/// Edits of the explicit category table.
pub struct CategoryLogic;

impl CategoryLogic {
    /// Append `label`. Returns `false` when it is already in the table.
    pub fn add(store: &TableStore, label: &str) -> AppResult<bool> {
        let label = label.trim();
        if !is_usable(label) || label == PLACEHOLDER {
            return Err(AppError::InvalidInput(format!(
                "'{label}' is not a valid category name."
            )));
        }

        let mut cats: Vec<Category> = store.load();
        if cats.iter().any(|c| c.label == label) {
            return Ok(false);
        }
        cats.push(Category::new(label));
        store.save(&cats)?;
        Ok(true)
    }

    /// Remove `label` from the explicit table.
    ///
    /// Lessons and students keep their category, so the label stays in the
    /// effective vocabulary while anything still uses it.
    pub fn delete(store: &TableStore, label: &str) -> AppResult<bool> {
        let mut cats: Vec<Category> = store.load();
        let before = cats.len();
        cats.retain(|c| c.label != label);
        if cats.len() == before {
            return Ok(false);
        }
        store.save(&cats)?;
        Ok(true)
    }
}
