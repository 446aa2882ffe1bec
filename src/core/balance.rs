use crate::models::student::find_student;
use crate::models::{Lesson, Student};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub purchased: i64,
    pub used: i64,
    /// May be negative when more lessons were booked than purchased.
    pub remaining: i64,
}

/// Credits of `name`.
///
/// `purchased` comes from the first student row with exactly that name (0 if
/// none). Every lesson row naming the student counts as used, past or future.
pub fn balance(name: &str, students: &[Student], lessons: &[Lesson]) -> Balance {
    let purchased = find_student(students, name).map_or(0, |s| s.purchased);
    let used = lessons.iter().filter(|l| l.student == name).count() as i64;

    Balance {
        purchased,
        used,
        remaining: purchased - used,
    }
}
