use super::row_date::RowDate;

/// One booked lesson instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub date: RowDate,
    /// Raw `HH:MM` text as stored; parsed only when projecting.
    pub time: String,
    pub student: String,
    pub category: String,
    pub note: String,
}

impl Lesson {
    pub fn new(
        date: impl Into<RowDate>,
        time: impl Into<String>,
        student: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            student: student.into(),
            category: category.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
