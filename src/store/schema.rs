//! Declared table schemas.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Lessons,
    Requests,
    Students,
    Categories,
    CoachEvents,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::Lessons,
        TableKind::Requests,
        TableKind::Students,
        TableKind::Categories,
        TableKind::CoachEvents,
    ];

    /// Header row written to the file, in column order.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            TableKind::Lessons => &["date", "time", "student", "category", "note"],
            TableKind::Requests => &["date", "time", "name", "message"],
            TableKind::Students => &["name", "purchased_count", "bound_category", "note"],
            TableKind::Categories => &["category"],
            TableKind::CoachEvents => &["date", "time", "subject", "kind", "note"],
        }
    }

    /// Legacy column renames, `(old, current)`.
    ///
    /// The rename applies only when the old column is present and the current
    /// one is not.
    pub fn legacy_renames(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TableKind::Students => &[
                ("remaining_count", "purchased_count"),
                ("status", "bound_category"),
            ],
            _ => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TableKind::Lessons => "lessons",
            TableKind::Requests => "requests",
            TableKind::Students => "students",
            TableKind::Categories => "categories",
            TableKind::CoachEvents => "coach events",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
