#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// De facto key; duplicates are allowed and lookups take the first match.
    pub name: String,
    pub purchased: i64,
    /// Default category for new bookings, not a constraint.
    pub bound_category: String,
    pub note: String,
}

impl Student {
    pub fn new(name: impl Into<String>, purchased: i64) -> Self {
        Self {
            name: name.into(),
            purchased,
            bound_category: String::new(),
            note: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.bound_category = category.into();
        self
    }
}

/// First student row with exactly this name.
pub fn find_student<'a>(students: &'a [Student], name: &str) -> Option<&'a Student> {
    students.iter().find(|s| s.name == name)
}
