/// Labels written to a freshly created category table.
pub const SEED_CATEGORIES: [&str; 2] = ["MA Body Shaping", "S Specialty"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn seed() -> Vec<Category> {
        SEED_CATEGORIES.iter().map(|l| Category::new(*l)).collect()
    }
}
