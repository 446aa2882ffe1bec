use crate::utils::lenient::date_or_none;
use chrono::NaiveDate;
use std::fmt;

/// Date cell of a table row.
///
/// A cell that does not parse keeps its original text so the row survives a
/// load/save cycle unchanged, but it never matches a day and is not projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDate {
    Valid(NaiveDate),
    Missing(String),
}

impl RowDate {
    pub fn parse(raw: &str) -> Self {
        match date_or_none(raw) {
            Some(d) => RowDate::Valid(d),
            None => RowDate::Missing(raw.to_string()),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            RowDate::Valid(d) => Some(*d),
            RowDate::Missing(_) => None,
        }
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date() == Some(day)
    }

    /// Text written back to the table file.
    pub fn to_field(&self) -> String {
        match self {
            RowDate::Valid(d) => d.format("%Y-%m-%d").to_string(),
            RowDate::Missing(raw) => raw.clone(),
        }
    }
}

impl From<NaiveDate> for RowDate {
    fn from(d: NaiveDate) -> Self {
        RowDate::Valid(d)
    }
}

impl fmt::Display for RowDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDate::Valid(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            RowDate::Missing(raw) if raw.trim().is_empty() => f.write_str("(no date)"),
            RowDate::Missing(raw) => write!(f, "(bad date: {raw})"),
        }
    }
}
