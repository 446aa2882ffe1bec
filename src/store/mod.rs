//! Flat-file table store.
//!
//! Every read loads a whole table, every write replaces a whole table. There is
//! no locking: when two writers overlap, the later full-table write wins.

pub mod raw;
pub mod records;
pub mod schema;

pub use raw::RawTable;
pub use records::Record;
pub use schema::TableKind;

use crate::errors::AppResult;
use crate::models::{Category, CoachEvent, Lesson, Request, Student};
use std::fs;
use std::path::{Path, PathBuf};

/// One storage path per table, plus the directory they live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub dir: PathBuf,
    pub lessons: PathBuf,
    pub requests: PathBuf,
    pub students: PathBuf,
    pub categories: PathBuf,
    pub coach_events: PathBuf,
}

impl StorageLayout {
    /// Layout using the default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let files = crate::config::TableFiles::default();
        Self {
            lessons: dir.join(files.lessons),
            requests: dir.join(files.requests),
            students: dir.join(files.students),
            categories: dir.join(files.categories),
            coach_events: dir.join(files.coach_events),
            dir,
        }
    }

    pub fn path(&self, kind: TableKind) -> &Path {
        match kind {
            TableKind::Lessons => &self.lessons,
            TableKind::Requests => &self.requests,
            TableKind::Students => &self.students,
            TableKind::Categories => &self.categories,
            TableKind::CoachEvents => &self.coach_events,
        }
    }
}

/// All five tables as loaded at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub lessons: Vec<Lesson>,
    pub requests: Vec<Request>,
    pub students: Vec<Student>,
    pub categories: Vec<Category>,
    pub coach_events: Vec<CoachEvent>,
}

pub struct TableStore {
    layout: StorageLayout,
}

impl TableStore {
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    /// Build the store and create any missing table file.
    pub fn open(layout: StorageLayout) -> AppResult<Self> {
        let store = Self::new(layout);
        store.bootstrap()?;
        Ok(store)
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Create the data directory and every missing file with its header row.
    /// A new category file gets the seed labels.
    pub fn bootstrap(&self) -> AppResult<()> {
        fs::create_dir_all(&self.layout.dir)?;

        for kind in TableKind::ALL {
            let path = self.layout.path(kind);
            if path.exists() {
                continue;
            }

            let table = if kind == TableKind::Categories {
                RawTable::from_records(&Category::seed())
            } else {
                RawTable {
                    headers: kind.headers().iter().map(|h| h.to_string()).collect(),
                    rows: Vec::new(),
                }
            };
            table.write(path)?;
            tracing::info!(table = %kind, path = %path.display(), "created table file");
        }

        Ok(())
    }

    /// Read and heal the raw table, or `None` when the file cannot be read.
    pub fn load_raw(&self, kind: TableKind) -> Option<RawTable> {
        let path = self.layout.path(kind);
        match RawTable::read(path) {
            Ok(mut table) => {
                let healed = table.heal_legacy_columns(kind);
                if healed > 0 {
                    tracing::debug!(table = %kind, healed, "renamed legacy columns");
                }
                Some(table)
            }
            Err(e) => {
                tracing::warn!(table = %kind, path = %path.display(), error = %e, "cannot read table, using an empty one");
                None
            }
        }
    }

    /// Load a typed table. Never fails: a missing or corrupt file yields the
    /// record type's fallback rows.
    pub fn load<R: Record>(&self) -> Vec<R> {
        match self.load_raw(R::KIND) {
            Some(raw) if !raw.rows.is_empty() => raw.records(),
            _ => R::fallback(),
        }
    }

    /// Overwrite the whole table file with `rows`.
    pub fn save<R: Record>(&self, rows: &[R]) -> AppResult<()> {
        let path = self.layout.path(R::KIND);
        RawTable::from_records(rows).write(path)?;
        tracing::debug!(table = %R::KIND, rows = rows.len(), "table saved");
        Ok(())
    }

    pub fn load_all(&self) -> Tables {
        Tables {
            lessons: self.load(),
            requests: self.load(),
            students: self.load(),
            categories: self.load(),
            coach_events: self.load(),
        }
    }

    /// Remove every table file. Returns how many files were deleted.
    pub fn reset(&self) -> AppResult<usize> {
        let mut removed = 0;
        for kind in TableKind::ALL {
            let path = self.layout.path(kind);
            if path.exists() {
                fs::remove_file(path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
