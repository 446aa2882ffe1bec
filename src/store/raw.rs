//! Untyped view of a table file: header row plus string cells.

use super::records::Record;
use super::schema::TableKind;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row with lookup by column name.
pub struct RawRow<'a> {
    table: &'a RawTable,
    cells: &'a [String],
}

impl RawRow<'_> {
    /// Cell of `column`, or "" when the column or the cell is missing.
    pub fn get(&self, column: &str) -> &str {
        self.table
            .column(column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl RawTable {
    /// Read a CSV file. Rows may be shorter or longer than the header.
    pub fn read(path: &Path) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Write header and rows to `path`, replacing it in one rename.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("csv.tmp");
        {
            let mut wtr = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_path(&tmp)?;
            wtr.write_record(&self.headers)?;
            for row in &self.rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }

        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Rename legacy columns of `kind` in place. Returns how many were renamed.
    pub fn heal_legacy_columns(&mut self, kind: TableKind) -> usize {
        let mut healed = 0;
        for (old, current) in kind.legacy_renames() {
            if self.has_column(current) {
                continue;
            }
            if let Some(i) = self.column(old) {
                self.headers[i] = (*current).to_string();
                healed += 1;
            }
        }
        healed
    }

    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows.iter().map(move |cells| RawRow {
            table: self,
            cells,
        })
    }

    /// Map every row onto the declared schema of `R`.
    pub fn records<R: Record>(&self) -> Vec<R> {
        self.rows().map(|row| R::from_raw(&row)).collect()
    }

    /// Build a table with the declared header of `R`.
    pub fn from_records<R: Record>(records: &[R]) -> Self {
        Self {
            headers: R::KIND.headers().iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(Record::to_fields).collect(),
        }
    }
}
