use crate::errors::AppResult;
use crate::store::{TableKind, TableStore};
use std::fs;
use std::io::{self, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

pub struct BackupLogic;

impl BackupLogic {
    /// Zip the table files that currently exist, one entry per file, named
    /// after the storage file.
    pub fn export(store: &TableStore) -> AppResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for kind in TableKind::ALL {
            let path = store.layout().path(kind);
            if !path.exists() {
                tracing::debug!(table = %kind, "not present, left out of backup");
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };

            zip.start_file(name.to_string_lossy().to_string(), options)?;
            let mut f = fs::File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Write the archive to `dest`, creating parent directories.
    pub fn export_to_file(store: &TableStore, dest: &Path) -> AppResult<u64> {
        let bytes = Self::export(store)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(dest)?;
        file.write_all(&bytes)?;
        Ok(bytes.len() as u64)
    }

    /// Extract every entry into the data directory, overwriting files with the
    /// same name. Nothing is validated or merged.
    ///
    /// Entries whose path would leave the data directory are skipped.
    pub fn import<R: Read + Seek>(store: &TableStore, reader: R) -> AppResult<Vec<String>> {
        let dir = &store.layout().dir;
        fs::create_dir_all(dir)?;

        let mut archive = ZipArchive::new(reader)?;
        let mut restored = Vec::new();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let Some(rel) = entry.enclosed_name() else {
                tracing::warn!(entry = entry.name(), "skipping entry outside the data directory");
                continue;
            };
            let out = dir.join(&rel);

            if entry.is_dir() {
                fs::create_dir_all(&out)?;
                continue;
            }
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut file = fs::File::create(&out)?;
            io::copy(&mut entry, &mut file)?;
            restored.push(rel.to_string_lossy().to_string());
        }

        Ok(restored)
    }

    pub fn import_from_file(store: &TableStore, src: &Path) -> AppResult<Vec<String>> {
        let file = fs::File::open(src)?;
        Self::import(store, file)
    }
}
