use gymbook::core::backup::BackupLogic;
use gymbook::models::{Lesson, Student};
use gymbook::store::{StorageLayout, TableKind, TableStore};
use std::fs;
use std::io::{Cursor, Write};
use tempfile::tempdir;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

fn ymd(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_store(dir: &std::path::Path) -> TableStore {
    let store = TableStore::open(StorageLayout::in_dir(dir)).unwrap();
    store
        .save(&[Student::new("Amy", 10).with_category("Yoga")])
        .unwrap();
    store
        .save(&[Lesson::new(ymd(2025, 3, 10), "09:00", "Amy", "Yoga")])
        .unwrap();
    store
}

#[test]
fn test_export_has_one_entry_per_table_file() {
    let tmp = tempdir().unwrap();
    let store = seeded_store(tmp.path());

    let bytes = BackupLogic::export(&store).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "gym_categories.csv",
            "gym_coach_events.csv",
            "gym_lessons.csv",
            "gym_requests.csv",
            "gym_students.csv",
        ]
    );
}

#[test]
fn test_export_skips_missing_files() {
    let tmp = tempdir().unwrap();
    let store = seeded_store(tmp.path());
    fs::remove_file(&store.layout().requests).unwrap();

    let bytes = BackupLogic::export(&store).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 4);
}

#[test]
fn test_import_restores_identical_tables() {
    let src = tempdir().unwrap();
    let store = seeded_store(src.path());
    let bytes = BackupLogic::export(&store).unwrap();

    let dst = tempdir().unwrap();
    let target = TableStore::open(StorageLayout::in_dir(dst.path())).unwrap();
    let restored = BackupLogic::import(&target, Cursor::new(bytes)).unwrap();
    assert_eq!(restored.len(), 5);

    for kind in TableKind::ALL {
        let a = fs::read(store.layout().path(kind)).unwrap();
        let b = fs::read(target.layout().path(kind)).unwrap();
        assert_eq!(a, b, "{kind} differs");
    }
}

#[test]
fn test_export_to_file_and_back() {
    let tmp = tempdir().unwrap();
    let store = seeded_store(&tmp.path().join("data"));

    let dest = tmp.path().join("out").join("backup.zip");
    let size = BackupLogic::export_to_file(&store, &dest).unwrap();
    assert_eq!(size, fs::metadata(&dest).unwrap().len());

    store.reset().unwrap();
    BackupLogic::import_from_file(&store, &dest).unwrap();

    let students: Vec<Student> = store.load();
    assert_eq!(students[0].name, "Amy");
}

#[test]
fn test_import_skips_entries_outside_data_dir() {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> = FileOptions::default();
    zip.start_file("../escape.csv", options).unwrap();
    zip.write_all(b"x\n").unwrap();
    zip.start_file("gym_requests.csv", options).unwrap();
    zip.write_all(b"date,time,name,message\n").unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let tmp = tempdir().unwrap();
    let data = tmp.path().join("data");
    let store = TableStore::open(StorageLayout::in_dir(&data)).unwrap();

    let restored = BackupLogic::import(&store, Cursor::new(bytes)).unwrap();
    assert_eq!(restored, ["gym_requests.csv"]);
    assert!(!tmp.path().join("escape.csv").exists());
}
