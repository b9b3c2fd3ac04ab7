use chrono::{NaiveDate, Utc};
use moelog::output::rollover::{DEFAULT_MAX_BYTES, active_log_file, select_log_file};
use moelog::{FileOutput, Level, Output};
use std::fs;
use tempfile::TempDir;

fn jan_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn fresh_day_uses_base_file() {
    let tmp = TempDir::new().unwrap();
    let path = select_log_file(tmp.path(), jan_first(), 100);
    assert_eq!(path, tmp.path().join("2024-01-01.log"));
}

#[test]
fn small_base_file_is_reused() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("2024-01-01.log"), vec![b'x'; 100]).unwrap();
    let path = select_log_file(tmp.path(), jan_first(), 100);
    assert_eq!(path, tmp.path().join("2024-01-01.log"));
}

#[test]
fn oversized_base_rolls_to_first_free_number() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("2024-01-01.log"), vec![b'x'; 101]).unwrap();
    fs::write(tmp.path().join("2024-01-01.1.log"), b"older").unwrap();

    let path = select_log_file(tmp.path(), jan_first(), 100);
    assert_eq!(path, tmp.path().join("2024-01-01.2.log"));
}

#[test]
fn oversized_base_without_numbered_files_starts_at_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("2024-01-01.log"), vec![b'x'; 101]).unwrap();
    let path = select_log_file(tmp.path(), jan_first(), 100);
    assert_eq!(path, tmp.path().join("2024-01-01.1.log"));
}

#[test]
fn other_days_do_not_count() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("2023-12-31.log"), vec![b'x'; 500]).unwrap();
    let path = select_log_file(tmp.path(), jan_first(), 100);
    assert_eq!(path, tmp.path().join("2024-01-01.log"));
}

#[test]
fn active_log_file_creates_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("nested").join("logs");
    let path = active_log_file(&dir, DEFAULT_MAX_BYTES).unwrap();

    assert!(dir.is_dir());
    let expected = format!("{}.log", Utc::now().date_naive().format("%Y-%m-%d"));
    assert_eq!(path, dir.join(expected));
}

#[test]
fn file_output_appends_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    fs::write(&path, "existing\n").unwrap();

    let output = FileOutput::open_path(&path).unwrap();
    output.write(&Level::WARNING, "one").unwrap();
    output.write(&Level::ERROR, "two").unwrap();
    output.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["existing", "one", "two"]);
}

#[test]
fn file_output_does_not_roll_mid_session() {
    let tmp = TempDir::new().unwrap();
    let output = FileOutput::open(tmp.path(), 10).unwrap();
    let first = output.path().to_path_buf();

    for _ in 0..5 {
        output.write(&Level::WARNING, "well past ten bytes").unwrap();
    }

    assert_eq!(output.path(), first);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn unwritable_directory_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"file, not dir").unwrap();
    assert!(FileOutput::open(&blocker.join("logs"), 100).is_err());
}
