//! Many writers and a filter updater sharing one facade. Every line must come
//! out whole, and every attribute value must be one that was actually set.

use moelog::{Level, MemoryOutput, MoeLogger};
use serde_json::Value;
use std::fs;
use std::thread;
use tempfile::TempDir;

const WRITERS: usize = 8;
const PER_WRITER: usize = 250;
const UPDATES: usize = 1_000;
const APPS: [&str; 3] = ["alpha", "bravo-bravo-bravo", "charlie-charlie-charlie-charlie"];

fn assert_whole(line: &str, key: &str) -> Value {
    let value: Value = serde_json::from_str(line)
        .unwrap_or_else(|e| panic!("torn line {line:?}: {e}"));
    let app = value[key].as_str().unwrap();
    assert!(APPS.contains(&app), "unexpected {key} value {app:?}");
    assert!(value["message"].as_str().unwrap().contains("]: tick "));
    value
}

#[test]
fn concurrent_emits_and_filter_updates_keep_lines_whole() {
    let tmp = TempDir::new().unwrap();
    let out = MemoryOutput::new();
    let moe = MoeLogger::builder()
        .structured_output(true)
        .minimum_level("info")
        .extra_field("app", "app_name")
        .write_to_file(true)
        .log_dir(tmp.path().to_string_lossy())
        .console_output(out.clone())
        .build()
        .unwrap();
    moe.update_filter("app_name", APPS[0]);

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let log = moe.logger(&format!("worker-{writer}"));
            scope.spawn(move || {
                for i in 0..PER_WRITER {
                    log.event(Level::WARNING).arg(i).emit("tick {}");
                }
            });
        }
        scope.spawn(|| {
            for round in 0..UPDATES {
                moe.update_filter("app_name", APPS[round % APPS.len()]);
            }
        });
    });
    moe.flush().unwrap();

    assert_eq!(moe.filter_count(), 1);

    let console = out.lines();
    assert_eq!(console.len(), WRITERS * PER_WRITER);
    for line in &console {
        assert_whole(line, "app");
    }

    let content = fs::read_to_string(moe.file_path().unwrap()).unwrap();
    let file_lines: Vec<&str> = content.lines().collect();
    assert_eq!(file_lines.len(), WRITERS * PER_WRITER);
    for line in file_lines {
        let value = assert_whole(line, "app.name");
        assert_eq!(value["app"], value["app.name"]);
    }
}

#[test]
fn concurrent_console_lines_stay_whole() {
    let out = MemoryOutput::new();
    let moe = MoeLogger::builder()
        .minimum_level("info")
        .colors(false)
        .console_output(out.clone())
        .build()
        .unwrap();

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let log = moe.logger(&format!("worker-{writer}"));
            scope.spawn(move || {
                for i in 0..PER_WRITER {
                    log.event(Level::INFO).arg(i).emit("tick {} done");
                }
            });
        }
    });

    let lines = out.lines();
    assert_eq!(lines.len(), WRITERS * PER_WRITER);
    for line in &lines {
        assert!(line.starts_with("[ "));
        assert!(line.contains(" | INFO ] tick "));
        assert!(line.ends_with(" done"));
    }
}
