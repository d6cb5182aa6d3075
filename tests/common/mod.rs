//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todo_agenda::Task;

/// Build a local timestamp from its parts
pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

/// End of the given day, as the parser normalizes due dates
pub fn end_of(year: i32, month: u32, day: u32) -> NaiveDateTime {
    at(year, month, day, 23, 59, 59)
}

/// Create an open task due at the end of the given day
pub fn due_task(description: &str, label: &str, year: i32, month: u32, day: u32) -> Task {
    Task::new(description, Some(end_of(year, month, day)), label, false)
}

/// Write a file into the temp dir and return its path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Descriptions in order, for compact assertions
pub fn descriptions(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::description).collect()
}
