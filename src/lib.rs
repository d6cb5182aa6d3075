//! Todo Agenda Library
//!
//! This library aggregates plain-text todo.txt files and renders a weekly
//! agenda: a past-due section followed by one section per day.
//!
//! # Architecture
//!
//! - **Input Layer**: `source` - control file, `~` expansion, per-file reading
//! - **Domain Layer**: `parser` and `task` - one line becomes one `Task`
//! - **View Layer**: `agenda` and `formatting` - bucketing and text output
//!
//! # Example
//!
//! ```no_run
//! use todo_agenda::{AgendaConfig, SystemHome, run};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let now = chrono::Local::now().naive_local();
//!     let report = run("files.txt", &SystemHome, now, &AgendaConfig::default())?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```

pub mod agenda;
pub mod config;
pub mod error;
pub mod formatting;
pub mod parser;
pub mod source;
pub mod task;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::info;

pub use agenda::{Agenda, DayBucket, build_agenda};
pub use config::{AgendaConfig, Args, BucketBoundary};
pub use error::{ParseError, SourceError};
pub use formatting::format_agenda;
pub use parser::{parse_due_date, parse_line};
pub use source::{Collection, FixedHome, HomeDir, SystemHome, collect_tasks, load_control_file};
pub use task::{Task, source_label};

/// Build the agenda report for a control file
///
/// # Arguments
/// * `control_file` - File listing the todo files
/// * `home` - Home directory provider for `~` expansion
/// * `now` - Current local wall-clock time
/// * `config` - Agenda options
///
/// # Returns
/// The rendered report, or an error if the control file cannot be read.
/// Unreadable todo files and malformed lines are logged and skipped.
pub fn run(
    control_file: impl AsRef<Path>,
    home: &dyn HomeDir,
    now: NaiveDateTime,
    config: &AgendaConfig,
) -> Result<String> {
    let todo_files =
        load_control_file(control_file.as_ref(), home).context("Failed to load control file")?;
    let collection = collect_tasks(&todo_files);

    let agenda = build_agenda(collection.tasks, now, config);
    info!(
        "Read {} file(s), skipped {}, rejected {} line(s), {} task(s) on the agenda",
        collection.files_read,
        collection.files_skipped,
        collection.lines_rejected,
        agenda.task_count()
    );

    Ok(format_agenda(&agenda, config))
}
