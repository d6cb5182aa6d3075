//! Agenda configuration and command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Default number of daily buckets after the past-due section
pub const DEFAULT_DAYS: u32 = 7;

/// How daily bucket boundaries are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketBoundary {
    /// Buckets are open 24 hour windows starting at the current instant.
    /// A task due exactly at "now" lands in no bucket.
    #[default]
    Rolling,
    /// Buckets are half-open calendar days starting at today's midnight
    Midnight,
}

/// Options controlling how the agenda is grouped and rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    /// Number of daily buckets
    pub days: u32,
    pub boundary: BucketBoundary,
    /// Omit the `[PAST DUE]` heading when nothing is past due
    pub hide_empty_past_due: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            boundary: BucketBoundary::Rolling,
            hide_empty_past_due: false,
        }
    }
}

/// Weekly agenda across multiple todo.txt files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a file listing todo files, one per line (`~` expands to the home directory)
    pub control_file: PathBuf,

    /// Number of days to show after the past-due section
    #[arg(long, default_value_t = DEFAULT_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,

    /// Align day buckets to midnight instead of the current time
    #[arg(long)]
    pub midnight: bool,

    /// Hide the [PAST DUE] heading when no task is past due
    #[arg(long)]
    pub hide_empty_past_due: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn agenda_config(&self) -> AgendaConfig {
        AgendaConfig {
            days: self.days,
            boundary: if self.midnight {
                BucketBoundary::Midnight
            } else {
                BucketBoundary::Rolling
            },
            hide_empty_past_due: self.hide_empty_past_due,
        }
    }
}
