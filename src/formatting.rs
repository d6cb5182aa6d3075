//! Plain-text rendering of the agenda

use crate::agenda::Agenda;
use crate::config::AgendaConfig;
use crate::task::Task;
use std::fmt::Write;

pub const TITLE: &str = "Weekly Agenda";
pub const PAST_DUE_HEADING: &str = "[PAST DUE]";

/// Day heading format, e.g. "Monday, January 2, 2006"
const DAY_HEADING_FORMAT: &str = "%A, %B %-d, %Y";

/// Format one task as an indented list line
pub fn format_task(task: &Task) -> String {
    format!("  - {} ({})", task.description(), task.source_label())
}

/// Render the agenda into the report printed on standard output
///
/// # Arguments
/// * `agenda` - Grouped tasks
/// * `config` - Decides whether an empty past-due heading is printed
///
/// # Returns
/// The report text, ending with a newline
pub fn format_agenda(agenda: &Agenda, config: &AgendaConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");

    if !(config.hide_empty_past_due && agenda.past_due.is_empty()) {
        let _ = writeln!(out, "\n{PAST_DUE_HEADING}");
        for task in &agenda.past_due {
            let _ = writeln!(out, "{}", format_task(task));
        }
    }

    for day in &agenda.days {
        let _ = writeln!(out, "\n{}", day.start.format(DAY_HEADING_FORMAT));
        for task in &day.tasks {
            let _ = writeln!(out, "{}", format_task(task));
        }
    }

    out
}
