//! Line parser for the todo.txt convention
//!
//! A line is split on whitespace. Token 0 is a priority/status marker and is
//! dropped from the description. The first token that is either `due:YYYY-MM-DD`
//! or a standalone `x` decides the task's due date or completion; scanning stops
//! there.

use crate::error::ParseError;
use crate::task::Task;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DUE_PREFIX: &str = "due:";
const COMPLETED_MARKER: &str = "x";
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Check for exactly four year digits, two month digits and two day digits
///
/// chrono's `%Y-%m-%d` also accepts signs and single-digit fields, so the
/// layout is enforced before handing the text to chrono.
fn has_date_shape(date_str: &str) -> bool {
    let bytes = date_str.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a due date and move it to the last second of that day
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// The date at 23:59:59, `ParseError::MalformedDueDate` when the text is not
/// laid out as YYYY-MM-DD, or `ParseError::InvalidDueDate` when it names no
/// real calendar date
pub fn parse_due_date(date_str: &str) -> Result<NaiveDateTime, ParseError> {
    if !has_date_shape(date_str) {
        return Err(ParseError::MalformedDueDate {
            value: date_str.to_string(),
        });
    }

    let date = NaiveDate::parse_from_str(date_str, DUE_DATE_FORMAT).map_err(|source| {
        ParseError::InvalidDueDate {
            value: date_str.to_string(),
            source,
        }
    })?;

    Ok(date.and_time(end_of_day()))
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time of day")
}

/// Parse one todo line into a task
///
/// # Arguments
/// * `line` - Raw line text
/// * `label` - Source label of the file the line came from
///
/// # Returns
/// The parsed task, `ParseError::Blank` for a token-free line, or
/// `ParseError::InvalidDueDate` when a `due:` token is malformed
pub fn parse_line(line: &str, label: &str) -> Result<Task, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((_marker, rest)) = tokens.split_first() else {
        return Err(ParseError::Blank);
    };

    let description = rest.join(" ");
    let mut due_date = None;
    let mut completed = false;

    for token in &tokens {
        if let Some(date_str) = token.strip_prefix(DUE_PREFIX) {
            due_date = Some(parse_due_date(date_str)?);
            break;
        }
        if *token == COMPLETED_MARKER {
            completed = true;
            break;
        }
    }

    Ok(Task::new(description, due_date, label, completed))
}
