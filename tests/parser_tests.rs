//! Tests for turning todo lines into tasks
mod common;

use common::end_of;
use todo_agenda::{ParseError, parse_due_date, parse_line};

#[test]
fn test_due_date_line() {
    let task = parse_line("(A) pay rent due:2024-02-01 +home", "personal").unwrap();

    assert_eq!(task.description(), "pay rent due:2024-02-01 +home");
    assert_eq!(task.source_label(), "personal");
    assert!(!task.is_completed());
    assert_eq!(task.due_date(), Some(end_of(2024, 2, 1)));
}

#[test]
fn test_due_date_is_end_of_day() {
    let due = parse_due_date("2024-06-10").unwrap();
    assert_eq!(due, end_of(2024, 6, 10));
}

#[test]
fn test_x_before_due_marks_completed_without_date() {
    // x が先に現れた場合は due: は無視される
    let task = parse_line("(A) done x due:2024-02-01", "work").unwrap();

    assert!(task.is_completed());
    assert!(task.due_date().is_none());
    assert!(!task.is_agenda_candidate());
}

#[test]
fn test_due_before_x_keeps_date_and_stays_open() {
    let task = parse_line("(A) report due:2024-02-01 x", "work").unwrap();

    assert!(!task.is_completed());
    assert_eq!(task.due_date(), Some(end_of(2024, 2, 1)));
}

#[test]
fn test_only_first_due_token_counts() {
    let task = parse_line("- a due:2024-03-01 due:2024-04-01", "work").unwrap();
    assert_eq!(task.due_date(), Some(end_of(2024, 3, 1)));
}

#[test]
fn test_first_due_token_wins_even_if_later_one_is_malformed() {
    let task = parse_line("- a due:2024-03-01 due:garbage", "work").unwrap();
    assert_eq!(task.due_date(), Some(end_of(2024, 3, 1)));
}

#[test]
fn test_malformed_due_date_rejects_line() {
    let err = parse_line("(A) broken due:2024-13-40", "work").unwrap_err();

    match err {
        ParseError::InvalidDueDate { value, .. } => assert_eq!(value, "2024-13-40"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_due_value_rejects_line() {
    assert!(matches!(
        parse_line("(A) nothing due:", "work"),
        Err(ParseError::MalformedDueDate { .. })
    ));
}

#[test]
fn test_single_digit_month_or_day_rejects_line() {
    for line in ["(A) a due:2024-1-5", "(A) a due:2024-01-5", "(A) a due:2024-1-05"] {
        assert!(
            matches!(parse_line(line, "work"), Err(ParseError::MalformedDueDate { .. })),
            "{line} should be rejected"
        );
    }
}

#[test]
fn test_signed_year_rejects_line() {
    let err = parse_line("(A) a due:+2024-01-05", "work").unwrap_err();
    match err {
        ParseError::MalformedDueDate { value } => assert_eq!(value, "+2024-01-05"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_trailing_text_after_date_rejects_line() {
    assert!(parse_due_date("2024-01-05T10:00").is_err());
    assert!(parse_due_date("2024-01-05 ").is_err());
}

#[test]
fn test_invalid_due_date_message_names_value() {
    let err = parse_line("(A) broken due:tomorrow", "work").unwrap_err();
    assert!(err.to_string().contains("'tomorrow'"));
}

#[test]
fn test_plain_line_has_no_date() {
    let task = parse_line("(C) buy milk", "home").unwrap();

    assert_eq!(task.description(), "buy milk");
    assert!(!task.is_completed());
    assert!(task.due_date().is_none());
}

#[test]
fn test_whitespace_is_collapsed_in_description() {
    let task = parse_line("  (B)\tcall   mom \t due:2024-05-05  ", "home").unwrap();
    assert_eq!(task.description(), "call mom due:2024-05-05");
}

#[test]
fn test_x_must_be_standalone() {
    let task = parse_line("(A) fix xbox due:2024-05-05", "home").unwrap();
    assert!(!task.is_completed());
    assert!(task.due_date().is_some());
}

#[test]
fn test_blank_line_is_reported_as_blank() {
    assert!(matches!(parse_line("", "home"), Err(ParseError::Blank)));
}
