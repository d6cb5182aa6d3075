use chrono::NaiveDateTime;
use std::path::Path;

/// Suffix stripped from a todo file's base name to form its source label
pub const TODO_FILE_SUFFIX: &str = ".todo.txt";

/// A single task extracted from one line of a todo file
///
/// Tasks are built once by the line parser and never mutated afterwards,
/// so all fields are private and exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    due_date: Option<NaiveDateTime>,
    source_label: String,
    completed: bool,
}

impl Task {
    /// Create a new task
    ///
    /// # Arguments
    /// * `description` - Display text (every token after the leading marker)
    /// * `due_date` - Optional due timestamp, already normalized to end of day
    /// * `source_label` - Label of the file the task came from
    /// * `completed` - Whether the line carried a completion marker
    pub fn new(
        description: impl Into<String>,
        due_date: Option<NaiveDateTime>,
        source_label: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            description: description.into(),
            due_date,
            source_label: source_label.into(),
            completed,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDateTime> {
        self.due_date
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Check if this task belongs on the agenda (incomplete and dated)
    pub fn is_agenda_candidate(&self) -> bool {
        !self.completed && self.due_date.is_some()
    }
}

/// Derive the display label for a todo file
///
/// Takes the base name of `path` and strips a trailing `.todo.txt` when present.
/// Any other extension is left untouched.
///
/// # Examples
/// ```
/// # use todo_agenda::source_label;
/// assert_eq!(source_label("/home/u/work.todo.txt"), "work");
/// assert_eq!(source_label("/home/u/personal.txt"), "personal.txt");
/// ```
pub fn source_label(path: impl AsRef<Path>) -> String {
    let base = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match base.strip_suffix(TODO_FILE_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => base,
    }
}
