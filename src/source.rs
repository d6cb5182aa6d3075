//! Reading the control file and the todo files it lists
//!
//! The control file is required and any failure reading it is fatal.
//! Each todo file is independent: a file that cannot be opened is skipped,
//! and a line that cannot be parsed is skipped.

use crate::error::{ParseError, SourceError};
use crate::parser::parse_line;
use crate::task::{Task, source_label};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Provider of the invoking user's home directory
pub trait HomeDir {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Home directory as reported by the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHome;

impl HomeDir for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// A fixed home directory
#[derive(Debug, Clone)]
pub struct FixedHome(pub PathBuf);

impl HomeDir for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Replace a leading `~` with the home directory
///
/// Only the first character is considered, so `~user/...` becomes
/// `<home>user/...`. Paths without a leading `~`, or any path when the home
/// directory is unknown, are returned unchanged.
pub fn expand_tilde(path: &str, home: &dyn HomeDir) -> PathBuf {
    match (path.strip_prefix('~'), home.home_dir()) {
        (Some(rest), Some(home_dir)) => {
            PathBuf::from(format!("{}{}", home_dir.to_string_lossy(), rest))
        }
        _ => PathBuf::from(path),
    }
}

/// Read the next line, decoding invalid UTF-8 lossily
///
/// Returns `Ok(None)` at end of input. The trailing `\n` or `\r\n` is removed.
fn next_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Read the list of todo file paths from the control file
///
/// # Arguments
/// * `path` - Path to the control file
/// * `home` - Home directory provider used for `~` expansion
///
/// # Returns
/// Paths in file order, or a fatal `SourceError`
pub fn load_control_file(path: &Path, home: &dyn HomeDir) -> Result<Vec<PathBuf>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut todo_files = Vec::new();
    while let Some(line) =
        next_line(&mut reader, &mut buf).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?
    {
        todo_files.push(expand_tilde(&line, home));
    }

    Ok(todo_files)
}

/// Tasks gathered from every todo file, in file then line order
#[derive(Debug, Default)]
pub struct Collection {
    pub tasks: Vec<Task>,
    pub files_read: usize,
    pub files_skipped: usize,
    pub lines_rejected: usize,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every line of `reader` into this collection
    ///
    /// Bytes that are not valid UTF-8 are replaced, so one badly encoded
    /// line never hides the lines after it. I/O errors stop the scan of this
    /// reader but keep the tasks already collected from it.
    pub fn read_lines(&mut self, mut reader: impl BufRead, label: &str, origin: &Path) {
        let mut buf = Vec::new();
        loop {
            let line = match next_line(&mut reader, &mut buf) {
                Ok(Some(line)) => line,
                Ok(None) => return,
                Err(e) => {
                    warn!("Error reading file {}: {}", origin.display(), e);
                    return;
                }
            };

            match parse_line(&line, label) {
                Ok(task) => self.tasks.push(task),
                Err(ParseError::Blank) => debug!("Skipping blank line in {}", origin.display()),
                Err(e) => {
                    warn!("Failed to parse task: {}", e);
                    self.lines_rejected += 1;
                }
            }
        }
    }

    /// Open one todo file and add its tasks
    ///
    /// A file that cannot be opened is logged and counted as skipped.
    pub fn read_file(&mut self, path: &Path) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to open file {}: {}", path.display(), e);
                self.files_skipped += 1;
                return;
            }
        };

        let before = self.tasks.len();
        self.read_lines(BufReader::new(file), &source_label(path), path);
        self.files_read += 1;
        debug!(
            "Read {} task(s) from {}",
            self.tasks.len() - before,
            path.display()
        );
    }
}

/// Collect tasks from all todo files, in the order given
pub fn collect_tasks<P: AsRef<Path>>(paths: &[P]) -> Collection {
    paths.iter().fold(Collection::new(), |mut collection, path| {
        collection.read_file(path.as_ref());
        collection
    })
}
