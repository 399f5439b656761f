//! Flat-file storage for the task list.
//!
//! The save file holds one encoded task per line (see [`crate::codec`]) and
//! is the only durable state. Every save is a full replace: the entire list
//! is serialized to a sibling temp file, synced, and renamed over the old
//! contents, so readers never observe a half-written file. The save path is
//! supplied once at construction and is otherwise opaque to callers.
//!
//! Load policy: a missing file is an empty list, not an error. Blank lines
//! are skipped silently. Structurally corrupt lines are skipped and counted
//! in the returned [`LoadReport`] so callers can warn without losing the
//! rest of the file. A date field that fails to parse aborts the load with
//! the offending line number.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec;
use crate::error::{Error, Result};
use crate::task::Task;

/// Storage manager for the durable task file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

/// Outcome of a load: the tasks in file order, plus how many structurally
/// corrupt lines were dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    pub skipped: usize,
}

impl Storage {
    /// Create a storage manager for the given save file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full task sequence from disk.
    pub fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no save file, starting empty");
            return Ok(LoadReport::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut report = LoadReport::default();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match codec::decode(line) {
                Ok(task) => report.tasks.push(task),
                Err(source) if source.is_fatal() => {
                    return Err(Error::Decode {
                        line: number + 1,
                        source,
                    });
                }
                Err(source) => {
                    warn!(line = number + 1, %source, "skipping corrupt line");
                    report.skipped += 1;
                }
            }
        }

        debug!(
            path = %self.path.display(),
            tasks = report.tasks.len(),
            skipped = report.skipped,
            "loaded save file"
        );
        Ok(report)
    }

    /// Persist the full task sequence, replacing the previous file contents.
    ///
    /// Creates missing parent directories. The write goes to a temp file
    /// first and is renamed into place on a clean close.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(|source| self.write_error(source))?;

        for task in tasks {
            writeln!(file, "{}", codec::encode(task)).map_err(|source| self.write_error(source))?;
        }

        file.sync_all().map_err(|source| self.write_error(source))?;
        fs::rename(&temp_path, &self.path).map_err(|source| self.write_error(source))?;

        debug!(path = %self.path.display(), tasks = tasks.len(), "saved task list");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::Write {
            path: self.path.clone(),
            source,
        }
    }
}
