//! Error types for tsk
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad task number, empty description, bad date)
//! - 4: Operation failed (I/O failure, corrupt save file)

use std::path::PathBuf;
use thiserror::Error;

use crate::codec::DecodeError;

/// Exit codes for the tsk CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tsk operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("No task number {number}: the list has {len} task(s)")]
    InvalidIndex {
        /// 1-based task number as the user sees it
        number: usize,
        len: usize,
    },

    #[error("Invalid date {0:?}: use yyyy-mm-dd (e.g. 2019-10-15)")]
    InvalidDate(String),

    #[error("Invalid date/time {0:?}: use \"yyyy-mm-dd HHMM\" (e.g. \"2019-12-02 1800\")")]
    InvalidDateTime(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Failed to read save file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write save file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Save file is corrupted at line {line}: {source}")]
    Decode { line: usize, source: DecodeError },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::EmptyDescription
            | Error::InvalidIndex { .. }
            | Error::InvalidDate(_)
            | Error::InvalidDateTime(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            Error::Read { .. } | Error::Write { .. } | Error::Decode { .. } | Error::Json(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }
}

/// Result type alias for tsk operations
pub type Result<T> = std::result::Result<T, Error>;
