//! Runner error taxonomy
//!
//! Every variant is fatal for the run: the runner never retries and never
//! continues past the first error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a test run
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("test directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read test directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start test '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("test '{name}' exited with status {code}")]
    NonZeroExit { name: String, code: i32 },

    #[error("test '{name}' was terminated by a signal")]
    Terminated { name: String },

    #[error("failed to write banner: {0}")]
    Output(#[from] io::Error),
}

impl RunnerError {
    /// Name of the test binary that caused the failure, if any.
    pub fn test_name(&self) -> Option<&str> {
        match self {
            RunnerError::Spawn { name, .. }
            | RunnerError::NonZeroExit { name, .. }
            | RunnerError::Terminated { name } => Some(name),
            _ => None,
        }
    }
}
