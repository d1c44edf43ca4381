//! CLI module for bintest
//!
//! `bintest [DIR]` runs every executable file in `DIR` (default `bin/test`),
//! printing a banner before each one and stopping at the first failure.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::runner::{DEFAULT_TEST_DIR, RunnerError};
use crate::version::BINTEST_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<RunnerError> for CliError {
    fn from(err: RunnerError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run every executable in a test-binary directory
#[derive(Parser, Debug)]
#[command(name = "bintest")]
#[command(version = BINTEST_VERSION)]
#[command(about = "Run every executable in a test-binary directory, stopping at the first failure", long_about = None)]
pub struct Cli {
    /// Directory holding the test binaries
    #[arg(value_name = "DIR", default_value = DEFAULT_TEST_DIR)]
    pub dir: PathBuf,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    commands::run_test_dir(&cli.dir)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_dir() {
        let cli = Cli::try_parse_from(["bintest"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("bin/test"));
    }

    #[test]
    fn test_cli_explicit_dir() {
        let cli = Cli::try_parse_from(["bintest", "out/tests"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("out/tests"));
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["bintest", "--parallel"]).is_err());
    }

    #[test]
    fn test_runner_error_maps_to_failure() {
        let err: CliError = RunnerError::NonZeroExit {
            name: "b".to_string(),
            code: 2,
        }
        .into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.message, "Error: test 'b' exited with status 2");
    }

    #[test]
    fn test_execute_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli {
            dir: tmp.path().join("missing"),
        };
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("test directory not found"));
    }
}
