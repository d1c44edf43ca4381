//! Test binary runner
//!
//! Scans a directory for executable files and runs each one in turn:
//!
//! 1. Resolve the directory to an absolute path (missing directory is fatal)
//! 2. Discover regular files with an execute bit, sorted by name
//! 3. For each binary, print its banner, spawn it and wait for it to exit
//!
//! The first binary that exits non-zero aborts the run. There is no summary,
//! no retry and no parallelism; each child writes straight to the inherited
//! standard streams.
//!
//! ## Seams
//!
//! Spawning and banner output go through the [`BinaryExecutor`] and
//! [`RunReporter`] traits. The defaults, [`ProcessExecutor`] and
//! [`BannerReporter`] on stdout, are what the CLI uses.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod banner;
pub mod discovery;
pub mod errors;
pub mod executor;

#[cfg(all(test, unix))]
pub(crate) mod test_support;

use std::io;
use std::path::{Path, PathBuf};

pub use banner::{BannerReporter, RunReporter, banner_line, render_banner};
pub use discovery::{EXECUTE_MASK, discover_test_binaries, has_execute_bit, resolve_test_dir};
pub use errors::RunnerError;
pub use executor::{BinaryExecutor, ProcessExecutor};

/// Directory scanned when none is given, relative to the working directory.
pub const DEFAULT_TEST_DIR: &str = "bin/test";

/// A runnable file found in the test directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestBinary {
    /// File name as listed in the directory
    pub name: String,
    /// Absolute path used to spawn it
    pub path: PathBuf,
}

impl TestBinary {
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self { name: name.into(), path }
    }
}

/// Sequential, fail-fast runner.
pub struct Runner<E = ProcessExecutor, R = BannerReporter<io::Stdout>> {
    executor: E,
    reporter: R,
}

impl Runner {
    /// Runner that spawns real processes and prints banners to stdout.
    pub fn new() -> Self {
        Self::with_parts(ProcessExecutor, BannerReporter::stdout())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BinaryExecutor, R: RunReporter> Runner<E, R> {
    pub fn with_parts(executor: E, reporter: R) -> Self {
        Self { executor, reporter }
    }

    /// Run every test binary in `dir`, stopping at the first failure.
    pub fn run(&mut self, dir: &Path) -> Result<(), RunnerError> {
        let dir = resolve_test_dir(dir)?;
        let binaries = discover_test_binaries(&dir)?;

        for test in &binaries {
            self.reporter.on_test_start(test)?;
            if let Err(err) = self.executor.execute(test, &dir) {
                tracing::warn!(test = %test.name, error = %err, "aborting run");
                return Err(err);
            }
        }

        Ok(())
    }

    pub fn into_parts(self) -> (E, R) {
        (self.executor, self.reporter)
    }
}

/// Run every test binary in `dir` with the default executor and reporter.
pub fn run_tests(dir: &Path) -> Result<(), RunnerError> {
    Runner::new().run(dir)
}

// ============================================================================
// Tests
// ============================================================================
