//! CLI command implementations
//!
//! Command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::runner::Runner;

use super::{CliError, CliResult, ExitCode};

/// Run the test binaries in `dir` with banners on stdout.
pub fn run_test_dir(dir: &Path) -> CliResult<ExitCode> {
    let mut runner = Runner::new();
    match runner.run(dir) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            if let Some(name) = err.test_name() {
                tracing::debug!(test = name, "run stopped on failing test");
            }
            Err(CliError::from(err))
        }
    }
}
