#![forbid(unsafe_code)]
//! bintest: a minimal test-binary runner
//!
//! Scans a directory (default `bin/test`) for executable files and runs each
//! one as a child process, printing a banner before it starts. The first
//! binary that exits non-zero aborts the run.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `runner` modules enforce
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod runner;
pub mod version;

pub use runner::{
    BannerReporter, BinaryExecutor, DEFAULT_TEST_DIR, ProcessExecutor, RunReporter, Runner, RunnerError, TestBinary,
    run_tests,
};
