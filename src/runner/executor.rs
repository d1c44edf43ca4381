//! Test binary execution
//!
//! Binaries are spawned directly by absolute path (no shell), inherit the
//! parent's environment and standard streams, and are waited on to
//! completion. There is no timeout.

use std::path::Path;
use std::process::{Command, ExitStatus};

use super::{RunnerError, TestBinary};

/// Runs one test binary to completion.
///
/// Implementations return `Ok(())` only for a zero exit status.
pub trait BinaryExecutor {
    /// Run `test` with `working_dir` as its current directory.
    fn execute(&mut self, test: &TestBinary, working_dir: &Path) -> Result<(), RunnerError>;
}

/// Spawns a child process per test binary (current behavior).
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl BinaryExecutor for ProcessExecutor {
    #[tracing::instrument(skip_all, fields(test = %test.name))]
    fn execute(&mut self, test: &TestBinary, working_dir: &Path) -> Result<(), RunnerError> {
        tracing::debug!(path = %test.path.display(), "spawning test binary");

        let status = Command::new(&test.path)
            .current_dir(working_dir)
            .status()
            .map_err(|source| RunnerError::Spawn {
                name: test.name.clone(),
                source,
            })?;

        tracing::debug!(%status, "test binary exited");
        check_status(&test.name, status)
    }
}

/// Map a child's exit status to the runner's pass/fail contract.
pub fn check_status(name: &str, status: ExitStatus) -> Result<(), RunnerError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(RunnerError::NonZeroExit {
            name: name.to_string(),
            code,
        }),
        None => Err(RunnerError::Terminated { name: name.to_string() }),
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::runner::test_support::write_script;
    use std::fs;

    fn binary(dir: &Path, name: &str) -> TestBinary {
        TestBinary::new(name, dir.join(name))
    }

    #[test]
    fn test_zero_exit_passes() {
        let tmp = tempfile::tempdir().unwrap();
        write_script(tmp.path(), "ok", "exit 0", 0o755);
        ProcessExecutor.execute(&binary(tmp.path(), "ok"), tmp.path()).unwrap();
    }

    #[test]
    fn test_nonzero_exit_reports_code() {
        let tmp = tempfile::tempdir().unwrap();
        write_script(tmp.path(), "bad", "exit 3", 0o755);
        let err = ProcessExecutor.execute(&binary(tmp.path(), "bad"), tmp.path()).unwrap_err();
        match err {
            RunnerError::NonZeroExit { name, code } => {
                assert_eq!(name, "bad");
                assert_eq!(code, 3);
            }
            other => panic!("Expected NonZeroExit, got {other:?}"),
        }
    }

    #[test]
    fn test_signal_is_a_failure() {
        let tmp = tempfile::tempdir().unwrap();
        write_script(tmp.path(), "killed", "kill -9 $$", 0o755);
        let err = ProcessExecutor.execute(&binary(tmp.path(), "killed"), tmp.path()).unwrap_err();
        assert!(matches!(err, RunnerError::Terminated { .. }));
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ProcessExecutor.execute(&binary(tmp.path(), "absent"), tmp.path()).unwrap_err();
        assert!(matches!(err, RunnerError::Spawn { .. }));
        assert_eq!(err.test_name(), Some("absent"));
    }

    #[test]
    fn test_child_runs_in_working_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("cwd.txt");
        write_script(tmp.path(), "where", &format!("pwd -P > '{}'", out.display()), 0o755);

        ProcessExecutor.execute(&binary(tmp.path(), "where"), tmp.path()).unwrap();

        let recorded = fs::read_to_string(&out).unwrap();
        assert_eq!(Path::new(recorded.trim()), fs::canonicalize(tmp.path()).unwrap());
    }
}
