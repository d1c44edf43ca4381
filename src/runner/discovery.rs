//! Test binary discovery
//!
//! A directory entry is a test binary when it is a regular file (symlinks are
//! followed) with at least one of the owner, group or other execute bits set.
//! Everything else is skipped without complaint.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{RunnerError, TestBinary};

/// Owner, group and other execute bits (`S_IXUSR | S_IXGRP | S_IXOTH`).
pub const EXECUTE_MASK: u32 = 0o111;

/// Check a raw permission mode against [`EXECUTE_MASK`].
///
/// Any single execute bit is enough.
pub fn has_execute_bit(mode: u32) -> bool {
    mode & EXECUTE_MASK != 0
}

/// Resolve the test directory to an absolute path, failing if it is missing
/// or not a directory.
pub fn resolve_test_dir(dir: &Path) -> Result<PathBuf, RunnerError> {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RunnerError::DirectoryNotFound { path: dir.to_path_buf() });
        }
        Err(source) => {
            return Err(RunnerError::ReadDir {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(RunnerError::NotADirectory { path: dir.to_path_buf() });
    }

    std::path::absolute(dir).map_err(|source| RunnerError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// List the runnable test binaries in `dir`, sorted by file name.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover_test_binaries(dir: &Path) -> Result<Vec<TestBinary>, RunnerError> {
    let entries = fs::read_dir(dir).map_err(|source| RunnerError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut binaries = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RunnerError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        // fs::metadata follows symlinks; dangling links land in the Err arm
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(entry = %name, error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !metadata.is_file() {
            tracing::debug!(entry = %name, "skipping non-regular entry");
            continue;
        }
        if !is_runnable(&path, &metadata) {
            tracing::debug!(entry = %name, "skipping non-executable file");
            continue;
        }

        binaries.push(TestBinary::new(name, path));
    }

    binaries.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::info!(count = binaries.len(), "discovered test binaries");
    Ok(binaries)
}

#[cfg(unix)]
fn is_runnable(_path: &Path, metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    has_execute_bit(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn is_runnable(path: &Path, _metadata: &fs::Metadata) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
}
