//! Scratch test binaries for unit tests

#![allow(clippy::unwrap_used)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write `contents` to `dir/name` and set its permission bits to `mode`.
pub fn write_file(dir: &Path, name: &str, contents: &str, mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

/// Write a `/bin/sh` script whose body is `body`.
pub fn write_script(dir: &Path, name: &str, body: &str, mode: u32) -> PathBuf {
    write_file(dir, name, &format!("#!/bin/sh\n{body}\n"), mode)
}
