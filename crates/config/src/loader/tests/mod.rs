//! Tests for the env, certificate and config loaders.
//!
//! Invariants:
//! - Tests that read or write the process environment use `serial_test`.
//! - Every test resolves against its own `tempfile` root, never the working directory.
//! - Variables written by committing loads are scoped with `temp_env` so they
//!   are restored afterwards.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub mod builder_tests;

/// Fresh temporary root directory.
pub fn temp_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Write `contents` to `root/name`, creating parent directories.
pub fn write_file(root: &Path, name: &str, contents: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, contents).expect("Failed to write test file");
}
