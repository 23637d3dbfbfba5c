//! Shared test utilities for park-ranger integration tests.
//!
//! Invariants / Assumptions:
//! - Commands never inherit `ENV_NAME`, `RANGER_ROOT` or `RUST_LOG` from the host.
//! - Every test points `--root` at its own temp directory.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Returns a hermetic `park-ranger` command rooted at `root`.
pub fn ranger_cmd(root: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("park-ranger");

    cmd.env_remove("ENV_NAME")
        .env_remove("RANGER_ROOT")
        .env_remove("RUST_LOG");
    cmd.arg("--root").arg(root);

    cmd
}

/// Write `contents` to `root/name`, creating parent directories.
pub fn write(root: &Path, name: &str, contents: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}
