//! CLI command implementations.
//!
//! Each command loads what it needs through the shared `RangerLoader` and
//! returns its rendered output; printing is left to `main()`.

pub mod cert;
pub mod check;
pub mod config;
pub mod env;
pub mod paths;

use std::path::Path;

/// Text form of an optional source path.
pub(crate) fn display_source(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}

/// Text form of a boolean flag.
pub(crate) fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}
