//! Conventional path resolution.
//!
//! Responsibilities:
//! - Compose `<root>/<stem>[-<env name>][.<extension>]` for every loader.
//! - Expose the three resolved source paths as one value for reporting.
//!
//! Does NOT handle:
//! - Any filesystem access; resolution never checks existence.
//! - Choosing the environment name or the root (see `builder.rs`).
//!
//! Invariants:
//! - Resolution is a pure function of (root, stem, extension, env name).
//! - An absent environment name leaves the stem unsuffixed.

use std::path::{Path, PathBuf};

use crate::constants::{CERT_STEM, CONFIG_EXTENSION, CONFIG_STEM, ENV_NAME_SEPARATOR, ENV_STEM};

/// Resolve a conventional path under `root`.
///
/// ```
/// use std::path::Path;
/// use ranger_config::resolve_path;
///
/// let path = resolve_path(Path::new("/srv/app"), ".config", Some("json"), Some("test"));
/// assert_eq!(path, Path::new("/srv/app/.config-test.json"));
/// ```
pub fn resolve_path(
    root: &Path,
    stem: &str,
    extension: Option<&str>,
    env_name: Option<&str>,
) -> PathBuf {
    let mut file_name = String::from(stem);
    if let Some(name) = env_name {
        file_name.push(ENV_NAME_SEPARATOR);
        file_name.push_str(name);
    }
    if let Some(ext) = extension {
        file_name.push('.');
        file_name.push_str(ext);
    }
    root.join(file_name)
}

/// A root anchor paired with an optional environment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
    env_name: Option<String>,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>, env_name: Option<String>) -> Self {
        Self {
            root: root.into(),
            env_name,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env_name(&self) -> Option<&str> {
        self.env_name.as_deref()
    }

    /// Resolve `stem` (and optional `extension`) under this resolver's root.
    pub fn resolve(&self, stem: &str, extension: Option<&str>) -> PathBuf {
        resolve_path(&self.root, stem, extension, self.env_name())
    }

    /// Resolve the env file, certificate directory and config file at once.
    pub fn paths(&self) -> ResolvedPaths {
        ResolvedPaths {
            env: self.resolve(ENV_STEM, None),
            cert: self.resolve(CERT_STEM, None),
            config: self.resolve(CONFIG_STEM, Some(CONFIG_EXTENSION)),
        }
    }
}

/// The three conventional source locations for one (root, env name) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Dotenv file.
    pub env: PathBuf,
    /// Certificate directory.
    pub cert: PathBuf,
    /// JSON config file.
    pub config: PathBuf,
}
