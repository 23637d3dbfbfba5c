//! Environment variable snapshot types.
//!
//! Responsibilities:
//! - Hold the merged view of env-file and process variables.
//! - Record where the file variables came from and whether they were committed.
//!
//! Does NOT handle:
//! - Reading, parsing or committing env files (see `loader/env.rs`).
//!
//! Invariants:
//! - A snapshot never changes after construction; it is a copy, not a live view.
//! - `file_keys` is empty whenever `source` is `None`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Variables parsed from a single env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    /// Resolved path the variables were read from.
    pub path: PathBuf,
    /// Parsed `KEY=VALUE` pairs. A key repeated in the file keeps its last value.
    pub vars: BTreeMap<String, String>,
}

/// Merged environment variables as seen at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
    source: Option<PathBuf>,
    file_keys: BTreeSet<String>,
    committed: bool,
}

impl EnvSnapshot {
    /// Snapshot of the process environment alone (no env file was found).
    pub(crate) fn from_process(process: BTreeMap<String, String>) -> Self {
        Self {
            vars: process,
            ..Self::default()
        }
    }

    /// Snapshot of `file` overlaid with `process`; process values win on collisions.
    pub(crate) fn merged(file: &EnvFile, process: BTreeMap<String, String>, committed: bool) -> Self {
        let mut vars = file.vars.clone();
        vars.extend(process);
        Self {
            vars,
            source: Some(file.path.clone()),
            file_keys: file.vars.keys().cloned().collect(),
            committed,
        }
    }

    /// Look up a variable by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// All merged variables.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Path of the env file that contributed variables, if one was found.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Keys defined by the env file (whether or not the process overrode them).
    pub fn file_keys(&self) -> &BTreeSet<String> {
        &self.file_keys
    }

    /// Whether the env-file variables were written into the process environment.
    pub fn committed(&self) -> bool {
        self.committed
    }

    /// Consume the snapshot, returning the merged variables.
    pub fn into_vars(self) -> BTreeMap<String, String> {
        self.vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merged_prefers_process_values() {
        let file = EnvFile {
            path: PathBuf::from("/srv/app/.env"),
            vars: map(&[("FOO", "file"), ("ONLY_FILE", "1")]),
        };
        let snapshot = EnvSnapshot::merged(&file, map(&[("FOO", "process")]), false);

        assert_eq!(snapshot.get("FOO"), Some("process"));
        assert_eq!(snapshot.get("ONLY_FILE"), Some("1"));
        assert!(snapshot.file_keys().contains("FOO"));
        assert_eq!(snapshot.source(), Some(Path::new("/srv/app/.env")));
        assert!(!snapshot.committed());
    }

    #[test]
    fn test_process_only_snapshot_has_no_source() {
        let snapshot = EnvSnapshot::from_process(map(&[("HOME", "/root")]));

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.source().is_none());
        assert!(snapshot.file_keys().is_empty());
        assert!(!snapshot.committed());
    }
}
