//! The aggregate load result.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::cert::CertBundle;
use super::env::EnvSnapshot;
use crate::loader::{RangerError, ResolvedPaths};

/// Everything resolved by one load: env snapshot, certificate bundle and config.
#[derive(Debug, Clone)]
pub struct Ranger {
    /// Environment name used as the filename suffix, if any.
    pub env_name: Option<String>,
    /// Root anchor all sources were resolved against.
    pub root: PathBuf,
    /// Resolved source locations (whether or not they existed).
    pub paths: ResolvedPaths,
    pub env: EnvSnapshot,
    pub cert: CertBundle,
    /// Parsed config document; an empty object when no config file exists.
    pub config: Value,
}

impl Ranger {
    /// Read a variable from the env snapshot.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key)
    }

    /// Deserialize the config document into `T`.
    ///
    /// # Errors
    ///
    /// Returns `RangerError::ConfigShape` if the document does not fit `T`.
    pub fn config_as<T: DeserializeOwned>(&self) -> Result<T, RangerError> {
        T::deserialize(&self.config).map_err(|source| RangerError::ConfigShape {
            path: self.paths.config.clone(),
            source,
        })
    }

    /// Look up a top-level config key.
    pub fn config_value(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }
}
