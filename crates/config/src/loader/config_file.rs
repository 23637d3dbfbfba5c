//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve `.config[-<name>].json` and parse it with `serde_json`.
//!
//! Invariants:
//! - An absent file yields an empty JSON object.
//! - A present but unreadable or malformed file is a caller-visible error.
//! - The parsed document is returned as-is, whatever its shape.

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::error::RangerError;
use super::path::PathResolver;
use crate::constants::{CONFIG_EXTENSION, CONFIG_STEM, LOG_TARGET};

/// Load the config document for `resolver`.
///
/// # Errors
///
/// Returns `ConfigFileRead` if the file exists but cannot be read, and
/// `ConfigFileParse` if it is not valid JSON.
pub fn load_config(resolver: &PathResolver) -> Result<Value, RangerError> {
    let path = resolver.resolve(CONFIG_STEM, Some(CONFIG_EXTENSION));

    if !path.exists() {
        debug!(target: LOG_TARGET, path = %path.display(), "No config file found, using empty config");
        return Ok(Value::Object(Map::new()));
    }

    let content = std::fs::read_to_string(&path).map_err(|source| RangerError::ConfigFileRead {
        path: path.clone(),
        source,
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| RangerError::ConfigFileParse {
            path: path.clone(),
            source,
        })?;

    info!(target: LOG_TARGET, path = %path.display(), "Loaded config file");
    Ok(value)
}
