//! Env file loading and process environment merging.
//!
//! Responsibilities:
//! - Resolve and parse the `.env[-<name>]` file with `dotenvy`.
//! - Merge file variables with the live process environment.
//! - Commit file variables into the process environment unless running local-only.
//! - Provide the strict single-file variant used by minimal entry points.
//!
//! Does NOT handle:
//! - Certificate or config file loading (see `cert.rs`, `config_file.rs`).
//! - Choosing the root anchor (see `builder.rs`).
//!
//! Invariants:
//! - Process environment values take precedence over env-file values in the
//!   snapshot. The process environment is captured before any commit.
//! - A commit overwrites existing process values for every key in the file.
//! - A missing env file is silent, except in `load_env_file` with `return_vars`.
//! - Empty or whitespace-only environment names are treated as unset.
//! - `$NAME` references in unquoted and double-quoted values are expanded
//!   during parsing; single quotes and `\$` keep the `$` literal.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use super::error::RangerError;
use super::path::{PathResolver, resolve_path};
use crate::constants::{ENV_NAME_VAR, ENV_STEM, LOG_TARGET};
use crate::types::{EnvFile, EnvSnapshot};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Pick the environment name: a non-blank explicit value, otherwise `ENV_NAME`.
pub fn resolve_env_name(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| env_var_or_none(ENV_NAME_VAR))
}

/// Copy of the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped, with a
/// debug event naming the (lossily decoded) key.
pub fn process_env() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = match key {
                    Ok(key) => key,
                    Err(raw) => raw.to_string_lossy().into_owned(),
                };
                debug!(
                    target: LOG_TARGET,
                    key = %key,
                    "Skipping non-unicode process environment variable"
                );
                None
            }
        })
        .collect()
}

/// Parse an env file without touching the process environment.
///
/// Unquoted and double-quoted values expand `$NAME` and `${NAME}`. A name is
/// looked up in the process environment first, then among keys defined
/// earlier in the same file, and expands to an empty string when neither has
/// it. Single-quoted values and `\$` keep a literal `$`.
///
/// # Errors
///
/// Returns `DotenvIo` if the file cannot be read and `DotenvParse` if a line
/// is malformed. Neither error carries line contents.
pub fn read_env_file(path: &Path) -> Result<EnvFile, RangerError> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| RangerError::from_dotenv(path, e))?;

    let mut vars = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| RangerError::from_dotenv(path, e))?;
        vars.insert(key, value);
    }

    Ok(EnvFile {
        path: path.to_path_buf(),
        vars,
    })
}

/// Write every variable into the process environment, overwriting existing values.
fn commit_env(vars: &BTreeMap<String, String>) {
    for (key, value) in vars {
        // SAFETY: env files are loaded once during single-threaded startup,
        // before any other thread reads or writes the environment.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// Parse `path` and commit its variables into the process environment.
///
/// Failure is reported as an `Err` value, including the case where the file
/// disappears or becomes unreadable after an existence check.
pub fn apply_env_file(path: &Path) -> Result<EnvFile, RangerError> {
    let file = read_env_file(path)?;
    commit_env(&file.vars);
    info!(
        target: LOG_TARGET,
        path = %path.display(),
        count = file.vars.len(),
        "Applied env file to process environment"
    );
    Ok(file)
}

/// Load the env snapshot for `resolver`.
///
/// When no env file exists the snapshot is a copy of the process environment.
/// Otherwise it holds the file variables overlaid with the process environment
/// (process values win), and unless `local_only` is set the file variables are
/// then committed into the process environment.
pub fn load_env(resolver: &PathResolver, local_only: bool) -> Result<EnvSnapshot, RangerError> {
    let path = resolver.resolve(ENV_STEM, None);

    if !path.exists() {
        debug!(target: LOG_TARGET, path = %path.display(), "No env file found");
        return Ok(EnvSnapshot::from_process(process_env()));
    }

    let file = read_env_file(&path)?;
    let snapshot = EnvSnapshot::merged(&file, process_env(), !local_only);

    if local_only {
        debug!(
            target: LOG_TARGET,
            path = %path.display(),
            count = file.vars.len(),
            "Loaded env file (local only)"
        );
    } else {
        commit_env(&file.vars);
        info!(
            target: LOG_TARGET,
            path = %path.display(),
            count = file.vars.len(),
            "Loaded env file into process environment"
        );
    }

    Ok(snapshot)
}

/// Strict single-file variant: load `.env[-<name>]` under `root` on its own.
///
/// An existing file is parsed and committed into the process environment;
/// its variables are returned when `return_vars` is set.
///
/// # Errors
///
/// Returns `RangerError::MissingEnvFile` naming the resolved path when the
/// file is absent and `return_vars` was requested. An absent file without
/// `return_vars` yields `Ok(None)`.
pub fn load_env_file(
    root: &Path,
    name: Option<&str>,
    return_vars: bool,
) -> Result<Option<BTreeMap<String, String>>, RangerError> {
    let env_name = resolve_env_name(name);
    let path = resolve_path(root, ENV_STEM, None, env_name.as_deref());

    if !path.exists() {
        if return_vars {
            return Err(RangerError::MissingEnvFile { path });
        }
        debug!(target: LOG_TARGET, path = %path.display(), "No env file found");
        return Ok(None);
    }

    let file = apply_env_file(&path)?;
    Ok(return_vars.then_some(file.vars))
}
