//! Builder-style load entry point.
//!
//! Responsibilities:
//! - Collect the environment name, root anchor and local-only flag.
//! - Run the env, certificate and config loaders in that fixed order.
//! - Assemble the aggregate `Ranger` result.
//!
//! Does NOT handle:
//! - Parsing individual sources (delegated to env.rs, cert.rs, config_file.rs).
//!
//! Invariants / Assumptions:
//! - An explicit environment name takes precedence over `ENV_NAME`, which is
//!   read once per `load()` call.
//! - Without an explicit root, the process working directory at load time is used.
//! - A load is expected to run once during startup, before other threads exist.

use std::path::PathBuf;

use tracing::debug;

use super::cert::load_cert;
use super::config_file::load_config;
use super::env::{load_env, resolve_env_name};
use super::error::RangerError;
use super::path::PathResolver;
use crate::constants::LOG_TARGET;
use crate::types::Ranger;

/// Loader that resolves and reads the env, certificate and config sources.
#[derive(Debug, Clone, Default)]
pub struct RangerLoader {
    env_name: Option<String>,
    root: Option<PathBuf>,
    local_only: bool,
}

impl RangerLoader {
    /// Create a new loader with no environment name, the working directory as
    /// root, and env-file commits enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment name used as the filename suffix.
    ///
    /// A blank name is ignored and `ENV_NAME` is consulted instead.
    pub fn with_env_name(mut self, name: impl Into<String>) -> Self {
        self.env_name = Some(name.into());
        self
    }

    /// Set the environment name from an optional value.
    pub fn with_env_name_opt(mut self, name: Option<String>) -> Self {
        self.env_name = name;
        self
    }

    /// Set the root anchor the conventional paths are resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Compute the env snapshot without committing env-file variables into
    /// the process environment.
    pub fn local_only(mut self, local_only: bool) -> Self {
        self.local_only = local_only;
        self
    }

    pub fn is_local_only(&self) -> bool {
        self.local_only
    }

    /// Build the path resolver this loader would use right now.
    ///
    /// # Errors
    ///
    /// Returns `RangerError::RootUnavailable` if no root was set and the
    /// working directory cannot be determined.
    pub fn resolver(&self) -> Result<PathResolver, RangerError> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(RangerError::RootUnavailable)?,
        };
        Ok(PathResolver::new(root, resolve_env_name(self.env_name.as_deref())))
    }

    /// Run the load: env, then certificate, then config.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined, an existing env file
    /// cannot be read or parsed, or an existing config file is not valid JSON.
    /// Missing sources are never errors.
    pub fn load(self) -> Result<Ranger, RangerError> {
        let resolver = self.resolver()?;
        debug!(
            target: LOG_TARGET,
            root = %resolver.root().display(),
            env_name = resolver.env_name().unwrap_or(""),
            local_only = self.local_only,
            "Loading environment, certificate and config"
        );

        let env = load_env(&resolver, self.local_only)?;
        let cert = load_cert(&resolver);
        let config = load_config(&resolver)?;

        Ok(Ranger {
            env_name: resolver.env_name().map(str::to_string),
            root: resolver.root().to_path_buf(),
            paths: resolver.paths(),
            env,
            cert,
            config,
        })
    }
}
