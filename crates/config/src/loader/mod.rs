//! Loaders for env, certificate and config sources.
//!
//! Responsibilities:
//! - Resolve conventional paths from a root anchor and an environment name.
//! - Load `.env` files, `.cert` directories and `.config.json` files.
//! - Provide the builder-pattern `RangerLoader` that runs all three in order.
//!
//! Does NOT handle:
//! - Validating config contents against a schema.
//! - Reloading sources after startup.
//!
//! Invariants / Assumptions:
//! - Process environment values take precedence over env-file values.
//! - Missing sources are never errors; malformed ones are.

mod builder;
mod cert;
mod config_file;
mod env;
mod error;
mod path;

#[cfg(test)]
mod tests;

pub use builder::RangerLoader;
pub use cert::load_cert;
pub use config_file::load_config;
pub use env::{
    apply_env_file, env_var_or_none, load_env, load_env_file, process_env, read_env_file,
    resolve_env_name,
};
pub use error::RangerError;
pub use path::{PathResolver, ResolvedPaths, resolve_path};
