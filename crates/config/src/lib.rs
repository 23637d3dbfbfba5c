//! Startup configuration bootstrap for server processes.
//!
//! Locates, parses and exposes three optional sources resolved by convention
//! from a root directory and an optional environment name:
//!
//! - `.env[-<name>]`: dotenv variables, merged with the process environment.
//!   **Process environment values win** over file values in the snapshot.
//!   Unless loading local-only, file variables are also written into the
//!   process environment, overwriting existing values. Unquoted and
//!   double-quoted values expand `$NAME`/`${NAME}` (process environment
//!   first, then earlier keys of the same file, else empty); write
//!   `'pa$word'` or `pa\$word` to keep a literal `$`.
//! - `.cert[-<name>]/`: TLS material (`ca`|`chain.pem`, `crt`|`cert.pem`,
//!   `key`|`privkey.pem`); the later name wins when both exist.
//! - `.config[-<name>].json`: a JSON document, `{}` when absent.
//!
//! ```no_run
//! let ranger = ranger_config::RangerLoader::new()
//!     .with_env_name("test")
//!     .local_only(true)
//!     .load()?;
//! println!("{:?}", ranger.config_value("port"));
//! # Ok::<(), ranger_config::RangerError>(())
//! ```

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    PathResolver, RangerError, RangerLoader, ResolvedPaths, apply_env_file, env_var_or_none,
    load_cert, load_config, load_env, load_env_file, process_env, read_env_file,
    resolve_env_name, resolve_path,
};
pub use types::{CertBundle, CertRole, EnvFile, EnvSnapshot, Ranger};

/// Load env, certificate and config sources from the working directory.
///
/// Falls back to `ENV_NAME` when `env_name` is `None`.
pub fn load(env_name: Option<&str>, local_only: bool) -> Result<Ranger, RangerError> {
    RangerLoader::new()
        .with_env_name_opt(env_name.map(str::to_string))
        .local_only(local_only)
        .load()
}
