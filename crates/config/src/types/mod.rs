//! Result type definitions for park-ranger.
//!
//! Responsibilities:
//! - Define the env snapshot, certificate bundle and aggregate `Ranger` types.
//! - Provide read accessors and typed config extraction.
//!
//! Does NOT handle:
//! - Locating or reading any source (see `loader` module).
//!
//! Invariants:
//! - Private key material uses `secrecy::SecretString` to prevent accidental logging.
//! - Values are snapshots taken at load time, not live views of the process or disk.

mod cert;
mod env;
mod ranger;

pub use cert::{CertBundle, CertRole};
pub use env::{EnvFile, EnvSnapshot};
pub use ranger::Ranger;
