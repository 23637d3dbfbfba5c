//! Centralized constants for the park-ranger workspace.
//!
//! File stems, extensions and candidate filenames that make up the on-disk
//! convention, kept in one place so the loaders and the CLI agree on them.

// =============================================================================
// Environment Name
// =============================================================================

/// Process environment variable that supplies the default environment name.
pub const ENV_NAME_VAR: &str = "ENV_NAME";

/// Separator placed between a stem and the environment name (`.env-test`).
pub const ENV_NAME_SEPARATOR: char = '-';

// =============================================================================
// File Stems
// =============================================================================

/// Stem of the dotenv file (`.env`, `.env-<name>`).
pub const ENV_STEM: &str = ".env";

/// Stem of the certificate directory (`.cert`, `.cert-<name>`).
pub const CERT_STEM: &str = ".cert";

/// Stem of the JSON config file (`.config.json`, `.config-<name>.json`).
pub const CONFIG_STEM: &str = ".config";

/// Extension of the config file.
pub const CONFIG_EXTENSION: &str = "json";

// =============================================================================
// Certificate Candidates
// =============================================================================
//
// Probe order matters: the last existing candidate wins, so the conventional
// PEM names are listed after the legacy short names.

/// Candidate filenames for the intermediate CA chain.
pub const CA_CANDIDATES: &[&str] = &["ca", "chain.pem"];

/// Candidate filenames for the certificate.
pub const CERT_CANDIDATES: &[&str] = &["crt", "cert.pem"];

/// Candidate filenames for the private key.
pub const KEY_CANDIDATES: &[&str] = &["key", "privkey.pem"];

// =============================================================================
// Diagnostics
// =============================================================================

/// `tracing` target used by every event the loaders emit.
pub const LOG_TARGET: &str = "ranger_config";
