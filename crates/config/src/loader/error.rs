//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every caller-visible load failure.
//! - Map `dotenvy` errors into variants that carry the offending path.
//!
//! Does NOT handle:
//! - Missing sources. An absent env file, certificate role or config file is
//!   a normal outcome, not an error (the strict env-file variant excepted).
//!
//! Invariants:
//! - All error variants include the resolved path for debugging.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading env, certificate and config sources.
#[derive(Error, Debug)]
pub enum RangerError {
    #[error("Unable to determine the root directory: {0}")]
    RootUnavailable(#[source] std::io::Error),

    /// The strict env-file variant was asked for variables but found no file.
    #[error("Required env file not found at {}", path.display())]
    MissingEnvFile { path: PathBuf },

    /// Failed to parse the env file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse env file {} at position {error_index}", path.display())]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read the env file, typically because it vanished or lost its
    /// permissions after the existence check.
    #[error("Failed to read env file {}: {kind}", path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load env file {}", path.display())]
    DotenvUnknown { path: PathBuf },

    #[error("Failed to read config file at {}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config loaded from {} does not match the requested type: {source}", path.display())]
    ConfigShape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RangerError {
    /// Convert a `dotenvy` error raised while reading `path`.
    pub(crate) fn from_dotenv(path: &Path, error: dotenvy::Error) -> Self {
        let path = path.to_path_buf();
        match error {
            dotenvy::Error::LineParse(_, error_index) => {
                RangerError::DotenvParse { path, error_index }
            }
            dotenvy::Error::Io(io_err) => RangerError::DotenvIo {
                path,
                kind: io_err.kind(),
            },
            _ => RangerError::DotenvUnknown { path },
        }
    }

    /// Returns true if this error comes from a missing file.
    pub fn is_missing_file(&self) -> bool {
        match self {
            RangerError::MissingEnvFile { .. } => true,
            RangerError::DotenvIo { kind, .. } => *kind == ErrorKind::NotFound,
            RangerError::ConfigFileRead { source, .. } => source.kind() == ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_parse_error_drops_line_content() {
        let secret = "supersecret_token_12345";
        let error = RangerError::from_dotenv(
            Path::new("/srv/app/.env"),
            dotenvy::Error::LineParse(format!("TOKEN={secret} oops"), 7),
        );

        let message = error.to_string();
        assert!(matches!(error, RangerError::DotenvParse { error_index: 7, .. }));
        assert!(!message.contains(secret), "leaked secret: {message}");
        assert!(message.contains("/srv/app/.env"));
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let error = RangerError::from_dotenv(
            Path::new("/srv/app/.env"),
            dotenvy::Error::Io(std::io::Error::from(ErrorKind::PermissionDenied)),
        );

        assert!(matches!(
            error,
            RangerError::DotenvIo {
                kind: ErrorKind::PermissionDenied,
                ..
            }
        ));
        assert!(!error.is_missing_file());
    }

    #[test]
    fn test_missing_env_file_names_path() {
        let error = RangerError::MissingEnvFile {
            path: PathBuf::from("/srv/app/.env-test"),
        };
        assert!(error.to_string().contains("/srv/app/.env-test"));
        assert!(error.is_missing_file());
    }
}
