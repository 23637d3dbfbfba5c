//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map RangerError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use ranger_config::RangerError;

/// Structured exit codes for park-ranger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A source exists but could not be read or parsed.
    ///
    /// Scripts should fix the file; retrying will not help.
    InvalidSource = 2,

    /// A required source is missing.
    MissingSource = 3,

    /// Usage error - bad arguments such as an unknown output format.
    UsageError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&RangerError> for ExitCode {
    fn from(err: &RangerError) -> Self {
        if err.is_missing_file() {
            return ExitCode::MissingSource;
        }
        match err {
            RangerError::RootUnavailable(_) => ExitCode::GeneralError,
            RangerError::DotenvParse { .. }
            | RangerError::DotenvIo { .. }
            | RangerError::DotenvUnknown { .. }
            | RangerError::ConfigFileRead { .. }
            | RangerError::ConfigFileParse { .. }
            | RangerError::ConfigShape { .. } => ExitCode::InvalidSource,
            RangerError::MissingEnvFile { .. } => ExitCode::MissingSource,
        }
    }
}

/// Marker error for invalid command line usage.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(ranger_err) = cause.downcast_ref::<RangerError>() {
                return ExitCode::from(ranger_err);
            }
            if cause.downcast_ref::<UsageError>().is_some() {
                return ExitCode::UsageError;
            }
        }
        ExitCode::GeneralError
    }
}
