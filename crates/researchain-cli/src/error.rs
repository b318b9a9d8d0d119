//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use researchain_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Hosting API error.
    #[error("Remote error: {0}")]
    Remote(String),

    /// Process execution error.
    #[error("Process error: {message}")]
    Process {
        message: String,
        /// Exit code of the failed child, if it exited normally.
        code: Option<i32>,
    },

    /// IO error (file not writable, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// A failed external step propagates its own exit code when it has one.
    /// Everything else follows sysexits.h:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 69: Service unavailable (hosting API)
    /// - 71: OS error (process could not start or was killed)
    /// - 74: IO error
    /// - 78: Configuration error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Remote(_) => 69,   // EX_UNAVAILABLE
            Self::Process { code, .. } => code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|&c| c != 0)
                .unwrap_or(71), // EX_OSERR
            Self::Io(_) => 74, // EX_IOERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::BranchExists(branch) => Self::Arguments(format!(
                "branch '{branch}' already exists locally or on the remote"
            )),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::Remote(remote) => Self::Remote(remote.to_string()),
            CoreError::Process(process) => Self::Process {
                code: process.exit_code(),
                message: process.to_string(),
            },
            CoreError::Io { context, source } => Self::Io(format!("{context}: {source}")),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error bubbling out of `main`.
///
/// Errors that are not a [`CliError`] (bootstrap failures) exit with 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
