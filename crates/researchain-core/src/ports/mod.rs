//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `std::process` types in any signature
//! - Secrets cross the boundary only as [`crate::Credential`] or as secret
//!   [`CommandLine`] arguments

pub mod command_runner;
pub mod hosting;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use thiserror::Error;

pub use command_runner::{CapturedOutput, CommandLine, CommandRunner, CommandStatus};
pub use hosting::{HostingClientPort, HostingError, NewRepository};

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started at all.
    #[error("Step '{step}' could not start '{program}': {reason}")]
    SpawnFailed {
        step: String,
        program: String,
        reason: String,
    },

    /// The program ran and exited unsuccessfully.
    #[error("Step '{step}' failed ({})", describe_exit(.code))]
    StepFailed {
        step: String,
        /// Exit code, or `None` when the process was terminated by a signal.
        code: Option<i32>,
    },
}

impl ProcessError {
    /// Exit code of the failed child, when there is one.
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::SpawnFailed { .. } => None,
            Self::StepFailed { code, .. } => *code,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |code| format!("exit status {code}"),
    )
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing input. Raised before any side effect.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The derived update branch already exists locally or on the remote.
    #[error("Validation error: branch '{0}' already exists locally or on the remote")]
    BranchExists(String),

    /// A required setting or credential is absent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The hosting API rejected or failed a request.
    #[error("Remote error: {0}")]
    Remote(#[from] HostingError),

    /// An external command failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// A local file could not be written.
    #[error("IO error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
