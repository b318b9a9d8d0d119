//! Core domain for researchain.
//!
//! Holds the invocation model, branch-name derivation, the port traits that
//! the process and hosting adapters implement, and [`RepoOps`], the service
//! that runs each command's fixed sequence of steps.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::OpsConfig;
pub use domain::{
    BranchName, Credential, EXCLUSION_LIST_FILE, EXCLUSION_PATTERNS, MAX_COMMENT_CHARS,
    Operation, OperationKind, RepoDescriptor, RequestFlags, TOKEN_ENV_VAR, parse_date,
    repo_name_from_dir, sanitize_comment,
};
pub use ports::{
    CapturedOutput, CommandLine, CommandRunner, CommandStatus, CoreError, HostingClientPort,
    HostingError, NewRepository, ProcessError,
};
pub use services::{DEPENDENCY_MANIFEST_FILE, InitReport, RepoOps};

// Silence unused dev-dependency warnings for crates only used by some tests
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
