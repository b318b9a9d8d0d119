//! Settings for [`crate::RepoOps`].
//!
//! Defaults match a stock GitHub setup; every field can be overridden with
//! the builder methods.

use std::path::PathBuf;

/// Default version-control binary.
pub const DEFAULT_GIT_PROGRAM: &str = "git";
/// Default package lister used by `auto_set`.
pub const DEFAULT_PIP_PROGRAM: &str = "pip";
/// Default host used in push URLs.
pub const DEFAULT_GIT_HOST: &str = "github.com";

/// Configuration for repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpsConfig {
    /// Working directory every command runs in.
    pub workdir: PathBuf,
    /// Version-control binary.
    pub git_program: String,
    /// Package lister binary (`<pip> freeze`).
    pub pip_program: String,
    /// Host placed in the push URL built by `init`.
    pub git_host: String,
    /// Remote name used for fetch and push.
    pub remote: String,
    /// Branch the initial commit is pushed to.
    pub default_branch: String,
}

impl OpsConfig {
    /// Create a configuration with default programs for `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            pip_program: DEFAULT_PIP_PROGRAM.to_string(),
            git_host: DEFAULT_GIT_HOST.to_string(),
            remote: "origin".to_string(),
            default_branch: "main".to_string(),
        }
    }

    #[must_use]
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    #[must_use]
    pub fn with_pip_program(mut self, program: impl Into<String>) -> Self {
        self.pip_program = program.into();
        self
    }

    #[must_use]
    pub fn with_git_host(mut self, host: impl Into<String>) -> Self {
        self.git_host = host.into();
        self
    }
}
