//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Process runner (via researchain-runtime)
//! - GitHub client (via researchain-github)
//! - Repository operations (via researchain-core)
//!
//! Ambient configuration (environment variables, the access token) is read
//! here and handed to the core explicitly.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use researchain_core::config::{DEFAULT_GIT_HOST, DEFAULT_GIT_PROGRAM, DEFAULT_PIP_PROGRAM};
use researchain_core::{Credential, OpsConfig, RepoOps};
use researchain_github::{DEFAULT_API_URL, DefaultGithubClient, GithubClientConfig};
use researchain_runtime::SystemCommandRunner;

/// Overrides the GitHub REST API root.
pub const API_URL_ENV: &str = "RESEARCHAIN_GITHUB_API";
/// Overrides the host placed in push URLs.
pub const GIT_HOST_ENV: &str = "RESEARCHAIN_GIT_HOST";
/// Overrides the version-control binary.
pub const GIT_PROGRAM_ENV: &str = "RESEARCHAIN_GIT";
/// Overrides the package lister binary.
pub const PIP_PROGRAM_ENV: &str = "RESEARCHAIN_PIP";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory every command runs in.
    pub workdir: PathBuf,
    /// GitHub REST API root.
    pub api_url: String,
    /// Host placed in push URLs.
    pub git_host: String,
    /// Version-control binary.
    pub git_program: String,
    /// Package lister binary.
    pub pip_program: String,
    /// Access token, if one is configured.
    pub credential: Option<Credential>,
    /// Echo each external command before running it.
    pub echo: bool,
}

impl CliConfig {
    /// Build the configuration from the process environment.
    ///
    /// `dir` overrides the working directory; otherwise the current
    /// directory is used.
    pub fn from_env(dir: Option<PathBuf>) -> Result<Self> {
        let workdir = match dir {
            Some(dir) => dir
                .canonicalize()
                .with_context(|| format!("Cannot use directory '{}'", dir.display()))?,
            None => std::env::current_dir().context("Cannot determine the current directory")?,
        };

        Ok(Self {
            workdir,
            api_url: env_or(API_URL_ENV, DEFAULT_API_URL),
            git_host: env_or(GIT_HOST_ENV, DEFAULT_GIT_HOST),
            git_program: env_or(GIT_PROGRAM_ENV, DEFAULT_GIT_PROGRAM),
            pip_program: env_or(PIP_PROGRAM_ENV, DEFAULT_PIP_PROGRAM),
            credential: Credential::from_env(),
            echo: true,
        })
    }

    fn ops_config(&self) -> OpsConfig {
        OpsConfig::new(&self.workdir)
            .with_git_program(&self.git_program)
            .with_pip_program(&self.pip_program)
            .with_git_host(&self.git_host)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Repository operations.
    pub ops: RepoOps,
    /// Access token handed to `init`.
    pub credential: Option<Credential>,
}

impl CliContext {
    pub const fn ops(&self) -> &RepoOps {
        &self.ops
    }

    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

/// Bootstrap the CLI application.
///
/// Creates the process runner and the GitHub client and assembles
/// [`RepoOps`] over them.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let runner = Arc::new(SystemCommandRunner::new().with_echo(config.echo));

    let github_config = GithubClientConfig::new().with_base_url(config.api_url.as_str());
    let hosting = Arc::new(
        DefaultGithubClient::new(&github_config).context("Failed to create the GitHub client")?,
    );

    let ops = RepoOps::new(runner, hosting, config.ops_config());
    Ok(bootstrap_with(ops, config.credential))
}

/// Bootstrap with pre-built operations (for testing).
pub const fn bootstrap_with(ops: RepoOps, credential: Option<Credential>) -> CliContext {
    CliContext { ops, credential }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(
            env_or("RESEARCHAIN_TEST_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_ops_config_carries_overrides() {
        let config = CliConfig {
            workdir: PathBuf::from("/tmp/myproj"),
            api_url: DEFAULT_API_URL.to_string(),
            git_host: "git.example.com".to_string(),
            git_program: "git2".to_string(),
            pip_program: "pip3".to_string(),
            credential: None,
            echo: false,
        };
        let ops = config.ops_config();
        assert_eq!(ops.workdir, PathBuf::from("/tmp/myproj"));
        assert_eq!(ops.git_host, "git.example.com");
        assert_eq!(ops.git_program, "git2");
        assert_eq!(ops.pip_program, "pip3");
    }

    #[test]
    fn test_bootstrap_wires_context() {
        let dir = std::env::temp_dir();
        let config = CliConfig {
            workdir: dir.clone(),
            api_url: DEFAULT_API_URL.to_string(),
            git_host: DEFAULT_GIT_HOST.to_string(),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            pip_program: DEFAULT_PIP_PROGRAM.to_string(),
            credential: Credential::new("tok"),
            echo: false,
        };
        let ctx = bootstrap(config).unwrap();
        assert_eq!(ctx.ops().config().workdir, dir);
        assert!(ctx.credential().is_some());
    }

    #[test]
    fn test_bootstrap_rejects_bad_api_url() {
        let config = CliConfig {
            workdir: std::env::temp_dir(),
            api_url: "not a url".to_string(),
            git_host: DEFAULT_GIT_HOST.to_string(),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            pip_program: DEFAULT_PIP_PROGRAM.to_string(),
            credential: None,
            echo: false,
        };
        assert!(bootstrap(config).is_err());
    }
}
