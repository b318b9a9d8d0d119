//! Repository operations: the fixed step sequences behind each command.
//!
//! Every sequence is strictly ordered and stops at the first failing step.
//! Nothing is retried and nothing already done is rolled back; in particular
//! a repository created by `init` stays on the host when a later local step
//! fails.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::OpsConfig;
use crate::domain::{
    BranchName, Credential, EXCLUSION_LIST_FILE, RepoDescriptor, TOKEN_ENV_VAR,
    render_exclusion_list, repo_name_from_dir,
};
use crate::ports::{CommandLine, CommandRunner, CoreError, HostingClientPort, NewRepository};

/// File name of the dependency manifest written by `auto_set`.
pub const DEPENDENCY_MANIFEST_FILE: &str = "requirements.txt";

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Result of a successful `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// The repository created on the host.
    pub repo: RepoDescriptor,
    /// Path of the exclusion list that was written.
    pub exclusion_list: PathBuf,
}

/// Runs the four repository operations against injected ports.
pub struct RepoOps {
    runner: Arc<dyn CommandRunner>,
    hosting: Arc<dyn HostingClientPort>,
    config: OpsConfig,
    today: fn() -> NaiveDate,
}

impl RepoOps {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        hosting: Arc<dyn HostingClientPort>,
        config: OpsConfig,
    ) -> Self {
        Self {
            runner,
            hosting,
            config,
            today: local_today,
        }
    }

    /// Replace the clock used when `update` gets no explicit date.
    #[must_use]
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub const fn config(&self) -> &OpsConfig {
        &self.config
    }

    /// Create the hosted repository and push the working directory to it.
    ///
    /// The credential is checked before anything touches the disk. The
    /// exclusion list is written before the API call, and no local
    /// repository state changes unless the API call succeeds.
    pub async fn init(&self, credential: Option<&Credential>) -> Result<InitReport, CoreError> {
        let credential = credential.ok_or_else(|| {
            CoreError::Configuration(format!(
                "{TOKEN_ENV_VAR} environment variable is not set; \
                 export {TOKEN_ENV_VAR}=<your token>"
            ))
        })?;

        let name = repo_name_from_dir(&self.config.workdir)?;

        let exclusion_list = self.config.workdir.join(EXCLUSION_LIST_FILE);
        std::fs::write(&exclusion_list, render_exclusion_list()).map_err(|e| {
            CoreError::io(format!("writing {}", exclusion_list.display()), e)
        })?;
        info!(path = %exclusion_list.display(), "Wrote exclusion list");

        let repo = self
            .hosting
            .create_repository(&NewRepository::public(&name), credential)
            .await
            .inspect_err(|e| warn!(repo = %name, error = %e, "Repository creation failed"))?;
        info!(owner = %repo.owner, repo = %repo.name, "Created hosted repository");

        let push_url = repo.push_url(&self.config.git_host, credential);
        let remote = self.config.remote.as_str();
        let branch = self.config.default_branch.as_str();

        self.run_step(self.git("init").arg("init"))?;
        self.run_step(self.git("stage").args(["add", "."]))?;
        self.run_step(
            self.git("initial commit")
                .args(["commit", "-m", INITIAL_COMMIT_MESSAGE]),
        )?;
        self.run_step(self.git("rename branch").args(["branch", "-M", branch]))?;
        self.run_step(
            self.git("add remote")
                .args(["remote", "add", remote])
                .secret_arg(push_url),
        )?;
        self.run_step(self.git("push").args(["push", "-u", remote, branch]))?;

        Ok(InitReport {
            repo,
            exclusion_list,
        })
    }

    /// Commit all changes to a fresh dated branch and push it.
    ///
    /// Fails with [`CoreError::BranchExists`] when the derived branch is
    /// already present locally or on the remote after fetching.
    pub fn update(&self, comment: &str, date: Option<NaiveDate>) -> Result<BranchName, CoreError> {
        let date = date.unwrap_or_else(self.today);
        let branch = BranchName::for_update(comment, date)?;
        debug!(branch = %branch, "Derived update branch");

        self.check_ref_format(&branch)?;

        let remote = self.config.remote.as_str();
        self.run_step(self.git("fetch").args(["fetch", remote]))?;
        self.ensure_branch_is_new(&branch)?;

        self.run_step(
            self.git("create branch")
                .args(["checkout", "-b", branch.as_str()]),
        )?;
        self.run_step(self.git("stage").args(["add", "."]))?;
        self.run_step(self.git("commit").args(["commit", "-m", comment]))?;
        self.run_step(self.git("push").args(["push", remote, branch.as_str()]))?;

        Ok(branch)
    }

    /// Fetch and check out `branch` as given.
    pub fn change(&self, branch: &str) -> Result<(), CoreError> {
        if branch.trim().is_empty() {
            return Err(CoreError::Validation("branch must not be empty".to_string()));
        }
        if branch.starts_with('-') {
            return Err(CoreError::Validation(format!(
                "'{branch}' is not a valid branch name"
            )));
        }

        self.run_step(self.git("fetch").args(["fetch", self.config.remote.as_str()]))?;
        self.run_step(self.git("checkout").args(["checkout", branch]))?;
        Ok(())
    }

    /// Snapshot the installed packages into the dependency manifest.
    pub fn auto_set(&self) -> Result<PathBuf, CoreError> {
        let command = CommandLine::new("freeze", self.config.pip_program.as_str())
            .arg("freeze")
            .current_dir(&self.config.workdir);

        let output = self.runner.capture(&command)?;
        if !output.status.success() {
            return Err(command.failed(output.status).into());
        }

        let manifest = self.config.workdir.join(DEPENDENCY_MANIFEST_FILE);
        std::fs::write(&manifest, output.stdout)
            .map_err(|e| CoreError::io(format!("writing {}", manifest.display()), e))?;
        info!(path = %manifest.display(), "Wrote dependency manifest");

        Ok(manifest)
    }

    fn git(&self, step: &'static str) -> CommandLine {
        CommandLine::new(step, self.config.git_program.as_str()).current_dir(&self.config.workdir)
    }

    fn run_step(&self, command: CommandLine) -> Result<(), CoreError> {
        let status = self.runner.run(&command)?;
        if !status.success() {
            warn!(step = command.step(), code = ?status.code, "Step failed");
            return Err(command.failed(status).into());
        }
        Ok(())
    }

    fn check_ref_format(&self, branch: &BranchName) -> Result<(), CoreError> {
        let command = self
            .git("check branch name")
            .args(["check-ref-format", "--branch", branch.as_str()]);
        let output = self.runner.capture(&command)?;
        if !output.status.success() {
            return Err(CoreError::Validation(format!(
                "'{branch}' is not a valid branch name"
            )));
        }
        Ok(())
    }

    fn ensure_branch_is_new(&self, branch: &BranchName) -> Result<(), CoreError> {
        let remote_ref = format!("{}/{}", self.config.remote, branch);
        let probes = [
            self.git("check local branches")
                .args(["branch", "--list", branch.as_str()]),
            self.git("check remote branches")
                .args(["branch", "--remotes", "--list", remote_ref.as_str()]),
        ];

        for probe in probes {
            let output = self.runner.capture(&probe)?;
            if !output.status.success() {
                return Err(probe.failed(output.status).into());
            }
            if !output.is_blank() {
                return Err(CoreError::BranchExists(branch.to_string()));
            }
        }
        Ok(())
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
