//! Subcommands and their translation into core operations.

use clap::{Subcommand, ValueEnum};
use researchain_core::{CoreError, Operation, OperationKind, RequestFlags};

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a public GitHub repository named after this directory and push to it
    Init,

    /// Commit all changes to a new dated branch and push it
    Update {
        /// Commit message and branch descriptor
        #[arg(long)]
        comment: String,
        /// Date for the branch name in YYYYMMDD format (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Fetch and check out a branch
    Change {
        /// Branch name to check out
        branch: String,
    },

    /// Write the installed packages to requirements.txt
    #[command(name = "auto_set", alias = "auto-set")]
    AutoSet,

    /// Run a repository function by name
    Git {
        /// Function to run
        #[arg(long = "git-func", alias = "git_func", value_enum)]
        git_func: GitFunc,
        /// Commit comment for update_repo, branch name for change_branch
        #[arg(long)]
        comment: Option<String>,
        /// Date for update_repo in YYYYMMDD format
        #[arg(long)]
        date: Option<String>,
    },
}

/// Function names accepted by `git --git-func`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GitFunc {
    #[value(name = "init_repo")]
    InitRepo,
    #[value(name = "update_repo")]
    UpdateRepo,
    #[value(name = "change_branch")]
    ChangeBranch,
    #[value(name = "auto_set")]
    AutoSet,
}

impl From<GitFunc> for OperationKind {
    fn from(func: GitFunc) -> Self {
        match func {
            GitFunc::InitRepo => Self::Init,
            GitFunc::UpdateRepo => Self::Update,
            GitFunc::ChangeBranch => Self::Change,
            GitFunc::AutoSet => Self::AutoSet,
        }
    }
}

impl Commands {
    /// Validate the parsed arguments into an [`Operation`].
    ///
    /// Performs no I/O.
    pub fn into_operation(self) -> Result<Operation, CoreError> {
        let (kind, flags) = match self {
            Self::Init => (OperationKind::Init, RequestFlags::default()),
            Self::Update { comment, date } => (
                OperationKind::Update,
                RequestFlags {
                    comment: Some(comment),
                    date,
                    branch: None,
                },
            ),
            Self::Change { branch } => (
                OperationKind::Change,
                RequestFlags {
                    branch: Some(branch),
                    ..RequestFlags::default()
                },
            ),
            Self::AutoSet => (OperationKind::AutoSet, RequestFlags::default()),
            Self::Git {
                git_func,
                comment,
                date,
            } => {
                let kind = OperationKind::from(git_func);
                let flags = if kind == OperationKind::Change {
                    RequestFlags {
                        branch: comment,
                        date,
                        comment: None,
                    }
                } else {
                    RequestFlags {
                        comment,
                        date,
                        branch: None,
                    }
                };
                (kind, flags)
            }
        };
        Operation::from_kind(kind, flags)
    }
}
