//! Domain types for researchain.
//!
//! Everything here is pure: no process spawning and no network access.

mod branch;
mod credential;
mod ignore;
mod operation;
mod repo;

pub use branch::{BranchName, MAX_COMMENT_CHARS, sanitize_comment};
pub use credential::{Credential, TOKEN_ENV_VAR};
pub use ignore::{EXCLUSION_LIST_FILE, EXCLUSION_PATTERNS, render_exclusion_list};
pub use operation::{Operation, OperationKind, RequestFlags, parse_date};
pub use repo::{RepoDescriptor, repo_name_from_dir};
