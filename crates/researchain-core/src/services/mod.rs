//! Services composed over the ports.

mod repo_ops;

pub use repo_ops::{DEPENDENCY_MANIFEST_FILE, InitReport, RepoOps};
