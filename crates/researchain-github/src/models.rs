//! Wire types for the GitHub REST API.

use serde::{Deserialize, Serialize};

/// Body of `POST /user/repos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepoPayload<'a> {
    pub name: &'a str,
    pub private: bool,
}

/// The parts of the repository object we read back.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRepo {
    pub name: String,
    pub owner: RepoOwner,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}
