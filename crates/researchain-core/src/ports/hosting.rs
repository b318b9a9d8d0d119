//! Port for the repository hosting provider.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Credential, RepoDescriptor};

/// Errors from hosting-provider operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum HostingError {
    /// The API answered with a non-success status.
    #[error("hosting API responded with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Network or connectivity error.
    #[error("network error: {message}")]
    Network { message: String },

    /// The API answered successfully but the body was not understood.
    #[error("invalid API response: {message}")]
    InvalidResponse { message: String },

    /// Client misconfiguration (bad base URL).
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl HostingError {
    /// HTTP status of a rejected request, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Request to create a repository owned by the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepository {
    pub name: String,
    pub private: bool,
}

impl NewRepository {
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: false,
        }
    }
}

/// Port for the hosting provider's REST API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostingClientPort: Send + Sync {
    /// Create a repository and return its owner/name pair.
    async fn create_repository(
        &self,
        request: &NewRepository,
        credential: &Credential,
    ) -> Result<RepoDescriptor, HostingError>;
}
