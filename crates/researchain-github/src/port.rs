//! Port trait implementation for `GithubClient`.

use async_trait::async_trait;
use researchain_core::{Credential, HostingClientPort, HostingError, NewRepository, RepoDescriptor};

use crate::client::GithubClient;
use crate::error::GithubError;
use crate::http::HttpBackend;

/// Convert internal `GithubError` to core `HostingError`.
fn map_error(err: GithubError) -> HostingError {
    match err {
        GithubError::ApiRequestFailed { status, body, .. } => HostingError::Status { status, body },
        GithubError::InvalidResponse { message } => HostingError::InvalidResponse { message },
        GithubError::Network(e) => HostingError::Network {
            message: e.to_string(),
        },
        GithubError::InvalidUrl(e) => HostingError::Configuration {
            message: e.to_string(),
        },
        GithubError::JsonParse(e) => HostingError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> HostingClientPort for GithubClient<B> {
    async fn create_repository(
        &self,
        request: &NewRepository,
        credential: &Credential,
    ) -> Result<RepoDescriptor, HostingError> {
        let created = self
            .create_user_repo(&request.name, request.private, credential.expose())
            .await
            .map_err(map_error)?;
        Ok(RepoDescriptor::new(created.owner.login, created.name))
    }
}
