//! GitHub client.

use tracing::debug;
use url::Url;

use crate::config::GithubClientConfig;
use crate::error::{GithubError, GithubResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{CreateRepoPayload, CreatedRepo};

/// Status GitHub answers a successful repository creation with.
const CREATED: u16 = 201;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default GitHub client using the reqwest HTTP backend.
pub type DefaultGithubClient = GithubClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the GitHub REST API, generic over its HTTP backend.
///
/// Use `DefaultGithubClient` for production code.
pub struct GithubClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultGithubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &GithubClientConfig) -> GithubResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> GithubClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> GithubResult<Self> {
        Ok(Self {
            backend,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a repository owned by the authenticated user.
    ///
    /// Anything but `201 Created` is returned as
    /// [`GithubError::ApiRequestFailed`] with the response body.
    pub async fn create_user_repo(
        &self,
        name: &str,
        private: bool,
        token: &str,
    ) -> GithubResult<CreatedRepo> {
        let url = self.base_url.join("user/repos")?;
        let payload = serde_json::to_value(CreateRepoPayload { name, private })?;

        debug!(url = %url, repo = name, "Creating repository");
        let reply = self.backend.post_json(&url, token, &payload).await?;

        if reply.status != CREATED {
            return Err(GithubError::ApiRequestFailed {
                status: reply.status,
                url: url.to_string(),
                body: reply.body,
            });
        }

        let created: CreatedRepo =
            serde_json::from_str(&reply.body).map_err(|e| GithubError::InvalidResponse {
                message: format!("cannot read created repository: {e}"),
            })?;
        debug!(
            owner = %created.owner.login,
            html_url = created.html_url.as_deref().unwrap_or("-"),
            "Repository created"
        );
        Ok(created)
    }
}

/// Parse the API root, making sure relative joins keep its full path.
fn parse_base_url(raw: &str) -> GithubResult<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Ok(Url::parse(&normalized)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn created_json() -> serde_json::Value {
        json!({
            "name": "myproj",
            "owner": {"login": "octocat"},
            "html_url": "https://github.com/octocat/myproj"
        })
    }

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultGithubClient::new(&GithubClientConfig::new()).is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = GithubClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            DefaultGithubClient::new(&config),
            Err(GithubError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_base_url_keeps_path() {
        let url = parse_base_url("https://ghe.example.com/api/v3").unwrap();
        assert_eq!(
            url.join("user/repos").unwrap().as_str(),
            "https://ghe.example.com/api/v3/user/repos"
        );
    }

    #[tokio::test]
    async fn test_create_posts_name_and_visibility() {
        let backend = FakeBackend::replying(201, created_json());
        let client = GithubClient::with_backend("https://api.github.com", backend.clone()).unwrap();

        let created = client.create_user_repo("myproj", false, "tok").await.unwrap();
        assert_eq!(created.owner.login, "octocat");

        let sent = backend.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://api.github.com/user/repos");
        assert_eq!(sent[0].token, "tok");
        assert_eq!(sent[0].body, json!({"name": "myproj", "private": false}));
    }

    #[tokio::test]
    async fn test_non_created_status_is_error_with_body() {
        let backend = FakeBackend::replying(
            422,
            json!({"message": "Repository creation failed.", "errors": [{"message": "name already exists on this account"}]}),
        );
        let client = GithubClient::with_backend("https://api.github.com", backend).unwrap();

        let err = client.create_user_repo("myproj", false, "tok").await.unwrap_err();
        match err {
            GithubError::ApiRequestFailed { status, body, .. } => {
                assert_eq!(status, 422);
                assert!(body.contains("name already exists"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ok_status_is_not_created() {
        let backend = FakeBackend::replying(200, created_json());
        let client = GithubClient::with_backend("https://api.github.com", backend).unwrap();

        let err = client.create_user_repo("myproj", false, "tok").await.unwrap_err();
        assert!(matches!(err, GithubError::ApiRequestFailed { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_missing_owner_is_invalid_response() {
        let backend = FakeBackend::replying(201, json!({"name": "myproj"}));
        let client = GithubClient::with_backend("https://api.github.com", backend).unwrap();

        let err = client.create_user_repo("myproj", false, "tok").await.unwrap_err();
        assert!(matches!(err, GithubError::InvalidResponse { .. }));
    }
}
