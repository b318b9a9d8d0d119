//! Internal error types for GitHub operations.
//!
//! These errors are internal to `researchain-github` and are mapped to the
//! core `HostingError` at the port boundary.

use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;

/// Errors related to GitHub API operations.
#[derive(Debug, Error)]
pub enum GithubError {
    /// API request failed with an unexpected HTTP status.
    #[error("GitHub API request to {url} failed with status {status}: {body}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Raw response body
        body: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from GitHub API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = GithubError::ApiRequestFailed {
            status: 422,
            url: "https://api.github.com/user/repos".to_string(),
            body: r#"{"message":"Repository creation failed."}"#.to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("api.github.com"));
        assert!(msg.contains("Repository creation failed."));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = GithubError::InvalidResponse {
            message: "missing owner".to_string(),
        };
        assert!(error.to_string().contains("missing owner"));
    }
}
