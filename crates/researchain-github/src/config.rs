//! Public configuration for the GitHub client.

use std::time::Duration;

/// Default REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for the GitHub client.
///
/// # Example
///
/// ```
/// use researchain_github::GithubClientConfig;
/// use std::time::Duration;
///
/// let config = GithubClientConfig::new()
///     .with_base_url("https://ghe.example.com/api/v3")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Base URL of the REST API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests (GitHub rejects requests without one)
    pub(crate) user_agent: String,
    /// Request timeout; `None` waits as long as the server does
    pub(crate) timeout: Option<Duration>,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("researchain/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl GithubClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the REST API.
    ///
    /// Defaults to `https://api.github.com`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    ///
    /// Unset by default: a request that has reached GitHub may still create
    /// the repository, so the client never abandons it on its own.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
