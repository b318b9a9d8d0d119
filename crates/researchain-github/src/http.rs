//! HTTP backend abstraction for the GitHub API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. Requests are sent once; the
//! backend reports the status and body and leaves interpretation to the
//! client.

use crate::config::GithubClientConfig;
use crate::error::GithubResult;
use async_trait::async_trait;
use url::Url;

/// Media type GitHub recommends for REST requests.
const ACCEPT: &str = "application/vnd.github+json";
/// REST API version pinned in every request.
const API_VERSION: &str = "2022-11-28";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can post JSON to the API.
///
/// This is an implementation detail - external code should use the
/// `HostingClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` as JSON to `url`, authenticated with `token`.
    async fn post_json(
        &self,
        url: &Url,
        token: &str,
        body: &serde_json::Value,
    ) -> GithubResult<HttpReply>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GithubClientConfig) -> GithubResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        token: &str,
        body: &serde_json::Value,
    ) -> GithubResult<HttpReply> {
        let response = self
            .client
            .post(url.as_str())
            .header("Authorization", format!("token {token}"))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A request captured by the fake backend.
    #[derive(Debug, Clone)]
    pub struct SentRequest {
        pub url: String,
        pub token: String,
        pub body: serde_json::Value,
    }

    /// A fake HTTP backend that returns one canned reply and records requests.
    #[derive(Clone)]
    pub struct FakeBackend {
        reply: HttpReply,
        sent: Arc<Mutex<Vec<SentRequest>>>,
    }

    impl FakeBackend {
        pub fn replying(status: u16, body: serde_json::Value) -> Self {
            Self::replying_raw(status, body.to_string())
        }

        pub fn replying_raw(status: u16, body: impl Into<String>) -> Self {
            Self {
                reply: HttpReply {
                    status,
                    body: body.into(),
                },
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn sent(&self) -> Vec<SentRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json(
            &self,
            url: &Url,
            token: &str,
            body: &serde_json::Value,
        ) -> GithubResult<HttpReply> {
            self.sent.lock().unwrap().push(SentRequest {
                url: url.to_string(),
                token: token.to_string(),
                body: body.clone(),
            });
            Ok(self.reply.clone())
        }
    }
}
