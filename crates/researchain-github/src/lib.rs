//! GitHub REST client for researchain.
//!
//! Implements the core [`researchain_core::HostingClientPort`] on top of
//! `reqwest`. The HTTP layer sits behind an internal backend trait so the
//! client logic can be tested without a network.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultGithubClient is meant to be used
// through the HostingClientPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultGithubClient;

// Configuration
pub use config::{DEFAULT_API_URL, GithubClientConfig};

// Errors (for constructor failures)
pub use error::GithubError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
