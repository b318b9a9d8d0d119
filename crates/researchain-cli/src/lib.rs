//! Command-line adapter for researchain.
//!
//! Parsing lives in [`parser`] and [`commands`], wiring in [`bootstrap`],
//! and the per-command output in [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for crates only the integration tests use
#[cfg(test)]
use tempfile as _;

// Dependencies used only by main.rs
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, GitFunc};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
