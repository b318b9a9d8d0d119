//! Process runtime for researchain.
//!
//! Implements [`researchain_core::CommandRunner`] by spawning real
//! processes with `std::process::Command`.

#![deny(unused_crate_dependencies)]

mod process;

pub use process::SystemCommandRunner;

#[cfg(test)]
use tempfile as _;
