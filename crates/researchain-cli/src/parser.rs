//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for researchain.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Debug, Parser)]
#[command(name = "researchain")]
#[command(about = "Automate GitHub repository chores for research projects")]
#[command(version)]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
