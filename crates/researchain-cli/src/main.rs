//! CLI entry point - the composition root.
//!
//! Arguments are validated into an `Operation` before anything else runs;
//! only then is the context bootstrapped and the operation dispatched.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use researchain_cli::{Cli, CliConfig, CliError, bootstrap, exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load `.env` from the working directory. Variables already set win.
fn load_dotenv(dir: Option<&Path>) {
    match dir {
        Some(dir) => {
            dotenvy::from_path(dir.join(".env")).ok();
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Validate before any I/O
    let operation = command.into_operation().map_err(CliError::from)?;

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_env(cli.dir)?;
    let ctx = bootstrap(config)?;

    handlers::dispatch(&ctx, operation).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    load_dotenv(cli.dir.as_deref());
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
