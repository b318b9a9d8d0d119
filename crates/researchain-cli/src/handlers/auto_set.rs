//! Auto-set command handler.
//!
//! Snapshots the packages installed in the active environment.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the auto_set command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let manifest = ctx.ops().auto_set().map_err(CliError::from)?;
    let name = manifest
        .file_name()
        .map_or_else(|| manifest.display().to_string(), |n| n.to_string_lossy().into_owned());
    println!("{name} generated.");
    Ok(())
}
