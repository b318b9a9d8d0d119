//! Change command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the change command.
pub fn execute(ctx: &CliContext, branch: &str) -> Result<()> {
    ctx.ops().change(branch).map_err(CliError::from)?;
    println!("Switched to branch '{branch}'.");
    Ok(())
}
