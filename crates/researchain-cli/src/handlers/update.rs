//! Update command handler.

use anyhow::Result;
use chrono::NaiveDate;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the update command.
///
/// Commits every change to `update-<date>-<comment>` and pushes that
/// branch. `date` defaults to today.
pub fn execute(ctx: &CliContext, comment: &str, date: Option<NaiveDate>) -> Result<()> {
    let branch = ctx.ops().update(comment, date).map_err(CliError::from)?;
    println!("Changes committed to branch '{branch}'.");
    Ok(())
}
