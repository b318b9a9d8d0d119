//! Init command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the init command.
///
/// Creates a public repository named after the working directory, writes
/// the exclusion list, makes the initial commit and pushes it.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let report = ctx
        .ops()
        .init(ctx.credential())
        .await
        .map_err(CliError::from)?;

    println!(".gitignore created with patterns to exclude images and checkpoints.");
    println!(
        "Repository '{}/{}' initialized and pushed to GitHub.",
        report.repo.owner, report.repo.name
    );
    Ok(())
}
