//! Command handlers that delegate to `RepoOps`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Call the matching `RepoOps` method
//!   2. Map `CoreError` into `CliError`
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain step sequencing; that lives in the core.

pub mod auto_set;
pub mod change;
pub mod init;
pub mod update;

use anyhow::Result;
use researchain_core::Operation;
use tracing::debug;

use crate::bootstrap::CliContext;

/// Route a validated operation to its handler.
pub async fn dispatch(ctx: &CliContext, operation: Operation) -> Result<()> {
    debug!(command = %operation.kind(), "Dispatching");
    match operation {
        Operation::Init => init::execute(ctx).await,
        Operation::Update { comment, date } => update::execute(ctx, &comment, date),
        Operation::Change { branch } => change::execute(ctx, &branch),
        Operation::AutoSet => auto_set::execute(ctx),
    }
}
