//! The `chain` command.

use async_trait::async_trait;

use crate::config::ChainSettings;
use crate::error::Result;
use crate::pipeline::{iteration_chain, TailHandler};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs the iterate chain.
///
/// A rejection absorbed by the tail handler is the expected outcome and
/// counts as success. A rejection that escapes is returned as
/// [`ShopError::Unhandled`](crate::ShopError::Unhandled).
pub struct ChainCommand {
    settings: ChainSettings,
    tail: TailHandler,
}

impl ChainCommand {
    /// Create a new chain command.
    pub fn new(settings: ChainSettings, tail: TailHandler) -> Self {
        Self { settings, tail }
    }
}

#[async_trait(?Send)]
impl Command for ChainCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let chain = iteration_chain(&self.settings, self.tail)?;
        let run = chain.run(ui).await?;
        tracing::debug!("Chain {}", run.state);
        Ok(CommandResult::success())
    }
}
