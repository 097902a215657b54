//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use async_trait::async_trait;

use crate::cli::args::{Cli, Commands};
use crate::config::{validate, ShopConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
#[async_trait(?Send)]
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ShopConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the loaded configuration.
    pub fn new(config: ShopConfig) -> Self {
        Self { config }
    }

    /// Get the configuration commands start from.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Command-line overrides are applied on top of the configuration and
    /// the result is validated before the command runs.
    pub async fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.config.clone();

        match &cli.command {
            Commands::Fetch(args) => {
                args.apply(&mut config.fetch);
                validate(&config)?;
                let cmd = super::fetch::FetchCommand::new(config.fetch);
                cmd.execute(ui).await
            }
            Commands::Chain(args) => {
                args.apply(&mut config.chain);
                validate(&config)?;
                let cmd = super::chain::ChainCommand::new(config.chain, args.tail());
                cmd.execute(ui).await
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui).await
            }
        }
    }
}
