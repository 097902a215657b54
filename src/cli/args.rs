//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{ChainSettings, FetchSettings};
use crate::pipeline::TailHandler;

/// promise-shop - async pipeline exercises.
#[derive(Debug, Parser)]
#[command(name = "promise-shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .promise-shop/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch JSON over HTTP and print it
    Fetch(FetchArgs),

    /// Run the iterate chain with a tail rejection handler
    Chain(ChainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FetchArgs {
    /// URL to fetch (default http://localhost:1337)
    #[arg(long, env = "PROMISE_SHOP_URL")]
    pub url: Option<String>,

    /// Pretty-print the fetched JSON
    #[arg(long)]
    pub pretty: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl FetchArgs {
    /// Apply command-line overrides on top of configured settings.
    pub fn apply(&self, settings: &mut FetchSettings) {
        if let Some(url) = &self.url {
            settings.url = url.clone();
        }
        if self.pretty {
            settings.pretty = true;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = Some(timeout);
        }
    }
}

/// Arguments for the `chain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ChainArgs {
    /// Value handed to the first step
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Total number of steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Number of iterations before the throwing step
    #[arg(long, conflicts_with = "no_fail")]
    pub fail_after: Option<usize>,

    /// Run every step without a throwing one
    #[arg(long)]
    pub no_fail: bool,

    /// Message carried by the thrown error
    #[arg(long)]
    pub message: Option<String>,

    /// Use a rejection handler that throws again (the rejection escapes)
    #[arg(long, conflicts_with = "no_handler")]
    pub rethrow: bool,

    /// Leave the chain without a rejection handler (the rejection escapes)
    #[arg(long)]
    pub no_handler: bool,
}

impl ChainArgs {
    /// Apply command-line overrides on top of configured settings.
    pub fn apply(&self, settings: &mut ChainSettings) {
        if let Some(start) = self.start {
            settings.start = start;
        }
        if let Some(steps) = self.steps {
            settings.steps = steps;
        }
        if self.no_fail {
            settings.fail_after = None;
        } else if let Some(fail_after) = self.fail_after {
            settings.fail_after = Some(fail_after);
        }
        if let Some(message) = &self.message {
            settings.message = message.clone();
        }
    }

    /// The handler to put at the tail of the chain.
    pub fn tail(&self) -> TailHandler {
        if self.rethrow {
            TailHandler::Rethrow
        } else if self.no_handler {
            TailHandler::None
        } else {
            TailHandler::Log
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
