//! Command-line interface for promise-shop.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{ChainArgs, Cli, Commands, CompletionsArgs, FetchArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
