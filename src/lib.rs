//! promise-shop - asynchronous pipeline exercises.
//!
//! Two independent exercises built on one idea: a linear asynchronous
//! pipeline with a single error channel.
//!
//! - `fetch` reads JSON from an HTTP endpoint and prints it; one tail
//!   handler reports any failure along the way.
//! - `chain` runs ten steps in order, one of which throws; the tail
//!   rejection handler absorbs the error and nothing after it runs.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP JSON fetching
//! - [`pipeline`] - Promises, steps, chains and rejection handlers
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use promise_shop::config::ChainSettings;
//! use promise_shop::pipeline::{iteration_chain, TailHandler};
//! use promise_shop::ui::MockUI;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let chain = iteration_chain(&ChainSettings::default(), TailHandler::Log).unwrap();
//! let mut ui = MockUI::new();
//! chain.run(&mut ui).await.unwrap();
//! assert_eq!(ui.messages(), ["1", "2", "3", "4", "5", "[Error: OH NOES]"]);
//! # });
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod ui;

pub use error::{Result, ShopError};
