//! Linear asynchronous pipelines with a single error channel.
//!
//! A [`Chain`] starts from a [`Promise`], runs its [`Step`]s strictly in
//! order and hands the first rejection to its one tail
//! [`RejectionHandler`]. Every step after the failing one is skipped.
//!
//! - [`promise`] - single-resolution deferred values
//! - [`step`] - the step trait and the built-in steps
//! - [`handler`] - tail rejection handlers
//! - [`chain`] - chain builder, runner and state machine
//! - [`exercise`] - the iterate chain assembled from configuration
//!
//! # Example
//!
//! ```
//! use promise_shop::pipeline::{AlwaysThrows, Chain, Iterate, LogRejection, Settlement};
//! use promise_shop::ui::MockUI;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let chain = Chain::resolve(1_i64)
//!     .then(Iterate)
//!     .then(AlwaysThrows::new("OH NOES"))
//!     .then(Iterate)
//!     .catch(LogRejection)
//!     .unwrap();
//!
//! let mut ui = MockUI::new();
//! let run = chain.run(&mut ui).await.unwrap();
//! assert!(matches!(run.settlement, Settlement::Handled(_)));
//! assert_eq!(ui.messages(), ["1", "[Error: OH NOES]"]);
//! # });
//! ```

pub mod chain;
pub mod exercise;
pub mod handler;
pub mod promise;
pub mod step;

pub use chain::{Chain, ChainRun, ChainState, Settlement};
pub use exercise::{iteration_chain, TailHandler};
pub use handler::{LogRejection, RejectionHandler, Rethrow};
pub use promise::{deferred, Promise, Resolver};
pub use step::{step_fn, AlwaysThrows, FnStep, Iterate, Step};
