//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing results to stdout and failures to stderr
//! - [`MockUI`] capturing output for assertions in tests
//!
//! # Example
//!
//! ```
//! use promise_shop::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("1");
//! ui.error("Request failed");
//! assert_eq!(ui.messages(), ["1"]);
//! assert!(ui.has_error("Request failed"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ShopTheme};

/// Trait for user interface interactions.
///
/// Exercise output (step values, fetched JSON, handled rejections) goes
/// through [`message`](UserInterface::message) so it lands on stdout verbatim.
/// Failures reported to the user go through [`error`](UserInterface::error).
pub trait UserInterface {
    /// Display a plain line on standard output.
    fn message(&mut self, msg: &str);

    /// Display an error message on standard error.
    fn error(&mut self, msg: &str);
}
