//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ShopTheme, UserInterface};

/// Terminal UI implementation.
///
/// Messages go to stdout unstyled, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ShopTheme,
}

impl TerminalUI {
    /// Create a new terminal UI, picking colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            ShopTheme::new()
        } else {
            ShopTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
