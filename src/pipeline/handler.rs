//! Tail rejection handlers.

use crate::error::{Result, ShopError};
use crate::ui::UserInterface;

/// The single stage at the end of a chain that receives a rejection.
///
/// Returning `Ok` absorbs the rejection. Returning `Err` means the handler
/// itself failed, and that error escapes the chain as unhandled.
pub trait RejectionHandler {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Handle a rejection that reached the end of the chain.
    fn handle(&self, err: &ShopError, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Prints the rejection's textual form, e.g. `[Error: OH NOES]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRejection;

impl RejectionHandler for LogRejection {
    fn name(&self) -> &str {
        "log_rejection"
    }

    fn handle(&self, err: &ShopError, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message(&format!("[{}]", err));
        Ok(())
    }
}

/// A handler that throws instead of handling.
///
/// Whatever it receives, it fails with its own error, which then has no
/// handler left to catch it.
#[derive(Debug, Clone)]
pub struct Rethrow {
    message: String,
}

impl Rethrow {
    /// Create a handler that throws `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RejectionHandler for Rethrow {
    fn name(&self) -> &str {
        "rethrow"
    }

    fn handle(&self, _err: &ShopError, _ui: &mut dyn UserInterface) -> Result<()> {
        Err(ShopError::thrown(&self.message))
    }
}
