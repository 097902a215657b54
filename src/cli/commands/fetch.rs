//! The `fetch` command.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::FetchSettings;
use crate::error::Result;
use crate::fetch::{render_json, HttpFetcher};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Fetches JSON from the configured URL and prints it.
pub struct FetchCommand {
    settings: FetchSettings,
}

impl FetchCommand {
    /// Create a new fetch command.
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn fetcher(&self) -> Result<HttpFetcher> {
        match self.settings.timeout_secs {
            Some(secs) => HttpFetcher::with_timeout(Duration::from_secs(secs)),
            None => HttpFetcher::new(),
        }
    }
}

#[async_trait(?Send)]
impl Command for FetchCommand {
    async fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fetcher = self.fetcher()?;

        match fetcher.fetch_json(&self.settings.url).await {
            Ok(value) => {
                ui.message(&render_json(&value, self.settings.pretty));
                Ok(CommandResult::success())
            }
            // Every fetch failure ends here; nothing upstream needs to know.
            Err(err) => {
                tracing::debug!("Fetch rejected: {:?}", err);
                ui.error(&err.to_string());
                Ok(CommandResult::success())
            }
        }
    }
}
