//! HTTP JSON fetching.
//!
//! Provides an async HTTP client that reads a response body and parses it
//! as JSON. Single-shot: no retries, and no timeout unless one is set.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::error::{Result, ShopError};

/// Fetches JSON documents over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// Create a fetcher without a request timeout.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a fetcher with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ShopError::Other(anyhow::Error::new(e).context("building HTTP client")))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Read the full body of a successful (200 OK) response.
    pub async fn read(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let transport = |source: reqwest::Error| ShopError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ShopError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        tracing::debug!("Read {} byte(s) from {}", body.len(), url);
        Ok(body)
    }

    /// Fetch a URL and parse its body as JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        let body = self.read(url).await?;
        parse_json(&body)
    }
}

/// Parse a response body as JSON without assuming any structure.
pub fn parse_json(body: &str) -> Result<Value> {
    Ok(serde_json::from_str(body)?)
}

/// Render a fetched value for output, compact or pretty.
pub fn render_json(value: &Value, pretty: bool) -> String {
    if pretty {
        format!("{:#}", value)
    } else {
        value.to_string()
    }
}
