//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file format. Every field
//! has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Endpoint the fetcher reads when nothing else is configured.
pub const DEFAULT_FETCH_URL: &str = "http://localhost:1337";

/// Root configuration structure for `.promise-shop/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Fetcher settings
    pub fetch: FetchSettings,

    /// Chain runner settings
    pub chain: ChainSettings,
}

/// Settings for the JSON fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// URL to GET
    pub url: String,

    /// Request timeout in seconds (none by default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Pretty-print the fetched value
    pub pretty: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_FETCH_URL.to_string(),
            timeout_secs: None,
            pretty: false,
        }
    }
}

/// Settings for the iterate chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainSettings {
    /// Value handed to the first step
    pub start: i64,

    /// Total number of steps in the chain
    pub steps: usize,

    /// Number of successful steps before the throwing step.
    ///
    /// The step at position `fail_after + 1` throws. `None` runs every
    /// step to completion.
    pub fail_after: Option<usize>,

    /// Message carried by the thrown error
    pub message: String,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            start: 1,
            steps: 10,
            fail_after: Some(5),
            message: "OH NOES".to_string(),
        }
    }
}
