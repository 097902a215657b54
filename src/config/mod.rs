//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use promise_shop::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("chain:\n  steps: 3\n  fail_after: 2", Path::new("config.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.chain.steps, 3);
//! assert_eq!(config.fetch.url, "http://localhost:1337");
//! ```
//!
//! # Configuration File Location
//!
//! An explicit `--config` path wins. Otherwise `.promise-shop/config.yml`
//! under the project root is used when it exists, and built-in defaults
//! apply when it does not.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config};
pub use schema::{ChainSettings, FetchSettings, ShopConfig, DEFAULT_FETCH_URL};
pub use validator::{validate, validate_config, ValidationError, MAX_CHAIN_STEPS};
