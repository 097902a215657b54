//! Error types for promise-shop operations.
//!
//! This module defines [`ShopError`], the single error channel shared by the
//! fetcher and the chain runner, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every stage returns `Result<T>`; the first `Err` skips the remaining
//!   fulfillment stages and travels to the tail rejection handler
//! - A rejection that reaches the top level without being handled is wrapped
//!   in [`ShopError::Unhandled`]
//! - Use `anyhow::Error` (via `ShopError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for promise-shop operations.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The HTTP request never produced a response (connection refused, DNS...).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 OK.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body is not valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// An error raised on purpose by a step.
    #[error("Error: {message}")]
    Thrown { message: String },

    /// A rejection escaped the end of a chain.
    #[error("Unhandled rejection: {0}")]
    Unhandled(Box<ShopError>),

    /// A chain accepts exactly one tail rejection handler.
    #[error("A rejection handler is already attached to this chain")]
    HandlerAlreadyAttached,

    /// The resolver was dropped before settling its promise.
    #[error("Promise was abandoned before it settled")]
    Abandoned,

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShopError {
    /// Build the error a throwing step raises.
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::Thrown {
            message: message.into(),
        }
    }

    /// Wrap an error that escaped its chain.
    ///
    /// Already-unhandled errors are not wrapped twice.
    pub fn unhandled(err: ShopError) -> Self {
        match err {
            ShopError::Unhandled(_) => err,
            other => ShopError::Unhandled(Box::new(other)),
        }
    }

    /// Returns true if this error escaped a chain without being handled.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, ShopError::Unhandled(_))
    }
}

/// Result type alias for promise-shop operations.
pub type Result<T> = std::result::Result<T, ShopError>;
