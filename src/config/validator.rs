//! Configuration validation rules.
//!
//! - The chain must have at least one step and at most [`MAX_CHAIN_STEPS`]
//! - The throwing step must fall inside the chain
//! - The fetch URL must be non-empty
//! - A configured timeout must be positive

use crate::config::schema::ShopConfig;
use crate::error::{Result, ShopError};

/// Upper bound on `chain.steps`; every step is allocated up front.
pub const MAX_CHAIN_STEPS: usize = 10_000;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one.
pub fn validate_config(config: &ShopConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let chain = &config.chain;
    if chain.steps == 0 {
        errors.push(ValidationError::new(
            "empty-chain",
            "chain.steps must be at least 1",
        ));
    }
    if chain.steps > MAX_CHAIN_STEPS {
        errors.push(ValidationError::new(
            "chain-too-long",
            format!(
                "chain.steps ({}) must be at most {}",
                chain.steps, MAX_CHAIN_STEPS
            ),
        ));
    }
    if let Some(fail_after) = chain.fail_after {
        if fail_after >= chain.steps {
            errors.push(ValidationError::new(
                "fail-after-out-of-range",
                format!(
                    "chain.fail_after ({}) must be less than chain.steps ({})",
                    fail_after, chain.steps
                ),
            ));
        }
    }

    let fetch = &config.fetch;
    if fetch.url.trim().is_empty() {
        errors.push(ValidationError::new("empty-url", "fetch.url must not be empty"));
    }
    if fetch.timeout_secs == Some(0) {
        errors.push(ValidationError::new(
            "zero-timeout",
            "fetch.timeout_secs must be greater than 0",
        ));
    }

    errors
}

/// Validate configuration, returning the first failure as an error.
pub fn validate(config: &ShopConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ShopError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
