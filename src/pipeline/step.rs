//! Pipeline steps.
//!
//! A [`Step`] receives the current value and produces the next one or an
//! error. Steps may write to the UI; that output is the side effect the
//! ordering guarantees are about.

use async_trait::async_trait;

use crate::error::{Result, ShopError};
use crate::ui::UserInterface;

/// One fulfillment stage of a [`Chain`](super::Chain).
#[async_trait(?Send)]
pub trait Step<T> {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Run the step against the current value.
    async fn run(&self, input: T, ui: &mut dyn UserInterface) -> Result<T>;
}

/// Emits its input and passes on input + 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterate;

#[async_trait(?Send)]
impl Step<i64> for Iterate {
    fn name(&self) -> &str {
        "iterate"
    }

    async fn run(&self, input: i64, ui: &mut dyn UserInterface) -> Result<i64> {
        ui.message(&input.to_string());
        input
            .checked_add(1)
            .ok_or_else(|| ShopError::thrown(format!("step value {} overflowed", input)))
    }
}

/// Fails unconditionally with a fixed message.
#[derive(Debug, Clone)]
pub struct AlwaysThrows {
    message: String,
}

impl AlwaysThrows {
    /// Create a step that throws `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message carried by the thrown error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[async_trait(?Send)]
impl<T: 'static> Step<T> for AlwaysThrows {
    fn name(&self) -> &str {
        "always_throws"
    }

    async fn run(&self, _input: T, _ui: &mut dyn UserInterface) -> Result<T> {
        Err(ShopError::thrown(&self.message))
    }
}

/// A step backed by a plain function.
pub struct FnStep<F> {
    name: String,
    f: F,
}

/// Wrap a synchronous function as a named step.
pub fn step_fn<T, F>(name: impl Into<String>, f: F) -> FnStep<F>
where
    F: Fn(T) -> Result<T>,
{
    FnStep {
        name: name.into(),
        f,
    }
}

#[async_trait(?Send)]
impl<T, F> Step<T> for FnStep<F>
where
    T: 'static,
    F: Fn(T) -> Result<T>,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, input: T, _ui: &mut dyn UserInterface) -> Result<T> {
        (self.f)(input)
    }
}
