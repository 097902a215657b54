//! Single-resolution deferred values.
//!
//! [`deferred`] returns a [`Resolver`] and the [`Promise`] it settles.
//! `resolve`, `reject` and `settle` consume the resolver, so a promise
//! can be settled at most once. Dropping the resolver without settling
//! rejects the promise with [`ShopError::Abandoned`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::{Result, ShopError};

/// Create a pending promise and the resolver that settles it.
pub fn deferred<T>() -> (Resolver<T>, Promise<T>) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, Promise { rx })
}

/// Write side of a [`Promise`].
#[derive(Debug)]
pub struct Resolver<T> {
    tx: oneshot::Sender<Result<T>>,
}

impl<T> Resolver<T> {
    /// Fulfill the promise with a value.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Reject the promise with an error.
    pub fn reject(self, err: ShopError) {
        self.settle(Err(err));
    }

    /// Settle the promise with an outcome.
    pub fn settle(self, outcome: Result<T>) {
        // A dropped promise has nobody left to observe the outcome.
        if self.tx.send(outcome).is_err() {
            tracing::trace!("Promise dropped before it was settled");
        }
    }

    /// Returns true if the promise side was dropped.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }
}

/// A value that becomes available, or fails, exactly once.
#[derive(Debug)]
pub struct Promise<T> {
    rx: oneshot::Receiver<Result<T>>,
}

impl<T> Promise<T> {
    /// A promise already fulfilled with `value`.
    pub fn resolved(value: T) -> Self {
        Self::settled(Ok(value))
    }

    /// A promise already rejected with `err`.
    pub fn rejected(err: ShopError) -> Self {
        Self::settled(Err(err))
    }

    /// A promise already settled with `outcome`.
    pub fn settled(outcome: Result<T>) -> Self {
        let (resolver, promise) = deferred();
        resolver.settle(outcome);
        promise
    }
}

impl<T> Future for Promise<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(ShopError::Abandoned)))
    }
}
