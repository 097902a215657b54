//! Chain builder and runner.
//!
//! Per execution a chain moves through
//! `Pending → Running(1) → … → Running(n) → Completed`, or drops into
//! `Failed(i)` at the first rejection. Terminal states absorb every further
//! transition.

use tracing::{debug, warn};

use crate::error::{Result, ShopError};
use crate::ui::UserInterface;

use super::handler::RejectionHandler;
use super::promise::Promise;
use super::step::Step;

/// Where a chain execution currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// Waiting for the source promise.
    Pending,

    /// Step `step` (1-based) is executing.
    Running { step: usize },

    /// Every step fulfilled.
    Completed { steps: usize },

    /// The source (`step == 0`) or step `step` rejected.
    Failed { step: usize },
}

impl ChainState {
    /// Check if this is a terminal state (no more changes expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChainState::Completed { .. } | ChainState::Failed { .. })
    }

    /// Begin executing `step`.
    pub fn enter(self, step: usize) -> Self {
        if self.is_terminal() {
            return self;
        }
        ChainState::Running { step }
    }

    /// Record a rejection at the current position.
    pub fn fail(self) -> Self {
        match self {
            ChainState::Pending => ChainState::Failed { step: 0 },
            ChainState::Running { step } => ChainState::Failed { step },
            terminal => terminal,
        }
    }

    /// Record that all `steps` fulfilled.
    pub fn complete(self, steps: usize) -> Self {
        if self.is_terminal() {
            return self;
        }
        ChainState::Completed { steps }
    }
}

impl std::fmt::Display for ChainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainState::Pending => write!(f, "pending"),
            ChainState::Running { step } => write!(f, "running step {}", step),
            ChainState::Completed { steps } => write!(f, "completed {} step(s)", steps),
            ChainState::Failed { step: 0 } => write!(f, "failed before the first step"),
            ChainState::Failed { step } => write!(f, "failed at step {}", step),
        }
    }
}

/// How a chain settled when no error escaped it.
#[derive(Debug)]
pub enum Settlement<T> {
    /// Every step fulfilled; holds the final value.
    Fulfilled(T),

    /// A step rejected and the tail handler absorbed the error.
    Handled(ShopError),
}

impl<T> Settlement<T> {
    /// Returns true if the chain fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settlement::Fulfilled(_))
    }
}

/// Result of running a chain to the end.
#[derive(Debug)]
pub struct ChainRun<T> {
    /// Outcome seen by the tail.
    pub settlement: Settlement<T>,

    /// Final state of the execution.
    pub state: ChainState,
}

/// An ordered list of steps with at most one tail rejection handler.
pub struct Chain<T> {
    source: Promise<T>,
    steps: Vec<Box<dyn Step<T>>>,
    handler: Option<Box<dyn RejectionHandler>>,
}

impl<T: 'static> Chain<T> {
    /// Start a chain from an already fulfilled value.
    pub fn resolve(value: T) -> Self {
        Self::from_promise(Promise::resolved(value))
    }

    /// Start a chain from a promise that may still be pending.
    pub fn from_promise(source: Promise<T>) -> Self {
        Self {
            source,
            steps: Vec::new(),
            handler: None,
        }
    }

    /// Append a fulfillment step.
    pub fn then(self, step: impl Step<T> + 'static) -> Self {
        self.then_boxed(Box::new(step))
    }

    /// Append an already boxed fulfillment step.
    pub fn then_boxed(mut self, step: Box<dyn Step<T>>) -> Self {
        self.steps.push(step);
        self
    }

    /// Attach the tail rejection handler.
    ///
    /// A chain takes exactly one; a second call fails with
    /// [`ShopError::HandlerAlreadyAttached`]. The handler always runs after
    /// every step, whatever order `then` and `catch` were called in.
    pub fn catch(self, handler: impl RejectionHandler + 'static) -> Result<Self> {
        self.catch_boxed(Box::new(handler))
    }

    /// Attach an already boxed tail rejection handler.
    pub fn catch_boxed(mut self, handler: Box<dyn RejectionHandler>) -> Result<Self> {
        if self.handler.is_some() {
            return Err(ShopError::HandlerAlreadyAttached);
        }
        self.handler = Some(handler);
        Ok(self)
    }

    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check if a tail rejection handler is attached.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Names of the steps, in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run the chain to completion.
    ///
    /// Steps run one at a time; the next step starts only once the previous
    /// one has settled, and its continuation is deferred to the next
    /// scheduler tick. The first rejection skips every remaining step.
    ///
    /// Returns `Err(ShopError::Unhandled)` when a rejection reaches the tail
    /// with no handler, or when the handler itself fails.
    pub async fn run(self, ui: &mut dyn UserInterface) -> Result<ChainRun<T>> {
        let Chain {
            source,
            steps,
            handler,
        } = self;
        let total = steps.len();
        let mut state = ChainState::Pending;

        let mut outcome = source.await;
        if outcome.is_err() {
            state = state.fail();
        }

        for (idx, step) in steps.iter().enumerate() {
            let value = match outcome {
                Ok(value) => value,
                Err(err) => {
                    debug!("Skipping {} remaining step(s) after rejection", total - idx);
                    outcome = Err(err);
                    break;
                }
            };

            state = state.enter(idx + 1);
            debug!("Running step {} ({})", idx + 1, step.name());

            outcome = step.run(value, ui).await;
            tokio::task::yield_now().await;

            if let Err(err) = &outcome {
                debug!("Step {} ({}) rejected: {}", idx + 1, step.name(), err);
                state = state.fail();
            }
        }

        let err = match outcome {
            Ok(value) => {
                state = state.complete(total);
                debug!("Chain {}", state);
                return Ok(ChainRun {
                    settlement: Settlement::Fulfilled(value),
                    state,
                });
            }
            Err(err) => err,
        };

        let Some(handler) = handler else {
            warn!("Rejection reached the end of the chain with no handler");
            return Err(ShopError::unhandled(err));
        };

        debug!("Handing rejection to {}", handler.name());
        if let Err(handler_err) = handler.handle(&err, ui) {
            warn!("Rejection handler '{}' failed: {}", handler.name(), handler_err);
            return Err(ShopError::unhandled(handler_err));
        }

        Ok(ChainRun {
            settlement: Settlement::Handled(err),
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::handler::{LogRejection, Rethrow};
    use crate::pipeline::promise::deferred;
    use crate::pipeline::step::{step_fn, AlwaysThrows, Iterate};
    use crate::ui::MockUI;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how often it is asked to handle a rejection.
    struct CountingHandler(Rc<Cell<usize>>);

    impl RejectionHandler for CountingHandler {
        fn name(&self) -> &str {
            "counting"
        }

        fn handle(&self, _err: &ShopError, _ui: &mut dyn UserInterface) -> Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    fn iterate_chain(count: usize) -> Chain<i64> {
        (0..count).fold(Chain::resolve(1), |chain, _| chain.then(Iterate))
    }

    #[test]
    fn state_transitions() {
        let state = ChainState::Pending.enter(1);
        assert_eq!(state, ChainState::Running { step: 1 });
        assert_eq!(state.enter(2), ChainState::Running { step: 2 });
        assert_eq!(state.fail(), ChainState::Failed { step: 1 });
        assert_eq!(state.complete(3), ChainState::Completed { steps: 3 });
        assert_eq!(ChainState::Pending.fail(), ChainState::Failed { step: 0 });
    }

    #[test]
    fn terminal_states_are_absorbing() {
        let failed = ChainState::Failed { step: 6 };
        assert!(failed.is_terminal());
        assert_eq!(failed.enter(7), failed);
        assert_eq!(failed.complete(10), failed);
        assert_eq!(failed.fail(), failed);

        let done = ChainState::Completed { steps: 10 };
        assert_eq!(done.enter(1), done);
        assert_eq!(done.fail(), done);
    }

    #[test]
    fn state_display() {
        assert_eq!(ChainState::Running { step: 3 }.to_string(), "running step 3");
        assert_eq!(ChainState::Failed { step: 6 }.to_string(), "failed at step 6");
        assert_eq!(
            ChainState::Failed { step: 0 }.to_string(),
            "failed before the first step"
        );
    }

    #[tokio::test]
    async fn fulfilled_chain_runs_every_step() {
        let mut ui = MockUI::new();
        let run = iterate_chain(3).catch(LogRejection).unwrap().run(&mut ui).await.unwrap();

        assert!(matches!(run.settlement, Settlement::Fulfilled(4)));
        assert_eq!(run.state, ChainState::Completed { steps: 3 });
        assert_eq!(ui.messages(), ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn rejection_skips_remaining_steps() {
        let mut ui = MockUI::new();
        let chain = iterate_chain(2)
            .then(AlwaysThrows::new("OH NOES"))
            .then(Iterate)
            .then(Iterate)
            .catch(LogRejection)
            .unwrap();

        let run = chain.run(&mut ui).await.unwrap();
        assert_eq!(run.state, ChainState::Failed { step: 3 });
        assert_eq!(ui.messages(), ["1", "2", "[Error: OH NOES]"]);
        match run.settlement {
            Settlement::Handled(ShopError::Thrown { message }) => assert_eq!(message, "OH NOES"),
            other => panic!("expected handled Thrown, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn handler_not_called_on_fulfillment() {
        let calls = Rc::new(Cell::new(0));
        let mut ui = MockUI::new();
        let run = iterate_chain(2)
            .catch(CountingHandler(calls.clone()))
            .unwrap()
            .run(&mut ui)
            .await
            .unwrap();

        assert!(run.settlement.is_fulfilled());
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn handler_called_once_on_rejection() {
        let calls = Rc::new(Cell::new(0));
        let mut ui = MockUI::new();
        let chain = iterate_chain(1)
            .then(AlwaysThrows::new("first"))
            .then(AlwaysThrows::new("second"))
            .catch(CountingHandler(calls.clone()))
            .unwrap();

        let run = chain.run(&mut ui).await.unwrap();
        assert_eq!(calls.get(), 1);
        match run.settlement {
            Settlement::Handled(ShopError::Thrown { message }) => assert_eq!(message, "first"),
            other => panic!("expected first error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_handler_escapes_as_unhandled() {
        let mut ui = MockUI::new();
        let result = iterate_chain(1)
            .then(AlwaysThrows::new("OH NOES"))
            .run(&mut ui)
            .await;

        let err = result.unwrap_err();
        assert!(err.is_unhandled());
        assert_eq!(err.to_string(), "Unhandled rejection: Error: OH NOES");
        assert_eq!(ui.messages(), ["1"]);
    }

    #[tokio::test]
    async fn failing_handler_escapes_as_unhandled() {
        let mut ui = MockUI::new();
        let result = iterate_chain(1)
            .then(AlwaysThrows::new("OH NOES"))
            .catch(Rethrow::new("from handler"))
            .unwrap()
            .run(&mut ui)
            .await;

        let err = result.unwrap_err();
        assert!(err.is_unhandled());
        assert!(err.to_string().contains("from handler"));
    }

    #[test]
    fn second_handler_is_refused() {
        let chain = iterate_chain(1).catch(LogRejection).unwrap();
        let result = chain.catch(LogRejection);
        assert!(matches!(result, Err(ShopError::HandlerAlreadyAttached)));
    }

    #[test]
    fn catch_before_then_still_sits_at_tail() {
        let chain = Chain::resolve(1_i64)
            .catch(LogRejection)
            .unwrap()
            .then(Iterate)
            .then(AlwaysThrows::new("x"));
        assert!(chain.has_handler());
        assert_eq!(chain.step_names(), ["iterate", "always_throws"]);
    }

    #[tokio::test]
    async fn rejected_source_skips_all_steps() {
        let mut ui = MockUI::new();
        let run = Chain::from_promise(Promise::rejected(ShopError::thrown("early")))
            .then(Iterate)
            .catch(LogRejection)
            .unwrap()
            .run(&mut ui)
            .await
            .unwrap();

        assert_eq!(run.state, ChainState::Failed { step: 0 });
        assert_eq!(ui.messages(), ["[Error: early]"]);
    }

    #[tokio::test]
    async fn waits_for_pending_source() {
        let (resolver, promise) = deferred();
        let chain = Chain::from_promise(promise).then(Iterate);
        let mut ui = MockUI::new();

        let runner = chain.run(&mut ui);
        let settler = async {
            tokio::task::yield_now().await;
            resolver.resolve(7);
        };
        let (result, ()) = tokio::join!(runner, settler);

        assert!(matches!(result.unwrap().settlement, Settlement::Fulfilled(8)));
        assert_eq!(ui.messages(), ["7"]);
    }

    #[tokio::test]
    async fn steps_observe_values_in_order() {
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut chain = Chain::resolve(0_i64);
        for _ in 0..4 {
            let seen = seen.clone();
            chain = chain.then(step_fn("record", move |n: i64| {
                seen.borrow_mut().push(n);
                Ok(n + 1)
            }));
        }

        let mut ui = MockUI::new();
        chain.run(&mut ui).await.unwrap();
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_chain_fulfills_with_source() {
        let mut ui = MockUI::new();
        let chain = Chain::resolve(5_i64);
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);

        let run = chain.run(&mut ui).await.unwrap();
        assert!(matches!(run.settlement, Settlement::Fulfilled(5)));
        assert_eq!(run.state, ChainState::Completed { steps: 0 });
    }

    #[test]
    fn len_counts_appended_steps() {
        let chain = iterate_chain(3).then(AlwaysThrows::new("OH NOES"));
        assert!(!chain.is_empty());
        assert_eq!(chain.len(), 4);
    }
}
