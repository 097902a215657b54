//! The iterate chain assembled from [`ChainSettings`].

use crate::config::ChainSettings;
use crate::error::Result;

use super::chain::Chain;
use super::handler::{LogRejection, Rethrow};
use super::step::{AlwaysThrows, Iterate};

/// Which handler sits at the tail of the iterate chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailHandler {
    /// Print the rejection and absorb it.
    #[default]
    Log,
    /// Throw again from the handler; the rejection escapes.
    Rethrow,
    /// No handler at all; the rejection escapes.
    None,
}

/// Build the iterate chain described by `settings`.
///
/// The chain holds `settings.steps` steps starting from `settings.start`.
/// When `fail_after` is set, the step right after that many iterations
/// throws `settings.message` in place of iterating.
pub fn iteration_chain(settings: &ChainSettings, tail: TailHandler) -> Result<Chain<i64>> {
    let mut chain = Chain::resolve(settings.start);

    for position in 1..=settings.steps {
        chain = if settings.fail_after.map(|n| n + 1) == Some(position) {
            chain.then(AlwaysThrows::new(&settings.message))
        } else {
            chain.then(Iterate)
        };
    }

    match tail {
        TailHandler::Log => chain.catch(LogRejection),
        TailHandler::Rethrow => chain.catch(Rethrow::new(&settings.message)),
        TailHandler::None => Ok(chain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopError;
    use crate::pipeline::{ChainState, Settlement};
    use crate::ui::MockUI;

    #[test]
    fn default_chain_shape() {
        let chain = iteration_chain(&ChainSettings::default(), TailHandler::Log).unwrap();
        let names = chain.step_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[5], "always_throws");
        assert!(names
            .iter()
            .enumerate()
            .all(|(i, name)| i == 5 || *name == "iterate"));
        assert!(chain.has_handler());
    }

    #[tokio::test]
    async fn default_chain_prints_five_then_error() {
        let mut ui = MockUI::new();
        let chain = iteration_chain(&ChainSettings::default(), TailHandler::Log).unwrap();
        let run = chain.run(&mut ui).await.unwrap();

        assert_eq!(ui.messages(), ["1", "2", "3", "4", "5", "[Error: OH NOES]"]);
        assert_eq!(run.state, ChainState::Failed { step: 6 });
        assert!(matches!(run.settlement, Settlement::Handled(_)));
    }

    #[tokio::test]
    async fn rerun_is_deterministic() {
        let mut first = MockUI::new();
        let mut second = MockUI::new();
        let settings = ChainSettings::default();

        iteration_chain(&settings, TailHandler::Log)
            .unwrap()
            .run(&mut first)
            .await
            .unwrap();
        iteration_chain(&settings, TailHandler::Log)
            .unwrap()
            .run(&mut second)
            .await
            .unwrap();

        assert_eq!(first.messages(), second.messages());
    }

    #[tokio::test]
    async fn no_failure_runs_all_steps() {
        let settings = ChainSettings {
            fail_after: None,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let run = iteration_chain(&settings, TailHandler::Log)
            .unwrap()
            .run(&mut ui)
            .await
            .unwrap();

        assert!(matches!(run.settlement, Settlement::Fulfilled(11)));
        assert_eq!(run.state, ChainState::Completed { steps: 10 });
        assert_eq!(ui.messages().len(), 10);
        assert_eq!(ui.messages().last().map(String::as_str), Some("10"));
    }

    #[tokio::test]
    async fn custom_start_and_message() {
        let settings = ChainSettings {
            start: 40,
            steps: 3,
            fail_after: Some(2),
            message: "nope".to_string(),
        };
        let mut ui = MockUI::new();
        iteration_chain(&settings, TailHandler::Log)
            .unwrap()
            .run(&mut ui)
            .await
            .unwrap();

        assert_eq!(ui.messages(), ["40", "41", "[Error: nope]"]);
    }

    #[tokio::test]
    async fn rethrow_tail_escapes() {
        let mut ui = MockUI::new();
        let result = iteration_chain(&ChainSettings::default(), TailHandler::Rethrow)
            .unwrap()
            .run(&mut ui)
            .await;

        assert!(matches!(result, Err(ShopError::Unhandled(_))));
        assert_eq!(ui.messages(), ["1", "2", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn missing_tail_escapes() {
        let mut ui = MockUI::new();
        let chain = iteration_chain(&ChainSettings::default(), TailHandler::None).unwrap();
        assert!(!chain.has_handler());

        let result = chain.run(&mut ui).await;
        assert!(matches!(result, Err(ShopError::Unhandled(_))));
    }
}
