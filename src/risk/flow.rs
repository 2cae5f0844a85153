//! Questionnaire risk flow — eight weighted questions with backward
//! navigation, scored into a [`RiskResult`] on completion.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::engine::{
    CurrentPrompt, DelayPolicy, FlowStatus, NoDelay, Session, SubmitOutcome,
};
use crate::error::{ElicitationError, Result};

use super::model::RiskResult;
use super::questions::questionnaire;
use super::scoring::assess;

/// Outcome of one accepted questionnaire turn.
#[derive(Debug)]
pub enum RiskTurn {
    /// The next question to put to the user.
    Next(CurrentPrompt),
    /// The questionnaire is over and the assessment is computed.
    Finished(RiskResult),
}

/// Async facade over the questionnaire session.
///
/// Unlike the conversational flow, answers may be revisited via
/// [`previous`](Self::previous) and overwritten until the final
/// submission completes the walk. At most one submission is in flight;
/// a reentrant call fails with [`ElicitationError::SessionBusy`].
#[derive(Clone)]
pub struct RiskFlow {
    id: Uuid,
    state: Arc<RwLock<FlowState>>,
    in_flight: Arc<Mutex<()>>,
    delay: Arc<dyn DelayPolicy>,
}

struct FlowState {
    session: Session,
    result: Option<RiskResult>,
}

impl RiskFlow {
    pub fn new(delay: Arc<dyn DelayPolicy>) -> Self {
        let session = Session::new(questionnaire());
        Self {
            id: session.id(),
            state: Arc::new(RwLock::new(FlowState {
                session,
                result: None,
            })),
            in_flight: Arc::new(Mutex::new(())),
            delay,
        }
    }

    /// Flow with no thinking pause, for tests and non-interactive use.
    pub fn without_delay() -> Self {
        Self::new(Arc::new(NoDelay))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The question currently awaiting an answer.
    pub async fn current_prompt(&self) -> Result<CurrentPrompt> {
        self.state.read().await.session.current_prompt()
    }

    /// Submit the answer for the current question.
    ///
    /// The assessment is computed atomically on the submission that
    /// answers the last question.
    pub async fn submit(&self, value: &str) -> Result<RiskTurn> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| ElicitationError::SessionBusy { session: self.id })?;
        self.delay.pause().await;

        let mut state = self.state.write().await;
        match state.session.submit(value)? {
            SubmitOutcome::Next(prompt) => Ok(RiskTurn::Next(prompt)),
            SubmitOutcome::Completed => {
                let result = assess(state.session.steps(), state.session.answers());
                tracing::info!(
                    session = %self.id,
                    score = result.score,
                    tier = %result.tier,
                    "risk assessment completed"
                );
                state.result = Some(result.clone());
                Ok(RiskTurn::Finished(result))
            }
        }
    }

    /// Step back to the previous question. Its recorded answer persists
    /// until overwritten by a new submission.
    pub async fn previous(&self) -> Result<CurrentPrompt> {
        let mut state = self.state.write().await;
        state.session.previous()?;
        state.session.current_prompt()
    }

    /// The computed assessment, once the questionnaire has completed.
    pub async fn result(&self) -> Result<RiskResult> {
        self.state
            .read()
            .await
            .result
            .clone()
            .ok_or(ElicitationError::NotCompleted { session: self.id })
    }

    /// Discard all answers and the stored assessment; back to question 1.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.session.reset();
        state.result = None;
    }

    /// Completion fraction in [0,1].
    pub async fn progress(&self) -> f64 {
        self.state.read().await.session.progress()
    }

    pub async fn status(&self) -> FlowStatus {
        self.state.read().await.session.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::model::RiskTier;
    use rust_decimal_macros::dec;

    /// One weight-`w` option value per question, in question order.
    fn answers_with_weight(w: u8) -> [&'static str; 8] {
        match w {
            1 => [
                "55+",
                "less-than-1",
                "sell-all",
                "very-unstable",
                "no-fund",
                "none",
                "preservation",
                "high",
            ],
            5 => [
                "18-25",
                "more-than-10",
                "significantly-more",
                "guaranteed",
                "extensive",
                "professional",
                "aggressive",
                "none",
            ],
            _ => panic!("no uniform answer set for weight {w}"),
        }
    }

    async fn complete(flow: &RiskFlow, values: &[&str]) -> RiskResult {
        for value in &values[..values.len() - 1] {
            assert!(matches!(
                flow.submit(value).await.unwrap(),
                RiskTurn::Next(_)
            ));
        }
        match flow.submit(values[values.len() - 1]).await.unwrap() {
            RiskTurn::Finished(result) => result,
            other => panic!("expected Finished, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn all_maximum_answers_score_aggressive() {
        let flow = RiskFlow::without_delay();
        let result = complete(&flow, &answers_with_weight(5)).await;

        assert_eq!(result.score, 40);
        assert_eq!(result.tier, RiskTier::Aggressive);
        assert_eq!(result.allocation.stocks, dec!(80));
        assert_eq!(result.allocation.alternatives, dec!(15));
        assert_eq!(result.allocation.bonds, dec!(5));
    }

    #[tokio::test]
    async fn all_minimum_answers_score_conservative() {
        let flow = RiskFlow::without_delay();
        let result = complete(&flow, &answers_with_weight(1)).await;

        // 8 of 40 = 20%.
        assert_eq!(result.score, 8);
        assert_eq!(result.tier, RiskTier::Conservative);
        assert_eq!(result.allocation.bonds, dec!(70));
        assert_eq!(result.allocation.stocks, dec!(25));
        assert_eq!(result.allocation.alternatives, dec!(5));
    }

    #[tokio::test]
    async fn previous_then_resubmit_replaces_the_answer() {
        let flow = RiskFlow::without_delay();
        flow.submit("18-25").await.unwrap();
        flow.submit("less-than-1").await.unwrap();

        let prompt = flow.previous().await.unwrap();
        assert_eq!(prompt.step, 2);

        // Overwrite question 2 with the weight-5 option, then finish.
        flow.submit("more-than-10").await.unwrap();
        for value in &answers_with_weight(5)[2..] {
            flow.submit(value).await.unwrap();
        }
        let result = flow.result().await.unwrap();
        assert_eq!(result.score, 40);
    }

    #[tokio::test]
    async fn previous_at_question_one_fails() {
        let flow = RiskFlow::without_delay();
        assert!(matches!(
            flow.previous().await,
            Err(ElicitationError::OutOfRange { index: 0, total: 8 })
        ));
    }

    #[tokio::test]
    async fn result_before_completion_fails() {
        let flow = RiskFlow::without_delay();
        assert!(matches!(
            flow.result().await,
            Err(ElicitationError::NotCompleted { .. })
        ));
    }

    #[tokio::test]
    async fn submit_after_completion_keeps_the_stored_result() {
        let flow = RiskFlow::without_delay();
        let result = complete(&flow, &answers_with_weight(5)).await;

        assert!(matches!(
            flow.submit("18-25").await,
            Err(ElicitationError::SessionCompleted { .. })
        ));
        assert_eq!(flow.result().await.unwrap(), result);
    }

    #[tokio::test]
    async fn reset_then_replay_reproduces_the_result() {
        let flow = RiskFlow::without_delay();
        let first = complete(&flow, &answers_with_weight(1)).await;

        flow.reset().await;
        assert!(matches!(
            flow.result().await,
            Err(ElicitationError::NotCompleted { .. })
        ));

        let second = complete(&flow, &answers_with_weight(1)).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn progress_counts_questions() {
        let flow = RiskFlow::without_delay();
        assert!((flow.progress().await - 1.0 / 8.0).abs() < f64::EPSILON);
        flow.submit("18-25").await.unwrap();
        assert!((flow.progress().await - 2.0 / 8.0).abs() < f64::EPSILON);
    }
}
