//! Conversational profile flow — a one-way, seven-step chat that builds
//! an [`InvestorProfile`].

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::engine::{
    CurrentPrompt, DelayPolicy, FlowStatus, NoDelay, Session, SubmitOutcome,
};
use crate::error::{ElicitationError, Result};

use super::model::InvestorProfile;
use super::script::script;

/// Outcome of one accepted chat turn.
#[derive(Debug)]
pub enum ProfileTurn {
    /// The next question to put to the user.
    Next(CurrentPrompt),
    /// The conversation is over and the profile is classified.
    Finished(InvestorProfile),
}

/// Async facade over the onboarding session.
///
/// Holds exactly one session. Submissions pass through the configured
/// [`DelayPolicy`] with at most one in flight; a reentrant call fails
/// with [`ElicitationError::SessionBusy`]. Answers, once submitted, are
/// not revisable — the conversational flow has no backward navigation.
#[derive(Clone)]
pub struct ProfileFlow {
    id: Uuid,
    state: Arc<RwLock<FlowState>>,
    in_flight: Arc<Mutex<()>>,
    delay: Arc<dyn DelayPolicy>,
}

struct FlowState {
    session: Session,
    profile: Option<InvestorProfile>,
}

impl ProfileFlow {
    pub fn new(delay: Arc<dyn DelayPolicy>) -> Self {
        let session = Session::new(script());
        Self {
            id: session.id(),
            state: Arc::new(RwLock::new(FlowState {
                session,
                profile: None,
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

    /// Submit the user's answer for the current step.
    ///
    /// Classification happens atomically on the submission that answers
    /// the last step; no partial profile is ever exposed.
    pub async fn submit(&self, value: &str) -> Result<ProfileTurn> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| ElicitationError::SessionBusy { session: self.id })?;
        self.delay.pause().await;

        let mut state = self.state.write().await;
        match state.session.submit(value)? {
            SubmitOutcome::Next(prompt) => Ok(ProfileTurn::Next(prompt)),
            SubmitOutcome::Completed => {
                let profile = InvestorProfile::from_answers(state.session.answers());
                tracing::info!(
                    session = %self.id,
                    strategy = %profile.strategy,
                    "profile flow completed"
                );
                state.profile = Some(profile.clone());
                Ok(ProfileTurn::Finished(profile))
            }
        }
    }

    /// The classified profile, once the conversation has completed.
    pub async fn result(&self) -> Result<InvestorProfile> {
        self.state
            .read()
            .await
            .profile
            .clone()
            .ok_or(ElicitationError::NotCompleted { session: self.id })
    }

    /// Discard all answers and the stored profile; back to step 1.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.session.reset();
        state.profile = None;
    }

    /// Completion fraction in [0,1].
    pub async fn progress(&self) -> f64 {
        self.state.read().await.session.progress()
    }

    pub async fn status(&self) -> FlowStatus {
        self.state.read().await.session.status()
    }
}
