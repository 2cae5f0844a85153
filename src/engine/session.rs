//! Sequential elicitation state machine.
//!
//! A session walks an ordered script of steps, recording one answer per
//! step. States are `AwaitingAnswer(k)` for k in 1..=N plus a terminal
//! `Completed`; a valid submission is the only forward transition and
//! `reset` the only exit from `Completed`. Classification of the
//! collected answers is owned by the flows, not the engine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::engine::answer::AnswerSheet;
use crate::engine::step::{CurrentPrompt, Step, StepKind};
use crate::error::{ElicitationError, Result};

/// Outcome of an accepted submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Advanced onto the next step.
    Next(CurrentPrompt),
    /// The last step was answered; the session is now completed.
    Completed,
}

/// Read-only status projection for presentation collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStatus {
    pub session_id: Uuid,
    /// 1-based index of the step awaiting an answer.
    pub current_step: usize,
    pub total_steps: usize,
    /// Number of answered positions.
    pub answered: usize,
    pub completed: bool,
    /// `current_step / total_steps`, 1.0 once completed.
    pub progress: f64,
    pub started_at: DateTime<Utc>,
}

/// Mutable run state of one elicitation walk.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    steps: Vec<Step>,
    /// 1-based index of the step awaiting an answer.
    current: usize,
    answers: AnswerSheet,
    completed: bool,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Create a session at step 1 of the given script.
    ///
    /// Step positions must be 1-based and contiguous.
    pub fn new(mut steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "script must have at least one step");
        debug_assert!(
            steps.iter().enumerate().all(|(i, s)| s.position == i + 1),
            "step positions must be contiguous from 1"
        );

        // The opening step is rendered up front so the first prompt read
        // never observes an unrendered script.
        let answers = AnswerSheet::default();
        if let Some(first) = steps.first_mut() {
            first.render(&answers);
        }

        Self {
            id: Uuid::new_v4(),
            steps,
            current: 1,
            answers,
            completed: false,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// 1-based index of the step awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step awaiting an answer.
    pub fn current_step(&self) -> Result<&Step> {
        if self.completed {
            return Err(ElicitationError::OutOfRange {
                index: self.steps.len() + 1,
                total: self.steps.len(),
            });
        }
        Ok(&self.steps[self.current - 1])
    }

    /// Read-only projection of the current step for rendering.
    pub fn current_prompt(&self) -> Result<CurrentPrompt> {
        self.current_step().map(CurrentPrompt::of)
    }

    /// Record `value` against the current step and advance.
    ///
    /// Free-form steps accept any non-empty text (stored trimmed);
    /// fixed-choice steps require one of the step's option identifiers.
    /// Accumulating steps append instead of overwriting. A rejected
    /// submission leaves the session unchanged.
    pub fn submit(&mut self, value: &str) -> Result<SubmitOutcome> {
        if self.completed {
            return Err(ElicitationError::SessionCompleted { session: self.id });
        }

        let step = &self.steps[self.current - 1];
        let position = step.position;
        match step.kind {
            StepKind::FreeText => {
                let text = value.trim();
                if text.is_empty() {
                    return Err(ElicitationError::EmptyAnswer);
                }
                let text = text.to_string();
                self.answers.record_text(position, text);
            }
            StepKind::SingleChoice | StepKind::MultiChoice => {
                let selected = step
                    .option(value)
                    .ok_or_else(|| ElicitationError::InvalidOption {
                        step: position,
                        value: value.to_string(),
                    })?
                    .value
                    .clone();
                if step.is_accumulating() {
                    self.answers.append_choice(position, selected);
                } else {
                    self.answers.record_choice(position, selected);
                }
            }
        }

        if self.current == self.steps.len() {
            self.completed = true;
            tracing::debug!(session = %self.id, "elicitation completed");
            return Ok(SubmitOutcome::Completed);
        }

        self.current += 1;
        // Eager render: personalized prompts must reflect the answers at
        // advance time, not at read time.
        let next = &mut self.steps[self.current - 1];
        next.render(&self.answers);
        tracing::debug!(session = %self.id, step = self.current, "advanced");
        Ok(SubmitOutcome::Next(CurrentPrompt::of(
            &self.steps[self.current - 1],
        )))
    }

    /// Step back to the previous question. The answer recorded there
    /// persists until overwritten.
    pub fn previous(&mut self) -> Result<()> {
        if self.completed {
            return Err(ElicitationError::SessionCompleted { session: self.id });
        }
        if self.current == 1 {
            return Err(ElicitationError::OutOfRange {
                index: 0,
                total: self.steps.len(),
            });
        }
        self.current -= 1;
        tracing::debug!(session = %self.id, step = self.current, "stepped back");
        Ok(())
    }

    /// Reinitialize to the empty state: no answers, step 1, not
    /// completed. Dynamic prompts lose their cached text.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.current = 1;
        self.completed = false;
        self.started_at = Utc::now();
        for step in &mut self.steps {
            step.clear_rendered();
        }
        if let Some(first) = self.steps.first_mut() {
            first.render(&self.answers);
        }
        tracing::debug!(session = %self.id, "session reset");
    }

    /// Completion fraction in [0,1] over the 1-based index.
    pub fn progress(&self) -> f64 {
        if self.completed {
            return 1.0;
        }
        self.current as f64 / self.steps.len() as f64
    }

    pub fn status(&self) -> FlowStatus {
        FlowStatus {
            session_id: self.id,
            current_step: self.current,
            total_steps: self.steps.len(),
            answered: self.answers.answered(),
            completed: self.completed,
            progress: self.progress(),
            started_at: self.started_at,
        }
    }
}
