//! Error types for Invest Assist.

use uuid::Uuid;

/// Errors produced by the elicitation engine and its flows.
///
/// All variants are recoverable, caller-facing conditions — a rejected
/// operation leaves the session unchanged, and callers are expected to
/// re-prompt the user rather than abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElicitationError {
    #[error("Answer is empty")]
    EmptyAnswer,

    #[error("\"{value}\" is not an option for step {step}")]
    InvalidOption { step: usize, value: String },

    #[error("Step {index} is out of range (1..={total})")]
    OutOfRange { index: usize, total: usize },

    #[error("Session {session} has not completed yet")]
    NotCompleted { session: Uuid },

    #[error("Session {session} is already completed")]
    SessionCompleted { session: Uuid },

    #[error("Session {session} already has a submission in flight")]
    SessionBusy { session: Uuid },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, ElicitationError>;
