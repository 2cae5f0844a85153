//! Sequential elicitation engine.
//!
//! The engine owns step sequencing and answer bookkeeping and is agnostic
//! to what a flow does with the collected answers. Flows instantiate a
//! [`Session`] with their script and layer classification on top.

pub mod answer;
pub mod delay;
pub mod session;
pub mod step;

pub use answer::{Answer, AnswerSheet};
pub use delay::{DelayPolicy, NoDelay, ThinkingDelay};
pub use session::{FlowStatus, Session, SubmitOutcome};
pub use step::{ChoiceOption, CurrentPrompt, PromptSource, Step, StepKind};
