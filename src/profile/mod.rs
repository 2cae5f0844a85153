//! Conversational onboarding flow.
//!
//! A scripted chat that collects a name and six fixed-choice answers,
//! then derives an [`InvestorProfile`] with a three-way strategy label.
//! The flow is one-way: there is no backward navigation, matching the
//! chat transcript model where sent messages are not revisable.

pub mod flow;
pub mod model;
pub mod script;

pub use flow::{ProfileFlow, ProfileTurn};
pub use model::{InvestorProfile, StrategyLabel, parse_age_bucket};
pub use script::{closing_message, script};
