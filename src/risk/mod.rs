//! Weighted risk questionnaire flow.
//!
//! Eight mandatory fixed-choice questions, each option weighted 1–5.
//! On completion the weights are summed and the percentage of the
//! maximum mapped through a four-tier threshold table into a
//! [`RiskResult`] with description, recommendations, and a suggested
//! allocation.

pub mod flow;
pub mod model;
pub mod questions;
pub mod scoring;

pub use flow::{RiskFlow, RiskTurn};
pub use model::{Allocation, RiskResult, RiskTier};
pub use questions::{MAX_OPTION_WEIGHT, questionnaire};
pub use scoring::{assess, classify, total_score};
