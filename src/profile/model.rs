//! Investor profile model and classification heuristics.

use serde::{Deserialize, Serialize};

use crate::engine::AnswerSheet;

use super::script::positions;

/// Fallback age when the bucket label cannot be parsed.
const DEFAULT_AGE: u32 = 25;

/// Three-way investment strategy label derived from the risk-tolerance
/// answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyLabel {
    Conservative,
    Balanced,
    Aggressive,
}

impl StrategyLabel {
    /// Best-effort keyword heuristic over the tolerance answer text.
    ///
    /// Checks for "conservative" first, then "aggressive"
    /// (case-insensitive substring containment), defaulting to balanced.
    /// The order matters: a text mentioning both classifies as
    /// conservative. Not an exhaustive classifier.
    pub fn infer(risk_tolerance: &str) -> Self {
        let lower = risk_tolerance.to_lowercase();
        if lower.contains("conservative") {
            Self::Conservative
        } else if lower.contains("aggressive") {
            Self::Aggressive
        } else {
            Self::Balanced
        }
    }
}

impl std::fmt::Display for StrategyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        };
        write!(f, "{s}")
    }
}

/// Parse the leading integer of an age-bucket label ("26-35" → 26,
/// "65+" → 65). A malformed label is not an error; it falls back to 25.
pub fn parse_age_bucket(label: &str) -> u32 {
    let head = label.split('-').next().unwrap_or_default().trim_start();
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(DEFAULT_AGE)
}

/// Profile assembled from a completed conversational flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub name: String,
    /// Lower bound of the selected age bucket (25 when unparseable).
    pub age: u32,
    pub income: String,
    /// Goals in selection order; duplicates are kept.
    pub goals: Vec<String>,
    pub risk_tolerance: String,
    pub time_horizon: String,
    pub experience: String,
    pub strategy: StrategyLabel,
}

impl InvestorProfile {
    /// Assemble the profile from a completed answer sheet.
    ///
    /// The engine guarantees a contiguous answered prefix on completion,
    /// so every position is present; missing entries degrade to empty
    /// fields rather than failing.
    pub(crate) fn from_answers(answers: &AnswerSheet) -> Self {
        let text = |position: usize| answers.text(position).unwrap_or_default().to_string();
        let risk_tolerance = text(positions::RISK_TOLERANCE);
        let strategy = StrategyLabel::infer(&risk_tolerance);
        Self {
            name: text(positions::NAME),
            age: parse_age_bucket(answers.text(positions::AGE_RANGE).unwrap_or_default()),
            income: text(positions::INCOME),
            goals: answers.selections(positions::GOALS).to_vec(),
            risk_tolerance,
            time_horizon: text(positions::TIME_HORIZON),
            experience: text(positions::EXPERIENCE),
            strategy,
        }
    }
}
