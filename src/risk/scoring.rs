//! Deterministic scoring over a completed questionnaire.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::engine::{AnswerSheet, Step};

use super::model::{RiskResult, RiskTier};
use super::questions::MAX_OPTION_WEIGHT;

/// Sum the weights of the selected options across all steps.
///
/// Unanswered steps and unweighted options count 0. Neither occurs in
/// the shipped questionnaire — every step is mandatory and every option
/// weighted — but the sum degrades instead of failing.
pub fn total_score(steps: &[Step], answers: &AnswerSheet) -> u32 {
    steps
        .iter()
        .map(|step| {
            answers
                .text(step.position)
                .and_then(|value| step.option(value))
                .and_then(|option| option.weight)
                .unwrap_or(0) as u32
        })
        .sum()
}

/// Map a total score onto a tier.
///
/// The percentage of the maximum walks an ordered threshold ladder with
/// `<=` boundaries, so 25%, 50% and 75% exactly land in the lower tier.
pub fn classify(total: u32, max: u32) -> RiskTier {
    let percentage = Decimal::from(total) * dec!(100) / Decimal::from(max);
    if percentage <= dec!(25) {
        RiskTier::Conservative
    } else if percentage <= dec!(50) {
        RiskTier::ModerateConservative
    } else if percentage <= dec!(75) {
        RiskTier::ModerateAggressive
    } else {
        RiskTier::Aggressive
    }
}

/// Produce the full assessment for a completed questionnaire.
pub fn assess(steps: &[Step], answers: &AnswerSheet) -> RiskResult {
    let max_score = steps.len() as u32 * MAX_OPTION_WEIGHT as u32;
    let score = total_score(steps, answers);
    let tier = classify(score, max_score);
    RiskResult {
        score,
        max_score,
        tier,
        description: tier.description().to_string(),
        recommendations: tier
            .recommendations()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        allocation: tier.allocation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Session, SubmitOutcome};
    use crate::risk::questions::questionnaire;

    #[test]
    fn boundary_percentages_select_the_lower_tier() {
        // 25%, 50% and 75% of 40.
        assert_eq!(classify(10, 40), RiskTier::Conservative);
        assert_eq!(classify(11, 40), RiskTier::ModerateConservative);
        assert_eq!(classify(20, 40), RiskTier::ModerateConservative);
        assert_eq!(classify(21, 40), RiskTier::ModerateAggressive);
        assert_eq!(classify(30, 40), RiskTier::ModerateAggressive);
        assert_eq!(classify(31, 40), RiskTier::Aggressive);
        assert_eq!(classify(40, 40), RiskTier::Aggressive);
    }

    #[test]
    fn minimum_possible_total_is_conservative() {
        // All 1s: total 8 of 40 = 20%.
        assert_eq!(classify(8, 40), RiskTier::Conservative);
    }

    #[test]
    fn fractional_percentages_are_compared_exactly() {
        // 13 of 40 = 32.5% — above the 25 boundary, below 50.
        assert_eq!(classify(13, 40), RiskTier::ModerateConservative);
    }

    #[test]
    fn total_score_sums_selected_weights() {
        let steps = questionnaire();
        let mut session = Session::new(steps);

        // Weight-4 answer for every question.
        for value in [
            "26-35",
            "5-10",
            "buy-more",
            "very-stable",
            "substantial",
            "extensive",
            "growth",
            "minimal",
        ] {
            session.submit(value).unwrap();
        }
        assert!(session.is_completed());
        assert_eq!(total_score(session.steps(), session.answers()), 32);
    }

    #[test]
    fn assess_is_consistent_with_the_tier_tables() {
        let mut session = Session::new(questionnaire());
        for value in [
            "18-25",
            "more-than-10",
            "significantly-more",
            "guaranteed",
            "extensive",
            "professional",
            "aggressive",
            "none",
        ] {
            assert!(matches!(
                session.submit(value).unwrap(),
                SubmitOutcome::Next(_) | SubmitOutcome::Completed
            ));
        }

        let result = assess(session.steps(), session.answers());
        assert_eq!(result.score, 40);
        assert_eq!(result.max_score, 40);
        assert_eq!(result.tier, RiskTier::Aggressive);
        assert_eq!(result.description, RiskTier::Aggressive.description());
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.allocation, RiskTier::Aggressive.allocation());
    }

    #[test]
    fn unanswered_steps_count_zero() {
        let steps = questionnaire();
        let answers = AnswerSheet::default();
        assert_eq!(total_score(&steps, &answers), 0);
    }
}
