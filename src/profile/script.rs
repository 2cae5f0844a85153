//! The seven-step conversational onboarding script.
//!
//! Wording and option lists are fixed. Step 2 is personalized with the
//! name recorded in step 1; the remaining prompts are static.

use crate::engine::{ChoiceOption, PromptSource, Step, StepKind};

use super::model::InvestorProfile;

/// Position of each script step, used by the classifier when reading the
/// finished answer sheet.
pub(crate) mod positions {
    pub const NAME: usize = 1;
    pub const AGE_RANGE: usize = 2;
    pub const INCOME: usize = 3;
    pub const GOALS: usize = 4;
    pub const RISK_TOLERANCE: usize = 5;
    pub const TIME_HORIZON: usize = 6;
    pub const EXPERIENCE: usize = 7;
}

fn opt(text: &str) -> ChoiceOption {
    ChoiceOption::new(text, text)
}

/// Build the onboarding script.
pub fn script() -> Vec<Step> {
    vec![
        Step::new(
            positions::NAME,
            "name",
            PromptSource::Static(
                "Hello! I'm your AI investment assistant. I'll help you create a \
                 personalized investment profile. Let's start with your name - what \
                 should I call you?"
                    .to_string(),
            ),
            StepKind::FreeText,
            Vec::new(),
        ),
        Step::new(
            positions::AGE_RANGE,
            "age_range",
            PromptSource::Dynamic(Box::new(|answers| {
                format!(
                    "Nice to meet you, {}! What's your age range? This helps me \
                     understand your investment timeline.",
                    answers.text(positions::NAME).unwrap_or_default()
                )
            })),
            StepKind::SingleChoice,
            ["18-25", "26-35", "36-45", "46-55", "56-65", "65+"]
                .into_iter()
                .map(opt)
                .collect(),
        ),
        Step::new(
            positions::INCOME,
            "income",
            PromptSource::Static("What's your approximate annual income range?".to_string()),
            StepKind::SingleChoice,
            [
                "Under $50K",
                "$50K - $100K",
                "$100K - $200K",
                "$200K - $500K",
                "Over $500K",
            ]
            .into_iter()
            .map(opt)
            .collect(),
        ),
        Step::new(
            positions::GOALS,
            "investment_goals",
            PromptSource::Static(
                "What are your primary investment goals? (You can select multiple)".to_string(),
            ),
            StepKind::MultiChoice,
            [
                "Retirement Planning",
                "Wealth Building",
                "Emergency Fund",
                "House Down Payment",
                "Children's Education",
                "Passive Income",
            ]
            .into_iter()
            .map(opt)
            .collect(),
        ),
        Step::new(
            positions::RISK_TOLERANCE,
            "risk_tolerance",
            PromptSource::Static("How would you describe your risk tolerance?".to_string()),
            StepKind::SingleChoice,
            [
                "Conservative - Prefer stability",
                "Moderate - Balanced approach",
                "Aggressive - Willing to take risks",
                "Very Aggressive - High risk, high reward",
            ]
            .into_iter()
            .map(opt)
            .collect(),
        ),
        Step::new(
            positions::TIME_HORIZON,
            "time_horizon",
            PromptSource::Static("What's your investment time horizon?".to_string()),
            StepKind::SingleChoice,
            [
                "Less than 1 year",
                "1-3 years",
                "3-5 years",
                "5-10 years",
                "More than 10 years",
            ]
            .into_iter()
            .map(opt)
            .collect(),
        ),
        Step::new(
            positions::EXPERIENCE,
            "experience",
            PromptSource::Static("What's your investment experience level?".to_string()),
            StepKind::SingleChoice,
            [
                "Beginner - New to investing",
                "Some experience - Basic knowledge",
                "Experienced - Regular investor",
                "Expert - Professional trader",
            ]
            .into_iter()
            .map(opt)
            .collect(),
        ),
    ]
}

/// Closing chat message rendered from the finished profile. Belongs to
/// the presentation layer; the CLI prints it verbatim.
pub fn closing_message(profile: &InvestorProfile) -> String {
    format!(
        "Perfect! I've created your personalized investment profile, {}. Based on \
         your responses, I recommend a {} investment strategy. Would you like to \
         see your recommended portfolio?",
        profile.name, profile.strategy
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepKind;
    use crate::profile::model::StrategyLabel;

    #[test]
    fn script_has_seven_contiguous_steps() {
        let steps = script();
        assert_eq!(steps.len(), 7);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.position, i + 1);
        }
    }

    #[test]
    fn only_the_name_step_is_free_form() {
        let steps = script();
        assert_eq!(steps[0].kind, StepKind::FreeText);
        assert!(steps[0].options.is_empty());
        for step in &steps[1..] {
            assert_ne!(step.kind, StepKind::FreeText);
            assert!(!step.options.is_empty());
        }
    }

    #[test]
    fn goals_step_accumulates() {
        let steps = script();
        assert_eq!(steps[3].id, "investment_goals");
        assert!(steps[3].is_accumulating());
        let accumulating: Vec<&str> = steps
            .iter()
            .filter(|s| s.is_accumulating())
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(accumulating, ["investment_goals"]);
    }

    #[test]
    fn profile_options_use_the_label_as_identifier() {
        for step in script() {
            for option in &step.options {
                assert_eq!(option.value, option.label);
                assert!(option.weight.is_none());
            }
        }
    }

    #[test]
    fn closing_message_names_user_and_strategy() {
        let profile = InvestorProfile {
            name: "Sarah".to_string(),
            age: 26,
            income: "$50K - $100K".to_string(),
            goals: vec!["Retirement Planning".to_string()],
            risk_tolerance: "Conservative - Prefer stability".to_string(),
            time_horizon: "5-10 years".to_string(),
            experience: "Beginner - New to investing".to_string(),
            strategy: StrategyLabel::Conservative,
        };
        let message = closing_message(&profile);
        assert!(message.contains("Sarah"));
        assert!(message.contains("a conservative investment strategy"));
    }
}
