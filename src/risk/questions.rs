//! The weighted risk questionnaire.
//!
//! Eight mandatory fixed-choice questions, every option weighted 1–5.
//! Prompts are static — backward navigation re-presents the same text.

use crate::engine::{ChoiceOption, PromptSource, Step, StepKind};

/// Highest weight any option carries.
pub const MAX_OPTION_WEIGHT: u8 = 5;

fn question(position: usize, id: &str, prompt: &str, options: Vec<ChoiceOption>) -> Step {
    Step::new(
        position,
        id,
        PromptSource::Static(prompt.to_string()),
        StepKind::SingleChoice,
        options,
    )
}

/// Build the questionnaire script.
pub fn questionnaire() -> Vec<Step> {
    vec![
        question(
            1,
            "age",
            "What is your age?",
            vec![
                ChoiceOption::weighted("18-25", "18-25 years", 5),
                ChoiceOption::weighted("26-35", "26-35 years", 4),
                ChoiceOption::weighted("36-45", "36-45 years", 3),
                ChoiceOption::weighted("46-55", "46-55 years", 2),
                ChoiceOption::weighted("55+", "55+ years", 1),
            ],
        ),
        question(
            2,
            "investment_horizon",
            "What is your investment time horizon?",
            vec![
                ChoiceOption::weighted("less-than-1", "Less than 1 year", 1),
                ChoiceOption::weighted("1-3", "1-3 years", 2),
                ChoiceOption::weighted("3-5", "3-5 years", 3),
                ChoiceOption::weighted("5-10", "5-10 years", 4),
                ChoiceOption::weighted("more-than-10", "More than 10 years", 5),
            ],
        ),
        question(
            3,
            "risk_tolerance",
            "How would you react if your investment portfolio lost 20% of its value in a month?",
            vec![
                ChoiceOption::weighted("sell-all", "Sell all investments immediately", 1),
                ChoiceOption::weighted("sell-some", "Sell some investments", 2),
                ChoiceOption::weighted("hold", "Hold and wait for recovery", 3),
                ChoiceOption::weighted("buy-more", "Buy more while prices are low", 4),
                ChoiceOption::weighted("significantly-more", "Invest significantly more", 5),
            ],
        ),
        question(
            4,
            "income_stability",
            "How stable is your current income?",
            vec![
                ChoiceOption::weighted("very-unstable", "Very unstable", 1),
                ChoiceOption::weighted("somewhat-unstable", "Somewhat unstable", 2),
                ChoiceOption::weighted("stable", "Stable", 3),
                ChoiceOption::weighted("very-stable", "Very stable", 4),
                ChoiceOption::weighted("guaranteed", "Guaranteed (pension, etc.)", 5),
            ],
        ),
        question(
            5,
            "emergency_fund",
            "Do you have an emergency fund covering 3-6 months of expenses?",
            vec![
                ChoiceOption::weighted("no-fund", "No emergency fund", 1),
                ChoiceOption::weighted("partial", "Partial emergency fund", 2),
                ChoiceOption::weighted("adequate", "Adequate emergency fund", 3),
                ChoiceOption::weighted("substantial", "Substantial emergency fund", 4),
                ChoiceOption::weighted("extensive", "Extensive emergency fund", 5),
            ],
        ),
        question(
            6,
            "investment_experience",
            "What is your investment experience?",
            vec![
                ChoiceOption::weighted("none", "No investment experience", 1),
                ChoiceOption::weighted("limited", "Limited experience", 2),
                ChoiceOption::weighted("moderate", "Moderate experience", 3),
                ChoiceOption::weighted("extensive", "Extensive experience", 4),
                ChoiceOption::weighted("professional", "Professional investor", 5),
            ],
        ),
        question(
            7,
            "investment_goals",
            "What is your primary investment goal?",
            vec![
                ChoiceOption::weighted("preservation", "Capital preservation", 1),
                ChoiceOption::weighted("income", "Generate income", 2),
                ChoiceOption::weighted("balanced", "Balanced growth and income", 3),
                ChoiceOption::weighted("growth", "Long-term growth", 4),
                ChoiceOption::weighted("aggressive", "Aggressive growth", 5),
            ],
        ),
        question(
            8,
            "debt_level",
            "What is your current debt level (excluding mortgage)?",
            vec![
                ChoiceOption::weighted("high", "High debt level", 1),
                ChoiceOption::weighted("moderate", "Moderate debt level", 2),
                ChoiceOption::weighted("low", "Low debt level", 3),
                ChoiceOption::weighted("minimal", "Minimal debt", 4),
                ChoiceOption::weighted("none", "No debt", 5),
            ],
        ),
    ]
}
