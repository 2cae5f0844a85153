//! Step and prompt primitives for elicitation scripts.

use serde::{Deserialize, Serialize};

use crate::engine::answer::AnswerSheet;

/// How a step accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Any non-empty text is accepted.
    FreeText,
    /// Exactly one of the step's options; re-submitting overwrites.
    SingleChoice,
    /// One option per submission; values accumulate across submissions
    /// rather than overwriting.
    MultiChoice,
}

/// One selectable choice within a fixed-choice step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Stable identifier submitted as the answer value.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Scoring weight in [1,5] for weighted questionnaires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u8>,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            weight: None,
        }
    }

    pub fn weighted(value: impl Into<String>, label: impl Into<String>, weight: u8) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            weight: Some(weight),
        }
    }
}

/// Where a step's prompt text comes from.
pub enum PromptSource {
    /// Fixed wording.
    Static(String),
    /// Rendered from the answers collected so far. The engine renders
    /// dynamic prompts when it advances onto the step, never lazily, so
    /// the emitted text always reflects the latest answers.
    Dynamic(Box<dyn Fn(&AnswerSheet) -> String + Send + Sync>),
}

impl std::fmt::Debug for PromptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One question unit in an elicitation script.
#[derive(Debug)]
pub struct Step {
    /// 1-based position in the script. Positions are unique and
    /// contiguous.
    pub position: usize,
    /// Stable identifier, e.g. `"age"` or `"risk_tolerance"`.
    pub id: String,
    pub kind: StepKind,
    /// Selectable options. Empty for free-form steps.
    pub options: Vec<ChoiceOption>,
    prompt: PromptSource,
    /// Cached prompt text. Static prompts are cached at construction;
    /// dynamic ones when the engine advances onto the step.
    rendered: Option<String>,
}

impl Step {
    pub fn new(
        position: usize,
        id: impl Into<String>,
        prompt: PromptSource,
        kind: StepKind,
        options: Vec<ChoiceOption>,
    ) -> Self {
        let rendered = match &prompt {
            PromptSource::Static(text) => Some(text.clone()),
            PromptSource::Dynamic(_) => None,
        };
        Self {
            position,
            id: id.into(),
            kind,
            options,
            prompt,
            rendered,
        }
    }

    /// The cached prompt text. Empty until the engine has rendered the
    /// step.
    pub fn prompt_text(&self) -> &str {
        self.rendered.as_deref().unwrap_or("")
    }

    /// Whether submissions accumulate instead of overwriting.
    pub fn is_accumulating(&self) -> bool {
        self.kind == StepKind::MultiChoice
    }

    /// Look up an option by its identifier.
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// (Re-)render the prompt against the answers collected so far.
    pub(crate) fn render(&mut self, answers: &AnswerSheet) {
        if let PromptSource::Dynamic(build) = &self.prompt {
            self.rendered = Some(build(answers));
        }
    }

    /// Drop a dynamic prompt's cached text. Static prompts keep theirs.
    pub(crate) fn clear_rendered(&mut self) {
        if matches!(self.prompt, PromptSource::Dynamic(_)) {
            self.rendered = None;
        }
    }
}

/// Read-only projection of the current step for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentPrompt {
    /// 1-based step position.
    pub step: usize,
    pub text: String,
    /// Empty for free-form steps.
    pub options: Vec<ChoiceOption>,
}

impl CurrentPrompt {
    pub(crate) fn of(step: &Step) -> Self {
        Self {
            step: step.position,
            text: step.prompt_text().to_string(),
            options: step.options.clone(),
        }
    }
}
