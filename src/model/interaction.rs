//! The interaction snapshot and its parts, as delivered by the external
//! interaction-definition loader. The store replaces and hands out these
//! values without validating their internal consistency; that is the
//! loader's job.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// A piece of display html paired with the stable content identifier the
/// translation pipeline keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitledHtml {
    pub content_id: Option<String>,
    pub html: String,
}

impl SubtitledHtml {
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content_id: Some(content_id.into()),
            html: html.into(),
        }
    }
}

/// Where a learner is routed after an answer, and what feedback they see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Destination state name
    pub dest: String,
    pub feedback: SubtitledHtml,
    pub labelled_as_correct: bool,
}

/// A single answer-matching rule. Rule inputs are schema-free; their shape
/// depends on the rule type and is interpreted downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub rule_type: String,
    pub inputs: serde_json::Value,
}

/// A group of rules sharing one outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerGroup {
    pub rules: Vec<RuleSpec>,
    pub outcome: Outcome,
    pub tagged_skill_misconception_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub hint_content: SubtitledHtml,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub answer_is_exclusive: bool,
    pub correct_answer: serde_json::Value,
    pub explanation: SubtitledHtml,
}

/// One customization argument value. The value is kept schema-free because
/// each interaction type declares its own argument shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationArg {
    pub value: serde_json::Value,
}

impl CustomizationArg {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }
}

/// Mapping from customization argument name to its value.
pub type CustomizationArgs = HashMap<String, CustomizationArg>;

/// The interaction currently being edited.
///
/// Sub-fields are mutated independently through the session store; nothing
/// here enforces cross-field consistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Interaction {
    /// Interaction type tag, e.g. `"MultipleChoiceInput"`
    pub id: Option<String>,
    pub answer_groups: Vec<AnswerGroup>,
    pub default_outcome: Option<Outcome>,
    pub customization_args: CustomizationArgs,
    pub solution: Option<Solution>,
    pub hints: Vec<Hint>,
}
