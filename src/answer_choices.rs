//! Derivation of selectable answer choices from an interaction's
//! customization arguments.
//!
//! Response-authoring UI presents the learner-facing choices of the current
//! interaction so authors can map answers to outcomes. The list is always
//! derived fresh from the interaction's type tag and customization
//! arguments; it is never stored.

use serde::{Deserialize, Serialize};

use crate::model::{CustomizationArgs, SubtitledHtml};

/// The stored value of an answer choice. Multiple-choice answers are
/// recorded by position; every other choice-bearing type records a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Index(usize),
    Text(String),
}

/// A derived, UI-presentable answer choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub value: ChoiceValue,
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct LabeledRegion {
    label: String,
}

#[derive(Debug, Deserialize)]
struct ImageWithRegions {
    labeled_regions: Vec<LabeledRegion>,
}

/// Derives the answer choices for an interaction, or `None` when the type
/// tag is empty, unrecognized, or its choice-bearing argument is missing or
/// malformed. `None` means "no derivable answer choices", not an error.
///
/// Per-type policy:
/// - `MultipleChoiceInput`: value is the 0-based position in the declared
///   choice list, label is the choice html.
/// - `ImageClickInput`: value and label are both the region's label text.
/// - `ItemSelectionInput` / `DragAndDropSortInput`: value is the choice's
///   content id, label is the choice html.
pub fn derive_answer_choices(
    interaction_id: &str,
    customization_args: &CustomizationArgs,
) -> Option<Vec<AnswerChoice>> {
    match interaction_id {
        "MultipleChoiceInput" => {
            let choices = declared_choices(customization_args)?;
            Some(
                choices
                    .into_iter()
                    .enumerate()
                    .map(|(index, choice)| AnswerChoice {
                        value: ChoiceValue::Index(index),
                        label: choice.html,
                    })
                    .collect(),
            )
        }
        "ImageClickInput" => {
            let arg = customization_args.get("image_and_regions")?;
            let image: ImageWithRegions = match serde_json::from_value(arg.value.clone()) {
                Ok(image) => image,
                Err(err) => {
                    log::debug!("Unusable image_and_regions argument: {}", err);
                    return None;
                }
            };
            Some(
                image
                    .labeled_regions
                    .into_iter()
                    .map(|region| AnswerChoice {
                        value: ChoiceValue::Text(region.label.clone()),
                        label: region.label,
                    })
                    .collect(),
            )
        }
        // Both types key their choices by stable content id.
        "ItemSelectionInput" | "DragAndDropSortInput" => {
            let choices = declared_choices(customization_args)?;
            choices
                .into_iter()
                .map(|choice| {
                    let content_id = choice.content_id?;
                    Some(AnswerChoice {
                        value: ChoiceValue::Text(content_id),
                        label: choice.html,
                    })
                })
                .collect()
        }
        _ => None,
    }
}

fn declared_choices(customization_args: &CustomizationArgs) -> Option<Vec<SubtitledHtml>> {
    let arg = customization_args.get("choices")?;
    match serde_json::from_value(arg.value.clone()) {
        Ok(choices) => Some(choices),
        Err(err) => {
            log::debug!("Unusable choices argument: {}", err);
            None
        }
    }
}
