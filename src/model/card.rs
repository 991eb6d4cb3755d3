use serde::{Deserialize, Serialize};
use crate::model::{Interaction, SubtitledHtml};

/// A fully loaded state (one card of a lesson), as carried on the
/// state-editor-initialized channel when a panel finishes loading it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub content: SubtitledHtml,
    pub interaction: Interaction,
    pub solicit_answer_details: bool,
    pub card_is_checkpoint: bool,
    pub linked_skill_id: Option<String>,
}
