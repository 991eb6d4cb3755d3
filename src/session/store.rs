use std::collections::HashMap;

use crate::error::EditorError;
use crate::model::{
    AnswerGroup,
    CustomizationArgs,
    Hint,
    Interaction,
    Misconception,
    Outcome,
    Solution,
};

/// The session's mutable editing state, shared by every panel.
///
/// A plain data holder: setters here never broadcast. Operations that must
/// notify other panels go through `EditorSession`, which pairs the store
/// write with the matching channel publish.
///
/// Boolean flags are tri-state: `None` means no panel has established the
/// value yet, and only a set call moves them to `Some`.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    active_state_name: Option<String>,
    state_names: Vec<String>,
    interaction: Option<Interaction>,
    misconceptions_by_skill: HashMap<String, Vec<Misconception>>,
    linked_skill_id: Option<String>,
    inapplicable_skill_misconception_ids: Vec<String>,
    solicit_answer_details: Option<bool>,
    card_is_checkpoint: Option<bool>,
    correctness_feedback_enabled: Option<bool>,
    in_question_mode: Option<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state currently being edited. An empty name is never
    /// stored: `None` or `Some("")` clears the field instead.
    pub fn set_active_state_name(&mut self, name: Option<String>) {
        match name {
            Some(name) if !name.is_empty() => self.active_state_name = Some(name),
            Some(_) => {
                log::warn!("Rejecting empty active state name");
                self.active_state_name = None;
            }
            None => self.active_state_name = None,
        }
    }

    pub fn active_state_name(&self) -> Option<&str> {
        self.active_state_name.as_deref()
    }

    /// Replaces the whole interaction snapshot
    pub fn set_interaction(&mut self, interaction: Interaction) {
        self.interaction = Some(interaction);
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    fn interaction_mut(&mut self) -> Result<&mut Interaction, EditorError> {
        self.interaction.as_mut().ok_or(EditorError::InteractionNotSet)
    }

    pub fn set_interaction_id(&mut self, id: Option<String>) -> Result<(), EditorError> {
        self.interaction_mut()?.id = id;
        Ok(())
    }

    pub fn set_interaction_answer_groups(
        &mut self,
        answer_groups: Vec<AnswerGroup>,
    ) -> Result<(), EditorError> {
        self.interaction_mut()?.answer_groups = answer_groups;
        Ok(())
    }

    pub fn set_interaction_default_outcome(
        &mut self,
        default_outcome: Option<Outcome>,
    ) -> Result<(), EditorError> {
        self.interaction_mut()?.default_outcome = default_outcome;
        Ok(())
    }

    /// Whole-field replace; the previous mapping is discarded, not merged
    pub fn set_interaction_customization_args(
        &mut self,
        customization_args: CustomizationArgs,
    ) -> Result<(), EditorError> {
        self.interaction_mut()?.customization_args = customization_args;
        Ok(())
    }

    pub fn set_interaction_solution(
        &mut self,
        solution: Option<Solution>,
    ) -> Result<(), EditorError> {
        self.interaction_mut()?.solution = solution;
        Ok(())
    }

    pub fn set_interaction_hints(&mut self, hints: Vec<Hint>) -> Result<(), EditorError> {
        self.interaction_mut()?.hints = hints;
        Ok(())
    }

    /// Replaces the full ordered list of known state names
    pub fn set_state_names(&mut self, state_names: Vec<String>) {
        self.state_names = state_names;
    }

    pub fn state_names(&self) -> &[String] {
        &self.state_names
    }

    pub fn set_misconceptions_by_skill(
        &mut self,
        misconceptions_by_skill: HashMap<String, Vec<Misconception>>,
    ) {
        self.misconceptions_by_skill = misconceptions_by_skill;
    }

    pub fn misconceptions_by_skill(&self) -> &HashMap<String, Vec<Misconception>> {
        &self.misconceptions_by_skill
    }

    pub fn set_linked_skill_id(&mut self, linked_skill_id: Option<String>) {
        self.linked_skill_id = linked_skill_id;
    }

    pub fn linked_skill_id(&self) -> Option<&str> {
        self.linked_skill_id.as_deref()
    }

    pub fn set_inapplicable_skill_misconception_ids(&mut self, ids: Vec<String>) {
        self.inapplicable_skill_misconception_ids = ids;
    }

    pub fn inapplicable_skill_misconception_ids(&self) -> &[String] {
        &self.inapplicable_skill_misconception_ids
    }

    pub fn set_solicit_answer_details(&mut self, solicit: bool) {
        self.solicit_answer_details = Some(solicit);
    }

    pub fn solicit_answer_details(&self) -> Option<bool> {
        self.solicit_answer_details
    }

    pub fn set_card_is_checkpoint(&mut self, is_checkpoint: bool) {
        self.card_is_checkpoint = Some(is_checkpoint);
    }

    pub fn card_is_checkpoint(&self) -> Option<bool> {
        self.card_is_checkpoint
    }

    pub fn set_correctness_feedback_enabled(&mut self, enabled: bool) {
        self.correctness_feedback_enabled = Some(enabled);
    }

    pub fn correctness_feedback_enabled(&self) -> Option<bool> {
        self.correctness_feedback_enabled
    }

    pub fn set_in_question_mode(&mut self, in_question_mode: bool) {
        self.in_question_mode = Some(in_question_mode);
    }

    pub fn in_question_mode(&self) -> Option<bool> {
        self.in_question_mode
    }

    /// Returns every field to its starting value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
