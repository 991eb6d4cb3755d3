use crate::answer_choices::AnswerChoice;
use crate::model::State;

/// An event broadcast on one of the editor's named channels.
///
/// One variant per channel. Payload-free variants exist for changes where
/// subscribers re-read the session store themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The full list of known state names was replaced
    StateNamesChanged { state_names: Vec<String> },
    /// A panel finished loading the active state
    StateEditorInitialized { state: Box<State> },
    StateEditorDirectiveInitialized,
    InteractionEditorInitialized,
    ShowTranslationTabBusyModal,
    RefreshStateTranslation,
    /// The derivable answer choices changed
    AnswerChoicesUpdated { choices: Vec<AnswerChoice> },
    SaveOutcomeDestinationDetails,
    /// Customization arguments were edited; carries the choices derived
    /// from the new arguments
    CustomizationArgsUpdated { choices: Vec<AnswerChoice> },
    ObjectFormValidityChanged { is_valid: bool },
}

/// The named channels events are broadcast on, used as subscription keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    StateNamesChanged,
    StateEditorInitialized,
    StateEditorDirectiveInitialized,
    InteractionEditorInitialized,
    ShowTranslationTabBusyModal,
    RefreshStateTranslation,
    AnswerChoicesUpdated,
    SaveOutcomeDestinationDetails,
    CustomizationArgsUpdated,
    ObjectFormValidityChanged,
}

impl EditorEvent {
    /// The channel this event is delivered on
    pub fn kind(&self) -> EventKind {
        match self {
            EditorEvent::StateNamesChanged { .. } => EventKind::StateNamesChanged,
            EditorEvent::StateEditorInitialized { .. } => EventKind::StateEditorInitialized,
            EditorEvent::StateEditorDirectiveInitialized => {
                EventKind::StateEditorDirectiveInitialized
            }
            EditorEvent::InteractionEditorInitialized => EventKind::InteractionEditorInitialized,
            EditorEvent::ShowTranslationTabBusyModal => EventKind::ShowTranslationTabBusyModal,
            EditorEvent::RefreshStateTranslation => EventKind::RefreshStateTranslation,
            EditorEvent::AnswerChoicesUpdated { .. } => EventKind::AnswerChoicesUpdated,
            EditorEvent::SaveOutcomeDestinationDetails => {
                EventKind::SaveOutcomeDestinationDetails
            }
            EditorEvent::CustomizationArgsUpdated { .. } => EventKind::CustomizationArgsUpdated,
            EditorEvent::ObjectFormValidityChanged { .. } => {
                EventKind::ObjectFormValidityChanged
            }
        }
    }
}
