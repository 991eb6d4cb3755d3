/// The main context for one state-editing session, tying the session store,
/// the readiness tracker, the solution-validity tracker, and the event bus
/// together behind a single object that is passed explicitly to every panel.
///
/// There is no process-wide instance: tests and embedders construct as
/// many isolated sessions as they need.
///
/// # Coordination
///
/// The context pairs store writes with their channel publishes:
/// - `set_state_names`: replace the list, then broadcast it. Every call
///   fires, whether or not the list changed.
/// - `refresh_answer_choices`: derive choices from the current interaction
///   and broadcast them to response-authoring panels
///
/// Everything else on the store is a plain read or write with no
/// notification side, and panels reach it through the public `store` field.
///
/// # Example
///
/// ```
/// use state_editor::EditorSession;
///
/// let mut session = EditorSession::new();
/// session.store.set_active_state_name(Some("Introduction".to_string()));
/// session.set_state_names(vec!["Introduction".to_string()]);
/// ```
use uuid::Uuid;

use crate::answer_choices::derive_answer_choices;
use crate::event::{EditorEvent, EventBus};
use crate::session::{ReadinessTracker, SessionStore};
use crate::validity::SolutionValidityTracker;

/// The context object owning one editing session's shared state.
#[derive(Debug)]
pub struct EditorSession {
    /// The session's mutable editing state
    pub store: SessionStore,
    /// Which panels have completed first-time setup
    pub readiness: ReadinessTracker,
    /// Per-state solution validity, maintained by the solution editor
    pub solution_validity: SolutionValidityTracker,
    /// The broadcast bus panels subscribe to
    pub event_bus: EventBus,
    session_id: Uuid,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Creates a fresh session with everything unset and no subscribers.
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        log::debug!("Starting editor session {}", session_id);
        Self {
            store: SessionStore::new(),
            readiness: ReadinessTracker::new(),
            solution_validity: SolutionValidityTracker::new(),
            event_bus: EventBus::new(),
            session_id,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Replaces the known state names and broadcasts the new list.
    ///
    /// The broadcast fires on every call, including when the new list is
    /// identical to the old one; subscribers do their own diffing if they
    /// care.
    pub fn set_state_names(&mut self, state_names: Vec<String>) {
        self.store.set_state_names(state_names.clone());
        self.event_bus.emit(EditorEvent::StateNamesChanged { state_names });
    }

    /// Derives answer choices from the current interaction and broadcasts
    /// them. Nothing is emitted when there is no interaction or its type
    /// has no derivable choices.
    pub fn refresh_answer_choices(&self) {
        let Some(interaction) = self.store.interaction() else {
            return;
        };
        let Some(id) = interaction.id.as_deref() else {
            return;
        };
        if let Some(choices) = derive_answer_choices(id, &interaction.customization_args) {
            self.event_bus.emit(EditorEvent::AnswerChoicesUpdated { choices });
        }
    }

    /// Whether the active state's solution is currently valid. False when
    /// no state is active or the active state is not tracked.
    pub fn is_current_solution_valid(&self) -> bool {
        self.store
            .active_state_name()
            .is_some_and(|name| self.solution_validity.is_solution_valid(name))
    }

    /// Full session reset: store, readiness, and validity return to their
    /// starting values. Subscriptions survive a reset.
    pub fn reset(&mut self) {
        log::debug!("Resetting editor session {}", self.session_id);
        self.store.reset();
        self.readiness.reset();
        self.solution_validity.clear();
    }
}
