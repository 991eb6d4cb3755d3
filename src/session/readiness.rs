/// Tracks which editor panels have completed first-time setup.
///
/// Each flag starts `false` and has a dedicated setter that can only move
/// it to `true`; the only way back is a full session reset. The tracker
/// exists to answer one question: is it safe yet to wire up the
/// cross-panel event listeners?
#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    content_editor: bool,
    interaction_editor: bool,
    responses: bool,
    hints_editor: bool,
    solution_editor: bool,
    host_directive: bool,
}

impl ReadinessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_content_editor_initialized(&mut self) {
        self.content_editor = true;
    }

    pub fn content_editor_initialized(&self) -> bool {
        self.content_editor
    }

    pub fn mark_interaction_editor_initialized(&mut self) {
        self.interaction_editor = true;
    }

    pub fn interaction_editor_initialized(&self) -> bool {
        self.interaction_editor
    }

    pub fn mark_responses_initialized(&mut self) {
        self.responses = true;
    }

    pub fn responses_initialized(&self) -> bool {
        self.responses
    }

    pub fn mark_hints_editor_initialized(&mut self) {
        self.hints_editor = true;
    }

    pub fn hints_editor_initialized(&self) -> bool {
        self.hints_editor
    }

    pub fn mark_solution_editor_initialized(&mut self) {
        self.solution_editor = true;
    }

    pub fn solution_editor_initialized(&self) -> bool {
        self.solution_editor
    }

    pub fn mark_host_directive_initialized(&mut self) {
        self.host_directive = true;
    }

    pub fn host_directive_initialized(&self) -> bool {
        self.host_directive
    }

    /// True once cross-panel event listeners may be registered.
    ///
    /// Only the interaction editor, the responses panel, and the host
    /// directive must exist first. The content, hints, and solution panels
    /// attach no cross-panel listeners, so they are not consulted.
    pub fn can_register_event_listeners(&self) -> bool {
        self.interaction_editor && self.responses && self.host_directive
    }

    /// Clears every flag; used only on full session reset
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_false_and_latch_true() {
        let mut tracker = ReadinessTracker::new();
        assert!(!tracker.content_editor_initialized());
        assert!(!tracker.interaction_editor_initialized());
        assert!(!tracker.responses_initialized());
        assert!(!tracker.hints_editor_initialized());
        assert!(!tracker.solution_editor_initialized());
        assert!(!tracker.host_directive_initialized());

        tracker.mark_hints_editor_initialized();
        assert!(tracker.hints_editor_initialized());

        // Repeated marks are idempotent.
        tracker.mark_hints_editor_initialized();
        assert!(tracker.hints_editor_initialized());
    }

    #[test]
    fn listener_registration_needs_exactly_three_panels() {
        let mut tracker = ReadinessTracker::new();
        assert!(!tracker.can_register_event_listeners());

        // The three uninvolved panels alone change nothing.
        tracker.mark_content_editor_initialized();
        tracker.mark_hints_editor_initialized();
        tracker.mark_solution_editor_initialized();
        assert!(!tracker.can_register_event_listeners());

        tracker.mark_interaction_editor_initialized();
        tracker.mark_responses_initialized();
        assert!(!tracker.can_register_event_listeners());

        tracker.mark_host_directive_initialized();
        assert!(tracker.can_register_event_listeners());
    }

    #[test]
    fn predicate_ignores_uninvolved_panels() {
        let mut tracker = ReadinessTracker::new();
        tracker.mark_interaction_editor_initialized();
        tracker.mark_responses_initialized();
        tracker.mark_host_directive_initialized();

        // True with all other flags still false.
        assert!(tracker.can_register_event_listeners());
    }

    #[test]
    fn reset_clears_all_flags() {
        let mut tracker = ReadinessTracker::new();
        tracker.mark_interaction_editor_initialized();
        tracker.mark_responses_initialized();
        tracker.mark_host_directive_initialized();

        tracker.reset();

        assert!(!tracker.interaction_editor_initialized());
        assert!(!tracker.can_register_event_listeners());
    }
}
