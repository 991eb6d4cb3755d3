use std::cell::RefCell;
use std::collections::HashMap;

use crate::event::{EditorEvent, EventHandler, EventKind};

/// A broadcast bus with one ordered subscriber list per named channel.
///
/// Delivery is synchronous: `emit` returns only after every subscriber on
/// the event's channel has run, in registration order. Publishing on a
/// channel whose delivery is already in progress panics; publishing on a
/// *different* channel from inside a handler is allowed, so handlers can
/// cascade across channels. A handler registered during delivery lands
/// after the existing registrants and does not see the in-flight event.
pub struct EventBus {
    channels: RefCell<HashMap<EventKind, Vec<Box<dyn EventHandler>>>>,
    delivering: RefCell<Vec<EventKind>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // When cloning, create a new empty event bus
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("channels", &format!("<{} channels>", self.channels.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus with no subscribers
    pub fn new() -> Self {
        Self {
            channels: RefCell::new(HashMap::new()),
            delivering: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to one channel
    pub fn subscribe(&self, kind: EventKind, handler: Box<dyn EventHandler>) {
        self.channels.borrow_mut().entry(kind).or_default().push(handler);
    }

    /// Emit an event to every subscriber on its channel, in registration
    /// order. Panics if that channel is already mid-delivery.
    pub fn emit(&self, event: EditorEvent) {
        let kind = event.kind();
        assert!(
            !self.delivering.borrow().contains(&kind),
            "re-entrant publish on channel {kind:?}"
        );
        let Some(mut handlers) = self.channels.borrow_mut().remove(&kind) else {
            return;
        };
        self.delivering.borrow_mut().push(kind);
        for handler in &mut handlers {
            handler.handle_event(&event);
        }
        self.delivering.borrow_mut().pop();

        // Anything that subscribed during delivery landed in the empty
        // slot; keep it, ordered after the original registrants.
        let mut channels = self.channels.borrow_mut();
        let slot = channels.entry(kind).or_default();
        handlers.append(slot);
        *slot = handlers;
    }

    /// Number of subscribers currently registered on a channel
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.channels.borrow().get(&kind).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recording_handler(seen: &Rc<RefCell<Vec<String>>>, tag: &str) -> Box<dyn EventHandler> {
        let seen = Rc::clone(seen);
        let tag = tag.to_string();
        Box::new(move |_: &EditorEvent| seen.borrow_mut().push(tag.clone()))
    }

    #[test]
    fn delivers_in_registration_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        bus.subscribe(EventKind::RefreshStateTranslation, recording_handler(&seen, "first"));
        bus.subscribe(EventKind::RefreshStateTranslation, recording_handler(&seen, "second"));
        bus.subscribe(EventKind::RefreshStateTranslation, recording_handler(&seen, "third"));

        bus.emit(EditorEvent::RefreshStateTranslation);

        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn only_the_event_channel_is_notified() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        bus.subscribe(EventKind::RefreshStateTranslation, recording_handler(&seen, "translation"));
        bus.subscribe(EventKind::ShowTranslationTabBusyModal, recording_handler(&seen, "modal"));

        bus.emit(EditorEvent::ShowTranslationTabBusyModal);

        assert_eq!(*seen.borrow(), vec!["modal"]);
    }

    #[test]
    fn emit_without_subscribers_is_a_no_op() {
        let bus = EventBus::new();
        bus.emit(EditorEvent::SaveOutcomeDestinationDetails);
        assert_eq!(bus.subscriber_count(EventKind::SaveOutcomeDestinationDetails), 0);
    }

    #[test]
    fn handler_subscribed_during_delivery_misses_the_in_flight_event() {
        let bus = Rc::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let late_seen = Rc::clone(&seen);
        let bus_for_handler = Rc::clone(&bus);
        bus.subscribe(
            EventKind::RefreshStateTranslation,
            Box::new(move |_: &EditorEvent| {
                let late_seen = Rc::clone(&late_seen);
                bus_for_handler.subscribe(
                    EventKind::RefreshStateTranslation,
                    Box::new(move |_: &EditorEvent| late_seen.borrow_mut().push("late")),
                );
            }),
        );

        bus.emit(EditorEvent::RefreshStateTranslation);
        assert!(seen.borrow().is_empty());

        // The late handler is in place for the next publish.
        bus.emit(EditorEvent::RefreshStateTranslation);
        assert_eq!(*seen.borrow(), vec!["late"]);
        assert_eq!(bus.subscriber_count(EventKind::RefreshStateTranslation), 3);
    }

    #[test]
    fn cross_channel_cascade_is_allowed() {
        let bus = Rc::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let bus_for_handler = Rc::clone(&bus);
        bus.subscribe(
            EventKind::StateNamesChanged,
            Box::new(move |_: &EditorEvent| {
                bus_for_handler.emit(EditorEvent::RefreshStateTranslation);
            }),
        );
        bus.subscribe(EventKind::RefreshStateTranslation, recording_handler(&seen, "cascaded"));

        bus.emit(EditorEvent::StateNamesChanged { state_names: vec![] });

        assert_eq!(*seen.borrow(), vec!["cascaded"]);
    }

    #[test]
    #[should_panic(expected = "re-entrant publish")]
    fn same_channel_reentrancy_panics() {
        let bus = Rc::new(EventBus::new());
        let bus_for_handler = Rc::clone(&bus);
        bus.subscribe(
            EventKind::RefreshStateTranslation,
            Box::new(move |_: &EditorEvent| {
                bus_for_handler.emit(EditorEvent::RefreshStateTranslation);
            }),
        );

        bus.emit(EditorEvent::RefreshStateTranslation);
    }
}
