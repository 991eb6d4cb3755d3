mod bus;
mod events;

pub use bus::EventBus;
pub use events::{EditorEvent, EventKind};

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

// Plain closures are handlers too.
impl<F: FnMut(&EditorEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
