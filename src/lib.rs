#![warn(clippy::all, rust_2018_idioms)]

pub mod answer_choices;
pub mod audio;
pub mod error;
pub mod event;
pub mod model;
pub mod session;
pub mod validity;

pub use answer_choices::{derive_answer_choices, AnswerChoice, ChoiceValue};
pub use audio::{validate_audio_upload, AudioUpload};
pub use error::EditorError;
pub use event::{EditorEvent, EventBus, EventHandler, EventKind};
pub use model::{Interaction, State};
pub use session::EditorSession;
pub use session::ReadinessTracker;
pub use session::SessionStore;
pub use validity::SolutionValidityTracker;
