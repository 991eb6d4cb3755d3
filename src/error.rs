use thiserror::Error;

/// Errors that can occur while mutating the session store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// An interaction sub-field setter was called before `set_interaction`
    /// established a snapshot to mutate
    #[error("cannot mutate interaction before one is set")]
    InteractionNotSet,
}
