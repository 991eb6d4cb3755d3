use serde::{Deserialize, Serialize};

/// A misconception attached to a skill, used when tagging answer groups
/// in question mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misconception {
    pub id: String,
    pub name: String,
    pub must_be_addressed: bool,
}
