use std::collections::HashMap;

/// Per-state solution validity, keyed by state name.
///
/// The solution editor owns the lifecycle: `init` when a lesson loads,
/// `update_validity` as solutions are edited, `delete` when a state is
/// removed. Everyone else only queries.
#[derive(Debug, Clone, Default)]
pub struct SolutionValidityTracker {
    validity: HashMap<String, bool>,
}

impl SolutionValidityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking the given states, all initially valid
    pub fn init(&mut self, state_names: &[String]) {
        self.validity = state_names.iter().map(|name| (name.clone(), true)).collect();
    }

    pub fn update_validity(&mut self, state_name: &str, valid: bool) {
        self.validity.insert(state_name.to_string(), valid);
    }

    /// Stops tracking a removed state
    pub fn delete(&mut self, state_name: &str) {
        self.validity.remove(state_name);
    }

    /// False for states that are not tracked
    pub fn is_solution_valid(&self, state_name: &str) -> bool {
        self.validity.get(state_name).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.validity.clear();
    }
}
