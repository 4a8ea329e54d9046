//! Interaction-state completeness over the five required states.

use crate::catalog::{ComponentKnowledge, REQUIRED_STATES, TokenBindings};
use crate::validation::ValidationResult;

/// Every required state must be present, possibly empty. A present-but-empty
/// state only warns; the empty `default` state gets its own message because
/// `default` defines the baseline look.
pub fn validate_required_states(bindings: &TokenBindings) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for state in REQUIRED_STATES {
        match bindings.states.get(state) {
            None => result.push_error(format!(
                "tokenBindings.states is missing required state '{state}'"
            )),
            Some(map) if map.is_empty() => {
                if state == "default" {
                    result.push_warning(
                        "state 'default' is empty; the baseline appearance is undefined",
                    );
                } else {
                    result.push_warning(format!("state '{state}' is present but empty"));
                }
            }
            Some(_) => {}
        }
    }

    result
}

/// Percentage of required states carrying at least one binding.
pub fn state_coverage(entry: &ComponentKnowledge) -> u8 {
    let bound = REQUIRED_STATES
        .iter()
        .filter(|state| {
            entry
                .token_bindings
                .states
                .get(**state)
                .is_some_and(|map| !map.is_empty())
        })
        .count();
    (bound * 100 / REQUIRED_STATES.len()) as u8
}
