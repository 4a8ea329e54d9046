//! Entry-level orchestration of the knowledge rules.

use crate::catalog::ComponentKnowledge;
use crate::knowledge::{validate_constraints, validate_required_states, validate_slot_affinity};
use crate::validation::ValidationResult;
use std::collections::BTreeSet;

/// A purpose shorter than this cannot usefully steer placement ranking.
pub const MIN_PURPOSE_LENGTH: usize = 20;

/// Validate one catalog entry end to end: identity fields, interaction
/// states, slot affinities, and constraints. Pass the full catalog name set
/// to also resolve `requires` references; omit it for standalone entries.
///
/// Valid iff the combined error count is zero; warnings never affect
/// validity.
pub fn validate_component_knowledge(
    entry: &ComponentKnowledge,
    catalog_names: Option<&BTreeSet<String>>,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if entry.name.trim().is_empty() {
        result.push_error("component name must not be empty");
    }
    if entry.semantic_description.purpose.chars().count() < MIN_PURPOSE_LENGTH {
        result.push_error(format!(
            "semanticDescription.purpose must be at least {MIN_PURPOSE_LENGTH} characters"
        ));
    }

    result.merge(validate_required_states(&entry.token_bindings));
    result.merge(validate_slot_affinity(&entry.slot_affinity));
    result.merge(validate_constraints(
        &entry.slot_affinity,
        &entry.constraints,
        Some(&entry.name),
        catalog_names,
    ));

    result
}
