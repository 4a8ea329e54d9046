//! Constraint consistency: excluded slots, self-conflicts, dangling
//! `requires` references.

use crate::catalog::Constraints;
use crate::validation::ValidationResult;
use std::collections::{BTreeMap, BTreeSet};

/// Validate one entry's constraints against its own affinities and,
/// optionally, the full catalog name set.
///
/// The `requires` check is skipped when `catalog_names` is `None` so the
/// validator stays usable on a single entry without the rest of the catalog.
pub fn validate_constraints(
    slot_affinity: &BTreeMap<String, f64>,
    constraints: &Constraints,
    component_name: Option<&str>,
    catalog_names: Option<&BTreeSet<String>>,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for slot in &constraints.excluded_slots {
        if let Some(score) = slot_affinity.get(slot) {
            if *score != 0.0 {
                result.push_error(format!(
                    "slot '{slot}' is listed in excludedSlots but has slotAffinity {score}; excluded slots must stay at 0.0"
                ));
            }
        }
    }

    if let Some(name) = component_name {
        if constraints.conflicts_with.iter().any(|c| c == name) {
            result.push_error(format!(
                "conflictsWith must not contain the component itself ('{name}')"
            ));
        }
    }

    if let Some(names) = catalog_names {
        for required in &constraints.requires {
            if !names.contains(required) {
                result.push_error(format!(
                    "requires references unknown component '{required}'"
                ));
            }
        }
    }

    result
}
