//! Slot-affinity range and balance checks.

use crate::validation::ValidationResult;
use std::collections::BTreeMap;

/// Scores above this are suspicious: the component will win nearly every
/// ranking for that slot.
pub const OVER_SELECTION_CEILING: f64 = 0.95;

/// Entries whose scores sum below this are unlikely to ever be placed.
pub const UNDER_UTILIZATION_FLOOR: f64 = 0.5;

/// Validate every (slot, score) pair of one entry. Out-of-range scores are
/// errors; over-selection and under-utilization risks are warnings.
pub fn validate_slot_affinity(slot_affinity: &BTreeMap<String, f64>) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (slot, score) in slot_affinity {
        if !(0.0..=1.0).contains(score) {
            result.push_error(format!(
                "slotAffinity for slot '{slot}' must be within 0.0..=1.0, got {score}"
            ));
        } else if *score > OVER_SELECTION_CEILING {
            result.push_warning(format!(
                "slotAffinity for slot '{slot}' is {score}, above {OVER_SELECTION_CEILING}; component risks over-selection"
            ));
        }
    }

    let total: f64 = slot_affinity.values().sum();
    if total < UNDER_UTILIZATION_FLOOR {
        result.push_warning(format!(
            "total slotAffinity {total} is below {UNDER_UTILIZATION_FLOOR}; component risks under-utilization"
        ));
    }

    result
}
