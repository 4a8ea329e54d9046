// Build-time catalog consistency: states, affinities, constraints, and the
// entry-level orchestration over the bundled catalog.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use serde_json::json;
use slotguard::{
    ComponentKnowledge, state_coverage, validate_component_knowledge, validate_required_states,
};

use common::{entry_json, real_index, sample_entry};

#[test]
fn every_bundled_entry_validates_cleanly() -> Result<()> {
    let index = real_index();
    let names = index.name_set();
    for entry in index.components() {
        let result = validate_component_knowledge(entry, Some(&names));
        assert!(
            result.valid,
            "entry '{}' should be valid, got errors: {:?}",
            entry.name, result.errors
        );
    }
    Ok(())
}

#[test]
fn bundled_entries_have_full_state_coverage() {
    let index = real_index();
    for entry in index.components() {
        let result = validate_required_states(&entry.token_bindings);
        assert!(result.valid, "entry '{}' missing a state", entry.name);
    }

    let button = index.component("Button").expect("Button present");
    assert_eq!(state_coverage(button), 100);

    // Card leaves `active` empty, Alert leaves hover/focus/active empty.
    let card = index.component("Card").expect("Card present");
    assert_eq!(state_coverage(card), 80);
    let alert = index.component("Alert").expect("Alert present");
    assert_eq!(state_coverage(alert), 40);
}

#[test]
fn missing_state_is_an_error_empty_state_only_warns() {
    let mut entry = sample_entry("Widget");
    entry.token_bindings.states.remove("hover");
    let result = validate_required_states(&entry.token_bindings);
    assert!(!result.valid);
    assert!(result.errors[0].contains("missing required state 'hover'"));

    let mut entry = sample_entry("Widget");
    entry
        .token_bindings
        .states
        .insert("focus".to_string(), Default::default());
    let result = validate_required_states(&entry.token_bindings);
    assert!(result.valid);
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.contains("state 'focus' is present but empty"))
    );
    assert_eq!(state_coverage(&entry), 80);
}

#[test]
fn empty_default_state_gets_its_own_warning() {
    let mut entry = sample_entry("Widget");
    entry
        .token_bindings
        .states
        .insert("default".to_string(), Default::default());
    let result = validate_required_states(&entry.token_bindings);
    assert!(result.valid);
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.contains("baseline appearance is undefined"))
    );
}

#[test]
fn short_purpose_and_blank_name_invalidate_the_entry() {
    let mut entry = sample_entry("Widget");
    entry.semantic_description.purpose = "Too short".to_string();
    let result = validate_component_knowledge(&entry, None);
    assert!(!result.valid);
    assert!(result.errors.iter().any(|e| e.contains("at least 20")));

    let entry = sample_entry(" ");
    let result = validate_component_knowledge(&entry, None);
    assert!(!result.valid);
    assert!(result.errors.iter().any(|e| e.contains("name")));
}

#[test]
fn out_of_range_affinity_surfaces_through_entry_validation() {
    let mut entry = sample_entry("Widget");
    entry.slot_affinity.insert("main".to_string(), 1.5);
    let result = validate_component_knowledge(&entry, None);
    assert!(!result.valid);
    assert!(result.errors.iter().any(|e| e.contains("0.0..=1.0")));
}

#[test]
fn excluded_slot_with_nonzero_affinity_invalidates() -> Result<()> {
    let mut value = entry_json("Widget");
    value["constraints"]["excludedSlots"] = json!(["main"]);
    let entry: ComponentKnowledge = serde_json::from_value(value)?;
    // Fixture affinity puts main at 0.6.
    let result = validate_component_knowledge(&entry, None);
    assert!(!result.valid);
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.contains("excludedSlots") && e.contains("main"))
    );
    Ok(())
}

#[test]
fn modal_exclusions_hold_in_the_bundled_catalog() {
    let index = real_index();
    let modal = index.component("Modal").expect("Modal present");
    for slot in &modal.constraints.excluded_slots {
        assert_eq!(modal.slot_affinity.get(slot), Some(&0.0), "slot {slot}");
    }
    assert_eq!(modal.slot_affinity.get("overlay"), Some(&1.0));
}

#[test]
fn dangling_requires_is_caught_with_the_catalog_name_set() -> Result<()> {
    let index = real_index();
    let names = index.name_set();

    let mut value = entry_json("Widget");
    value["constraints"]["requires"] = json!(["GhostComponent"]);
    let entry: ComponentKnowledge = serde_json::from_value(value)?;

    let standalone = validate_component_knowledge(&entry, None);
    assert!(standalone.valid);

    let checked = validate_component_knowledge(&entry, Some(&names));
    assert!(!checked.valid);
    assert!(checked.errors.iter().any(|e| e.contains("GhostComponent")));
    Ok(())
}

#[test]
fn warnings_accumulate_without_invalidating() {
    let mut entry = sample_entry("Widget");
    // High single-slot affinity plus a low total triggers two warnings.
    entry.slot_affinity.clear();
    entry.slot_affinity.insert("main".to_string(), 0.98);
    entry.slot_affinity.insert("footer".to_string(), -0.5);

    let result = validate_component_knowledge(&entry, None);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(!result.warnings.is_empty());
}
