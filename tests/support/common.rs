#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use slotguard::{CatalogIndex, ComponentCatalog, ComponentKnowledge};
use std::path::PathBuf;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_path() -> PathBuf {
    repo_root().join("catalogs/core_components_v1.json")
}

pub fn tokens_path() -> PathBuf {
    repo_root().join("catalogs/ui_tokens_v1.json")
}

/// A fully valid entry fixture: all five states bound, in-range affinities,
/// a purpose long enough to pass the length check.
pub fn entry_json(name: &str) -> Value {
    json!({
        "name": name,
        "type": "atom",
        "category": "display",
        "slotAffinity": {"main": 0.6, "sidebar": 0.3},
        "semanticDescription": {
            "purpose": "Fixture component used across the validation tests.",
            "visualImpact": "neutral",
            "complexity": "low"
        },
        "constraints": {"requires": [], "conflictsWith": [], "excludedSlots": []},
        "tokenBindings": {
            "states": {
                "default": {"backgroundColor": "color-surface"},
                "hover": {"backgroundColor": "color-surface-hover"},
                "focus": {"borderColor": "color-focus-ring"},
                "active": {"backgroundColor": "color-surface-active"},
                "disabled": {"opacity": "opacity-disabled"}
            }
        }
    })
}

pub fn sample_entry(name: &str) -> ComponentKnowledge {
    serde_json::from_value(entry_json(name)).expect("entry fixture parses")
}

pub fn catalog_json(components: &[Value]) -> Value {
    json!({
        "schema_version": "component_catalog_v1",
        "catalog": {"key": "fixture_catalog_v1", "title": "fixture catalog", "labels": ["test"]},
        "components": components
    })
}

/// Build an in-memory index over fixture entries with the given names.
pub fn sample_index(names: &[&str]) -> Result<CatalogIndex> {
    let components: Vec<Value> = names.iter().map(|name| entry_json(name)).collect();
    let catalog: ComponentCatalog = serde_json::from_value(catalog_json(&components))
        .context("fixture catalog should deserialize")?;
    CatalogIndex::from_catalog(catalog)
}

pub fn real_index() -> CatalogIndex {
    CatalogIndex::load(&catalog_path()).expect("bundled catalog loads")
}
