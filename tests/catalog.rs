// Catalog loading, schema-version enforcement, and index lookup guard rails.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use serde_json::json;
use slotguard::{CatalogIndex, ComponentCategory, ComponentTier, load_catalog_from_path};
use tempfile::NamedTempFile;

use common::{catalog_json, catalog_path, entry_json, real_index, sample_index};

#[test]
fn load_real_catalog_smoke() -> Result<()> {
    let catalog = load_catalog_from_path(&catalog_path())?;
    assert_eq!(catalog.schema_version, "component_catalog_v1");
    assert_eq!(catalog.catalog.key.0, "core_components_v1");
    assert_eq!(catalog.components.len(), 20);
    for entry in &catalog.components {
        assert!(!entry.name.trim().is_empty());
        assert!(
            !matches!(entry.tier, ComponentTier::Other(ref v) if v.is_empty()),
            "tier should not be empty"
        );
        assert!(
            !matches!(entry.category, ComponentCategory::Other(ref v) if v.is_empty()),
            "category should not be empty"
        );
    }
    Ok(())
}

#[test]
fn index_resolves_known_names_and_misses_unknown() -> Result<()> {
    let index = real_index();
    assert_eq!(index.len(), 20);
    assert!(!index.is_empty());

    let button = index.component("Button").expect("Button present");
    assert_eq!(button.tier, ComponentTier::Atom);
    assert_eq!(button.category, ComponentCategory::Action);
    assert!(index.component("NotAComponent").is_none());
    // Lookup is exact; no case folding at the index level.
    assert!(index.component("button").is_none());
    Ok(())
}

#[test]
fn index_preserves_authored_order() -> Result<()> {
    let index = real_index();
    let names: Vec<&str> = index.names().collect();
    assert_eq!(names.first(), Some(&"Button"));
    assert_eq!(names.last(), Some(&"Avatar"));
    assert_eq!(names.len(), index.name_set().len());
    Ok(())
}

#[test]
fn tier_and_category_filters_match_catalog_contents() -> Result<()> {
    let index = real_index();
    let organisms = index.components_by_tier(&ComponentTier::Organism);
    assert_eq!(organisms.len(), 1);
    assert_eq!(organisms[0].name, "Modal");

    let navigation = index.components_by_category(&ComponentCategory::Navigation);
    assert!(navigation.iter().any(|c| c.name == "Tabs"));
    Ok(())
}

#[test]
fn index_rejects_unknown_schema_version() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(
        &mut file,
        &json!({
            "schema_version": "component_catalog_v999",
            "catalog": {"key": "fixture_catalog_v1", "title": "fixture catalog"},
            "components": [entry_json("Button")]
        }),
    )?;
    assert!(CatalogIndex::load(file.path()).is_err());
    Ok(())
}

#[test]
fn index_rejects_duplicate_component_names() {
    let err = sample_index(&["Button", "Card", "Button"]).unwrap_err();
    assert!(err.to_string().contains("duplicate component name Button"));
}

#[test]
fn index_rejects_empty_catalog_and_empty_names() -> Result<()> {
    assert!(sample_index(&[]).is_err());

    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, &catalog_json(&[entry_json("   ")]))?;
    assert!(CatalogIndex::load(file.path()).is_err());
    Ok(())
}

#[test]
fn index_rejects_malformed_catalog_key() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(
        &mut file,
        &json!({
            "schema_version": "component_catalog_v1",
            "catalog": {"key": "bad key with spaces", "title": "fixture catalog"},
            "components": [entry_json("Button")]
        }),
    )?;
    assert!(CatalogIndex::load(file.path()).is_err());
    Ok(())
}
