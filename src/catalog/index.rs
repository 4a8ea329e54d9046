//! Indexed view of a component catalog instance.
//!
//! The index enforces the expected catalog schema version and provides fast
//! lookup by component name. It is intentionally strict about duplicates and
//! unknown schema versions so the placement engine cannot silently consume a
//! mismatched catalog. Authored order is preserved because fuzzy-suggestion
//! ranking breaks distance ties by catalog order.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{
    CatalogKey, CatalogMetadata, ComponentCatalog, ComponentCategory, ComponentKnowledge,
    ComponentTier,
};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

// One catalog format ships today; reject unexpected versions rather than
// risk validating against records with drifted semantics. Callers can widen
// the accepted set via env while keeping a sane default.
const DEFAULT_SCHEMA_VERSION: &str = "component_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "SLOTGUARD_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug)]
/// Component catalog plus a derived index keyed by component name.
pub struct CatalogIndex {
    catalog_key: CatalogKey,
    components: Vec<ComponentKnowledge>,
    by_name: BTreeMap<String, usize>,
}

impl CatalogIndex {
    /// Load and validate the catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog)
    }

    /// Validate an already-parsed catalog and build the index.
    ///
    /// Checks the schema version, catalog metadata, and component-name
    /// uniqueness. Taking the catalog as an explicit argument keeps every
    /// validator pure; there is no process-wide registry.
    pub fn from_catalog(catalog: ComponentCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog.catalog)?;
        let by_name = build_index(&catalog.components)?;
        Ok(Self {
            catalog_key: catalog.catalog.key,
            components: catalog.components,
            by_name,
        })
    }

    /// The catalog key declared in the loaded file.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Resolve a component by exact name.
    ///
    /// Returns `None` instead of erroring; the hallucination checker turns a
    /// miss into a structured result with suggestions.
    pub fn component(&self, name: &str) -> Option<&ComponentKnowledge> {
        self.by_name.get(name).map(|idx| &self.components[*idx])
    }

    /// Iterates component names in authored catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name.as_str())
    }

    /// All component names as an owned set, for `requires` resolution.
    pub fn name_set(&self) -> BTreeSet<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }

    /// Entries in authored catalog order.
    pub fn components(&self) -> &[ComponentKnowledge] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Entries with the given structural tier, in authored order.
    pub fn components_by_tier(&self, tier: &ComponentTier) -> Vec<&ComponentKnowledge> {
        self.components.iter().filter(|c| &c.tier == tier).collect()
    }

    /// Entries with the given functional category, in authored order.
    pub fn components_by_category(&self, category: &ComponentCategory) -> Vec<&ComponentKnowledge> {
        self.components
            .iter()
            .filter(|c| &c.category == category)
            .collect()
    }
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    validate_catalog_key(&meta.key)?;
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    if meta.labels.iter().any(|label| label.trim().is_empty()) {
        bail!("catalog.labels must not contain empty entries");
    }
    Ok(())
}

fn validate_catalog_key(key: &CatalogKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }

    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", key.0);
    }

    Ok(())
}

fn build_index(components: &[ComponentKnowledge]) -> Result<BTreeMap<String, usize>> {
    if components.is_empty() {
        bail!("catalog contains no components");
    }

    let mut map = BTreeMap::new();
    for (idx, entry) in components.iter().enumerate() {
        if entry.name.trim().is_empty() {
            bail!("encountered component with no name");
        }
        if map.insert(entry.name.clone(), idx).is_some() {
            bail!("duplicate component name {}", entry.name);
        }
    }
    Ok(map)
}
