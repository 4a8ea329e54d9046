//! Component-knowledge records and the catalog file format.
//!
//! A catalog file (for example `catalogs/core_components_v1.json`) carries a
//! `schema_version` marker, catalog metadata, and one `ComponentKnowledge`
//! record per component. Field names stay camelCase on the wire so files
//! written by the authoring toolchain parse unchanged.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Interaction states every component must bind, in canonical order.
pub const REQUIRED_STATES: [&str; 5] = ["default", "hover", "focus", "active", "disabled"];

/// Structural tier of a component. Open-ended so a newer catalog can carry
/// tiers this build does not know about without failing to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentTier {
    Atom,
    Molecule,
    Organism,
    Other(String),
}

impl ComponentTier {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentTier::Atom => "atom",
            ComponentTier::Molecule => "molecule",
            ComponentTier::Organism => "organism",
            ComponentTier::Other(value) => value,
        }
    }
}

impl From<String> for ComponentTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "atom" => ComponentTier::Atom,
            "molecule" => ComponentTier::Molecule,
            "organism" => ComponentTier::Organism,
            _ => ComponentTier::Other(value),
        }
    }
}

impl From<ComponentTier> for String {
    fn from(value: ComponentTier) -> Self {
        value.as_str().to_string()
    }
}

/// Functional tag of a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentCategory {
    Action,
    Input,
    Container,
    Display,
    Navigation,
    Other(String),
}

impl ComponentCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentCategory::Action => "action",
            ComponentCategory::Input => "input",
            ComponentCategory::Container => "container",
            ComponentCategory::Display => "display",
            ComponentCategory::Navigation => "navigation",
            ComponentCategory::Other(value) => value,
        }
    }
}

impl From<String> for ComponentCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "action" => ComponentCategory::Action,
            "input" => ComponentCategory::Input,
            "container" => ComponentCategory::Container,
            "display" => ComponentCategory::Display,
            "navigation" => ComponentCategory::Navigation,
            _ => ComponentCategory::Other(value),
        }
    }
}

impl From<ComponentCategory> for String {
    fn from(value: ComponentCategory) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualImpact {
    Prominent,
    Neutral,
    Subtle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticDescription {
    pub purpose: String,
    pub visual_impact: VisualImpact,
    pub complexity: Complexity,
}

/// Co-occurrence and placement constraints for one component.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub conflicts_with: Vec<String>,
    #[serde(default)]
    pub excluded_slots: Vec<String>,
}

/// Style property name to symbolic token name, for one interaction state.
pub type StateBindings = BTreeMap<String, String>;

/// Per-state token bindings plus optional named variants that may override
/// any subset of the base states.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBindings {
    #[serde(default)]
    pub states: BTreeMap<String, StateBindings>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, BTreeMap<String, StateBindings>>,
}

/// One catalog entry: everything the placement engine and the build-time
/// validators know about a component.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentKnowledge {
    pub name: String,
    #[serde(rename = "type")]
    pub tier: ComponentTier,
    pub category: ComponentCategory,
    #[serde(default)]
    pub slot_affinity: BTreeMap<String, f64>,
    pub semantic_description: SemanticDescription,
    #[serde(default)]
    pub constraints: Constraints,
    pub token_bindings: TokenBindings,
}

/// Key identifying a catalog instance, as declared in the file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogKey(pub String);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub components: Vec<ComponentKnowledge>,
}

/// Parse a component catalog from disk. Schema-version and consistency
/// checks happen in `CatalogIndex`; this only reads and deserializes.
pub fn load_catalog_from_path(path: &Path) -> Result<ComponentCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading component catalog {}", path.display()))?;
    let catalog: ComponentCatalog = serde_json::from_str(&data)
        .with_context(|| format!("parsing component catalog {}", path.display()))?;
    Ok(catalog)
}
