//! Component catalog wiring.
//!
//! This module wraps component catalogs on disk (for example
//! `catalogs/core_components_v1.json`) so callers can load a validated
//! snapshot and resolve components by name. Types here mirror the catalog
//! file fields; callers use `CatalogIndex` for lookups.

pub mod index;
pub mod model;

pub use index::CatalogIndex;
pub use model::{
    CatalogKey, CatalogMetadata, Complexity, ComponentCatalog, ComponentCategory,
    ComponentKnowledge, ComponentTier, Constraints, REQUIRED_STATES, SemanticDescription,
    StateBindings, TokenBindings, VisualImpact,
};

pub use model::load_catalog_from_path;

/// Default relative path to the bundled component catalog.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/core_components_v1.json";

/// Default relative path to the bundled token-name set.
pub const DEFAULT_TOKENS_PATH: &str = "catalogs/ui_tokens_v1.json";
