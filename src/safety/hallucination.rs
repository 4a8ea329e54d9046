//! Component-name validation against the catalog, with fuzzy suggestions.
//!
//! An AI-proposed name that is absent from the catalog is a hallucination.
//! The checker reports it as data (error text, code, near-miss suggestions)
//! instead of failing, and preserves the original untrimmed input for
//! diagnostics. Matching happens against the trimmed name.

use crate::catalog::CatalogIndex;
use crate::safety::HALLUCINATION_ERROR_CODE;
use serde::Serialize;

/// Most suggestions a single check will surface.
pub const MAX_SUGGESTIONS: usize = 3;

/// Outcome of one component-name check.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallucinationCheck {
    pub is_valid: bool,
    /// The proposed name exactly as supplied, untrimmed; `None` when the
    /// candidate carried no name at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl HallucinationCheck {
    fn valid(name: &str) -> Self {
        Self {
            is_valid: true,
            component_name: Some(name.to_string()),
            error: None,
            error_code: None,
            suggestions: Vec::new(),
        }
    }

    fn invalid(name: Option<&str>, error: String, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: false,
            component_name: name.map(str::to_string),
            error: Some(error),
            error_code: Some(HALLUCINATION_ERROR_CODE),
            suggestions,
        }
    }
}

/// Validates proposed component names against one catalog.
///
/// Borrows the catalog explicitly so checks stay pure and independently
/// testable; there is no ambient registry.
pub struct HallucinationChecker<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> HallucinationChecker<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    /// Check one proposed name. Never fails; a missing, blank, or unknown
    /// name comes back as a structured invalid result.
    pub fn check_component(&self, name: Option<&str>) -> HallucinationCheck {
        let Some(raw) = name else {
            return HallucinationCheck::invalid(
                None,
                "Component name is required".to_string(),
                Vec::new(),
            );
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return HallucinationCheck::invalid(
                Some(raw),
                "Component name cannot be empty".to_string(),
                Vec::new(),
            );
        }

        if self.catalog.component(trimmed).is_some() {
            return HallucinationCheck::valid(raw);
        }

        let suggestions = self.suggestions(trimmed, MAX_SUGGESTIONS);
        let available = self.catalog.names().collect::<Vec<_>>().join(", ");
        HallucinationCheck::invalid(
            Some(raw),
            format!("Component \"{raw}\" not found in catalog. Available components: {available}"),
            suggestions,
        )
    }

    /// Rank catalog names by case-insensitive edit distance to the trimmed
    /// input and return the closest `max`, subject to the adaptive cap.
    ///
    /// The sort is stable, so names at equal distance keep catalog order.
    pub fn suggestions(&self, name: &str, max: usize) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        let cap = suggestion_distance_cap(name.trim());

        let mut ranked: Vec<(usize, &str)> = Vec::new();
        for candidate in self.catalog.names() {
            let distance = strsim::levenshtein(&needle, &candidate.to_lowercase());
            if distance <= cap {
                ranked.push((distance, candidate));
            }
        }
        ranked.sort_by_key(|(distance, _)| *distance);
        ranked
            .into_iter()
            .take(max)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Boolean shortcut with the same missing/blank handling as
    /// `check_component`.
    pub fn is_component_valid(&self, name: Option<&str>) -> bool {
        let Some(raw) = name else {
            return false;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.catalog.component(trimmed).is_some()
    }
}

// Short inputs get a fixed allowance of 3 edits; longer inputs scale with
// half their length, capped at 4 so wildly different names never match.
fn suggestion_distance_cap(name: &str) -> usize {
    let len = name.chars().count();
    if len <= 3 { 3 } else { 4.min(len.div_ceil(2)) }
}
