//! Placement-safety and catalog-consistency checks for AI-assisted page
//! composition.
//!
//! The placement engine proposes a component name and quality score per
//! layout slot; `safety` validates those proposals at runtime without ever
//! failing, and `knowledge` keeps the authored catalog self-consistent in a
//! build or test gate. Everything operates on an explicitly supplied
//! catalog; this crate holds no ambient state.

pub mod catalog;
pub mod knowledge;
pub mod safety;
pub mod validation;

pub use catalog::{
    CatalogIndex, CatalogKey, CatalogMetadata, Complexity, ComponentCatalog, ComponentCategory,
    ComponentKnowledge, ComponentTier, Constraints, DEFAULT_CATALOG_PATH, DEFAULT_TOKENS_PATH,
    REQUIRED_STATES, SemanticDescription, StateBindings, TokenBindings, VisualImpact,
    load_catalog_from_path,
};
pub use knowledge::{
    TokenValidator, load_tokens_from_path, state_coverage, validate_component_knowledge,
    validate_constraints, validate_required_states, validate_slot_affinity,
};
pub use safety::{
    BELOW_THRESHOLD_ERROR_CODE, ComponentValidator, FallbackAssignment, FallbackDetails,
    FluidFallback, HALLUCINATION_ERROR_CODE, HallucinationCheck, HallucinationChecker,
    MAX_SUGGESTIONS, PLACEMENT_SCORE_THRESHOLD, PlacementMetadata, SlotRole, ThresholdCheck,
    ThresholdChecker, is_fallback_metadata,
};
pub use validation::ValidationResult;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One proposed placement from the engine: a slot, its semantic role, the
/// proposed component, and the ranking score. Created per request and not
/// retained here.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementCandidate {
    pub target_slot: String,
    pub slot_role: safety::SlotRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    pub score: f64,
}

/// Parse placement candidates from a JSON payload: a single object, an
/// array, or newline-delimited objects.
pub fn parse_candidate_stream(input: &str) -> Result<Vec<PlacementCandidate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No input provided on stdin");
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<_>, _>>()
                .context("Unable to parse JSON array of placement candidates"),
            Value::Object(_) => serde_json::from_value(value)
                .map(|candidate| vec![candidate])
                .context("Unable to parse placement candidate"),
            _ => bail!("Unsupported JSON input; expected object or array"),
        };
    }

    let mut candidates = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let candidate: PlacementCandidate = serde_json::from_str(line)
            .with_context(|| format!("Unable to parse placement candidate from line {}", idx + 1))?;
        candidates.push(candidate);
    }

    if candidates.is_empty() {
        bail!("No placement candidates found in input stream");
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_object_array_and_ndjson() {
        let object = r#"{"targetSlot":"main","slotRole":"primary-content","componentName":"Card","score":0.9}"#;
        let parsed = parse_candidate_stream(object).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].component_name.as_deref(), Some("Card"));

        let array = format!("[{object},{object}]");
        assert_eq!(parse_candidate_stream(&array).unwrap().len(), 2);

        let ndjson = format!("{object}\n\n{object}\n");
        let parsed = parse_candidate_stream(&ndjson).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].slot_role, safety::SlotRole::PrimaryContent);
    }

    #[test]
    fn candidate_may_omit_component_name() {
        let parsed = parse_candidate_stream(
            r#"{"targetSlot":"sidebar","slotRole":"navigation","score":0.2}"#,
        )
        .unwrap();
        assert!(parsed[0].component_name.is_none());
    }

    #[test]
    fn rejects_empty_and_scalar_input() {
        assert!(parse_candidate_stream("").is_err());
        assert!(parse_candidate_stream("   \n ").is_err());
        assert!(parse_candidate_stream("42").is_err());
    }
}
