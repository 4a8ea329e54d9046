//! Check placement candidates against the catalog and the quality floor.
//!
//! Usage:
//!   placement-check < candidates.json
//!   placement-check --file candidates.json --catalog catalogs/core_components_v1.json
//!
//! Accepts a single candidate object, a JSON array, or NDJSON. Emits one
//! decision per candidate: the proposed component when both checks pass, or
//! a fluid-fallback substitution carrying audit metadata. A bad candidate is
//! never fatal; only unreadable input or an invalid catalog aborts.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use slotguard::safety::{FluidFallback, HallucinationChecker, PlacementMetadata, ThresholdChecker};
use slotguard::{
    CatalogIndex, DEFAULT_CATALOG_PATH, PlacementCandidate, SlotRole, parse_candidate_stream,
};
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "placement-check")]
#[command(about = "Run hallucination and threshold checks over placement candidates")]
struct Cli {
    /// Catalog the candidates are checked against.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
}

/// Per-candidate outcome, in input order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlacementDecision {
    target_slot: String,
    slot_role: SlotRole,
    /// Component to place: the proposal when accepted, otherwise the
    /// role's fallback.
    component_name: String,
    metadata: PlacementMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_warning: Option<String>,
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for placement candidates")?;
    }
    Ok(buf)
}

fn decide(
    candidate: &PlacementCandidate,
    checker: &HallucinationChecker<'_>,
    threshold: &ThresholdChecker,
    fallback: &FluidFallback,
) -> PlacementDecision {
    let name_check = checker.check_component(candidate.component_name.as_deref());
    let score_check = threshold.check_threshold(candidate.score);

    if name_check.is_valid && score_check.passes {
        return PlacementDecision {
            target_slot: candidate.target_slot.clone(),
            slot_role: candidate.slot_role,
            component_name: candidate
                .component_name
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            metadata: PlacementMetadata::Normal,
            name_error: None,
            suggestions: Vec::new(),
            score_warning: None,
        };
    }

    // Either failure routes to the fallback; the audit metadata records
    // whichever causes applied.
    let original_score = if score_check.passes {
        None
    } else {
        Some(candidate.score)
    };
    let original_name = if name_check.is_valid {
        None
    } else {
        candidate.component_name.as_deref()
    };
    let assignment = fallback.assign_fallback(
        &candidate.target_slot,
        candidate.slot_role,
        original_score,
        original_name,
    );

    PlacementDecision {
        target_slot: assignment.target_slot,
        slot_role: assignment.slot_role,
        component_name: assignment.component_name,
        metadata: assignment.metadata,
        name_error: name_check.error,
        suggestions: name_check.suggestions,
        score_warning: score_check.warning,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = CatalogIndex::load(&cli.catalog)?;
    let checker = HallucinationChecker::new(&index);
    let threshold = ThresholdChecker::new();
    let fallback = FluidFallback::new();

    let input = read_input(cli.file)?;
    let candidates = parse_candidate_stream(&input)?;

    let decisions: Vec<PlacementDecision> = candidates
        .iter()
        .map(|candidate| decide(candidate, &checker, &threshold, &fallback))
        .collect();

    println!("{}", serde_json::to_string_pretty(&decisions)?);
    Ok(())
}
