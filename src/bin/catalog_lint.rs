//! Lint a component catalog for internal consistency.
//!
//! Usage:
//!   catalog-lint
//!   catalog-lint --catalog catalogs/core_components_v1.json --tokens catalogs/ui_tokens_v1.json
//!   catalog-lint --json
//!
//! Runs the knowledge validators over every entry, resolves every token
//! reference against the allowed token set, and exits nonzero when any entry
//! carries errors. Meant for a build or test gate, so every violation is
//! reported, not just the first.

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use slotguard::{
    CatalogIndex, ComponentKnowledge, DEFAULT_CATALOG_PATH, DEFAULT_TOKENS_PATH, TokenValidator,
    state_coverage, validate_component_knowledge,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-lint")]
#[command(about = "Validate a component catalog and its token references")]
struct Cli {
    /// Catalog file to lint.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
    /// Token-set file the catalog's bindings must resolve against.
    #[arg(long, default_value = DEFAULT_TOKENS_PATH)]
    tokens: PathBuf,
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryReport {
    name: String,
    valid: bool,
    state_coverage: u8,
    errors: Vec<String>,
    warnings: Vec<String>,
    token_references: Vec<String>,
}

fn lint_entry(
    entry: &ComponentKnowledge,
    catalog_names: &BTreeSet<String>,
    tokens: &TokenValidator,
) -> EntryReport {
    let mut result = validate_component_knowledge(entry, Some(catalog_names));

    for (state, bindings) in &entry.token_bindings.states {
        let check = tokens.validate_token_bindings(bindings);
        for error in check.errors {
            result.push_error(format!("state '{state}': {error}"));
        }
        for warning in check.warnings {
            result.push_warning(format!("state '{state}': {warning}"));
        }
    }
    for (variant, states) in &entry.token_bindings.variants {
        for (state, bindings) in states {
            let check = tokens.validate_token_bindings(bindings);
            for error in check.errors {
                result.push_error(format!("variant '{variant}' state '{state}': {error}"));
            }
            for warning in check.warnings {
                result.push_warning(format!("variant '{variant}' state '{state}': {warning}"));
            }
        }
    }

    EntryReport {
        name: entry.name.clone(),
        valid: result.valid,
        state_coverage: state_coverage(entry),
        errors: result.errors,
        warnings: result.warnings,
        token_references: tokens.resolve_token_references(entry),
    }
}

fn print_text_report(reports: &[EntryReport]) {
    for report in reports {
        let verdict = if report.valid { "ok  " } else { "FAIL" };
        println!(
            "{verdict} {} (state coverage {}%)",
            report.name, report.state_coverage
        );
        for error in &report.errors {
            println!("      error: {error}");
        }
        for warning in &report.warnings {
            println!("      warning: {warning}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = CatalogIndex::load(&cli.catalog)?;
    let tokens = TokenValidator::load(&cli.tokens)?;
    let catalog_names = index.name_set();

    let reports: Vec<EntryReport> = index
        .components()
        .iter()
        .map(|entry| lint_entry(entry, &catalog_names, &tokens))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_text_report(&reports);
    }

    let error_count: usize = reports.iter().map(|r| r.errors.len()).sum();
    let failed = reports.iter().filter(|r| !r.valid).count();
    if error_count > 0 {
        bail!(
            "catalog lint failed: {error_count} error(s) across {failed} of {} entries",
            reports.len()
        );
    }

    Ok(())
}
