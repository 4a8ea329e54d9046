//! Symbolic token-reference resolution.
//!
//! Style bindings must reference named design tokens, never literal values.
//! The validator owns the allowed token-name set (supplied by the token
//! source at build time) and reports unknown references with near-miss
//! suggestions so typos surface as one-line fixes.

use crate::catalog::{ComponentKnowledge, StateBindings};
use crate::validation::ValidationResult;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Version marker for token-set files.
pub const TOKENS_SCHEMA_VERSION: &str = "ui_tokens_v1";

// Suggestions stay within 3 edits; anything farther is noise, not a typo.
const TOKEN_SUGGESTION_DISTANCE_CAP: usize = 3;
const MAX_TOKEN_SUGGESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
struct TokenFile {
    schema_version: String,
    tokens: Vec<String>,
}

/// Parse a token-set file from disk and verify its version marker.
pub fn load_tokens_from_path(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading token set {}", path.display()))?;
    let file: TokenFile = serde_json::from_str(&data)
        .with_context(|| format!("parsing token set {}", path.display()))?;

    if file.schema_version != TOKENS_SCHEMA_VERSION {
        bail!(
            "unsupported token set version '{}', expected {}",
            file.schema_version,
            TOKENS_SCHEMA_VERSION
        );
    }
    if file.tokens.iter().any(|t| t.trim().is_empty()) {
        bail!("token set {} contains empty token names", path.display());
    }
    Ok(file.tokens)
}

/// Validates token references against the allowed token-name set.
pub struct TokenValidator {
    token_names: BTreeSet<String>,
}

impl TokenValidator {
    pub fn new(token_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            token_names: token_names.into_iter().collect(),
        }
    }

    /// Load the allowed set from a token-set file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(load_tokens_from_path(path)?))
    }

    /// Check a single token name. A miss is one membership error plus, when
    /// near misses exist, a `Did you mean` warning; suggestions never add
    /// errors.
    pub fn validate_token(&self, token: &str) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if !self.token_names.contains(token) {
            result.push_error(format!("token '{token}' not found in the allowed token set"));
            let suggestions = self.suggest_similar(token);
            if !suggestions.is_empty() {
                result.push_warning(format!("Did you mean: {}?", suggestions.join(", ")));
            }
        }

        result
    }

    /// Validate every non-empty property value of one state's binding map.
    pub fn validate_token_bindings(&self, bindings: &StateBindings) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for (property, token) in bindings {
            if token.is_empty() {
                continue;
            }
            let check = self.validate_token(token);
            if !check.valid {
                result.push_error(format!("property '{property}': {}", check.errors.join(", ")));
                for warning in check.warnings {
                    result.push_warning(warning);
                }
            }
        }

        result
    }

    /// Every token name one entry references, across all states and all
    /// variant-state overrides: de-duplicated, sorted ascending.
    pub fn resolve_token_references(&self, entry: &ComponentKnowledge) -> Vec<String> {
        let mut references: BTreeSet<String> = BTreeSet::new();

        for bindings in entry.token_bindings.states.values() {
            for token in bindings.values() {
                if !token.is_empty() {
                    references.insert(token.clone());
                }
            }
        }

        for variant_states in entry.token_bindings.variants.values() {
            for bindings in variant_states.values() {
                for token in bindings.values() {
                    if !token.is_empty() {
                        references.insert(token.clone());
                    }
                }
            }
        }

        references.into_iter().collect()
    }

    /// Up to 3 allowed names within 3 edits, closest first; ties keep the
    /// set's sorted order.
    fn suggest_similar(&self, input: &str) -> Vec<String> {
        let mut ranked: Vec<(usize, &str)> = Vec::new();
        for name in &self.token_names {
            let distance = strsim::levenshtein(input, name);
            if distance <= TOKEN_SUGGESTION_DISTANCE_CAP {
                ranked.push((distance, name));
            }
        }
        ranked.sort_by_key(|(distance, _)| *distance);
        ranked
            .into_iter()
            .take(MAX_TOKEN_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
