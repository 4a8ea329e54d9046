//! Batch/boolean convenience wrapper over the hallucination checker.

use crate::catalog::CatalogIndex;
use crate::safety::hallucination::{HallucinationCheck, HallucinationChecker, MAX_SUGGESTIONS};

/// Thin façade for callers that validate many proposed names at once.
pub struct ComponentValidator<'a> {
    checker: HallucinationChecker<'a>,
}

impl<'a> ComponentValidator<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self {
            checker: HallucinationChecker::new(catalog),
        }
    }

    pub fn validate_component(&self, name: Option<&str>) -> HallucinationCheck {
        self.checker.check_component(name)
    }

    pub fn is_valid(&self, name: Option<&str>) -> bool {
        self.checker.is_component_valid(name)
    }

    pub fn suggestions(&self, name: &str) -> Vec<String> {
        self.checker.suggestions(name, MAX_SUGGESTIONS)
    }

    /// Validate every name, preserving order and one-to-one correspondence.
    /// No short-circuiting: a failure never stops evaluation of the rest.
    pub fn validate_batch<'n>(
        &self,
        names: impl IntoIterator<Item = Option<&'n str>>,
    ) -> Vec<HallucinationCheck> {
        names
            .into_iter()
            .map(|name| self.checker.check_component(name))
            .collect()
    }
}
