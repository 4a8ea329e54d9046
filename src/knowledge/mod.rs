//! Build-time consistency rules over catalog entries.
//!
//! Four independent rule-checkers (slot affinity, constraints, interaction
//! states, token references) composed by one entry-level orchestrator. These
//! run in a build or test gate, not on a live request path, so they are
//! exhaustive and strict: every violation accumulates, nothing short-circuits.

pub mod affinity;
pub mod constraints;
pub mod entry;
pub mod states;
pub mod tokens;

pub use affinity::validate_slot_affinity;
pub use constraints::validate_constraints;
pub use entry::validate_component_knowledge;
pub use states::{state_coverage, validate_required_states};
pub use tokens::{TokenValidator, load_tokens_from_path};
