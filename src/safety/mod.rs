//! Runtime placement-safety checks.
//!
//! The placement engine proposes a (component name, quality score) pair per
//! layout slot. The checks here never fail and never panic on live data:
//! every call returns a structured result so one bad candidate cannot abort
//! composition of a whole page. When a check rejects a candidate, the caller
//! asks `FluidFallback` for a deterministic safe substitute.

pub mod fallback;
pub mod hallucination;
pub mod threshold;
pub mod validator;

pub use fallback::{
    FallbackAssignment, FallbackDetails, FluidFallback, PlacementMetadata, SlotRole,
    is_fallback_metadata,
};
pub use hallucination::{HallucinationCheck, HallucinationChecker, MAX_SUGGESTIONS};
pub use threshold::{PLACEMENT_SCORE_THRESHOLD, ThresholdCheck, ThresholdChecker};
pub use validator::ComponentValidator;

/// Error code attached to a failed component-name lookup.
pub const HALLUCINATION_ERROR_CODE: &str = "LAYER3-E002";

/// Error code attached to a failed quality-score check.
pub const BELOW_THRESHOLD_ERROR_CODE: &str = "BELOW_THRESHOLD";
