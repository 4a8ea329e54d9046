//! Minimum placement-quality score enforcement.

use crate::safety::BELOW_THRESHOLD_ERROR_CODE;
use serde::Serialize;

/// Quality floor for a placement score. A candidate at exactly the floor
/// passes; ordinary floating-point comparison, no rounding.
pub const PLACEMENT_SCORE_THRESHOLD: f64 = 0.4;

/// Outcome of one score check.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdCheck {
    pub passes: bool,
    pub score: f64,
    pub threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThresholdChecker;

impl ThresholdChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check a score against the fixed floor. Never fails; a failing score
    /// produces a warning naming both values and pointing at the fallback
    /// mechanism.
    pub fn check_threshold(&self, score: f64) -> ThresholdCheck {
        if score >= PLACEMENT_SCORE_THRESHOLD {
            return ThresholdCheck {
                passes: true,
                score,
                threshold: PLACEMENT_SCORE_THRESHOLD,
                warning: None,
                error_code: None,
            };
        }

        ThresholdCheck {
            passes: false,
            score,
            threshold: PLACEMENT_SCORE_THRESHOLD,
            warning: Some(format!(
                "Score {score} below threshold {PLACEMENT_SCORE_THRESHOLD}; assign a fluid fallback for this slot"
            )),
            error_code: Some(BELOW_THRESHOLD_ERROR_CODE),
        }
    }

    pub fn is_score_acceptable(&self, score: f64) -> bool {
        score >= PLACEMENT_SCORE_THRESHOLD
    }
}
