//! Deterministic safe substitutes for failed placements.
//!
//! Every slot role maps to exactly one pre-approved fallback component, so a
//! rejected candidate always has somewhere safe to land. Each assignment
//! carries fresh audit metadata explaining why the substitution happened;
//! metadata is a tagged sum rather than a boolean-probed bag so callers
//! cannot confuse a normal placement with a fallback.

use crate::safety::threshold::PLACEMENT_SCORE_THRESHOLD;
use anyhow::bail;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Semantic purpose of a layout slot, distinct from its physical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotRole {
    PrimaryContent,
    Navigation,
    Actions,
    Auxiliary,
}

impl SlotRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotRole::PrimaryContent => "primary-content",
            SlotRole::Navigation => "navigation",
            SlotRole::Actions => "actions",
            SlotRole::Auxiliary => "auxiliary",
        }
    }

    pub const ALL: [SlotRole; 4] = [
        SlotRole::PrimaryContent,
        SlotRole::Navigation,
        SlotRole::Actions,
        SlotRole::Auxiliary,
    ];
}

impl TryFrom<&str> for SlotRole {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "primary-content" => Ok(SlotRole::PrimaryContent),
            "navigation" => Ok(SlotRole::Navigation),
            "actions" => Ok(SlotRole::Actions),
            "auxiliary" => Ok(SlotRole::Auxiliary),
            other => bail!("Unknown slot role: {other}"),
        }
    }
}

/// Audit details attached to a fallback substitution.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackDetails {
    pub reason: String,
    #[serde(default)]
    pub original_score: Option<f64>,
    #[serde(default)]
    pub original_component_name: Option<String>,
}

/// Placement metadata as a tagged sum: either a normal placement or a
/// fallback with its audit trail. The wire form keeps the literal
/// `"_fallback": true` marker the audit consumers key on.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementMetadata {
    Normal,
    Fallback(FallbackDetails),
}

impl PlacementMetadata {
    pub fn is_fallback(&self) -> bool {
        matches!(self, PlacementMetadata::Fallback(_))
    }

    pub fn details(&self) -> Option<&FallbackDetails> {
        match self {
            PlacementMetadata::Normal => None,
            PlacementMetadata::Fallback(details) => Some(details),
        }
    }
}

impl Serialize for PlacementMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlacementMetadata::Normal => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_fallback", &false)?;
                map.end()
            }
            PlacementMetadata::Fallback(details) => {
                let len = 2
                    + usize::from(details.original_score.is_some())
                    + usize::from(details.original_component_name.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("_fallback", &true)?;
                map.serialize_entry("reason", &details.reason)?;
                if let Some(score) = details.original_score {
                    map.serialize_entry("originalScore", &score)?;
                }
                if let Some(name) = &details.original_component_name {
                    map.serialize_entry("originalComponentName", name)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PlacementMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if is_fallback_metadata(&value) {
            let details: FallbackDetails =
                serde_json::from_value(value).map_err(D::Error::custom)?;
            Ok(PlacementMetadata::Fallback(details))
        } else {
            Ok(PlacementMetadata::Normal)
        }
    }
}

/// Strict guard for foreign audit payloads: true only for an object whose
/// `_fallback` field is the boolean `true`. A missing field, `false`, or any
/// truthy-but-not-`true` value (string, number) is rejected.
pub fn is_fallback_metadata(value: &Value) -> bool {
    matches!(value.get("_fallback"), Some(Value::Bool(true)))
}

/// A fallback substitution for one slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackAssignment {
    pub component_name: String,
    pub target_slot: String,
    pub slot_role: SlotRole,
    pub metadata: PlacementMetadata,
}

/// Maps slot roles to pre-approved fallback components and composes the
/// audit metadata for each substitution.
#[derive(Clone, Copy, Debug, Default)]
pub struct FluidFallback;

impl FluidFallback {
    pub fn new() -> Self {
        Self
    }

    /// The fixed fallback for a role. Total over the role set and stable
    /// across calls.
    pub fn fallback_component(&self, role: SlotRole) -> &'static str {
        match role {
            SlotRole::PrimaryContent | SlotRole::Auxiliary => "GenericContainer",
            SlotRole::Navigation => "NavPlaceholder",
            SlotRole::Actions => "ButtonGroup",
        }
    }

    /// Substitute the role's fallback into `target_slot`. Always succeeds;
    /// the metadata is freshly allocated per call and records whichever of
    /// the original score and name were available for the audit trail.
    pub fn assign_fallback(
        &self,
        target_slot: &str,
        slot_role: SlotRole,
        original_score: Option<f64>,
        original_component_name: Option<&str>,
    ) -> FallbackAssignment {
        let reason = self.fallback_reason(slot_role, original_score, original_component_name);
        FallbackAssignment {
            component_name: self.fallback_component(slot_role).to_string(),
            target_slot: target_slot.to_string(),
            slot_role,
            metadata: PlacementMetadata::Fallback(FallbackDetails {
                reason,
                original_score,
                original_component_name: original_component_name.map(str::to_string),
            }),
        }
    }

    /// Compose the human-readable reason for a substitution.
    ///
    /// Up to two independent causes, joined by ". " when both apply; a bad
    /// name and a failing score are not mutually exclusive and neither takes
    /// precedence. Always ends by naming the substituted component and the
    /// slot role.
    pub fn fallback_reason(
        &self,
        slot_role: SlotRole,
        original_score: Option<f64>,
        original_component_name: Option<&str>,
    ) -> String {
        let mut causes: Vec<String> = Vec::new();
        if let Some(name) = original_component_name {
            causes.push(format!("Invalid component \"{name}\" not found in catalog"));
        }
        if let Some(score) = original_score {
            causes.push(format!(
                "Score {score} below threshold {PLACEMENT_SCORE_THRESHOLD}"
            ));
        }

        let lead = if causes.is_empty() {
            "Quality check failed".to_string()
        } else {
            causes.join(". ")
        };

        format!(
            "{lead}. Substituting {component} for the {role} role",
            component = self.fallback_component(slot_role),
            role = slot_role.as_str()
        )
    }
}
