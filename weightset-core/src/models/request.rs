use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One member's requested new value, optionally scoped to a parent group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeightChangeRequest {
    /// Parent (pillar or category) for nested groups; `None` for flat groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    pub member_key: String,
    /// Arbitrary number; clamped to `[0, 100]` and rounded before use.
    pub requested_value: f64,
}

impl WeightChangeRequest {
    pub fn flat(member_key: impl Into<String>, requested_value: f64) -> Self {
        Self {
            group_key: None,
            member_key: member_key.into(),
            requested_value,
        }
    }

    pub fn nested(
        group_key: impl Into<String>,
        member_key: impl Into<String>,
        requested_value: f64,
    ) -> Self {
        Self {
            group_key: Some(group_key.into()),
            member_key: member_key.into(),
            requested_value,
        }
    }
}
