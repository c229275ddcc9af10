use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::group::WeightGroup;

/// How a redistribution request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RedistributionOutcome {
    /// The member took its requested value and siblings absorbed the delta.
    Applied,
    /// Nothing changed (request equal to the current value, or an ignored
    /// edit to a locked member).
    Unchanged,
    /// Locked siblings left only one consistent value; the member was set to
    /// it instead of the requested value.
    Forced { requested: f64, applied: f64 },
}

/// Full result of one redistribution: the new group plus what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Redistribution {
    #[ts(type = "Record<string, number>")]
    pub group: WeightGroup,
    pub outcome: RedistributionOutcome,
    /// Member that absorbed a sum correction or rounding residual, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_member: Option<String>,
}

impl Redistribution {
    pub fn unchanged(group: WeightGroup) -> Self {
        Self {
            group,
            outcome: RedistributionOutcome::Unchanged,
            corrected_member: None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.outcome == RedistributionOutcome::Unchanged
    }
}
