use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Read-only diagnostic produced by `validate_total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BalanceReport {
    /// Sum of all weights, rounded to the configured precision.
    pub total: f64,
    /// `|total - 100|` is below the configured tolerance.
    pub is_balanced: bool,
}

impl BalanceReport {
    /// Signed distance from 100 (positive when over-allocated).
    pub fn excess(&self) -> f64 {
        self.total - crate::constants::TOTAL_WEIGHT
    }
}
