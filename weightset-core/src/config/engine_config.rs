use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;

/// What to do when a caller asks to change a locked member directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LockedTargetPolicy {
    /// Return `WeightError::LockedTarget`.
    #[default]
    Reject,
    /// Leave the group untouched and report `RedistributionOutcome::Unchanged`.
    Ignore,
}

/// What to do when every other member is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SaturationPolicy {
    /// Force the changed member to whatever the locked members leave free.
    #[default]
    ForceRemainder,
    /// Refuse any request other than the remainder with `NoRedistributionRoom`.
    Reject,
}

/// Redistribution engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// `validate_total` reports balanced when `|total - 100|` is below this.
    pub balance_tolerance: f64,
    /// Drift from 100 above this triggers the correction pass.
    pub correction_epsilon: f64,
    /// Decimal places every stored weight is rounded to.
    pub decimal_places: u32,
    pub locked_target: LockedTargetPolicy,
    pub saturation: SaturationPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            balance_tolerance: defaults::DEFAULT_BALANCE_TOLERANCE,
            correction_epsilon: defaults::DEFAULT_CORRECTION_EPSILON,
            decimal_places: defaults::DEFAULT_DECIMAL_PLACES,
            locked_target: LockedTargetPolicy::default(),
            saturation: SaturationPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Smallest representable step at the configured precision (0.1 for one decimal).
    pub fn unit(&self) -> f64 {
        10f64.powi(-(self.decimal_places as i32))
    }
}
