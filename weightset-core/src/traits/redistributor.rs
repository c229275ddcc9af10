use crate::errors::WeightResult;
use crate::group::{LockSet, WeightGroup};
use crate::models::{BalanceReport, Redistribution};

/// Proportional weight redistribution over one flat sibling group.
///
/// Implementations are pure: every call takes a full group and returns a new
/// one. Nested callers invoke these once per parent group.
pub trait IWeightRedistributor: Send + Sync {
    /// Set `changed_key` to `requested_value` and rebalance the other
    /// unlocked members so the group sums to 100.
    fn redistribute(
        &self,
        group: &WeightGroup,
        locks: &LockSet,
        changed_key: &str,
        requested_value: f64,
    ) -> WeightResult<Redistribution>;

    /// Add `key` to the lock set, or remove it if present. Weights are untouched.
    fn toggle_lock(&self, locks: &LockSet, key: &str) -> LockSet {
        let mut next = locks.clone();
        next.toggle(key);
        next
    }

    /// Sum the group and report whether it is within tolerance of 100.
    fn validate_total(&self, group: &WeightGroup) -> BalanceReport;
}
