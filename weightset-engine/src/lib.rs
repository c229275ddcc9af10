//! # weightset-engine
//!
//! Proportional weight redistribution over sibling percentage weights.
//! Setting one member rebalances its unlocked siblings in proportion to
//! their previous shares, keeps locked members fixed, and always returns a
//! group summing to exactly 100 at one-decimal precision.
//!
//! The free functions use the default configuration. [`WeightSetEngine`]
//! carries an explicit [`EngineConfig`](weightset_core::config::EngineConfig).
//! [`adapters`] wrap the engine for widgets that own their state.

pub mod adapters;
pub mod balance;
pub mod correction;
pub mod distribution;
pub mod engine;
pub mod nested;
pub mod rebalance;
pub mod redistribute;

pub use adapters::{GroupAdapter, NestedAdapter};
pub use engine::WeightSetEngine;
pub use nested::NestedRedistribution;

use weightset_core::traits::IWeightRedistributor;
use weightset_core::{BalanceReport, LockSet, WeightGroup, WeightResult};

/// Set `changed_key` to `requested_value` and return the rebalanced group.
///
/// The input group is never modified; on error the caller still holds it
/// unchanged.
pub fn redistribute(
    group: &WeightGroup,
    locks: &LockSet,
    changed_key: &str,
    requested_value: f64,
) -> WeightResult<WeightGroup> {
    WeightSetEngine::new()
        .redistribute(group, locks, changed_key, requested_value)
        .map(|r| r.group)
}

/// Add `key` to the lock set or remove it. Weights are not touched.
pub fn toggle_lock(locks: &LockSet, key: &str) -> LockSet {
    WeightSetEngine::new().toggle_lock(locks, key)
}

/// Sum the group and report whether it is within tolerance of 100.
pub fn validate_total(group: &WeightGroup) -> BalanceReport {
    WeightSetEngine::new().validate_total(group)
}
