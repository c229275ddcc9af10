use weightset_core::traits::IWeightRedistributor;
use weightset_core::{
    BalanceReport, LockSet, NestedWeights, Redistribution, WeightError, WeightResult,
};

use crate::engine::WeightSetEngine;

/// State holder for nested sliders (pillar → category, or category →
/// subcategory). Locks are stored namespaced as `"parent-child"`.
///
/// A lock key shared by two parent/child pairs is refused with
/// [`WeightError::AmbiguousLock`] rather than locking both members.
#[derive(Debug, Clone)]
pub struct NestedAdapter {
    engine: WeightSetEngine,
    weights: NestedWeights,
    locks: LockSet,
}

impl NestedAdapter {
    pub fn new(weights: NestedWeights) -> Self {
        Self::with_engine(WeightSetEngine::new(), weights)
    }

    pub fn with_engine(engine: WeightSetEngine, weights: NestedWeights) -> Self {
        Self {
            engine,
            weights,
            locks: LockSet::new(),
        }
    }

    pub fn weights(&self) -> &NestedWeights {
        &self.weights
    }

    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    pub fn is_locked(&self, parent: &str, child: &str) -> bool {
        self.locks.contains(&LockSet::namespaced(parent, child))
    }

    pub fn set_weight(&mut self, parent: &str, child: &str, value: f64) -> WeightResult<Redistribution> {
        let nested = self
            .engine
            .redistribute_nested(&self.weights, &self.locks, parent, child, value)?;
        self.weights = nested.weights;
        Ok(nested.result)
    }

    /// Toggle the lock on `child` under `parent`. Returns whether it is locked afterwards.
    pub fn toggle_lock(&mut self, parent: &str, child: &str) -> WeightResult<bool> {
        let group = self.weights.get(parent).ok_or_else(|| WeightError::UnknownGroup {
            key: parent.to_string(),
        })?;
        WeightSetEngine::require_member(group, child)?;
        let key = LockSet::namespaced(parent, child);
        if self.weights.lock_key_owners(&key).len() > 1 {
            return Err(WeightError::AmbiguousLock { key });
        }
        self.locks = self.engine.toggle_lock(&self.locks, &key);
        Ok(self.locks.contains(&key))
    }

    /// Rebalance one parent's group around its locks.
    pub fn rebalance(&mut self, parent: &str) -> WeightResult<Redistribution> {
        let group = self.weights.get(parent).ok_or_else(|| WeightError::UnknownGroup {
            key: parent.to_string(),
        })?;
        let scoped = self.locks.scoped(parent, group);
        let result = self.engine.rebalance(group, &scoped)?;
        self.weights.insert(parent, result.group.clone());
        Ok(result)
    }

    pub fn reports(&self) -> Vec<(String, BalanceReport)> {
        self.engine.validate_nested(&self.weights)
    }

    pub fn all_balanced(&self) -> bool {
        self.reports().iter().all(|(_, r)| r.is_balanced)
    }

    pub fn into_parts(self) -> (NestedWeights, LockSet) {
        (self.weights, self.locks)
    }
}
