use weightset_core::traits::IWeightRedistributor;
use weightset_core::{BalanceReport, LockSet, Redistribution, WeightGroup, WeightResult};

use crate::engine::WeightSetEngine;

/// State holder for a flat weight form (one sibling group).
#[derive(Debug, Clone)]
pub struct GroupAdapter {
    engine: WeightSetEngine,
    group: WeightGroup,
    locks: LockSet,
}

impl GroupAdapter {
    /// Wrap an existing group (a default distribution or a persisted snapshot).
    pub fn new(group: WeightGroup) -> Self {
        Self::with_engine(WeightSetEngine::new(), group)
    }

    pub fn with_engine(engine: WeightSetEngine, group: WeightGroup) -> Self {
        Self {
            engine,
            group,
            locks: LockSet::new(),
        }
    }

    /// Start from an equal split across `keys`.
    pub fn equal<K, I>(keys: I) -> WeightResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let engine = WeightSetEngine::new();
        let group = engine.equal_split(keys)?;
        Ok(Self::with_engine(engine, group))
    }

    pub fn group(&self) -> &WeightGroup {
        &self.group
    }

    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    pub fn is_locked(&self, key: &str) -> bool {
        self.locks.contains(key)
    }

    /// Handle a slider drag or a typed value.
    pub fn set_weight(&mut self, key: &str, value: f64) -> WeightResult<Redistribution> {
        let result = self.engine.redistribute(&self.group, &self.locks, key, value)?;
        self.group = result.group.clone();
        Ok(result)
    }

    /// Toggle `key`'s lock. Returns whether it is locked afterwards.
    pub fn toggle_lock(&mut self, key: &str) -> WeightResult<bool> {
        WeightSetEngine::require_member(&self.group, key)?;
        self.locks = self.engine.toggle_lock(&self.locks, key);
        Ok(self.locks.contains(key))
    }

    /// Reset to an equal split and clear every lock.
    pub fn reset_equal(&mut self) -> WeightResult<()> {
        self.group = self.engine.equal_split(self.group.keys())?;
        self.locks = LockSet::new();
        Ok(())
    }

    /// Reset to a recommended distribution (any scale) and clear every lock.
    pub fn reset_to(&mut self, defaults: &WeightGroup) -> WeightResult<()> {
        self.group = self.engine.normalize(defaults)?;
        self.locks = LockSet::new();
        Ok(())
    }

    /// Pull a drifted group back to 100 around the current locks.
    pub fn rebalance(&mut self) -> WeightResult<Redistribution> {
        let result = self.engine.rebalance(&self.group, &self.locks)?;
        self.group = result.group.clone();
        Ok(result)
    }

    pub fn report(&self) -> BalanceReport {
        self.engine.validate_total(&self.group)
    }

    /// Submission is allowed only while the group is balanced.
    pub fn can_submit(&self) -> bool {
        self.report().is_balanced
    }

    pub fn into_parts(self) -> (WeightGroup, LockSet) {
        (self.group, self.locks)
    }
}
