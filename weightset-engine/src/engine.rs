use weightset_core::config::{EngineConfig, WeightSetConfig};
use weightset_core::traits::IWeightRedistributor;
use weightset_core::{
    BalanceReport, LockSet, Redistribution, WeightChangeRequest, WeightError, WeightGroup,
    WeightResult,
};
use weightset_observability::{rebalance_span, redistribution_span};

use crate::{balance, distribution, rebalance, redistribute};

/// Stateless redistribution engine parameterised by [`EngineConfig`].
///
/// Every method takes a full group and returns a new one; the engine holds
/// nothing but its configuration, so one instance can serve any number of
/// independent groups.
#[derive(Debug, Clone, Default)]
pub struct WeightSetEngine {
    config: EngineConfig,
}

impl WeightSetEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an explicit engine configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create from the `[engine]` section of a full configuration.
    pub fn from_settings(settings: &WeightSetConfig) -> Self {
        Self::with_config(settings.engine.clone())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply a flat [`WeightChangeRequest`]. Its `group_key` is ignored;
    /// nested callers use [`WeightSetEngine::apply_nested`].
    pub fn apply(
        &self,
        group: &WeightGroup,
        locks: &LockSet,
        request: &WeightChangeRequest,
    ) -> WeightResult<Redistribution> {
        self.redistribute(group, locks, &request.member_key, request.requested_value)
    }

    /// Restore the 100% invariant on a drifted group without changing locked members.
    pub fn rebalance(&self, group: &WeightGroup, locks: &LockSet) -> WeightResult<Redistribution> {
        let span = rebalance_span!(group.len(), locks.len());
        let _guard = span.enter();
        rebalance::rebalance(group, locks, &self.config)
    }

    /// Split 100 equally across `keys`.
    pub fn equal_split<K, I>(&self, keys: I) -> WeightResult<WeightGroup>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        distribution::equal_split(keys, self.config.decimal_places)
    }

    /// Rescale an arbitrary non-negative distribution to sum to 100.
    pub fn normalize(&self, group: &WeightGroup) -> WeightResult<WeightGroup> {
        distribution::normalize(group, self.config.decimal_places)
    }

    /// Error unless `key` is a member of `group`.
    pub(crate) fn require_member(group: &WeightGroup, key: &str) -> WeightResult<()> {
        if group.contains(key) {
            Ok(())
        } else {
            Err(WeightError::InvalidMember {
                key: key.to_string(),
            })
        }
    }
}

impl IWeightRedistributor for WeightSetEngine {
    fn redistribute(
        &self,
        group: &WeightGroup,
        locks: &LockSet,
        changed_key: &str,
        requested_value: f64,
    ) -> WeightResult<Redistribution> {
        let span = redistribution_span!(changed_key, group.len());
        let _guard = span.enter();
        redistribute::apply(group, locks, changed_key, requested_value, &self.config)
    }

    fn validate_total(&self, group: &WeightGroup) -> BalanceReport {
        balance::validate_total(group, &self.config)
    }
}
