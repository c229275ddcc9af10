//! Nested groups: one flat redistribution per parent.
//!
//! The engine has no concept of nesting. These helpers look up the parent's
//! child group, project the namespaced lock set onto it, run the flat
//! algorithm, and splice the result back in.

use weightset_core::traits::IWeightRedistributor;
use weightset_core::{
    BalanceReport, LockSet, NestedWeights, Redistribution, WeightChangeRequest, WeightError,
    WeightResult,
};

use crate::engine::WeightSetEngine;

/// Result of a nested redistribution: every group, with `parent` replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedRedistribution {
    pub weights: NestedWeights,
    pub parent: String,
    pub result: Redistribution,
}

impl WeightSetEngine {
    /// Redistribute `child` within `parent`. `locks` holds namespaced keys.
    pub fn redistribute_nested(
        &self,
        nested: &NestedWeights,
        locks: &LockSet,
        parent: &str,
        child: &str,
        requested_value: f64,
    ) -> WeightResult<NestedRedistribution> {
        let group = nested.get(parent).ok_or_else(|| WeightError::UnknownGroup {
            key: parent.to_string(),
        })?;
        let scoped = locks.scoped(parent, group);
        let result = self.redistribute(group, &scoped, child, requested_value)?;

        let mut weights = nested.clone();
        weights.insert(parent, result.group.clone());
        Ok(NestedRedistribution {
            weights,
            parent: parent.to_string(),
            result,
        })
    }

    /// Apply a [`WeightChangeRequest`] carrying a `group_key`.
    pub fn apply_nested(
        &self,
        nested: &NestedWeights,
        locks: &LockSet,
        request: &WeightChangeRequest,
    ) -> WeightResult<NestedRedistribution> {
        let parent = request
            .group_key
            .as_deref()
            .ok_or_else(|| WeightError::UnknownGroup {
                key: String::new(),
            })?;
        self.redistribute_nested(
            nested,
            locks,
            parent,
            &request.member_key,
            request.requested_value,
        )
    }

    /// Balance report for every parent, in parent order.
    pub fn validate_nested(&self, nested: &NestedWeights) -> Vec<(String, BalanceReport)> {
        nested
            .iter()
            .map(|(parent, group)| (parent.to_string(), self.validate_total(group)))
            .collect()
    }
}
