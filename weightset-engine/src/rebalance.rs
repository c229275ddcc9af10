//! Restore a drifted group to 100 without touching locked members.
//!
//! Groups drift when a lock is toggled on an unbalanced group or when a
//! persisted snapshot is loaded. Unlocked members are scaled to fill
//! `100 - locked` in proportion to their current weights.

use weightset_core::config::EngineConfig;
use weightset_core::constants::{EMPTY_POOL_EPSILON, TOTAL_WEIGHT};
use weightset_core::{
    LockSet, Redistribution, RedistributionOutcome, WeightError, WeightGroup, WeightResult,
};

use crate::balance;
use crate::correction;
use crate::redistribute::{check_group, locked_total};

pub fn rebalance(group: &WeightGroup, locks: &LockSet, config: &EngineConfig) -> WeightResult<Redistribution> {
    check_group(group)?;
    if balance::validate_total(group, config).is_balanced {
        return Ok(Redistribution::unchanged(group.clone()));
    }

    let unlocked: Vec<String> = group
        .keys()
        .filter(|k| !locks.contains(k))
        .map(str::to_string)
        .collect();
    let locked = locked_total(group, locks, None);

    if unlocked.is_empty() || locked > TOTAL_WEIGHT + config.correction_epsilon {
        let key = correction::largest_first(group, group.keys())
            .into_iter()
            .next()
            .unwrap_or_default();
        return Err(WeightError::NoRedistributionRoom {
            key,
            locked_total: locked,
        });
    }

    let target = (TOTAL_WEIGHT - locked).max(0.0);
    let pool: f64 = unlocked.iter().filter_map(|k| group.get(k)).sum();
    tracing::debug!(fill = target, pool, unlocked = unlocked.len(), "rebalancing group");

    let mut next = group.clone();
    for key in &unlocked {
        let current = next.get(key).unwrap_or(0.0);
        let scaled = if pool > EMPTY_POOL_EPSILON {
            current * target / pool
        } else {
            target / unlocked.len() as f64
        };
        next.set(key.as_str(), scaled);
    }

    let order = correction::largest_first(&next, unlocked.iter().map(String::as_str));
    let settled = correction::settle_rounding(&mut next, &unlocked, &order, config.decimal_places);

    Ok(Redistribution {
        group: next,
        outcome: RedistributionOutcome::Applied,
        corrected_member: settled,
    })
}
