//! The redistribution algorithm.
//!
//! ```text
//! new[changed] = clamp(requested)
//! delta        = new[changed] - old[changed]
//! new[u]       = max(0, old[u] - delta * old[u] / Σ old[unlocked others])
//! ```
//!
//! An empty unlocked pool (Σ ≈ 0) splits `-delta` equally instead. A
//! correction pass then pushes any remaining drift into the changed member
//! (then the largest unlocked members), and unlocked members are rounded to
//! the configured precision.

use weightset_core::config::{EngineConfig, LockedTargetPolicy, SaturationPolicy};
use weightset_core::constants::{EMPTY_POOL_EPSILON, TOTAL_WEIGHT};
use weightset_core::group::precision;
use weightset_core::{
    LockSet, Redistribution, RedistributionOutcome, WeightError, WeightGroup, WeightResult,
};

use crate::correction;

/// Validate the inputs shared by every group operation.
pub(crate) fn check_group(group: &WeightGroup) -> WeightResult<()> {
    if group.is_empty() {
        return Err(WeightError::EmptyGroup);
    }
    if let Some((key, value)) = group.first_out_of_range() {
        return Err(WeightError::InvalidWeight {
            key: key.to_string(),
            value,
        });
    }
    Ok(())
}

/// Locked members (other than `except`) summed.
pub(crate) fn locked_total(group: &WeightGroup, locks: &LockSet, except: Option<&str>) -> f64 {
    group
        .iter()
        .filter(|(k, _)| Some(*k) != except && locks.contains(k))
        .map(|(_, w)| w)
        .sum()
}

/// Set `changed_key` to `requested_value` and rebalance its unlocked siblings.
pub fn apply(
    group: &WeightGroup,
    locks: &LockSet,
    changed_key: &str,
    requested_value: f64,
    config: &EngineConfig,
) -> WeightResult<Redistribution> {
    check_group(group)?;
    let old = group.get(changed_key).ok_or_else(|| WeightError::InvalidMember {
        key: changed_key.to_string(),
    })?;
    if requested_value.is_nan() {
        return Err(WeightError::InvalidWeight {
            key: changed_key.to_string(),
            value: requested_value,
        });
    }

    if locks.contains(changed_key) {
        return match config.locked_target {
            LockedTargetPolicy::Reject => Err(WeightError::LockedTarget {
                key: changed_key.to_string(),
            }),
            LockedTargetPolicy::Ignore => {
                tracing::debug!(member = changed_key, "ignoring edit to locked member");
                Ok(Redistribution::unchanged(group.clone()))
            }
        };
    }

    let dp = config.decimal_places;
    let requested = precision::normalize_request(requested_value, dp);

    // A lone member always owns the whole 100%.
    if group.len() == 1 {
        if old == TOTAL_WEIGHT {
            return Ok(Redistribution::unchanged(group.clone()));
        }
        let mut next = group.clone();
        next.set(changed_key, TOTAL_WEIGHT);
        return Ok(Redistribution {
            group: next,
            outcome: forced_or_applied(requested, TOTAL_WEIGHT),
            corrected_member: None,
        });
    }

    if requested == precision::round_to(old, dp) {
        return Ok(Redistribution::unchanged(group.clone()));
    }

    let locked = locked_total(group, locks, Some(changed_key));
    if locked > TOTAL_WEIGHT + config.correction_epsilon {
        return Err(WeightError::NoRedistributionRoom {
            key: changed_key.to_string(),
            locked_total: locked,
        });
    }

    let unlocked_others: Vec<(String, f64)> = group
        .iter()
        .filter(|(k, _)| *k != changed_key && !locks.contains(k))
        .map(|(k, w)| (k.to_string(), w))
        .collect();

    if unlocked_others.is_empty() {
        return saturate(group, changed_key, old, requested, locked, config);
    }

    let delta = requested - old;
    let pool: f64 = unlocked_others.iter().map(|(_, w)| w).sum();
    tracing::debug!(
        member = changed_key,
        old,
        requested,
        delta,
        pool,
        siblings = unlocked_others.len(),
        "redistributing weight"
    );

    let mut next = group.clone();
    next.set(changed_key, requested);
    if pool > EMPTY_POOL_EPSILON {
        for (key, w) in &unlocked_others {
            next.set(key.as_str(), (w - delta * w / pool).max(0.0));
        }
    } else {
        let share = delta / unlocked_others.len() as f64;
        for (key, w) in &unlocked_others {
            next.set(key.as_str(), (w - share).max(0.0));
        }
    }

    // Correction prefers the member the user just touched, then the largest
    // unlocked siblings.
    let sibling_keys: Vec<String> = unlocked_others.into_iter().map(|(k, _)| k).collect();
    let mut correction_order = vec![changed_key.to_string()];
    correction_order.extend(correction::largest_first(&next, sibling_keys.iter().map(String::as_str)));
    let corrected = correction::correct_total(&mut next, &correction_order, config.correction_epsilon);

    // Rounding residue goes to siblings first so the touched slider keeps its value.
    let mut rounding_order = correction::largest_first(&next, sibling_keys.iter().map(String::as_str));
    rounding_order.push(changed_key.to_string());
    let settled = correction::settle_rounding(&mut next, &correction_order, &rounding_order, dp);

    let applied = next.get(changed_key).unwrap_or(requested);
    Ok(Redistribution {
        group: next,
        outcome: forced_or_applied(requested, applied),
        corrected_member: corrected.or(settled),
    })
}

/// Every sibling is locked: the changed member can only hold what they leave free.
fn saturate(
    group: &WeightGroup,
    changed_key: &str,
    old: f64,
    requested: f64,
    locked: f64,
    config: &EngineConfig,
) -> WeightResult<Redistribution> {
    let remainder = precision::round_to(precision::clamp_weight(TOTAL_WEIGHT - locked), config.decimal_places);
    if config.saturation == SaturationPolicy::Reject && requested != remainder {
        return Err(WeightError::NoRedistributionRoom {
            key: changed_key.to_string(),
            locked_total: locked,
        });
    }
    tracing::debug!(
        member = changed_key,
        requested,
        remainder,
        "all siblings locked, forcing remainder"
    );
    if remainder == old {
        return Ok(Redistribution {
            group: group.clone(),
            outcome: forced_or_applied(requested, remainder),
            corrected_member: None,
        });
    }
    let mut next = group.clone();
    next.set(changed_key, remainder);
    Ok(Redistribution {
        group: next,
        outcome: forced_or_applied(requested, remainder),
        corrected_member: None,
    })
}

fn forced_or_applied(requested: f64, applied: f64) -> RedistributionOutcome {
    if requested == applied {
        RedistributionOutcome::Applied
    } else {
        RedistributionOutcome::Forced { requested, applied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> WeightGroup {
        WeightGroup::from_pairs([("A", 50.0), ("B", 30.0), ("C", 20.0)])
    }

    #[test]
    fn empty_pool_splits_equally() {
        let group = WeightGroup::from_pairs([("A", 100.0), ("B", 0.0), ("C", 0.0)]);
        let result = apply(&group, &LockSet::new(), "A", 40.0, &EngineConfig::default()).unwrap();
        assert_eq!(result.group.get("A"), Some(40.0));
        assert_eq!(result.group.get("B"), Some(30.0));
        assert_eq!(result.group.get("C"), Some(30.0));
        assert_eq!(result.outcome, RedistributionOutcome::Applied);
    }

    #[test]
    fn overshoot_is_pulled_back_into_changed_member() {
        // B is locked at 30, so A can reach at most 70.
        let locks: LockSet = ["B"].into_iter().collect();
        let result = apply(&abc(), &locks, "A", 95.0, &EngineConfig::default()).unwrap();
        assert_eq!(result.group.get("A"), Some(70.0));
        assert_eq!(result.group.get("B"), Some(30.0));
        assert_eq!(result.group.get("C"), Some(0.0));
        assert_eq!(result.corrected_member.as_deref(), Some("A"));
        assert_eq!(
            result.outcome,
            RedistributionOutcome::Forced {
                requested: 95.0,
                applied: 70.0
            }
        );
    }

    #[test]
    fn unbalanced_input_is_corrected_through_changed_member() {
        let group = WeightGroup::from_pairs([("A", 50.0), ("B", 30.0), ("C", 30.0)]);
        let result = apply(&group, &LockSet::new(), "A", 40.0, &EngineConfig::default()).unwrap();
        // B and C absorb +10 proportionally (35, 35); A takes the -10 drift.
        assert_eq!(result.group.get("B"), Some(35.0));
        assert_eq!(result.group.get("C"), Some(35.0));
        assert_eq!(result.group.get("A"), Some(30.0));
        assert_eq!(result.corrected_member.as_deref(), Some("A"));
    }

    #[test]
    fn rounding_residue_lands_on_a_sibling() {
        let group = WeightGroup::from_pairs([("A", 40.0), ("B", 30.0), ("C", 30.0)]);
        let result = apply(&group, &LockSet::new(), "A", 33.3, &EngineConfig::default()).unwrap();
        assert_eq!(result.group.get("A"), Some(33.3));
        assert_eq!(precision::round_to(result.group.total(), 1), 100.0);
        assert_eq!(result.outcome, RedistributionOutcome::Applied);
    }

    #[test]
    fn nan_request_is_rejected() {
        let err = apply(&abc(), &LockSet::new(), "A", f64::NAN, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, WeightError::InvalidWeight { .. }));
    }

    #[test]
    fn locked_members_above_hundred_leave_no_room() {
        let group = WeightGroup::from_pairs([("A", 10.0), ("B", 70.0), ("C", 60.0), ("D", 0.0)]);
        let locks: LockSet = ["B", "C"].into_iter().collect();
        let err = apply(&group, &locks, "A", 5.0, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, WeightError::NoRedistributionRoom { .. }));
    }
}
