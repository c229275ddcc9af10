//! Sum correction and rounding settlement shared by redistribute, rebalance,
//! and normalisation.

use std::cmp::Ordering;

use weightset_core::constants::TOTAL_WEIGHT;
use weightset_core::group::precision;
use weightset_core::WeightGroup;

/// `keys` ordered by current weight, largest first. Ties keep group order.
pub fn largest_first<'a>(group: &WeightGroup, keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut ranked: Vec<(String, f64)> = keys
        .into_iter()
        .map(|k| (k.to_string(), group.get(k).unwrap_or(0.0)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.into_iter().map(|(k, _)| k).collect()
}

/// Push `amount` into `candidates` in order, clamping each to `[0, 100]` and
/// carrying whatever a clamped member could not take on to the next one.
///
/// Returns the first member that actually moved.
pub fn absorb(group: &mut WeightGroup, candidates: &[String], amount: f64, epsilon: f64) -> Option<String> {
    let mut remaining = amount;
    let mut first_moved = None;
    for key in candidates {
        if remaining.abs() <= epsilon {
            break;
        }
        let Some(current) = group.get(key) else {
            continue;
        };
        let target = precision::clamp_weight(current + remaining);
        if target != current {
            group.set(key.as_str(), target);
            remaining -= target - current;
            if first_moved.is_none() {
                first_moved = Some(key.clone());
            }
        }
    }
    first_moved
}

/// Apply the correction pass when the total drifts from 100 by more than
/// `epsilon`.
pub fn correct_total(group: &mut WeightGroup, candidates: &[String], epsilon: f64) -> Option<String> {
    let drift = TOTAL_WEIGHT - group.total();
    if drift.abs() <= epsilon {
        return None;
    }
    tracing::trace!(drift, "correcting group total");
    absorb(group, candidates, drift, f64::EPSILON)
}

/// Round `keys` to `decimal_places`, then hand any residual the rounding
/// introduced to `candidates` so the displayed total is exactly 100.
///
/// Members outside `keys` are left exactly as they are.
pub fn settle_rounding(
    group: &mut WeightGroup,
    keys: &[String],
    candidates: &[String],
    decimal_places: u32,
) -> Option<String> {
    round_members(group, keys, decimal_places);
    let residual = precision::round_to(TOTAL_WEIGHT - group.total(), decimal_places);
    if residual == 0.0 {
        return None;
    }
    let half_unit = 0.5 * 10f64.powi(-(decimal_places as i32));
    let moved = absorb(group, candidates, residual, half_unit * 0.5);
    round_members(group, candidates, decimal_places);
    moved
}

fn round_members(group: &mut WeightGroup, keys: &[String], decimal_places: u32) {
    for key in keys {
        if let Some(w) = group.get(key) {
            group.set(key.as_str(), precision::round_to(w, decimal_places));
        }
    }
}
