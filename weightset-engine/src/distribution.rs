//! Initial distributions: equal split, recommended defaults, persisted snapshots.

use weightset_core::constants::{EMPTY_POOL_EPSILON, TOTAL_WEIGHT};
use weightset_core::{WeightError, WeightGroup, WeightResult};
use weightset_observability::normalize_span;

use crate::correction;

/// Split 100 equally across `keys` at `decimal_places`.
///
/// The rounding residual goes to the first member, so `["A", "B", "C"]`
/// yields `{A: 33.4, B: 33.3, C: 33.3}`. Duplicate keys collapse.
pub fn equal_split<K, I>(keys: I, decimal_places: u32) -> WeightResult<WeightGroup>
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    let mut group: WeightGroup = keys.into_iter().map(|k| (k, 0.0)).collect();
    if group.is_empty() {
        return Err(WeightError::EmptyGroup);
    }
    let share = TOTAL_WEIGHT / group.len() as f64;
    let members: Vec<String> = group.keys().map(str::to_string).collect();
    for key in &members {
        group.set(key.as_str(), share);
    }
    correction::settle_rounding(&mut group, &members, &members, decimal_places);
    Ok(group)
}

/// Build a group from a recommended distribution in any scale (fractions,
/// points, percentages) and normalise it to 100.
pub fn from_distribution<K, I>(pairs: I, decimal_places: u32) -> WeightResult<WeightGroup>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, f64)>,
{
    normalize(&WeightGroup::from_pairs(pairs), decimal_places)
}

/// Rescale non-negative weights proportionally so they sum to 100.
///
/// A group whose weights are all zero becomes an equal split. The rounding
/// residual goes to the largest member.
pub fn normalize(group: &WeightGroup, decimal_places: u32) -> WeightResult<WeightGroup> {
    if group.is_empty() {
        return Err(WeightError::EmptyGroup);
    }
    if let Some((key, value)) = group.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
        return Err(WeightError::InvalidWeight {
            key: key.to_string(),
            value,
        });
    }
    let span = normalize_span!(group.len());
    let _guard = span.enter();

    let total = group.total();
    if total <= EMPTY_POOL_EPSILON {
        tracing::debug!("normalising all-zero group to equal split");
        return equal_split(group.keys(), decimal_places);
    }

    let mut next = group.clone();
    for (_, w) in next.iter_mut() {
        *w = *w * TOTAL_WEIGHT / total;
    }
    let members: Vec<String> = next.keys().map(str::to_string).collect();
    let order = correction::largest_first(&next, members.iter().map(String::as_str));
    correction::settle_rounding(&mut next, &members, &order, decimal_places);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightset_core::group::precision;

    #[test]
    fn equal_split_gives_residual_to_first_member() {
        let group = equal_split(["A", "B", "C"], 1).unwrap();
        assert_eq!(group.get("A"), Some(33.4));
        assert_eq!(group.get("B"), Some(33.3));
        assert_eq!(group.get("C"), Some(33.3));
    }

    #[test]
    fn equal_split_of_one_is_hundred() {
        let group = equal_split(["Only"], 1).unwrap();
        assert_eq!(group.get("Only"), Some(100.0));
    }

    #[test]
    fn equal_split_rejects_no_keys() {
        let keys: Vec<String> = Vec::new();
        assert!(matches!(equal_split(keys, 1), Err(WeightError::EmptyGroup)));
    }

    #[test]
    fn fractions_scale_to_percentages() {
        let group = from_distribution([("Data", 0.5), ("Talent", 0.3), ("Strategy", 0.2)], 1).unwrap();
        assert_eq!(group.get("Data"), Some(50.0));
        assert_eq!(group.get("Talent"), Some(30.0));
        assert_eq!(group.get("Strategy"), Some(20.0));
    }

    #[test]
    fn seven_way_split_still_sums_to_hundred() {
        let group = normalize(
            &WeightGroup::from_pairs((0..7).map(|i| (format!("m{i}"), 1.0))),
            1,
        )
        .unwrap();
        assert_eq!(precision::round_to(group.total(), 1), 100.0);
    }

    #[test]
    fn all_zero_becomes_equal_split() {
        let group = normalize(&WeightGroup::from_pairs([("A", 0.0), ("B", 0.0)]), 1).unwrap();
        assert_eq!(group.get("A"), Some(50.0));
        assert_eq!(group.get("B"), Some(50.0));
    }

    #[test]
    fn negative_weights_are_rejected() {
        let err = normalize(&WeightGroup::from_pairs([("A", 10.0), ("B", -1.0)]), 1).unwrap_err();
        assert!(matches!(err, WeightError::InvalidWeight { .. }));
    }
}
