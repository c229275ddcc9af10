use proptest::prelude::*;
use weightset_core::traits::IWeightRedistributor;
use weightset_core::{LockSet, WeightGroup};
use weightset_engine::distribution::normalize;
use weightset_engine::WeightSetEngine;

/// A settled group of 2–7 members, a lock set that never includes the
/// changed member, the changed key, and an arbitrary request.
fn arb_case() -> impl Strategy<Value = (WeightGroup, LockSet, String, f64)> {
    (2usize..8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0.0f64..100.0, n),
                prop::collection::vec(any::<bool>(), n),
                0..n,
                -50.0f64..150.0,
            )
        })
        .prop_map(|(raw, mask, changed, requested)| {
            let raw_group =
                WeightGroup::from_pairs(raw.iter().enumerate().map(|(i, w)| (format!("m{i}"), *w)));
            let group = normalize(&raw_group, 1).unwrap();
            let locks: LockSet = mask
                .iter()
                .enumerate()
                .filter(|(i, locked)| **locked && *i != changed)
                .map(|(i, _)| format!("m{i}"))
                .collect();
            (group, locks, format!("m{changed}"), requested)
        })
}

proptest! {
    #[test]
    fn result_always_sums_to_hundred((group, locks, key, requested) in arb_case()) {
        let engine = WeightSetEngine::new();
        let result = engine.redistribute(&group, &locks, &key, requested).unwrap();
        let report = engine.validate_total(&result.group);
        prop_assert!(report.is_balanced, "total {} for {:?}", report.total, result.group);
    }

    #[test]
    fn locked_members_never_move((group, locks, key, requested) in arb_case()) {
        let engine = WeightSetEngine::new();
        let result = engine.redistribute(&group, &locks, &key, requested).unwrap();
        for locked in locks.iter() {
            prop_assert_eq!(result.group.get(locked), group.get(locked));
        }
    }

    #[test]
    fn weights_stay_within_bounds((group, locks, key, requested) in arb_case()) {
        let engine = WeightSetEngine::new();
        let result = engine.redistribute(&group, &locks, &key, requested).unwrap();
        for (member, w) in result.group.iter() {
            prop_assert!((0.0..=100.0).contains(&w), "{member} out of range: {w}");
        }
        prop_assert_eq!(result.group.len(), group.len());
    }

    #[test]
    fn negative_request_clamps_to_zero((group, locks, key, _r) in arb_case()) {
        prop_assume!(group.keys().any(|k| k != key && !locks.contains(k)));
        let engine = WeightSetEngine::new();
        let result = engine.redistribute(&group, &locks, &key, -5.0).unwrap();
        prop_assert_eq!(result.group.get(&key), Some(0.0));
    }

    #[test]
    fn requesting_current_value_is_noop((group, locks, key, _r) in arb_case()) {
        let engine = WeightSetEngine::new();
        let current = group.get(&key).unwrap();
        let result = engine.redistribute(&group, &locks, &key, current).unwrap();
        prop_assert!(result.is_unchanged());
        prop_assert_eq!(result.group, group);
    }
}
