use proptest::prelude::*;
use weightset_core::group::precision;
use weightset_core::{LockSet, WeightGroup};

proptest! {
    #[test]
    fn normalized_request_is_in_range(value in -1_000.0f64..1_000.0, dp in 0u32..4) {
        let v = precision::normalize_request(value, dp);
        prop_assert!((0.0..=100.0).contains(&v));
        prop_assert!(v.is_sign_positive());
    }

    #[test]
    fn rounding_is_idempotent(value in 0.0f64..100.0) {
        let once = precision::round_to(value, 1);
        prop_assert_eq!(precision::round_to(once, 1), once);
    }

    #[test]
    fn toggling_twice_restores_the_lock_set(keys in prop::collection::vec("[a-z]{1,6}", 0..6), key in "[a-z]{1,6}") {
        let original: LockSet = keys.iter().map(String::as_str).collect();
        let mut locks = original.clone();
        locks.toggle(&key);
        locks.toggle(&key);
        prop_assert_eq!(locks, original);
    }

    #[test]
    fn group_keeps_insertion_order(weights in prop::collection::vec(0.0f64..100.0, 1..8)) {
        let pairs: Vec<(String, f64)> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("m{i}"), *w))
            .collect();
        let group: WeightGroup = pairs.iter().cloned().collect();
        let keys: Vec<&str> = group.keys().collect();
        let expected: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(keys, expected);
        prop_assert!(group.first_out_of_range().is_none());
    }
}
