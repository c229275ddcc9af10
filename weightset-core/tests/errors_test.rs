use weightset_core::errors::*;

#[test]
fn invalid_member_carries_key() {
    let err = WeightError::InvalidMember {
        key: "Talent".into(),
    };
    assert!(err.to_string().contains("Talent"));
    assert_eq!(err.error_code(), "INVALID_MEMBER");
}

#[test]
fn locked_target_carries_key() {
    let err = WeightError::LockedTarget {
        key: "Governance".into(),
    };
    assert!(err.to_string().contains("Governance"));
    assert_eq!(err.error_code(), "LOCKED_TARGET");
}

#[test]
fn no_room_carries_locked_total() {
    let err = WeightError::NoRedistributionRoom {
        key: "A".into(),
        locked_total: 120.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("A"));
    assert!(msg.contains("120"));
    assert_eq!(err.error_code(), "NO_REDISTRIBUTION_ROOM");
}

#[test]
fn config_errors_convert_and_keep_their_code() {
    let err: WeightError = ConfigError::ValidationFailed {
        field: "engine.decimal_places".into(),
        message: "too large".into(),
    }
    .into();
    assert!(err.to_string().contains("engine.decimal_places"));
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
fn ambiguous_lock_carries_key() {
    let err = WeightError::AmbiguousLock {
        key: "Data-Quality-Metrics".into(),
    };
    assert!(err.to_string().contains("Data-Quality-Metrics"));
    assert_eq!(err.error_code(), "AMBIGUOUS_LOCK");
}

#[test]
fn empty_group_has_stable_code() {
    assert_eq!(WeightError::EmptyGroup.error_code(), "EMPTY_GROUP");
}
