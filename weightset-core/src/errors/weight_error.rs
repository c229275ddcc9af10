use super::config_error::ConfigError;
use super::error_code::{self, WeightErrorCode};

/// Errors returned by weight group operations.
///
/// No operation partially applies a change: when one of these is returned
/// the caller's group is exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("member not found in group: {key}")]
    InvalidMember { key: String },

    #[error("weight group has no members")]
    EmptyGroup,

    #[error("member is locked and cannot be changed: {key}")]
    LockedTarget { key: String },

    #[error("no room to redistribute weight for {key}: locked members hold {locked_total}")]
    NoRedistributionRoom { key: String, locked_total: f64 },

    #[error("weight for {key} must be a number in [0, 100], got {value}")]
    InvalidWeight { key: String, value: f64 },

    #[error("unknown weight group: {key}")]
    UnknownGroup { key: String },

    /// Two parent/child pairs join to the same namespaced lock key.
    #[error("lock key {key} names more than one parent/child pair")]
    AmbiguousLock { key: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl WeightErrorCode for WeightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMember { .. } => error_code::INVALID_MEMBER,
            Self::EmptyGroup => error_code::EMPTY_GROUP,
            Self::LockedTarget { .. } => error_code::LOCKED_TARGET,
            Self::NoRedistributionRoom { .. } => error_code::NO_REDISTRIBUTION_ROOM,
            Self::InvalidWeight { .. } => error_code::INVALID_WEIGHT,
            Self::UnknownGroup { .. } => error_code::UNKNOWN_GROUP,
            Self::AmbiguousLock { .. } => error_code::AMBIGUOUS_LOCK,
            Self::Config(e) => e.error_code(),
        }
    }
}
