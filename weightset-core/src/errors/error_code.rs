//! Stable machine-readable codes for every error variant.
//!
//! Callers map these to user-facing messages; the strings never change
//! once published.

pub const INVALID_MEMBER: &str = "INVALID_MEMBER";
pub const EMPTY_GROUP: &str = "EMPTY_GROUP";
pub const LOCKED_TARGET: &str = "LOCKED_TARGET";
pub const NO_REDISTRIBUTION_ROOM: &str = "NO_REDISTRIBUTION_ROOM";
pub const INVALID_WEIGHT: &str = "INVALID_WEIGHT";
pub const UNKNOWN_GROUP: &str = "UNKNOWN_GROUP";
pub const AMBIGUOUS_LOCK: &str = "AMBIGUOUS_LOCK";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

/// Implemented by every error enum in the workspace.
pub trait WeightErrorCode {
    fn error_code(&self) -> &'static str;
}
