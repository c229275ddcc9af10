//! Compiled defaults for every config field.

pub const DEFAULT_BALANCE_TOLERANCE: f64 = 0.1;
pub const DEFAULT_CORRECTION_EPSILON: f64 = 0.01;
pub const DEFAULT_DECIMAL_PLACES: u32 = 1;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

/// Upper bound on `decimal_places`; beyond this f64 rounding stops being exact.
pub const MAX_DECIMAL_PLACES: u32 = 6;
