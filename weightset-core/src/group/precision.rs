//! Rounding and clamping helpers shared by every weight operation.

use crate::constants::{MAX_WEIGHT, MIN_WEIGHT};

/// Round `value` to `decimal_places`. Normalises `-0.0` to `0.0`.
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Clamp to the valid weight range `[0, 100]`.
pub fn clamp_weight(value: f64) -> f64 {
    value.clamp(MIN_WEIGHT, MAX_WEIGHT)
}

/// Clamp, then round.
pub fn normalize_request(value: f64, decimal_places: u32) -> f64 {
    round_to(clamp_weight(value), decimal_places)
}
