/// WeightSet version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Total every settled sibling group sums to.
pub const TOTAL_WEIGHT: f64 = 100.0;

/// Smallest weight a member may hold.
pub const MIN_WEIGHT: f64 = 0.0;

/// Largest weight a member may hold.
pub const MAX_WEIGHT: f64 = 100.0;

/// Separator between parent and child in a namespaced lock key (`"parent-child"`).
pub const LOCK_NAMESPACE_SEPARATOR: char = '-';

/// Pools of unlocked weight at or below this are treated as empty and
/// receive an equal split instead of a proportional one.
pub const EMPTY_POOL_EPSILON: f64 = 1e-9;
