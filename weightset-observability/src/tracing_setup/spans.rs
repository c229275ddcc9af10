//! Span definitions per operation: redistribution, rebalance, normalisation.

/// Create a redistribution span.
#[macro_export]
macro_rules! redistribution_span {
    ($member:expr, $group_size:expr) => {
        tracing::debug_span!("weightset.redistribute", member = %$member, group_size = $group_size)
    };
}

/// Create a rebalance span.
#[macro_export]
macro_rules! rebalance_span {
    ($group_size:expr, $locked:expr) => {
        tracing::debug_span!("weightset.rebalance", group_size = $group_size, locked = $locked)
    };
}

/// Create a normalisation span.
#[macro_export]
macro_rules! normalize_span {
    ($group_size:expr) => {
        tracing::debug_span!("weightset.normalize", group_size = $group_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REDISTRIBUTE: &str = "weightset.redistribute";
    pub const REBALANCE: &str = "weightset.rebalance";
    pub const NORMALIZE: &str = "weightset.normalize";
}
