//! Weight groups, nested groups, lock sets, and the ordered map they share.

pub mod lock_set;
pub mod nested;
pub mod ordered_map;
pub mod precision;
pub mod weight_group;

pub use lock_set::LockSet;
pub use nested::NestedWeights;
pub use ordered_map::OrderedMap;
pub use weight_group::WeightGroup;
