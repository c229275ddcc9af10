//! Thin stateful wrappers for weight widgets.
//!
//! Widgets own a group and a lock set between events; these adapters hold
//! that state, forward each edit to the engine, and commit the result only
//! on success. They never notify anyone: callers read the returned
//! [`Redistribution`](weightset_core::Redistribution) or error and decide
//! what to show.

mod group_adapter;
mod nested_adapter;

pub use group_adapter::GroupAdapter;
pub use nested_adapter::NestedAdapter;
