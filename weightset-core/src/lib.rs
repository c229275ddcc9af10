//! # weightset-core
//!
//! Foundation crate for proportional weight groups.
//! Defines the data model, traits, errors, config, and constants.
//! The engine, observability, and fixture crates all depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod group;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WeightSetConfig;
pub use errors::{WeightError, WeightResult};
pub use group::{LockSet, NestedWeights, WeightGroup};
pub use models::{BalanceReport, Redistribution, RedistributionOutcome, WeightChangeRequest};
