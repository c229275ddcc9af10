//! Configuration system for WeightSet.
//! TOML-based; every section defaults independently.

pub mod defaults;
pub mod engine_config;
pub mod observability_config;
pub mod weightset_config;

pub use engine_config::{EngineConfig, LockedTargetPolicy, SaturationPolicy};
pub use observability_config::ObservabilityConfig;
pub use weightset_config::WeightSetConfig;
