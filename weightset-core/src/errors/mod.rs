//! Error handling for WeightSet.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod weight_error;

pub use config_error::ConfigError;
pub use error_code::WeightErrorCode;
pub use weight_error::WeightError;

/// Result alias used across the workspace.
pub type WeightResult<T> = Result<T, WeightError>;
