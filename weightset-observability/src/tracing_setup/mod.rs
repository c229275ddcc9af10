//! Global subscriber setup driven by [`ObservabilityConfig`].

pub mod spans;

pub use spans::names;

use tracing_subscriber::EnvFilter;
use weightset_core::config::{defaults, ObservabilityConfig};
use weightset_core::constants::VERSION;

/// Build the filter: `RUST_LOG` wins, then `config.log_level`, then the
/// compiled default when the configured directive does not parse.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber.
///
/// Returns `false` when a global subscriber was already set (tests, or a host
/// application that configured its own); the existing one is kept.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = build_filter(config);
    let installed = if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok()
    };
    if installed {
        tracing::debug!(
            version = VERSION,
            level = %config.log_level,
            json = config.json_logs,
            "weightset tracing initialised"
        );
    }
    installed
}
