use weightset_core::config::EngineConfig;
use weightset_core::constants::TOTAL_WEIGHT;
use weightset_core::group::precision;
use weightset_core::{BalanceReport, WeightGroup};

/// Sum all weights, round, and compare against 100. Read-only.
pub fn validate_total(group: &WeightGroup, config: &EngineConfig) -> BalanceReport {
    let total = precision::round_to(group.total(), config.decimal_places);
    BalanceReport {
        total,
        is_balanced: (total - TOTAL_WEIGHT).abs() < config.balance_tolerance,
    }
}
