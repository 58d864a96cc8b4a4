//! Per-epoch churn limit functions
//!
//! Both limits are pure functions of total active balance and the chain
//! constants. They must be recomputed at every epoch transition: total
//! active balance changes, so cached values would fork the chain.

use crate::config::ChainConfig;
use shared_types::Gwei;

/// Exit/activation churn limit for an epoch, in Gwei.
///
/// `max(floor, total_active_balance / quotient)`, where the floor is the
/// configured minimum validator count times the activation balance, rounded
/// down to the effective-balance increment.
pub fn activation_exit_churn_limit(total_active_balance: Gwei, config: &ChainConfig) -> Gwei {
    let floor = config.min_per_epoch_churn_limit * config.min_activation_balance;
    let limit = floor.max(total_active_balance / config.churn_limit_quotient);
    limit - limit % config.effective_balance_increment
}

/// Consolidation churn limit for an epoch, in Gwei.
///
/// Analogous to [`activation_exit_churn_limit`] but independently
/// configured: consolidations contend for their own rate budget.
pub fn consolidation_churn_limit(total_active_balance: Gwei, config: &ChainConfig) -> Gwei {
    let floor = config.min_per_epoch_consolidation_churn_limit * config.min_activation_balance;
    let limit = floor.max(total_active_balance / config.consolidation_churn_limit_quotient);
    limit - limit % config.effective_balance_increment
}
