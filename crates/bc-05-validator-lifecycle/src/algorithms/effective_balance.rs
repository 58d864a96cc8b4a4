//! Deposit effective-balance clamp
//!
//! Maps a raw deposited amount to the quantized, capped effective balance.
//! Deposits are not churn-limited; the saturation at the maximum is the one
//! intentional clamp in the engine, not an error path.

use crate::config::ChainConfig;
use shared_types::Gwei;

/// Quantize `amount` down to the effective-balance increment and cap it at
/// the network maximum.
pub fn compute_effective_balance(amount: Gwei, config: &ChainConfig) -> Gwei {
    let quantized = amount - amount % config.effective_balance_increment;
    quantized.min(config.max_effective_balance)
}
