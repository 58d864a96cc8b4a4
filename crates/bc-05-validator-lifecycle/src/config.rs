//! Configuration for the Validator Lifecycle subsystem
//!
//! Network constants are loaded by the node configuration layer and handed
//! to this subsystem read-only. Changing any of them is a hard fork.

use serde::{Deserialize, Serialize};
use shared_types::{Epoch, Gwei};

/// Read-only chain constants the lifecycle engine computes against.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Quantization step for effective balances, in Gwei.
    pub effective_balance_increment: Gwei,
    /// Balance required to activate a validator, in Gwei.
    pub min_activation_balance: Gwei,
    /// Hard cap on any validator's effective balance, in Gwei.
    pub max_effective_balance: Gwei,
    /// Active validators at or below this balance are force-exited.
    pub ejection_balance: Gwei,
    /// Exit/activation churn floor, in validators per epoch.
    pub min_per_epoch_churn_limit: u64,
    /// Divisor of total active balance for the exit/activation churn limit.
    pub churn_limit_quotient: u64,
    /// Consolidation churn floor, in validators per epoch.
    ///
    /// Consolidations contend for their own budget, so this floor is
    /// configured independently of the exit/activation floor.
    pub min_per_epoch_consolidation_churn_limit: u64,
    /// Divisor of total active balance for the consolidation churn limit.
    pub consolidation_churn_limit_quotient: u64,
    /// Lookahead between initiating a transition and it taking effect.
    pub max_seed_lookahead: u64,
    /// Epochs between exit and withdrawability.
    pub min_validator_withdrawability_delay: u64,
}

impl ChainConfig {
    /// First epoch at which an activation or exit initiated during `epoch`
    /// can take effect.
    pub fn activation_exit_epoch(&self, epoch: Epoch) -> Epoch {
        epoch + 1 + self.max_seed_lookahead
    }

    /// Minimal preset: mainnet constants with small churn quotients, used
    /// by test networks so churn effects show up with few validators.
    pub fn minimal() -> Self {
        Self {
            churn_limit_quotient: 32,
            consolidation_churn_limit_quotient: 32,
            ..Self::default()
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            effective_balance_increment: 1_000_000_000,
            min_activation_balance: 32_000_000_000,
            max_effective_balance: 2_048_000_000_000,
            ejection_balance: 16_000_000_000,
            min_per_epoch_churn_limit: 4,
            churn_limit_quotient: 65_536,
            min_per_epoch_consolidation_churn_limit: 4,
            consolidation_churn_limit_quotient: 65_536,
            max_seed_lookahead: 4,
            min_validator_withdrawability_delay: 256,
        }
    }
}
