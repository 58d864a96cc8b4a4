//! # Core Domain Entities
//!
//! Defines the beacon-chain entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Units**: `Epoch`, `Gwei`, `ValidatorIndex`, `FAR_FUTURE_EPOCH`
//! - **Registry**: `Validator`, `WithdrawalCredentials`
//! - **Block operations**: `VoluntaryExit`, `Consolidation`, `Deposit`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

// =============================================================================
// CLUSTER A: CONSENSUS UNITS
// =============================================================================

/// A unit of chain time over which churn budgets are tracked.
pub type Epoch = u64;

/// Balance denomination; all stake accounting is done in Gwei.
pub type Gwei = u64;

/// Position of a validator in the registry arena.
///
/// Cross-references between validators (consolidation source/target) are
/// expressed as indices, never as embedded records.
pub type ValidatorIndex = u64;

/// A 48-byte BLS public key identifying a validator.
pub type PublicKey = [u8; 48];

/// Opaque 32-byte withdrawal credentials.
///
/// The first byte is a type prefix; execution-layer credentials carry a
/// 20-byte address in the last 20 bytes.
pub type WithdrawalCredentials = [u8; 32];

/// Sentinel epoch meaning "not scheduled".
///
/// `exit_epoch`, `activation_epoch`, and friends hold this value until the
/// corresponding transition has been committed to the registry.
pub const FAR_FUTURE_EPOCH: Epoch = u64::MAX;

/// Credential prefix for execution-layer (eth1-style) withdrawals.
pub const EXECUTION_WITHDRAWAL_PREFIX: u8 = 0x01;

/// Credential prefix for compounding validators.
pub const COMPOUNDING_WITHDRAWAL_PREFIX: u8 = 0x02;

/// Whether credentials can receive execution-layer withdrawals.
pub fn has_execution_credentials(credentials: &WithdrawalCredentials) -> bool {
    matches!(
        credentials[0],
        EXECUTION_WITHDRAWAL_PREFIX | COMPOUNDING_WITHDRAWAL_PREFIX
    )
}

/// The 20-byte withdrawal address embedded in execution-layer credentials.
pub fn withdrawal_address(credentials: &WithdrawalCredentials) -> &[u8] {
    &credentials[12..]
}

// =============================================================================
// CLUSTER B: THE REGISTRY
// =============================================================================

/// A single entry in the validator registry.
///
/// Lifecycle epochs are set at most once and only ever move forward;
/// `FAR_FUTURE_EPOCH` marks transitions that have not been scheduled yet.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    /// BLS public key (registry-unique).
    #[serde_as(as = "Bytes")]
    pub pubkey: PublicKey,
    /// Withdrawal credentials (opaque to the lifecycle engine).
    pub withdrawal_credentials: WithdrawalCredentials,
    /// Quantized, capped stake used for all protocol weighting.
    pub effective_balance: Gwei,
    /// Whether the validator has been slashed.
    pub slashed: bool,
    /// Epoch at which the validator became eligible to activate
    /// (decided by the eligibility subsystem, read-only here).
    pub activation_eligibility_epoch: Epoch,
    /// Epoch at which the validator activates.
    pub activation_epoch: Epoch,
    /// Epoch at which the validator stops participating.
    pub exit_epoch: Epoch,
    /// Epoch at which the validator's stake becomes withdrawable.
    pub withdrawable_epoch: Epoch,
}

impl Validator {
    /// Create a fresh, not-yet-activated validator.
    pub fn new(
        pubkey: PublicKey,
        withdrawal_credentials: WithdrawalCredentials,
        effective_balance: Gwei,
    ) -> Self {
        Self {
            pubkey,
            withdrawal_credentials,
            effective_balance,
            slashed: false,
            activation_eligibility_epoch: FAR_FUTURE_EPOCH,
            activation_epoch: FAR_FUTURE_EPOCH,
            exit_epoch: FAR_FUTURE_EPOCH,
            withdrawable_epoch: FAR_FUTURE_EPOCH,
        }
    }

    /// Whether the validator is active in `epoch`.
    pub fn is_active(&self, epoch: Epoch) -> bool {
        self.activation_epoch <= epoch && epoch < self.exit_epoch
    }

    /// Whether an exit has already been scheduled.
    pub fn is_exiting(&self) -> bool {
        self.exit_epoch != FAR_FUTURE_EPOCH
    }
}

// =============================================================================
// CLUSTER C: BLOCK OPERATIONS
// =============================================================================

/// A voluntary exit request, signature-verified upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryExit {
    /// Earliest epoch at which the exit may be processed.
    pub epoch: Epoch,
    /// The validator requesting to exit.
    pub validator_index: ValidatorIndex,
}

/// A consolidation request merging `source_index` into `target_index`,
/// signature-verified upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consolidation {
    /// Earliest epoch at which the consolidation may be processed.
    pub epoch: Epoch,
    /// Validator being merged away.
    pub source_index: ValidatorIndex,
    /// Validator receiving the stake.
    pub target_index: ValidatorIndex,
}

/// A deposit, proof-of-inclusion-verified upstream.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    /// BLS public key of the depositing validator.
    #[serde_as(as = "Bytes")]
    pub pubkey: PublicKey,
    /// Withdrawal credentials for a newly created validator.
    pub withdrawal_credentials: WithdrawalCredentials,
    /// Deposited amount in Gwei.
    pub amount: Gwei,
}
