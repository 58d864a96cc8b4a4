//! Error types for the Validator Lifecycle subsystem
//!
//! Every variant is a precondition failure detected before any state
//! mutation: a rejected operation leaves the beacon state untouched, and
//! the surrounding block-validation layer rejects the whole block.

use shared_types::{Epoch, Gwei, ValidatorIndex};

/// Validator lifecycle error types
//
// `Display`/`Error` are implemented by hand rather than via
// `#[derive(thiserror::Error)]`: thiserror unconditionally treats a field
// named `source` (as in `IncompatibleCredentials`) as the error source,
// which requires it to implement `std::error::Error` — impossible for a
// `ValidatorIndex` (u64). All variants are leaf errors with no source.
#[derive(Debug)]
pub enum LifecycleError {
    UnknownValidator {
        index: ValidatorIndex,
    },

    ValidatorAlreadyExiting {
        index: ValidatorIndex,
        exit_epoch: Epoch,
    },

    ValidatorNotActive {
        index: ValidatorIndex,
        epoch: Epoch,
    },

    SelfConsolidation {
        index: ValidatorIndex,
    },

    IncompatibleCredentials {
        source: ValidatorIndex,
        target: ValidatorIndex,
    },

    FutureOperationEpoch {
        epoch: Epoch,
        current_epoch: Epoch,
    },

    EffectiveBalanceTooLarge {
        amount: Gwei,
        max: Gwei,
    },

    BalanceOverflow {
        amount: Gwei,
    },

    InvalidDeposit {
        reason: String,
    },
}

impl core::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownValidator { index } => {
                write!(f, "Unknown validator index: {index}")
            }
            Self::ValidatorAlreadyExiting { index, exit_epoch } => {
                write!(
                    f,
                    "Validator {index} is already exiting at epoch {exit_epoch}"
                )
            }
            Self::ValidatorNotActive { index, epoch } => {
                write!(f, "Validator {index} is not active in epoch {epoch}")
            }
            Self::SelfConsolidation { index } => {
                write!(
                    f,
                    "Consolidation source and target are the same validator: {index}"
                )
            }
            Self::IncompatibleCredentials { source, target } => {
                write!(
                    f,
                    "Incompatible withdrawal credentials: source {source}, target {target}"
                )
            }
            Self::FutureOperationEpoch {
                epoch,
                current_epoch,
            } => {
                write!(
                    f,
                    "Operation epoch {epoch} is ahead of current epoch {current_epoch}"
                )
            }
            Self::EffectiveBalanceTooLarge { amount, max } => {
                write!(f, "Effective balance {amount} exceeds protocol maximum {max}")
            }
            Self::BalanceOverflow { amount } => {
                write!(f, "Balance arithmetic overflow applying {amount}")
            }
            Self::InvalidDeposit { reason } => {
                write!(f, "Invalid deposit: {reason}")
            }
        }
    }
}

impl std::error::Error for LifecycleError {}

/// Result type for lifecycle operations
pub type LifecycleResult<T> = Result<T, LifecycleError>;
