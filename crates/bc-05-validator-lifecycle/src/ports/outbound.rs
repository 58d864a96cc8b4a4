//! Outbound Ports (Driven Ports / External Collaborators)
//!
//! Seams to the subsystems this core consumes decisions from but does not
//! implement. Both traits are synchronous for the same reason the inbound
//! port is: determinism of the state transition.

use shared_types::{Gwei, Validator, ValidatorIndex};

/// Decides which validators must be force-exited during a registry sweep.
///
/// The canonical adapter flags validators at or below the ejection balance;
/// the trait exists so slashing and other eligibility sources plug in
/// without touching the sweep ordering.
pub trait ExitEligibilityOracle {
    /// Whether `validator` should be scheduled for exit this epoch.
    fn should_exit(&self, index: ValidatorIndex, validator: &Validator) -> bool;
}

/// Receives balance that cannot be absorbed into an effective balance.
///
/// Consolidation credits the target up to the network maximum; whatever is
/// left over is settled as withdrawable balance by the withdrawal subsystem
/// behind this port.
pub trait BalanceSettlement {
    /// Credit `amount` Gwei of withdrawable balance to `index`.
    fn credit_withdrawable(&mut self, index: ValidatorIndex, amount: Gwei);
}
