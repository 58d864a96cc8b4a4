//! In-process adapters for the outbound ports.

use crate::ports::outbound::{BalanceSettlement, ExitEligibilityOracle};
use shared_types::{Gwei, Validator, ValidatorIndex};

/// Canonical exit-eligibility adapter: flags active validators whose
/// effective balance has fallen to the ejection threshold.
#[derive(Clone, Copy, Debug)]
pub struct BalanceEjectionOracle {
    ejection_balance: Gwei,
    current_epoch: u64,
}

impl BalanceEjectionOracle {
    pub fn new(ejection_balance: Gwei, current_epoch: u64) -> Self {
        Self {
            ejection_balance,
            current_epoch,
        }
    }
}

impl ExitEligibilityOracle for BalanceEjectionOracle {
    fn should_exit(&self, _index: ValidatorIndex, validator: &Validator) -> bool {
        validator.is_active(self.current_epoch)
            && validator.effective_balance <= self.ejection_balance
    }
}

/// Settlement adapter that queues overflow credits for the withdrawal
/// subsystem to pick up after the block commits.
#[derive(Debug, Default)]
pub struct QueuedBalanceSettlement {
    pending: Vec<(ValidatorIndex, Gwei)>,
}

impl QueuedBalanceSettlement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the queued credits in the order they were produced.
    pub fn drain(&mut self) -> Vec<(ValidatorIndex, Gwei)> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl BalanceSettlement for QueuedBalanceSettlement {
    fn credit_withdrawable(&mut self, index: ValidatorIndex, amount: Gwei) {
        self.pending.push((index, amount));
    }
}
