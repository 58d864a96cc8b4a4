//! Validator Lifecycle Service
//!
//! Orchestrates the churn accountants over a `&mut BeaconState`:
//!
//! 1. Validate preconditions (fail closed, no partial mutation)
//! 2. Compute this epoch's churn limit
//! 3. Consume the relevant ledger
//! 4. Commit validator mutations
//!
//! Every path is deterministic and synchronous; the block-validation layer
//! above guarantees operations arrive in canonical order and that a failed
//! operation invalidates the whole block.

use crate::algorithms::{
    activation_exit_churn_limit, compute_effective_balance, consolidation_churn_limit,
    consume_churn,
};
use crate::config::ChainConfig;
use crate::domain::{BeaconState, ChurnLedger, LifecycleError, LifecycleResult};
use crate::ports::inbound::ValidatorLifecycleApi;
use crate::ports::outbound::{BalanceSettlement, ExitEligibilityOracle};
use shared_types::{
    has_execution_credentials, withdrawal_address, Consolidation, Deposit, Epoch, Gwei, Validator,
    ValidatorIndex, VoluntaryExit, FAR_FUTURE_EPOCH,
};

use tracing::{debug, info, warn};

/// Outcome of one per-epoch registry sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryUpdateSummary {
    /// Forced exits scheduled this sweep.
    pub exits_initiated: usize,
    /// Activations committed this sweep.
    pub activations_scheduled: usize,
}

/// Validator Lifecycle Service
pub struct ValidatorLifecycleService {
    config: ChainConfig,
}

impl ValidatorLifecycleService {
    /// Create a service with mainnet constants.
    pub fn new() -> Self {
        Self {
            config: ChainConfig::default(),
        }
    }

    /// Create a service with custom constants.
    pub fn with_config(config: ChainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Build a genesis state with both ledgers seeded at the activation-exit
    /// floor carrying a full epoch of budget. The exit ledger additionally
    /// starts no earlier than any exit already present in the registry.
    pub fn initialize_state(
        &self,
        current_epoch: Epoch,
        validators: Vec<Validator>,
        balances: Vec<Gwei>,
    ) -> BeaconState {
        let mut state = BeaconState::new(current_epoch, validators, balances);
        let floor = self.config.activation_exit_epoch(current_epoch);
        let total = state.total_active_balance();

        let earliest_exit_epoch = state
            .validators
            .iter()
            .map(|v| v.exit_epoch)
            .filter(|&e| e != FAR_FUTURE_EPOCH)
            .fold(floor, Epoch::max);

        state.exit_churn = ChurnLedger {
            earliest_epoch: earliest_exit_epoch,
            balance_to_consume: activation_exit_churn_limit(total, &self.config),
        };
        state.consolidation_churn = ChurnLedger {
            earliest_epoch: floor,
            balance_to_consume: consolidation_churn_limit(total, &self.config),
        };
        state
    }

    /// Schedule an exit for `index`, consuming exit churn.
    ///
    /// Idempotent: a validator that already has an exit epoch keeps it and
    /// no churn is consumed. The voluntary-exit block path layers a
    /// stricter already-exiting check on top of this.
    pub fn initiate_exit(
        &self,
        state: &mut BeaconState,
        index: ValidatorIndex,
    ) -> LifecycleResult<Epoch> {
        let validator = state
            .validator(index)
            .ok_or(LifecycleError::UnknownValidator { index })?;
        if validator.is_exiting() {
            return Ok(validator.exit_epoch);
        }

        let amount = validator.effective_balance;
        if amount > self.config.max_effective_balance {
            return Err(LifecycleError::EffectiveBalanceTooLarge {
                amount,
                max: self.config.max_effective_balance,
            });
        }

        let limit = activation_exit_churn_limit(state.total_active_balance(), &self.config);
        let floor = self.config.activation_exit_epoch(state.current_epoch);
        let exit_epoch = consume_churn(&mut state.exit_churn, floor, limit, amount);

        let validator = state
            .validator_mut(index)
            .ok_or(LifecycleError::UnknownValidator { index })?;
        validator.exit_epoch = exit_epoch;
        validator.withdrawable_epoch = exit_epoch + self.config.min_validator_withdrawability_delay;

        debug!(
            validator_index = index,
            exit_epoch,
            remaining_budget = state.exit_churn.balance_to_consume,
            "Scheduled validator exit"
        );
        Ok(exit_epoch)
    }
}

impl Default for ValidatorLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorLifecycleApi for ValidatorLifecycleService {
    fn process_voluntary_exit(
        &self,
        state: &mut BeaconState,
        exit: &VoluntaryExit,
    ) -> LifecycleResult<Epoch> {
        let current_epoch = state.current_epoch;
        if exit.epoch > current_epoch {
            return Err(LifecycleError::FutureOperationEpoch {
                epoch: exit.epoch,
                current_epoch,
            });
        }

        let index = exit.validator_index;
        let validator = state
            .validator(index)
            .ok_or(LifecycleError::UnknownValidator { index })?;
        if !validator.is_active(current_epoch) {
            return Err(LifecycleError::ValidatorNotActive {
                index,
                epoch: current_epoch,
            });
        }
        if validator.is_exiting() {
            warn!(
                validator_index = index,
                exit_epoch = validator.exit_epoch,
                "Rejected voluntary exit for already-exiting validator"
            );
            return Err(LifecycleError::ValidatorAlreadyExiting {
                index,
                exit_epoch: validator.exit_epoch,
            });
        }

        self.initiate_exit(state, index)
    }

    fn process_consolidation(
        &self,
        state: &mut BeaconState,
        consolidation: &Consolidation,
        settlement: &mut dyn BalanceSettlement,
    ) -> LifecycleResult<Epoch> {
        let current_epoch = state.current_epoch;
        if consolidation.epoch > current_epoch {
            return Err(LifecycleError::FutureOperationEpoch {
                epoch: consolidation.epoch,
                current_epoch,
            });
        }

        let source_index = consolidation.source_index;
        let target_index = consolidation.target_index;
        if source_index == target_index {
            return Err(LifecycleError::SelfConsolidation {
                index: source_index,
            });
        }

        // All precondition checks complete before either record is touched:
        // source and target must commit together or not at all.
        let source = state.validator(source_index).ok_or(
            LifecycleError::UnknownValidator {
                index: source_index,
            },
        )?;
        let target = state.validator(target_index).ok_or(
            LifecycleError::UnknownValidator {
                index: target_index,
            },
        )?;
        for (index, validator) in [(source_index, source), (target_index, target)] {
            if !validator.is_active(current_epoch) {
                return Err(LifecycleError::ValidatorNotActive {
                    index,
                    epoch: current_epoch,
                });
            }
            if validator.is_exiting() {
                return Err(LifecycleError::ValidatorAlreadyExiting {
                    index,
                    exit_epoch: validator.exit_epoch,
                });
            }
        }
        if !has_execution_credentials(&source.withdrawal_credentials)
            || !has_execution_credentials(&target.withdrawal_credentials)
            || withdrawal_address(&source.withdrawal_credentials)
                != withdrawal_address(&target.withdrawal_credentials)
        {
            return Err(LifecycleError::IncompatibleCredentials {
                source: source_index,
                target: target_index,
            });
        }

        let amount = source.effective_balance;
        if amount > self.config.max_effective_balance {
            return Err(LifecycleError::EffectiveBalanceTooLarge {
                amount,
                max: self.config.max_effective_balance,
            });
        }

        let limit = consolidation_churn_limit(state.total_active_balance(), &self.config);
        let floor = self.config.activation_exit_epoch(current_epoch);
        let exit_epoch = consume_churn(&mut state.consolidation_churn, floor, limit, amount);

        // Retire the source at the assigned epoch.
        let source = state.validator_mut(source_index).ok_or(
            LifecycleError::UnknownValidator {
                index: source_index,
            },
        )?;
        source.exit_epoch = exit_epoch;
        source.withdrawable_epoch = exit_epoch + self.config.min_validator_withdrawability_delay;

        // Credit the target, saturating at the cap; the overflow becomes
        // withdrawable balance settled outside this core.
        let target = state.validator_mut(target_index).ok_or(
            LifecycleError::UnknownValidator {
                index: target_index,
            },
        )?;
        let headroom = self.config.max_effective_balance - target.effective_balance;
        let credited = amount.min(headroom);
        target.effective_balance += credited;
        if amount > credited {
            settlement.credit_withdrawable(target_index, amount - credited);
        }

        debug!(
            source_index,
            target_index,
            exit_epoch,
            credited,
            overflow = amount - credited,
            "Processed consolidation"
        );
        Ok(exit_epoch)
    }

    fn apply_deposit(
        &self,
        state: &mut BeaconState,
        deposit: &Deposit,
    ) -> LifecycleResult<ValidatorIndex> {
        if deposit.amount == 0 {
            return Err(LifecycleError::InvalidDeposit {
                reason: "zero amount".to_string(),
            });
        }

        if let Some(index) = state.index_of_pubkey(&deposit.pubkey) {
            // Known pubkey: top up the actual balance. Effective-balance
            // recomputation happens at the epoch transition, outside this
            // subsystem.
            let balance = &mut state.balances[index as usize];
            *balance = balance.checked_add(deposit.amount).ok_or(
                LifecycleError::BalanceOverflow {
                    amount: deposit.amount,
                },
            )?;
            debug!(
                validator_index = index,
                amount = deposit.amount,
                "Applied deposit top-up"
            );
            return Ok(index);
        }

        let effective_balance = compute_effective_balance(deposit.amount, &self.config);
        let validator = Validator::new(
            deposit.pubkey,
            deposit.withdrawal_credentials,
            effective_balance,
        );
        let index = state.push_validator(validator, deposit.amount);
        debug!(
            validator_index = index,
            amount = deposit.amount,
            effective_balance,
            "Created validator from deposit"
        );
        Ok(index)
    }

    fn process_registry_updates(
        &self,
        state: &mut BeaconState,
        finalized_epoch: Epoch,
        eligibility: &dyn ExitEligibilityOracle,
    ) -> LifecycleResult<RegistryUpdateSummary> {
        let current_epoch = state.current_epoch;
        let mut summary = RegistryUpdateSummary::default();

        // Forced exits in ascending index order. The order is part of the
        // consensus contract: under contention it decides who is pushed to
        // a later epoch.
        for index in 0..state.len() as ValidatorIndex {
            let flagged = {
                let validator = &state.validators[index as usize];
                validator.is_active(current_epoch)
                    && !validator.is_exiting()
                    && eligibility.should_exit(index, validator)
            };
            if flagged {
                self.initiate_exit(state, index)?;
                summary.exits_initiated += 1;
            }
        }

        // Activations at the standard delay for validators whose
        // eligibility has finalized. The activation-side balance budget is
        // not applied here: its dequeue semantics are pending upstream
        // confirmation.
        let activation_epoch = self.config.activation_exit_epoch(current_epoch);
        for validator in state.validators.iter_mut() {
            if validator.activation_epoch == FAR_FUTURE_EPOCH
                && validator.activation_eligibility_epoch <= finalized_epoch
            {
                validator.activation_epoch = activation_epoch;
                summary.activations_scheduled += 1;
            }
        }

        info!(
            current_epoch,
            exits_initiated = summary.exits_initiated,
            activations_scheduled = summary.activations_scheduled,
            "Completed registry updates"
        );
        Ok(summary)
    }
}
