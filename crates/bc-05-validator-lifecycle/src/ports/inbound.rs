//! Inbound Ports (Driving Ports / API)
//!
//! The lifecycle engine is the deterministic state-transition core of a
//! replicated machine, so unlike the node's networked subsystems these
//! ports are synchronous: no call may suspend, block, or race, and the
//! orchestrating transition layer guarantees single-writer access.

use crate::application::RegistryUpdateSummary;
use crate::domain::{BeaconState, LifecycleResult};
use crate::ports::outbound::{BalanceSettlement, ExitEligibilityOracle};
use shared_types::{Consolidation, Deposit, Epoch, ValidatorIndex, VoluntaryExit};

/// Primary Validator Lifecycle API
///
/// Block-level operations (`process_voluntary_exit`, `process_consolidation`,
/// `apply_deposit`) are invoked in the canonical order the operations appear
/// within a block; `process_registry_updates` runs once per epoch transition.
pub trait ValidatorLifecycleApi {
    /// Process a signature-verified voluntary exit: consume exit churn and
    /// assign the validator's exit epoch.
    fn process_voluntary_exit(
        &self,
        state: &mut BeaconState,
        exit: &VoluntaryExit,
    ) -> LifecycleResult<Epoch>;

    /// Process a signature-verified consolidation: consume consolidation
    /// churn, retire the source at the returned epoch, and credit the
    /// target's effective balance.
    fn process_consolidation(
        &self,
        state: &mut BeaconState,
        consolidation: &Consolidation,
        settlement: &mut dyn BalanceSettlement,
    ) -> LifecycleResult<Epoch>;

    /// Apply an inclusion-verified deposit: top up an existing validator or
    /// create a new one with a clamped effective balance.
    fn apply_deposit(
        &self,
        state: &mut BeaconState,
        deposit: &Deposit,
    ) -> LifecycleResult<ValidatorIndex>;

    /// Per-epoch registry sweep: schedule forced exits flagged by the
    /// eligibility oracle (ascending index order) and activate validators
    /// whose eligibility has finalized.
    fn process_registry_updates(
        &self,
        state: &mut BeaconState,
        finalized_epoch: Epoch,
        eligibility: &dyn ExitEligibilityOracle,
    ) -> LifecycleResult<RegistryUpdateSummary>;
}
