//! Beacon state owned by the Validator Lifecycle subsystem
//!
//! `BeaconState` here is the lifecycle-relevant slice of the global chain
//! state: the validator registry arena, the parallel balance list, and the
//! two churn ledgers. Serialization and hashing of the full state are owned
//! by the serialization subsystem; this module only defines the fields.

use serde::{Deserialize, Serialize};
use shared_types::{Epoch, Gwei, PublicKey, Validator, ValidatorIndex};
use std::collections::HashMap;

/// Carry-forward rate-limit state for one churn queue.
///
/// Two independent copies live in the beacon state, one for the exit queue
/// and one for the consolidation queue. `earliest_epoch` never decreases
/// across a chain history, and `balance_to_consume` is the unspent part of
/// the budget at `earliest_epoch`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurnLedger {
    /// Earliest future epoch at which budget is or becomes available.
    pub earliest_epoch: Epoch,
    /// Unspent portion of the budget at `earliest_epoch`.
    pub balance_to_consume: Gwei,
}

/// The lifecycle slice of the beacon state.
///
/// Validators are stored in a flat arena and referenced by index everywhere
/// (consolidation source/target, deposits, registry sweeps); indices are
/// assigned once at creation and never reused.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeaconState {
    /// The epoch the chain is currently in, advanced by the epoch
    /// transition orchestrator.
    pub current_epoch: Epoch,
    /// The validator registry arena.
    pub validators: Vec<Validator>,
    /// Actual balances in Gwei, parallel to `validators`.
    pub balances: Vec<Gwei>,
    /// Churn ledger for the exit/activation queue.
    pub exit_churn: ChurnLedger,
    /// Churn ledger for the consolidation queue.
    pub consolidation_churn: ChurnLedger,
    /// Registry position by public key, for deposit top-ups.
    #[serde(skip)]
    pubkey_index: HashMap<PublicKey, usize>,
}

impl BeaconState {
    /// Create a state with zeroed churn ledgers.
    ///
    /// `ValidatorLifecycleService::initialize_state` layers the genesis
    /// ledger seeding on top of this.
    pub fn new(current_epoch: Epoch, validators: Vec<Validator>, balances: Vec<Gwei>) -> Self {
        debug_assert_eq!(validators.len(), balances.len());
        let mut state = Self {
            current_epoch,
            validators,
            balances,
            exit_churn: ChurnLedger::default(),
            consolidation_churn: ChurnLedger::default(),
            pubkey_index: HashMap::new(),
        };
        state.rebuild_lookup();
        state
    }

    /// Get a validator by index.
    pub fn validator(&self, index: ValidatorIndex) -> Option<&Validator> {
        self.validators.get(index as usize)
    }

    /// Get a validator mutably by index.
    pub fn validator_mut(&mut self, index: ValidatorIndex) -> Option<&mut Validator> {
        self.validators.get_mut(index as usize)
    }

    /// Look up a registry position by public key.
    pub fn index_of_pubkey(&self, pubkey: &PublicKey) -> Option<ValidatorIndex> {
        self.pubkey_index.get(pubkey).map(|&i| i as ValidatorIndex)
    }

    /// Append a validator and its balance; returns the assigned index.
    pub fn push_validator(&mut self, validator: Validator, balance: Gwei) -> ValidatorIndex {
        let index = self.validators.len();
        self.pubkey_index.insert(validator.pubkey, index);
        self.validators.push(validator);
        self.balances.push(balance);
        index as ValidatorIndex
    }

    /// Sum of effective balances of validators active in the current epoch.
    ///
    /// Recomputed at each use: it changes across epoch boundaries, so churn
    /// limits must never be cached across epochs.
    pub fn total_active_balance(&self) -> Gwei {
        self.validators
            .iter()
            .filter(|v| v.is_active(self.current_epoch))
            .map(|v| v.effective_balance)
            .sum()
    }

    /// Number of validators in the registry.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Rebuild the pubkey lookup table (after deserialization).
    pub fn rebuild_lookup(&mut self) {
        self.pubkey_index = self
            .validators
            .iter()
            .enumerate()
            .map(|(i, v)| (v.pubkey, i))
            .collect();
    }
}
