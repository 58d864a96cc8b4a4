//! # bc-05-validator-lifecycle
//!
//! Validator lifecycle subsystem: churn-limited accounting for how
//! validators enter, exit, and merge stake.
//!
//! ## Architecture
//!
//! The engine is the deterministic state-transition core of a replicated
//! machine: every node derives bit-identical ledger and registry mutations
//! from the same block history, so the arithmetic, rounding, and sweep
//! ordering in this crate are part of the consensus contract.
//!
//! ```text
//! Block operations ──┐
//!   VoluntaryExit    │         ┌─ exit ledger ──────────┐
//!   Consolidation    ├──→ ValidatorLifecycleService ────┤
//!   Deposit          │         └─ consolidation ledger ─┘
//! Epoch transition ──┘                 │
//!   registry updates                   ↓
//!                          validator registry arena
//! ```
//!
//! Signature verification, state serialization, fork choice, and rewards
//! live in sibling subsystems; this crate consumes their decisions through
//! its outbound ports and mutates only `exit_epoch`, `withdrawable_epoch`,
//! `activation_epoch`, effective balances, and the two churn ledgers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bc_05_validator_lifecycle::{ChainConfig, ValidatorLifecycleService};
//! use bc_05_validator_lifecycle::ports::ValidatorLifecycleApi;
//!
//! let service = ValidatorLifecycleService::with_config(ChainConfig::default());
//! let mut state = service.initialize_state(0, validators, balances);
//!
//! let exit_epoch = service.process_voluntary_exit(&mut state, &exit)?;
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export main types
pub use adapters::{BalanceEjectionOracle, QueuedBalanceSettlement};
pub use application::{RegistryUpdateSummary, ValidatorLifecycleService};
pub use config::ChainConfig;
pub use domain::{BeaconState, ChurnLedger, LifecycleError, LifecycleResult};
pub use ports::{BalanceSettlement, ExitEligibilityOracle, ValidatorLifecycleApi};
