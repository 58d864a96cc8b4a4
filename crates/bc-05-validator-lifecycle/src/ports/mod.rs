//! Ports for the Validator Lifecycle subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::ValidatorLifecycleApi;
pub use outbound::{BalanceSettlement, ExitEligibilityOracle};
