//! Domain layer: beacon state, churn ledgers, and the error taxonomy.

pub mod entities;
pub mod errors;

pub use entities::{BeaconState, ChurnLedger};
pub use errors::{LifecycleError, LifecycleResult};
