//! Application layer: the lifecycle service orchestrating domain state and
//! the pure churn algorithms.

pub mod service;

pub use service::{RegistryUpdateSummary, ValidatorLifecycleService};
