//! Pure consensus arithmetic: churn limits, ledger consumption, and the
//! effective-balance clamp. Nothing in this module touches state outside
//! the arguments it is given.

pub mod churn_limit;
pub mod effective_balance;
pub mod ledger;

pub use churn_limit::{activation_exit_churn_limit, consolidation_churn_limit};
pub use effective_balance::compute_effective_balance;
pub use ledger::consume_churn;
