//! Churn ledger consumption
//!
//! The central queue-accounting algorithm. One call consumes `amount` Gwei
//! of per-epoch budget from a [`ChurnLedger`], carrying unspent budget
//! within an epoch and spilling large requests across as many future epochs
//! as they need. Both the exit queue and the consolidation queue run this
//! same routine over their own ledger.
//!
//! The arithmetic here is consensus-critical: every node must compute the
//! identical target epoch and remainder for the same call sequence.

use crate::domain::ChurnLedger;
use shared_types::{Epoch, Gwei};

/// Consume `amount` from the ledger at a per-epoch budget of
/// `per_epoch_limit`, returning the epoch at which the request is satisfied.
///
/// `epoch_floor` is the first epoch any new request could take effect
/// (current epoch plus the activation/exit lookahead).
///
/// Steps:
/// 1. The target epoch is the later of the ledger position and the floor.
/// 2. If the ledger rolled into a later epoch since its last use, the
///    available budget resets to the full per-epoch limit; otherwise the
///    leftover from the previous call applies.
/// 3. A shortfall advances the target by `ceil(shortfall / limit)` epochs,
///    each contributing one more full limit of budget. A shortfall that
///    divides the limit exactly occupies exactly that many whole epochs.
/// 4. The remainder is carried in the ledger for the next request.
///
/// An `amount` of zero consumes nothing and returns the current floor.
pub fn consume_churn(
    ledger: &mut ChurnLedger,
    epoch_floor: Epoch,
    per_epoch_limit: Gwei,
    amount: Gwei,
) -> Epoch {
    let mut target_epoch = ledger.earliest_epoch.max(epoch_floor);

    let mut available = if target_epoch > ledger.earliest_epoch {
        per_epoch_limit
    } else {
        ledger.balance_to_consume
    };

    if amount > available {
        let shortfall = amount - available;
        let additional_epochs = (shortfall - 1) / per_epoch_limit + 1;
        target_epoch += additional_epochs;
        available += additional_epochs * per_epoch_limit;
    }

    ledger.balance_to_consume = available - amount;
    ledger.earliest_epoch = target_epoch;
    target_epoch
}
