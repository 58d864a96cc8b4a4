//! Deposit scenarios: effective-balance clamping and top-ups.
//!
//! Deposits never touch the churn ledgers; the clamp is the only
//! quantization applied on the way in.

#[cfg(test)]
mod tests {
    use crate::fixtures::{churn_state, execution_credentials, minimal_service, ETH};
    use bc_05_validator_lifecycle::ValidatorLifecycleApi;
    use shared_types::{Deposit, FAR_FUTURE_EPOCH};

    fn deposit_of(amount: u64) -> Deposit {
        Deposit {
            pubkey: [0xF0; 48],
            withdrawal_credentials: execution_credentials(0xAA),
            amount,
        }
    }

    #[test]
    fn test_deposit_below_activation_balance_rounds_down_an_increment() {
        // One Gwei below the activation balance quantizes a whole increment
        // below the deposited amount.
        let service = minimal_service();
        let mut state = churn_state(&service, 4);
        let amount = service.config().min_activation_balance - 1;

        let index = service.apply_deposit(&mut state, &deposit_of(amount)).unwrap();

        let v = state.validator(index).unwrap();
        assert_eq!(v.effective_balance, 31 * ETH);
        assert_eq!(state.balances[index as usize], amount);
    }

    #[test]
    fn test_deposit_above_max_is_capped_not_rejected() {
        let service = minimal_service();
        let mut state = churn_state(&service, 4);
        let max = service.config().max_effective_balance;

        let index = service
            .apply_deposit(&mut state, &deposit_of(max + 500 * ETH))
            .unwrap();

        let v = state.validator(index).unwrap();
        assert_eq!(v.effective_balance, max);
        // The raw balance keeps the full deposited amount.
        assert_eq!(state.balances[index as usize], max + 500 * ETH);
    }

    #[test]
    fn test_new_validator_awaits_external_eligibility() {
        let service = minimal_service();
        let mut state = churn_state(&service, 4);

        let index = service
            .apply_deposit(&mut state, &deposit_of(32 * ETH))
            .unwrap();

        let v = state.validator(index).unwrap();
        assert_eq!(v.activation_eligibility_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(v.activation_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(v.exit_epoch, FAR_FUTURE_EPOCH);
    }

    #[test]
    fn test_repeat_deposit_tops_up_instead_of_duplicating() {
        let service = minimal_service();
        let mut state = churn_state(&service, 4);

        let first = service
            .apply_deposit(&mut state, &deposit_of(32 * ETH))
            .unwrap();
        let second = service
            .apply_deposit(&mut state, &deposit_of(ETH))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(state.len(), 5);
        assert_eq!(state.balances[first as usize], 33 * ETH);
    }

    #[test]
    fn test_deposits_leave_churn_ledgers_untouched() {
        let service = minimal_service();
        let mut state = churn_state(&service, 4);
        let exit_ledger = state.exit_churn;
        let consolidation_ledger = state.consolidation_churn;

        service
            .apply_deposit(&mut state, &deposit_of(2048 * ETH))
            .unwrap();

        assert_eq!(state.exit_churn, exit_ledger);
        assert_eq!(state.consolidation_churn, consolidation_ledger);
    }
}
