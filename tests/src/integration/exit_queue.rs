//! Exit queue scenarios: churn-limited assignment of exit epochs.

#[cfg(test)]
mod tests {
    use crate::fixtures::{churn_state, minimal_service, ETH};
    use bc_05_validator_lifecycle::{ChurnLedger, ValidatorLifecycleApi};
    use shared_types::VoluntaryExit;

    #[test]
    fn test_exit_queue_fills_one_epoch_then_spills() {
        // 64 validators of 32 ETH, 128 ETH exit churn: four exits share the
        // same exit epoch, the fifth lands one epoch later.
        let service = minimal_service();
        let mut state = churn_state(&service, 64);
        let expected_exit_epoch = service.config().activation_exit_epoch(0);
        let churn_limit = 128 * ETH;

        for i in 0..4u64 {
            let exit = VoluntaryExit {
                epoch: 0,
                validator_index: i,
            };
            let epoch = service.process_voluntary_exit(&mut state, &exit).unwrap();

            assert_eq!(epoch, expected_exit_epoch);
            assert_eq!(state.validator(i).unwrap().exit_epoch, expected_exit_epoch);
            assert_eq!(
                state.exit_churn.balance_to_consume,
                churn_limit - 32 * ETH * (i + 1)
            );
        }
        assert_eq!(state.exit_churn.balance_to_consume, 0);

        let exit = VoluntaryExit {
            epoch: 0,
            validator_index: 4,
        };
        let epoch = service.process_voluntary_exit(&mut state, &exit).unwrap();

        assert_eq!(epoch, expected_exit_epoch + 1);
        assert_eq!(state.exit_churn.balance_to_consume, churn_limit - 32 * ETH);
    }

    #[test]
    fn test_exit_queue_large_validator_spans_sixteen_epochs() {
        // A 2048 ETH validator against a 128 ETH budget, starting from an
        // exhausted ledger at the floor epoch: sixteen whole epochs of
        // churn, consumed to exactly zero.
        let service = minimal_service();
        let mut state = churn_state(&service, 64);
        state.validator_mut(0).unwrap().effective_balance = 2048 * ETH;
        let floor = service.config().activation_exit_epoch(0);
        state.exit_churn = ChurnLedger {
            earliest_epoch: floor,
            balance_to_consume: 0,
        };

        let exit = VoluntaryExit {
            epoch: 0,
            validator_index: 0,
        };
        let epoch = service.process_voluntary_exit(&mut state, &exit).unwrap();

        assert_eq!(epoch, floor + 16);
        assert_eq!(state.validator(0).unwrap().exit_epoch, floor + 16);
        assert_eq!(state.exit_churn.balance_to_consume, 0);
        assert_eq!(state.exit_churn.earliest_epoch, floor + 16);
    }

    #[test]
    fn test_exit_queue_churn_limit_validator_fits_current_epoch() {
        // A validator whose balance equals the churn limit consumes the
        // whole epoch budget without advancing the queue.
        let service = minimal_service();
        let mut state = churn_state(&service, 64);
        state.validator_mut(0).unwrap().effective_balance = 128 * ETH;
        let floor = service.config().activation_exit_epoch(0);

        let exit = VoluntaryExit {
            epoch: 0,
            validator_index: 0,
        };
        let epoch = service.process_voluntary_exit(&mut state, &exit).unwrap();

        assert_eq!(epoch, floor);
        assert_eq!(state.exit_churn.balance_to_consume, 0);
        assert_eq!(state.exit_churn.earliest_epoch, floor);
    }

    #[test]
    fn test_exit_queue_carries_remainder_across_a_large_exit() {
        // One ETH of pre-existing churn pushes a churn-limit exit a full
        // epoch later and survives as the remainder.
        let service = minimal_service();
        let mut state = churn_state(&service, 64);
        state.validator_mut(0).unwrap().effective_balance = 128 * ETH;
        let floor = service.config().activation_exit_epoch(0);
        state.exit_churn = ChurnLedger {
            earliest_epoch: floor,
            balance_to_consume: ETH,
        };

        let exit = VoluntaryExit {
            epoch: 0,
            validator_index: 0,
        };
        let epoch = service.process_voluntary_exit(&mut state, &exit).unwrap();

        assert_eq!(epoch, floor + 1);
        assert_eq!(state.exit_churn.balance_to_consume, ETH);
    }

    #[test]
    fn test_exit_epoch_floor_respects_existing_exits_at_genesis() {
        // A registry adopted with an exit already far in the future: new
        // exits queue behind it, never before it.
        let service = minimal_service();
        let mut validators: Vec<_> =
            (0..64).map(|i| crate::fixtures::active_validator(i as u8, 32 * ETH)).collect();
        validators[7].exit_epoch = 40;
        let balances = vec![32 * ETH; 64];
        let state = service.initialize_state(0, validators, balances);

        assert_eq!(state.exit_churn.earliest_epoch, 40);

        let mut state = state;
        let exit = VoluntaryExit {
            epoch: 0,
            validator_index: 0,
        };
        let epoch = service.process_voluntary_exit(&mut state, &exit).unwrap();
        assert!(epoch >= 40);
    }
}
