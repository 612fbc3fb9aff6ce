#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use anchor_lang::prelude::*;

    use crate::error::AirdropError;
    use crate::ledger::*;
    use crate::test::harness::*;

    /// Small deterministic generator so batches vary between runs of the loop
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: u64) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 33) % bound
        }
    }

    fn random_batch(rng: &mut Lcg) -> (Vec<Pubkey>, Vec<u64>) {
        let len = 1 + rng.next(4) as usize;
        let recipients = (0..len).map(|_| key(1 + rng.next(12) as u8)).collect();
        let amounts = (0..len).map(|_| rng.next(50)).collect();
        (recipients, amounts)
    }

    #[test]
    fn test_receipts_monotonic_and_paid_once() {
        println!("=== Testing receipt monotonicity and at-most-once delivery ===");

        let mut airdrop = Harness::funded(1_000);
        let asset = airdrop.asset;
        let controller = airdrop.controller();
        let everyone: Vec<Pubkey> = (1..=12).map(key).collect();
        let mut rng = Lcg(7);
        let mut paid: BTreeMap<Pubkey, u64> = BTreeMap::new();
        let mut seen = vec![false; everyone.len()];

        for round in 0..200 {
            let (recipients, amounts) = random_batch(&mut rng);
            let before = airdrop.balances.clone();

            match airdrop.distribute(controller, recipients.clone(), amounts.clone()) {
                Ok(()) => {
                    for (recipient, amount) in recipients.iter().zip(&amounts) {
                        assert!(paid.insert(*recipient, *amount).is_none(), "round {round}: paid twice");
                    }
                }
                Err(_) => assert_eq!(airdrop.balances, before, "round {round}: failed batch left changes"),
            }

            let flags = airdrop.check_received(&everyone).unwrap();
            for (i, flag) in flags.iter().enumerate() {
                assert!(!seen[i] || *flag, "round {round}: receipt for {} was cleared", everyone[i]);
                seen[i] = *flag;
            }
        }

        for recipient in &everyone {
            let expected = paid.get(recipient).copied().unwrap_or_default();
            assert_eq!(airdrop.balance_of(&asset, recipient), expected);
        }
        let total_paid: u64 = paid.values().sum();
        assert_eq!(airdrop.balance_of(&asset, &airdrop.airdrop), 1_000 - total_paid);
        println!("{} recipients paid over {} batches", paid.len(), airdrop.processed.len());
    }

    #[test]
    fn test_sum_precheck_fires_before_last_transfer() {
        let controller = key(CONTROLLER_KEY);

        for balance in [1u64, 50, 99] {
            let mut airdrop = Harness::funded(balance);
            let asset = airdrop.asset;
            let before = airdrop.balances.clone();

            // Only the final entry would run the vault dry
            assert_airdrop_error(
                airdrop.distribute(controller, vec![key(1), key(2)], vec![1, 99]),
                AirdropError::InsufficientBalance,
            );
            assert_eq!(airdrop.balances, before);
            assert_eq!(airdrop.balance_of(&asset, &key(1)), 0);
        }
    }

    #[test]
    fn test_check_received_preserves_order() {
        let mut airdrop = Harness::funded(1_000);
        let controller = airdrop.controller();
        airdrop
            .distribute(controller, vec![key(3), key(5)], vec![1, 1])
            .unwrap();

        let query = vec![key(5), key(1), key(3), key(5), key(0), key(9)];
        assert_eq!(
            airdrop.check_received(&query).unwrap(),
            vec![true, false, true, true, false, false]
        );
        assert!(airdrop.check_received(&[]).unwrap().is_empty());
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Step {
        Mark(Pubkey),
        Transfer(Pubkey, bool),
    }

    /// Receipts and ledger sharing one journal and one receipt set
    #[derive(Clone, Default)]
    struct Shared {
        steps: Rc<RefCell<Vec<Step>>>,
        receipts: Rc<RefCell<MemoryReceipts>>,
    }

    struct JournalReceipts(Shared);

    impl ReceiptReader for JournalReceipts {
        fn has_received(&self, recipient: &Pubkey) -> Result<bool> {
            self.0.receipts.borrow().has_received(recipient)
        }
    }

    impl ReceiptWriter for JournalReceipts {
        fn mark_received(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
            self.0.steps.borrow_mut().push(Step::Mark(*recipient));
            self.0.receipts.borrow_mut().mark_received(recipient, amount)
        }
    }

    /// Records whether the recipient's receipt was already visible when paid
    struct JournalLedger(Shared, u64);

    impl AssetLedger for JournalLedger {
        fn balance(&self) -> Result<u64> {
            Ok(self.1)
        }

        fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<bool> {
            let marked = self.0.receipts.borrow().has_received(to)?;
            self.0.steps.borrow_mut().push(Step::Transfer(*to, marked));
            self.1 -= amount;
            Ok(true)
        }
    }

    #[test]
    fn test_receipt_written_before_transfer() {
        let gate = AccessGate::new(key(CONTROLLER_KEY)).unwrap();
        let shared = Shared::default();
        let mut receipts = JournalReceipts(shared.clone());
        let mut ledger = JournalLedger(shared.clone(), 100);

        let distribution = process_distribution(
            &gate,
            &key(CONTROLLER_KEY),
            key(AIRDROP_KEY),
            &mut ledger,
            &mut receipts,
            vec![key(1), key(2)],
            vec![30, 70],
        )
        .unwrap();

        assert_eq!(distribution.total, 100);
        assert_eq!(ledger.1, 0);
        assert_eq!(
            *shared.steps.borrow(),
            vec![
                Step::Mark(key(1)),
                Step::Transfer(key(1), true),
                Step::Mark(key(2)),
                Step::Transfer(key(2), true),
            ]
        );
    }

    #[test]
    fn test_batch_total() {
        assert_eq!(batch_total(&[]).unwrap(), 0);
        assert_eq!(batch_total(&[1, 2, 3]).unwrap(), 6);
        assert_eq!(batch_total(&[u64::MAX]).unwrap(), u64::MAX);
        assert_airdrop_error(batch_total(&[u64::MAX - 1, 1, 1]), AirdropError::AmountOverflow);
    }

    #[test]
    fn test_running_totals() {
        let mut state = crate::state::Airdrop::default();

        state.record_batch(300, 2).unwrap();
        state.record_batch(50, 1).unwrap();
        assert_eq!(state.total_distributed, 350);
        assert_eq!(state.recipients_paid, 3);

        assert_airdrop_error(state.record_batch(u64::MAX, 1), AirdropError::ArithmeticOverflow);
    }
}
