#[cfg(test)]
mod tests {
    use crate::error::AirdropError;
    use crate::ledger::{AccessGate, Authorizable};
    use crate::state::Airdrop;
    use crate::test::harness::*;

    #[test]
    fn test_construction_rejects_default_asset() {
        assert_airdrop_error(
            Harness::new(key(0), key(CONTROLLER_KEY)).map(|_| ()),
            AirdropError::InvalidAsset,
        );
    }

    #[test]
    fn test_construction_rejects_default_controller() {
        assert_airdrop_error(
            Harness::new(key(ASSET_KEY), key(0)).map(|_| ()),
            AirdropError::InvalidController,
        );
    }

    #[test]
    fn test_gate_authorizes_only_controller() {
        let gate = AccessGate::new(key(CONTROLLER_KEY)).unwrap();

        assert!(gate.authorize(&key(CONTROLLER_KEY)).is_ok());
        assert_airdrop_error(gate.authorize(&key(STRANGER_KEY)), AirdropError::Unauthorized);
        assert_airdrop_error(gate.authorize(&key(0)), AirdropError::Unauthorized);
    }

    #[test]
    fn test_transfer_control() {
        let mut gate = AccessGate::new(key(CONTROLLER_KEY)).unwrap();

        assert_airdrop_error(
            gate.transfer_control(&key(STRANGER_KEY), key(STRANGER_KEY)),
            AirdropError::Unauthorized,
        );
        assert_airdrop_error(
            gate.transfer_control(&key(CONTROLLER_KEY), key(0)),
            AirdropError::InvalidController,
        );
        assert_eq!(gate.controller(), key(CONTROLLER_KEY));

        let previous = gate
            .transfer_control(&key(CONTROLLER_KEY), key(STRANGER_KEY))
            .unwrap();
        assert_eq!(previous, key(CONTROLLER_KEY));
        assert_eq!(gate.controller(), key(STRANGER_KEY));
        assert_airdrop_error(gate.authorize(&key(CONTROLLER_KEY)), AirdropError::Unauthorized);
    }

    #[test]
    fn test_new_controller_can_distribute() {
        let mut airdrop = Harness::funded(1_000);
        let old = airdrop.controller();
        airdrop.gate.transfer_control(&old, key(STRANGER_KEY)).unwrap();

        assert_airdrop_error(
            airdrop.distribute(old, vec![key(1)], vec![10]),
            AirdropError::Unauthorized,
        );
        airdrop
            .distribute(key(STRANGER_KEY), vec![key(1)], vec![10])
            .unwrap();
        assert_eq!(airdrop.check_received(&[key(1)]).unwrap(), vec![true]);
    }

    #[test]
    fn test_airdrop_account_checks_controller() {
        let mut airdrop = Airdrop {
            gate: AccessGate::new(key(CONTROLLER_KEY)).unwrap(),
            token_mint: key(ASSET_KEY),
            ..Default::default()
        };

        assert!(airdrop.is_controller(&key(CONTROLLER_KEY)));
        assert!(!airdrop.is_controller(&key(STRANGER_KEY)));
        assert!(!airdrop.is_controller(&key(0)));
        assert!(airdrop.authorize(&key(CONTROLLER_KEY)).is_ok());

        airdrop
            .gate
            .transfer_control(&key(CONTROLLER_KEY), key(STRANGER_KEY))
            .unwrap();
        assert!(!airdrop.is_controller(&key(CONTROLLER_KEY)));
        assert!(airdrop.is_controller(&key(STRANGER_KEY)));
        assert_airdrop_error(airdrop.authorize(&key(CONTROLLER_KEY)), AirdropError::Unauthorized);
    }
}
