use anchor_lang::prelude::*;

use crate::error::AirdropError;

/// Anything guarded by a single controller.
pub trait Authorizable {
    fn controller(&self) -> Pubkey;

    fn is_controller(&self, caller: &Pubkey) -> bool {
        *caller == self.controller()
    }

    /// Succeeds iff `caller` is the controller.
    fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.controller(), AirdropError::Unauthorized);
        Ok(())
    }
}

/**
 * Single-controller access gate
 *
 * Embedded in the airdrop account. Holds the only identity allowed to run
 * mutating operations.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AccessGate {
    controller: Pubkey,
}

impl AccessGate {
    pub fn new(controller: Pubkey) -> Result<Self> {
        require_keys_neq!(controller, Pubkey::default(), AirdropError::InvalidController);
        Ok(Self { controller })
    }

    /// Hands control to `new_controller` and returns the previous controller.
    pub fn transfer_control(&mut self, caller: &Pubkey, new_controller: Pubkey) -> Result<Pubkey> {
        self.authorize(caller)?;
        let next = Self::new(new_controller)?;
        Ok(std::mem::replace(self, next).controller)
    }
}

impl Authorizable for AccessGate {
    fn controller(&self) -> Pubkey {
        self.controller
    }
}
