use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::ledger::{AccessGate, Authorizable};

/**
 * Airdrop state account
 *
 * One instance per airdrop campaign. Holds the controller gate, the asset
 * being distributed and running totals. Per-recipient receipts live in
 * separate Receipt PDAs scoped by this account's key.
 *
 * Derivation: ["airdrop", creator, token_mint, airdrop_id]
 *
 * Lifecycle:
 * 1. Created during initialize_airdrop
 * 2. Totals grow with each distribute call
 * 3. Controller may change through transfer_controller
 * 4. Never closed, so receipts stay queryable
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for the airdrop PDA
    pub bump: u8,

    /// Bump seed for the vault PDA
    pub vault_bump: u8,

    /// Caller-chosen id, part of the PDA seeds
    pub airdrop_id: u64,

    /// Account that created (and initially funded) the airdrop
    pub creator: Pubkey,

    /// Controller gate
    /// - Only the controller may distribute, recover or hand over control
    pub gate: AccessGate,

    /// Mint of the distributed asset
    pub token_mint: Pubkey,

    /// Token account holding the distributed asset
    /// - Derived from: ["vault", airdrop_key]
    /// - Authority is this airdrop PDA
    pub token_vault: Pubkey,

    /// Total amount paid out across all distribute calls
    pub total_distributed: u64,

    /// Number of recipients paid so far
    pub recipients_paid: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Records a successful batch in the running totals.
    pub fn record_batch(&mut self, total: u64, recipients: usize) -> Result<()> {
        let recipients =
            u64::try_from(recipients).map_err(|_| error!(AirdropError::ArithmeticOverflow))?;
        self.total_distributed = self
            .total_distributed
            .checked_add(total)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        self.recipients_paid = self
            .recipients_paid
            .checked_add(recipients)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        Ok(())
    }
}

impl Authorizable for Airdrop {
    fn controller(&self) -> Pubkey {
        self.gate.controller()
    }
}
