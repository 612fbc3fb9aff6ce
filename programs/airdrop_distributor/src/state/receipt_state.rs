use anchor_lang::prelude::*;

use crate::constants::RECEIPT_SEED;

/**
 * Recipient receipt account
 *
 * Created the moment a recipient is paid. Its existence is the "already
 * received" flag; there is no instruction that closes it.
 *
 * Derivation: ["receipt", airdrop_key, recipient]
 */
#[account]
#[derive(Default, Debug)]
pub struct Receipt {
    /// Airdrop that paid the recipient
    pub airdrop: Pubkey,
    /// Recipient wallet
    pub recipient: Pubkey,
    /// Amount paid
    pub amount: u64,
    /// Bump seed for this PDA
    pub bump: u8,
}

impl Receipt {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Receipt>();

    /// Receipt PDA and bump for `recipient` under `airdrop`.
    pub fn address(airdrop: &Pubkey, recipient: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[RECEIPT_SEED.as_bytes(), airdrop.as_ref(), recipient.as_ref()],
            program_id,
        )
    }
}
