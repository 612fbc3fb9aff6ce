use anchor_lang::prelude::*;

use crate::ledger::check_receipts;
use crate::state::*;
use crate::utils::ReceiptAccounts;

/**
 * Account context for querying receipts
 *
 * Access Control: None, read-only
 *
 * Remaining accounts: one receipt PDA per queried address, in the same order.
 */
#[derive(Accounts)]
pub struct CheckReceived<'info> {
    pub airdrop: Account<'info, Airdrop>,
}

/**
 * Reports, per address, whether the airdrop has paid it
 *
 * @param addresses - Wallets to look up
 *
 * @returns one flag per address, in input order, as instruction return data
 */
pub fn handle_check_received<'info>(
    ctx: Context<'_, '_, 'info, 'info, CheckReceived<'info>>,
    addresses: Vec<Pubkey>,
) -> Result<Vec<bool>> {
    let mut receipts = ReceiptAccounts::new(ctx.program_id, ctx.accounts.airdrop.key());
    for (address, account) in addresses.iter().zip(ctx.remaining_accounts.iter()) {
        receipts.track(*address, account.clone());
    }

    check_receipts(&receipts, &addresses)
}
