use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::ledger::{process_distribution, Authorizable};
use crate::state::*;
use crate::utils::{ReceiptAccounts, ReceiptRecorder, VaultLedger};

/**
 * Account context for pushing a batch of allocations
 *
 * Access Control: Only the controller can distribute
 *
 * Remaining accounts, one pair per recipient in the order of `recipients`:
 * 0. receipt PDA ["receipt", airdrop_key, recipient] (writable, uninitialized)
 * 1. recipient's token account for the airdrop mint (writable)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Distribute<'info> {
    /// The airdrop being paid out
    /// - Writable so concurrent mutating calls on the same airdrop serialize
    #[account(
        mut,
        constraint = airdrop.is_controller(&controller.key()) @ AirdropError::Unauthorized,
        has_one = token_mint @ AirdropError::TokenMintMismatch,
        has_one = token_vault,
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault holding the distributed tokens
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump = airdrop.vault_bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Must be the airdrop controller; pays rent for new receipts
    #[account(mut)]
    pub controller: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays each recipient its amount and records a receipt for it
 *
 * @param ctx - The account context; remaining accounts carry receipts and destinations
 * @param recipients - Recipient wallets, in payout order
 * @param amounts - Amount per recipient, same order and length as recipients
 *
 * Any failure aborts the transaction, so no receipt and no transfer of a
 * failed batch survives.
 */
pub fn handle_distribute<'info>(
    ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let airdrop_key = airdrop.key();
    let gate = airdrop.gate;

    // Prepare PDA signing seeds for vault transfers
    let creator = airdrop.creator;
    let token_mint = airdrop.token_mint;
    let id_bytes = airdrop.airdrop_id.to_le_bytes();
    let bump = [airdrop.bump];
    let seeds: [&[u8]; 5] = [
        AIRDROP_SEED.as_bytes(),
        creator.as_ref(),
        token_mint.as_ref(),
        &id_bytes,
        &bump,
    ];
    let signer = [&seeds[..]];

    let mut vault = VaultLedger::new(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_mint.decimals,
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &signer,
    );
    let mut receipts = ReceiptAccounts::new(ctx.program_id, airdrop_key);
    for (recipient, accounts) in recipients.iter().zip(ctx.remaining_accounts.chunks(2)) {
        receipts.track(*recipient, accounts[0].clone());
        if let Some(destination) = accounts.get(1) {
            vault.route(*recipient, destination.clone());
        }
    }
    let mut receipts = ReceiptRecorder::new(
        receipts,
        ctx.accounts.controller.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    );

    let distribution = process_distribution(
        &gate,
        &ctx.accounts.controller.key(),
        airdrop_key,
        &mut vault,
        &mut receipts,
        recipients,
        amounts,
    )?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.record_batch(distribution.total, distribution.event.recipients.len())?;

    msg!(
        "airdrop {} paid {} recipients, {} tokens",
        airdrop_key,
        distribution.event.recipients.len(),
        distribution.total
    );

    emit_cpi!(distribution.event);

    Ok(())
}
