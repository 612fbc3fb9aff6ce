use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::ledger::{process_recovery, Authorizable};
use crate::state::*;
use crate::utils::VaultLedger;

/**
 * Account context for sweeping an asset out of the airdrop
 *
 * Any token account whose authority is the airdrop PDA can be emptied this
 * way, including the vault of the distributed mint.
 *
 * Access Control: Only the controller can recover tokens
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RecoverTokens<'info> {
    /// Writable so recovery serializes with distribute calls
    #[account(
        mut,
        constraint = airdrop.is_controller(&controller.key()) @ AirdropError::Unauthorized,
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token account held by the airdrop PDA
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = airdrop,
        token::token_program = token_program,
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Controller's token account receiving the whole balance
    /// - Credited less than the swept amount if the mint charges a transfer fee
    #[account(
        mut,
        token::mint = asset_mint,
        token::token_program = token_program,
    )]
    pub controller_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the asset being recovered
    #[account(mint::token_program = token_program)]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// Must be the airdrop controller
    pub controller: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers the full balance of `asset_mint` held by the airdrop to the controller
 *
 * Validation Rules:
 * - Caller must be the controller
 * - The held balance must be nonzero
 *
 * The asset is whatever mint `asset_mint` loads as, so the default address
 * never reaches process_recovery here.
 */
pub fn handle_recover_tokens(ctx: Context<RecoverTokens>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let airdrop_key = airdrop.key();
    let asset = ctx.accounts.asset_mint.key();

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

    let mut ledger = VaultLedger::new(
        ctx.accounts.source_token_account.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.asset_mint.decimals,
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &signer,
    )
    .allow_transfer_fees();
    ledger.route(
        ctx.accounts.controller_token_account.owner,
        ctx.accounts.controller_token_account.to_account_info(),
    );

    let recovered = process_recovery(
        &**airdrop,
        &ctx.accounts.controller.key(),
        airdrop_key,
        asset,
        &mut ledger,
    )?;

    msg!("recovered {} of {} to controller", recovered.amount, asset);

    emit_cpi!(recovered);

    Ok(())
}
