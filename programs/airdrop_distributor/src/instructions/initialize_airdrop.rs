use crate::constants::*;
use crate::event::*;
use crate::ledger::{validate_asset, AccessGate};
use crate::state::*;
use crate::error::AirdropError;
use crate::utils::{has_transfer_fee, transfer_token};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * This instruction initializes an airdrop for a single token mint:
 * - Creates the airdrop PDA holding the controller gate and totals
 * - Creates a token vault PDA owned by the airdrop PDA
 * - Optionally moves an initial deposit from the creator into the vault
 *
 * Access Control: Anyone may create an airdrop; the controller passed in
 * becomes the only account allowed to distribute from it.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(airdrop_id: u64)]
pub struct InitializeAirdrop<'info> {
    /// The airdrop account (PDA)
    /// - Derived from: ["airdrop", creator, token_mint, airdrop_id]
    #[account(
        init,
        payer = creator,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            creator.key().as_ref(),
            token_mint.key().as_ref(),
            airdrop_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    /// - Token 2022 mints with a transfer fee are rejected
    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account, source of the initial deposit
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Pays for account creation and signs the initial deposit
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new airdrop
 *
 * @param ctx - The account context containing all required accounts
 * @param airdrop_id - Caller-chosen id, lets one creator run several airdrops per mint
 * @param controller - Account allowed to distribute, recover and hand over control
 * @param initial_deposit - Amount moved from the creator into the vault (may be 0)
 */
pub fn handle_initialize_airdrop(
    ctx: Context<InitializeAirdrop>,
    airdrop_id: u64,
    controller: Pubkey,
    initial_deposit: u64,
) -> Result<()> {
    let token_mint = ctx.accounts.token_mint.key();
    // The default address never loads as a mint; this only fires off chain
    validate_asset(&token_mint)?;
    require!(
        !has_transfer_fee(&ctx.accounts.token_mint.to_account_info()),
        AirdropError::TransferFeeMint
    );
    let gate = AccessGate::new(controller)?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.bump = ctx.bumps.airdrop;
    airdrop.vault_bump = ctx.bumps.token_vault;
    airdrop.airdrop_id = airdrop_id;
    airdrop.creator = ctx.accounts.creator.key();
    airdrop.gate = gate;
    airdrop.token_mint = token_mint;
    airdrop.token_vault = ctx.accounts.token_vault.key();
    // total_distributed and recipients_paid start at 0

    if initial_deposit > 0 {
        transfer_token(
            ctx.accounts.creator.to_account_info(),
            ctx.accounts.creator_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.token_mint.decimals,
            None, // creator signs the deposit
        )?;
    }

    msg!("airdrop {} created for mint {}", airdrop.key(), token_mint);

    emit_cpi!(AirdropCreated {
        airdrop: airdrop.key(),
        airdrop_id,
        creator: ctx.accounts.creator.key(),
        controller,
        token_mint,
        token_vault: ctx.accounts.token_vault.key(),
        initial_deposit,
    });

    Ok(())
}
