use anchor_lang::prelude::*;

declare_id!("DsFabZTLXtH8ZKNUqmLGtLHCyd3cd1C7doSEcpb1nt8w");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Distributor Program
 *
 * A Solana program that lets a single controller push token allocations to a
 * list of recipients, paying each recipient at most once per airdrop.
 *
 * Key Features:
 * - Controller-pushed batches (recipients and amounts in one instruction)
 * - All-or-nothing batches: one bad entry fails the whole instruction
 * - Up-front balance check against the sum of the batch
 * - Per-recipient receipts that are never cleared
 * - Recovery of any token balance held by the airdrop
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: controller gate, mint, vault and running totals
 * - Token Vault PDA: holds tokens to be distributed
 * - Receipt PDAs: one per paid recipient
 *
 * Workflow:
 * 1. Creator initializes the airdrop, naming a controller and optionally depositing tokens
 * 2. Controller distributes batches
 * 3. Anyone checks receipt status
 * 4. Controller recovers leftover or stray tokens
 */
#[program]
pub mod airdrop_distributor {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault and creator accounts
     * @param airdrop_id - Caller-chosen id, part of the airdrop PDA seeds
     * @param controller - Account allowed to run mutating operations
     * @param initial_deposit - Tokens moved from the creator into the vault
     *
     * Access Control: Anyone (creator pays)
     */
    pub fn initialize_airdrop(
        ctx: Context<InitializeAirdrop>,
        airdrop_id: u64,
        controller: Pubkey,
        initial_deposit: u64,
    ) -> Result<()> {
        handle_initialize_airdrop(ctx, airdrop_id, controller, initial_deposit)
    }

    /**
     * Pays a batch of recipients
     *
     * @param ctx - Account context; remaining accounts are (receipt, token account) pairs
     * @param recipients - Recipient wallets in payout order
     * @param amounts - Amount for each recipient
     *
     * Access Control: Controller only
     */
    pub fn distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        handle_distribute(ctx, recipients, amounts)
    }

    /**
     * Reports whether each address has been paid
     *
     * @param ctx - Account context; remaining accounts are receipt PDAs
     * @param addresses - Wallets to look up
     *
     * Access Control: Anyone
     */
    pub fn check_received<'info>(
        ctx: Context<'_, '_, 'info, 'info, CheckReceived<'info>>,
        addresses: Vec<Pubkey>,
    ) -> Result<Vec<bool>> {
        handle_check_received(ctx, addresses)
    }

    /**
     * Sweeps the airdrop's whole balance of one mint to the controller
     *
     * Access Control: Controller only
     */
    pub fn recover_tokens(ctx: Context<RecoverTokens>) -> Result<()> {
        handle_recover_tokens(ctx)
    }

    /**
     * Hands control of the airdrop to another account
     *
     * Access Control: Controller only
     */
    pub fn transfer_controller(ctx: Context<TransferController>, new_controller: Pubkey) -> Result<()> {
        handle_transfer_controller(ctx, new_controller)
    }
}
