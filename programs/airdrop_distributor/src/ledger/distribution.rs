use anchor_lang::prelude::*;

use super::{AssetLedger, Authorizable, ReceiptReader, ReceiptWriter};
use crate::error::AirdropError;
use crate::event::{AirdropProcessed, TokensRecovered};

/// Outcome of a successful distribute call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Sum of all amounts paid out
    pub total: u64,
    pub event: AirdropProcessed,
}

/// Rejects the default address as an asset.
pub fn validate_asset(asset: &Pubkey) -> Result<()> {
    require_keys_neq!(*asset, Pubkey::default(), AirdropError::InvalidAsset);
    Ok(())
}

/// Sums a batch of amounts, failing instead of wrapping.
pub fn batch_total(amounts: &[u64]) -> Result<u64> {
    amounts.iter().try_fold(0u64, |total, amount| {
        total
            .checked_add(*amount)
            .ok_or_else(|| error!(AirdropError::AmountOverflow))
    })
}

/**
 * Pays every recipient its amount, at most once per recipient
 *
 * Check order:
 * 1. caller is the controller
 * 2. batch is non-empty and both lists have the same length
 * 3. the batch total fits in u64 and the ledger holds at least that much
 * 4. per entry, in input order: recipient is set, amount is nonzero, no receipt yet
 *
 * Each receipt is written before its transfer. The function does not undo
 * earlier entries when a later one fails; the caller must run it inside a
 * scope that discards every write on error (a transaction on chain).
 */
pub fn process_distribution<G, L, R>(
    gate: &G,
    caller: &Pubkey,
    airdrop: Pubkey,
    ledger: &mut L,
    receipts: &mut R,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<Distribution>
where
    G: Authorizable + ?Sized,
    L: AssetLedger + ?Sized,
    R: ReceiptWriter + ?Sized,
{
    gate.authorize(caller)?;

    require!(!recipients.is_empty(), AirdropError::EmptyBatch);
    require_eq!(recipients.len(), amounts.len(), AirdropError::LengthMismatch);

    let total = batch_total(&amounts)?;
    let balance = ledger.balance()?;
    if balance < total {
        msg!("batch total {} exceeds balance {}", total, balance);
        return err!(AirdropError::InsufficientBalance);
    }

    for (index, (recipient, amount)) in recipients.iter().zip(amounts.iter()).enumerate() {
        pay_recipient(index, recipient, *amount, ledger, receipts)?;
    }

    Ok(Distribution {
        total,
        event: AirdropProcessed {
            airdrop,
            recipients,
            amounts,
        },
    })
}

fn pay_recipient<L, R>(
    index: usize,
    recipient: &Pubkey,
    amount: u64,
    ledger: &mut L,
    receipts: &mut R,
) -> Result<()>
where
    L: AssetLedger + ?Sized,
    R: ReceiptWriter + ?Sized,
{
    if *recipient == Pubkey::default() {
        msg!("entry {}: default recipient", index);
        return err!(AirdropError::InvalidRecipient);
    }
    if amount == 0 {
        msg!("entry {}: zero amount for {}", index, recipient);
        return err!(AirdropError::InvalidAmount);
    }
    if receipts.has_received(recipient)? {
        msg!("entry {}: {} already received", index, recipient);
        return err!(AirdropError::AlreadyReceived);
    }

    receipts.mark_received(recipient, amount)?;
    if !ledger.transfer(recipient, amount)? {
        msg!("entry {}: transfer of {} to {} failed", index, amount, recipient);
        return err!(AirdropError::TransferFailed);
    }
    Ok(())
}

/// Receipt flags for `addresses`, same length and order. Unseen addresses are `false`.
pub fn check_receipts<R>(receipts: &R, addresses: &[Pubkey]) -> Result<Vec<bool>>
where
    R: ReceiptReader + ?Sized,
{
    addresses
        .iter()
        .map(|address| receipts.has_received(address))
        .collect()
}

/// Sweeps the ledger's whole balance of `asset` to the controller.
pub fn process_recovery<G, L>(
    gate: &G,
    caller: &Pubkey,
    airdrop: Pubkey,
    asset: Pubkey,
    ledger: &mut L,
) -> Result<TokensRecovered>
where
    G: Authorizable + ?Sized,
    L: AssetLedger + ?Sized,
{
    gate.authorize(caller)?;
    validate_asset(&asset)?;

    let amount = ledger.balance()?;
    require!(amount > 0, AirdropError::NothingToRecover);

    if !ledger.transfer(&gate.controller(), amount)? {
        msg!("recovery of {} {} failed", amount, asset);
        return err!(AirdropError::TransferFailed);
    }

    Ok(TokensRecovered {
        airdrop,
        asset,
        amount,
    })
}
