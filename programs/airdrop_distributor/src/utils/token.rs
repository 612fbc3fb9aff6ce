use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::extension::transfer_fee::TransferFeeConfig;
use anchor_spl::token_interface::{
    get_mint_extension_data, transfer_checked, TokenAccount, TransferChecked,
};

use crate::error::AirdropError;
use crate::ledger::AssetLedger;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Deserializes a token account owned by `token_program`.
pub fn read_token_account(info: &AccountInfo, token_program: &Pubkey) -> Result<TokenAccount> {
    require_keys_eq!(*info.owner, *token_program, AirdropError::InvalidTokenAccount);
    let data = info.try_borrow_data()?;
    TokenAccount::try_deserialize(&mut &data[..])
}

/// Whether `mint` carries the Token-2022 transfer fee extension.
/// A configured fee of zero still counts.
pub fn has_transfer_fee(mint: &AccountInfo) -> bool {
    get_mint_extension_data::<TransferFeeConfig>(mint).is_ok()
}

/**
 * Token account held by the airdrop PDA, seen as an AssetLedger
 *
 * Transfers go out through transfer_checked signed by the airdrop PDA.
 * Destinations are registered per wallet with `route`; a transfer to a wallet
 * without a usable destination reports failure instead of aborting, so the
 * caller can surface TransferFailed.
 *
 * By default a transfer only succeeds if the destination is credited exactly
 * `amount`. `allow_transfer_fees` drops that requirement.
 */
pub struct VaultLedger<'a, 'info> {
    vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    decimals: u8,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
    destinations: BTreeMap<Pubkey, AccountInfo<'info>>,
    exact_delivery: bool,
}

impl<'a, 'info> VaultLedger<'a, 'info> {
    pub fn new(
        vault: AccountInfo<'info>,
        mint: AccountInfo<'info>,
        decimals: u8,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            vault,
            mint,
            decimals,
            authority,
            token_program,
            signer_seeds,
            destinations: BTreeMap::new(),
            exact_delivery: true,
        }
    }

    /// Accepts a credit reduced by a transfer fee.
    pub fn allow_transfer_fees(mut self) -> Self {
        self.exact_delivery = false;
        self
    }

    /// Registers the token account that payments to `wallet` land in.
    /// The first registration for a wallet wins.
    pub fn route(&mut self, wallet: Pubkey, destination: AccountInfo<'info>) {
        self.destinations.entry(wallet).or_insert(destination);
    }

    /// Balance of `destination` if it can receive this mint on behalf of `wallet`.
    fn receivable_balance(&self, wallet: &Pubkey, destination: &AccountInfo<'info>) -> Option<u64> {
        let account = read_token_account(destination, self.token_program.key).ok()?;
        let usable = account.mint == *self.mint.key && account.owner == *wallet && !account.is_frozen();
        usable.then_some(account.amount)
    }
}

impl AssetLedger for VaultLedger<'_, '_> {
    fn balance(&self) -> Result<u64> {
        Ok(read_token_account(&self.vault, self.token_program.key)?.amount)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<bool> {
        let Some(destination) = self.destinations.get(to) else {
            msg!("no token account supplied for {}", to);
            return Ok(false);
        };
        let Some(before) = self.receivable_balance(to, destination) else {
            msg!("token account {} cannot receive for {}", destination.key, to);
            return Ok(false);
        };

        transfer_token(
            self.authority.clone(),
            self.vault.clone(),
            destination.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.signer_seeds),
        )?;

        if !self.exact_delivery {
            return Ok(true);
        }

        // Token-2022 fees can shave the credited amount
        let after = read_token_account(destination, self.token_program.key)?.amount;
        Ok(after.checked_sub(before) == Some(amount))
    }
}
