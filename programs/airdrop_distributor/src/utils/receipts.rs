use std::collections::BTreeMap;
use std::io::Cursor;

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::RECEIPT_SEED;
use crate::error::AirdropError;
use crate::ledger::{ReceiptReader, ReceiptWriter};
use crate::state::Receipt;

/**
 * Receipt PDAs supplied to an instruction, keyed by recipient
 *
 * A recipient counts as received when its receipt PDA exists and is owned
 * by this program. Lookups for a recipient whose account was not supplied,
 * or whose account is not the derived PDA, fail with ReceiptAccountMismatch.
 */
pub struct ReceiptAccounts<'a, 'info> {
    program_id: &'a Pubkey,
    airdrop: Pubkey,
    accounts: BTreeMap<Pubkey, TrackedReceipt<'info>>,
}

/// Supplied account plus the PDA and bump derived for its recipient.
struct TrackedReceipt<'info> {
    account: AccountInfo<'info>,
    address: Pubkey,
    bump: u8,
}

impl<'a, 'info> ReceiptAccounts<'a, 'info> {
    pub fn new(program_id: &'a Pubkey, airdrop: Pubkey) -> Self {
        Self {
            program_id,
            airdrop,
            accounts: BTreeMap::new(),
        }
    }

    /// Registers the receipt account for `recipient`. The first registration wins.
    /// The PDA is derived here, once per recipient.
    pub fn track(&mut self, recipient: Pubkey, account: AccountInfo<'info>) {
        let (airdrop, program_id) = (self.airdrop, self.program_id);
        self.accounts.entry(recipient).or_insert_with(|| {
            let (address, bump) = Receipt::address(&airdrop, &recipient, program_id);
            TrackedReceipt {
                account,
                address,
                bump,
            }
        });
    }

    fn locate(&self, recipient: &Pubkey) -> Result<(&AccountInfo<'info>, u8)> {
        let Some(tracked) = self.accounts.get(recipient) else {
            msg!("no receipt account supplied for {}", recipient);
            return err!(AirdropError::ReceiptAccountMismatch);
        };
        require_keys_eq!(*tracked.account.key, tracked.address, AirdropError::ReceiptAccountMismatch);
        Ok((&tracked.account, tracked.bump))
    }

    fn is_recorded(&self, account: &AccountInfo) -> bool {
        account.owner == self.program_id && !account.data_is_empty()
    }
}

impl ReceiptReader for ReceiptAccounts<'_, '_> {
    fn has_received(&self, recipient: &Pubkey) -> Result<bool> {
        let (account, _) = self.locate(recipient)?;
        Ok(self.is_recorded(account))
    }
}

/// Receipt accounts plus what it takes to create new ones.
pub struct ReceiptRecorder<'a, 'info> {
    receipts: ReceiptAccounts<'a, 'info>,
    payer: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
}

impl<'a, 'info> ReceiptRecorder<'a, 'info> {
    pub fn new(
        receipts: ReceiptAccounts<'a, 'info>,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> Self {
        Self {
            receipts,
            payer,
            system_program,
        }
    }
}

impl ReceiptReader for ReceiptRecorder<'_, '_> {
    fn has_received(&self, recipient: &Pubkey) -> Result<bool> {
        self.receipts.has_received(recipient)
    }
}

impl ReceiptWriter for ReceiptRecorder<'_, '_> {
    fn mark_received(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let airdrop = self.receipts.airdrop;
        let program_id = self.receipts.program_id;
        let (account, bump) = self.receipts.locate(recipient)?;
        require!(!self.receipts.is_recorded(account), AirdropError::AlreadyReceived);

        let bump_seed = [bump];
        let seeds: [&[u8]; 4] = [
            RECEIPT_SEED.as_bytes(),
            airdrop.as_ref(),
            recipient.as_ref(),
            &bump_seed,
        ];
        create_pda_account(
            self.payer.clone(),
            account.clone(),
            self.system_program.clone(),
            Receipt::LEN,
            program_id,
            &[&seeds[..]],
        )?;

        let receipt = Receipt {
            airdrop,
            recipient: *recipient,
            amount,
            bump,
        };
        let mut data = account.try_borrow_mut_data()?;
        let dst: &mut [u8] = &mut data;
        receipt.try_serialize(&mut Cursor::new(dst))
    }
}

/// Creates a program-owned PDA, tolerating lamports already sitting at the address.
pub fn create_pda_account<'info>(
    payer: AccountInfo<'info>,
    target: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: payer,
                    to: target,
                },
                signer_seeds,
            ),
            required,
            space as u64,
            owner,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer,
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: target,
            },
            signer_seeds,
        ),
        owner,
    )
}
