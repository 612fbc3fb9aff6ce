//! Runtime-agnostic airdrop logic.
//!
//! The instruction handlers wire SPL token accounts and receipt PDAs into the
//! traits below; the test harness wires in-memory maps. Both drive the same
//! functions in [`distribution`].

pub mod access;
pub mod distribution;

pub use access::*;
pub use distribution::*;

use anchor_lang::prelude::*;

/// Balance and transfer capability for one asset held by the airdrop.
pub trait AssetLedger {
    /// Amount of the asset currently held by the airdrop.
    fn balance(&self) -> Result<u64>;

    /// Moves `amount` to `to`.
    ///
    /// `Ok(false)` means the transfer did not deliver exactly `amount`. An
    /// `Err` aborts the surrounding operation as is.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<bool>;
}

/// Read side of the per-recipient receipt set.
pub trait ReceiptReader {
    fn has_received(&self, recipient: &Pubkey) -> Result<bool>;
}

/// Write side of the receipt set. Receipts are never cleared.
pub trait ReceiptWriter: ReceiptReader {
    fn mark_received(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}
