use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used by the airdrop distributor. Every account the program owns
 * or signs for is derived from one of these.
 */

#[constant]
/// Seed for the airdrop PDA
/// - Used in: ["airdrop", creator, token_mint, airdrop_id]
/// - One creator may run several airdrops for the same mint by varying airdrop_id
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for the token vault PDA
/// - Used in: ["vault", airdrop_key]
/// - The vault is a token account whose authority is the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for receipt PDAs
/// - Used in: ["receipt", airdrop_key, recipient]
/// - Existence of the account means the recipient has been paid
/// - Never closed, so a recipient can be paid at most once per airdrop
pub const RECEIPT_SEED: &str = "receipt";
