use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropCreated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Caller-chosen id used in the airdrop PDA
    pub airdrop_id: u64,
    /// Account that paid for and funded the airdrop
    pub creator: Pubkey,
    /// Controller allowed to distribute and recover
    pub controller: Pubkey,
    /// Token mint being distributed
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Amount moved into the vault at creation
    pub initial_deposit: u64,
}

/// Event emitted once per successful distribute call
///
/// Carries the instruction's recipients and amounts verbatim.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropProcessed {
    pub airdrop: Pubkey,
    pub recipients: Vec<Pubkey>,
    pub amounts: Vec<u64>,
}

/// Event emitted when an asset balance is swept to the controller
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensRecovered {
    pub airdrop: Pubkey,
    /// Mint of the recovered asset
    pub asset: Pubkey,
    /// Full balance that was swept
    pub amount: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerTransferred {
    pub airdrop: Pubkey,
    pub previous_controller: Pubkey,
    pub new_controller: Pubkey,
}
