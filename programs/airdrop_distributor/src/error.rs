use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Caller is not the airdrop controller")]
    Unauthorized,
    #[msg("Controller cannot be the default address")]
    InvalidController,

    // Argument validation errors
    #[msg("Asset cannot be the default address")]
    InvalidAsset,
    #[msg("Recipient cannot be the default address")]
    InvalidRecipient,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Recipient list is empty")]
    EmptyBatch,
    #[msg("Recipients and amounts differ in length")]
    LengthMismatch,
    #[msg("Sum of amounts overflows")]
    AmountOverflow,

    // State conflict errors
    #[msg("Recipient has already received this airdrop")]
    AlreadyReceived,
    #[msg("Vault balance is lower than the batch total")]
    InsufficientBalance,
    #[msg("Nothing to recover")]
    NothingToRecover,

    // Downstream errors
    #[msg("Token transfer failed")]
    TransferFailed,

    // Account wiring errors
    #[msg("Receipt account is missing or not derived from the recipient")]
    ReceiptAccountMismatch,
    #[msg("Account is not a token account of the expected program")]
    InvalidTokenAccount,
    #[msg("Token mint does not match the airdrop's token mint")]
    TokenMintMismatch,
    #[msg("Mints with a transfer fee cannot be airdropped")]
    TransferFeeMint,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
