pub mod airdrop_state;
pub mod receipt_state;

pub use airdrop_state::*;
pub use receipt_state::*;
