pub mod initialize_airdrop;
pub mod distribute;
pub mod check_received;
pub mod recover_tokens;
pub mod transfer_controller;

pub use initialize_airdrop::*;
pub use distribute::*;
pub use check_received::*;
pub use recover_tokens::*;
pub use transfer_controller::*;
