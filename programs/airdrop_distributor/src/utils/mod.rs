pub mod receipts;
pub mod token;

pub use receipts::*;
pub use token::*;
