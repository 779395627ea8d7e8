pub mod use_mint;

pub use use_mint::{use_mint, UseMintHandle};
