pub mod reactivity;
pub mod mint_state;

pub use reactivity::ReactiveState;
pub use mint_state::MintState;
