pub mod mint_viewmodel;

pub use mint_viewmodel::MintViewModel;
