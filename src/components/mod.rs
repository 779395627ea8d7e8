pub mod app;
pub mod hero;
pub mod mint_panel;
pub mod minted_alert;
pub mod footer;

pub use app::App;
pub use hero::Hero;
pub use mint_panel::MintPanel;
pub use minted_alert::MintedAlert;
pub use footer::Footer;
