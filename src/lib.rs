// ============================================================================
// COLOR NFT MINTER - FRONTEND MVVM (RUST + YEW + WASM)
// ============================================================================
// - Components: vistas Yew (sin lógica)
// - Hooks: puente view model <-> re-render
// - ViewModels: estado de sesión + operaciones (connect / mint)
// - Services: proveedor EIP-1193, contrato, avisos
// - State: estado reactivo Rc<RefCell>
// - Models: sesión y tipos JSON-RPC
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
pub(crate) mod testing;

use wasm_logger::Config;
use crate::config::AppConfig;

/// Punto de entrada: panic hook, logging y render
pub fn run() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(Config::new(config.log_level()));
    log::info!("🚀 Color NFT Minter - Rust + Yew");
    log::info!("📜 Contrato: {}", config.contract.address);

    yew::Renderer::<components::App>::new().render();
}
