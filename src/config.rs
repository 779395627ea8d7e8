// ============================================================================
// CONFIG - Configuración de la app (tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::utils::constants::{
    COLLECTION_URL, CONTRACT_ADDRESS, CREATE_NFT_SIGNATURE, DEFAULT_POLL_INTERVAL_MS,
    EXPLORER_TX_URL, LOG_LEVEL, MARKETPLACE_ASSET_URL, MINTED_EVENT_SIGNATURE, POLL_INTERVAL_MS,
};
use crate::utils::links::{explorer_tx_url, marketplace_asset_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub contract: ContractConfig,
    pub links: LinksConfig,
    pub provider: ProviderConfig,
    pub ui: UiConfig,
}

/// Contrato desplegado y su interfaz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub address: String,
    pub create_signature: String,
    pub minted_event_signature: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: CONTRACT_ADDRESS.to_string(),
            create_signature: CREATE_NFT_SIGNATURE.to_string(),
            minted_event_signature: MINTED_EVENT_SIGNATURE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    pub explorer_tx_url: String,
    pub marketplace_asset_url: String,
    pub collection_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            explorer_tx_url: EXPLORER_TX_URL.to_string(),
            marketplace_asset_url: MARKETPLACE_ASSET_URL.to_string(),
            collection_url: COLLECTION_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Intervalo de polling para recibos y eventos
    pub poll_interval_ms: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Textos y assets de la UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub title_image: String,
    pub preview_image: String,
    pub author: String,
    pub author_url: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title_image: "title.png".to_string(),
            preview_image: "img.gif".to_string(),
            author: "marcvernet31".to_string(),
            author_url: "https://github.com/marcvernet31".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            contract: ContractConfig::default(),
            links: LinksConfig::default(),
            provider: ProviderConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: LOG_LEVEL.unwrap_or("info").to_string(),
            provider: ProviderConfig {
                poll_interval_ms: POLL_INTERVAL_MS
                    .and_then(|v| v.parse().ok())
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            },
            ..defaults
        }
    }

    /// Nivel de log para wasm_logger (por defecto Info)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn explorer_url(&self, tx_hash: &str) -> String {
        explorer_tx_url(&self.links.explorer_tx_url, tx_hash)
    }

    pub fn marketplace_url(&self, token_id: u64) -> String {
        marketplace_asset_url(&self.links.marketplace_asset_url, &self.contract.address, token_id)
    }
}
