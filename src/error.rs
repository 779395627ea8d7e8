// ============================================================================
// ERRORES - Taxonomía de fallos de wallet / cadena
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No hay `window.ethereum` inyectado
    #[error("no injected wallet provider found")]
    NoProvider,
    #[error("no connected account")]
    NotConnected,
    /// EIP-1193 código 4001
    #[error("request rejected by user: {0}")]
    UserRejected(String),
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("transaction {0} reverted")]
    Reverted(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("invalid event log: {0}")]
    InvalidEvent(String),
    #[error("JS error: {0}")]
    Js(String),
}

impl WalletError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::UserRejected(_))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::InvalidResponse(e.to_string())
    }
}
