// ============================================================================
// WALLET PROVIDER - Capacidad inyectada (wallet + red)
// ============================================================================
// El view model nunca toca `window` directamente: recibe un proveedor.
// En el navegador es `EthereumProvider`; en tests, un fake.
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use crate::error::WalletError;
use crate::models::{LogEntry, LogFilter, TransactionReceipt, TransactionRequest, TxHash};

pub type LogCallback = Rc<dyn Fn(LogEntry)>;

#[async_trait(?Send)]
pub trait WalletProvider {
    /// `eth_requestAccounts`: puede abrir el popup de la wallet
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_accounts`: cuentas ya autorizadas, sin popup
    async fn accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Firma y envía la transacción con la cuenta `tx.from`
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, WalletError>;

    /// Resuelve cuando la transacción está minada
    async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, WalletError>;

    /// Escucha logs que cumplan el filtro hasta que se suelte el handle
    fn subscribe_logs(&self, filter: LogFilter, on_log: LogCallback) -> Result<LogSubscription, WalletError>;
}

/// Handle de suscripción: cancela el listener al hacer drop o `unsubscribe()`
pub struct LogSubscription {
    id: u64,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl LogSubscription {
    pub fn new(id: u64, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            id,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            log::info!("🔕 Suscripción {} cancelada", self.id);
            cancel();
        }
    }
}

impl Drop for LogSubscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for LogSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
