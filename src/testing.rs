// ============================================================================
// TESTING - Fakes de proveedor y notifier (solo tests)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use async_trait::async_trait;
use futures::channel::oneshot;
use crate::error::WalletError;
use crate::models::{LogEntry, LogFilter, TransactionReceipt, TransactionRequest, TxHash};
use crate::services::contract::ContractAbi;
use crate::services::notifier::Notifier;
use crate::services::provider::{LogCallback, LogSubscription, WalletProvider};

type Subscribers = Rc<RefCell<Vec<(u64, LogFilter, LogCallback)>>>;

/// Proveedor en memoria; cada respuesta es configurable
pub struct FakeProvider {
    authorized: RefCell<Vec<String>>,
    request_result: RefCell<Result<Vec<String>, WalletError>>,
    send_result: RefCell<Result<TxHash, WalletError>>,
    receipt_status: RefCell<String>,
    tx_gate: RefCell<Option<oneshot::Receiver<()>>>,
    sent: RefCell<Vec<TransactionRequest>>,
    request_calls: Cell<usize>,
    subscribers: Subscribers,
    next_id: Cell<u64>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            authorized: RefCell::new(Vec::new()),
            request_result: RefCell::new(Ok(vec!["0xabc".to_string()])),
            send_result: RefCell::new(Ok("0xdeadbeef".to_string())),
            receipt_status: RefCell::new("0x1".to_string()),
            tx_gate: RefCell::new(None),
            sent: RefCell::new(Vec::new()),
            request_calls: Cell::new(0),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(1),
        }
    }

    pub fn with_authorized(accounts: &[&str]) -> Self {
        let provider = Self::new();
        *provider.authorized.borrow_mut() = accounts.iter().map(|a| a.to_string()).collect();
        provider
    }

    pub fn set_request_result(&self, result: Result<Vec<String>, WalletError>) {
        *self.request_result.borrow_mut() = result;
    }

    pub fn set_tx_hash(&self, hash: &str) {
        *self.send_result.borrow_mut() = Ok(hash.to_string());
    }

    pub fn fail_send(&self, error: WalletError) {
        *self.send_result.borrow_mut() = Err(error);
    }

    pub fn set_receipt_status(&self, status: &str) {
        *self.receipt_status.borrow_mut() = status.to_string();
    }

    /// La próxima transacción queda colgada hasta usar el sender devuelto
    pub fn hold_next_transaction(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.tx_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.borrow().clone()
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.get()
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn subscribed_filters(&self) -> Vec<LogFilter> {
        self.subscribers.borrow().iter().map(|(_, f, _)| f.clone()).collect()
    }

    /// Entrega el log a todos los listeners activos
    pub fn emit_log(&self, entry: LogEntry) {
        let callbacks: Vec<LogCallback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, _, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(entry.clone());
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request_calls.set(self.request_calls.get() + 1);
        self.request_result.borrow().clone()
    }

    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        Ok(self.authorized.borrow().clone())
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, WalletError> {
        self.sent.borrow_mut().push(tx.clone());
        let gate = self.tx_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.send_result.borrow().clone()
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, WalletError> {
        Ok(TransactionReceipt {
            transaction_hash: hash.to_string(),
            block_number: Some("0x10".to_string()),
            status: Some(self.receipt_status.borrow().clone()),
        })
    }

    fn subscribe_logs(&self, filter: LogFilter, on_log: LogCallback) -> Result<LogSubscription, WalletError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, filter, on_log));

        let subscribers = self.subscribers.clone();
        Ok(LogSubscription::new(id, move || {
            subscribers.borrow_mut().retain(|(sub_id, _, _)| *sub_id != id);
        }))
    }
}

/// Notifier que solo registra los mensajes
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Construye un log `ColorNFTMinted` como lo emitiría el nodo
pub fn minted_log(abi: &ContractAbi, address: &str, from: &str, token_id: u64, indexed: bool) -> LogEntry {
    let from_word = format!("{:0>64}", from.trim_start_matches("0x"));
    let token_word = format!("{:064x}", token_id);
    let (topics, data) = if indexed {
        (
            vec![abi.minted_topic(), format!("0x{}", from_word), format!("0x{}", token_word)],
            "0x".to_string(),
        )
    } else {
        (vec![abi.minted_topic()], format!("0x{}{}", from_word, token_word))
    };

    LogEntry {
        address: address.to_string(),
        topics,
        data,
        block_number: Some("0x10".to_string()),
        transaction_hash: Some("0xdeadbeef".to_string()),
    }
}
