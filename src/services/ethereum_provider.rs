// ============================================================================
// ETHEREUM PROVIDER - Binding EIP-1193 sobre `window.ethereum`
// ============================================================================
// Todas las llamadas pasan por `ethereum.request({ method, params })`.
// Los payloads se construyen con serde_json y cruzan a JS via JSON.parse,
// las respuestas vuelven via JSON.stringify.
// Recibos y eventos se obtienen por polling (gloo_timers).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use async_trait::async_trait;
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use crate::error::WalletError;
use crate::models::chain::{parse_quantity, LogCursor};
use crate::models::{LogEntry, LogFilter, TransactionReceipt, TransactionRequest, TxHash};
use crate::services::provider::{LogCallback, LogSubscription, WalletProvider};
use crate::utils::constants::USER_REJECTED_CODE;

#[wasm_bindgen]
extern "C" {
    /// Objeto inyectado por la extensión de la wallet
    #[derive(Clone, Debug)]
    pub type Eip1193;

    #[wasm_bindgen(method, catch)]
    fn request(this: &Eip1193, args: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Proveedor real del navegador
pub struct EthereumProvider {
    inner: Eip1193,
    poll_interval_ms: u32,
    next_subscription_id: Cell<u64>,
}

impl EthereumProvider {
    /// Busca `window.ethereum`; None si no hay wallet instalada
    pub fn detect(poll_interval_ms: u32) -> Option<Self> {
        let win = web_sys::window()?;
        let value = js_sys::Reflect::get(&win, &JsValue::from_str("ethereum")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        log::info!("🦊 Objeto ethereum encontrado");
        Some(Self {
            inner: value.unchecked_into(),
            poll_interval_ms,
            next_subscription_id: Cell::new(1),
        })
    }

    async fn rpc<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, WalletError> {
        rpc_call(&self.inner, method, params).await
    }
}

/// Convierte un error JS (EIP-1193 `{ code, message }`) en WalletError
fn js_error(value: JsValue) -> WalletError {
    let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));

    match code {
        Some(USER_REJECTED_CODE) => WalletError::UserRejected(message),
        Some(code) => WalletError::Rpc { code, message },
        None => WalletError::Js(message),
    }
}

async fn rpc_call<T: DeserializeOwned>(eth: &Eip1193, method: &str, params: Value) -> Result<T, WalletError> {
    let payload = serde_json::json!({ "method": method, "params": params });
    let args = js_sys::JSON::parse(&payload.to_string()).map_err(js_error)?;
    let promise = eth.request(&args).map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;

    let text: String = if value.is_undefined() {
        "null".to_string()
    } else {
        js_sys::JSON::stringify(&value).map_err(js_error)?.into()
    };
    Ok(serde_json::from_str(&text)?)
}

async fn block_number(eth: &Eip1193) -> Result<u64, WalletError> {
    let latest: String = rpc_call(eth, "eth_blockNumber", Value::Array(Vec::new())).await?;
    parse_quantity(&latest)
        .ok_or_else(|| WalletError::InvalidResponse(format!("bad block number {}", latest)))
}

/// Logs nuevos desde el cursor; solo avanza si `eth_getLogs` responde
async fn poll_logs(eth: &Eip1193, filter: &LogFilter, cursor: &RefCell<LogCursor>) -> Result<Vec<LogEntry>, WalletError> {
    let latest = block_number(eth).await?;
    let Some((from_block, to_block)) = cursor.borrow().range_to(latest) else {
        return Ok(Vec::new());
    };

    let range = serde_json::to_value(filter.with_block_range(from_block, to_block))?;
    let logs: Vec<LogEntry> = rpc_call(eth, "eth_getLogs", Value::Array(vec![range])).await?;
    cursor.borrow_mut().commit(to_block);
    Ok(logs)
}

#[async_trait(?Send)]
impl WalletProvider for EthereumProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.rpc("eth_requestAccounts", Value::Array(Vec::new())).await
    }

    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        self.rpc("eth_accounts", Value::Array(Vec::new())).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, WalletError> {
        let params = Value::Array(vec![serde_json::to_value(tx)?]);
        self.rpc("eth_sendTransaction", params).await
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<TransactionReceipt, WalletError> {
        loop {
            let receipt: Option<TransactionReceipt> = self
                .rpc("eth_getTransactionReceipt", Value::Array(vec![Value::from(hash)]))
                .await?;
            match receipt {
                Some(receipt) if receipt.block_number.is_some() => return Ok(receipt),
                _ => TimeoutFuture::new(self.poll_interval_ms).await,
            }
        }
    }

    fn subscribe_logs(&self, filter: LogFilter, on_log: LogCallback) -> Result<LogSubscription, WalletError> {
        let id = self.next_subscription_id.get();
        self.next_subscription_id.set(id + 1);

        let eth = self.inner.clone();
        let filter = Rc::new(filter);
        let cursor = Rc::new(RefCell::new(LogCursor::default()));
        let cancelled = Rc::new(Cell::new(false));

        // Bloque de armado: la primera pasada cubre armado..=último.
        // Mientras tanto el cursor está "en vuelo" y los ticks esperan.
        cursor.borrow_mut().try_begin();
        {
            let eth = eth.clone();
            let cursor = cursor.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match block_number(&eth).await {
                    Ok(armed_block) => cursor.borrow_mut().seed(armed_block),
                    Err(e) => log::warn!("⚠️ No se pudo fijar el bloque inicial: {}", e),
                }
                cursor.borrow_mut().end();
            });
        }

        let interval = {
            let cancelled = cancelled.clone();
            Interval::new(self.poll_interval_ms, move || {
                // Una sola consulta en vuelo por suscripción
                if !cursor.borrow_mut().try_begin() {
                    return;
                }

                let eth = eth.clone();
                let filter = filter.clone();
                let cursor = cursor.clone();
                let cancelled = cancelled.clone();
                let on_log = on_log.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match poll_logs(&eth, &filter, &cursor).await {
                        Ok(logs) => {
                            for entry in logs {
                                if cancelled.get() {
                                    break;
                                }
                                on_log(entry);
                            }
                        }
                        Err(e) => log::warn!("⚠️ Polling de eventos falló: {}", e),
                    }
                    cursor.borrow_mut().end();
                });
            })
        };

        log::info!("👂 Suscripción {} armada (cada {} ms)", id, self.poll_interval_ms);
        Ok(LogSubscription::new(id, move || {
            cancelled.set(true);
            drop(interval);
        }))
    }
}
