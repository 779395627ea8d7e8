// ============================================================================
// CHAIN - Tipos JSON-RPC (transacciones, recibos, logs)
// ============================================================================

use serde::{Deserialize, Serialize};

pub type TxHash = String;

/// Parámetros de `eth_sendTransaction`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// Calldata en hex con prefijo 0x
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub block_number: Option<String>,
    /// "0x1" éxito, "0x0" revertida (ausente en cadenas pre-Byzantium)
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn is_reverted(&self) -> bool {
        matches!(self.status.as_deref(), Some("0x0") | Some("0x00"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub address: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<TxHash>,
}

/// Filtro para `eth_getLogs`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    pub address: String,
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<String>,
}

impl LogFilter {
    pub fn with_block_range(&self, from_block: u64, to_block: u64) -> Self {
        Self {
            from_block: Some(format!("{:#x}", from_block)),
            to_block: Some(format!("{:#x}", to_block)),
            ..self.clone()
        }
    }
}

/// Evento `ColorNFTMinted(from, tokenId)` decodificado
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorNftMinted {
    pub from: String,
    pub token_id: u64,
}

/// Parsea una cantidad hex JSON-RPC ("0x1a")
pub fn parse_quantity(value: &str) -> Option<u64> {
    let digits = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Rango `[from, to]` a consultar. `next_block` es el primer bloque aún no
/// revisado; sin cursor solo se mira el bloque actual.
pub fn next_log_range(next_block: Option<u64>, latest: u64) -> Option<(u64, u64)> {
    match next_block {
        Some(next) if next > latest => None,
        Some(next) => Some((next, latest)),
        None => Some((latest, latest)),
    }
}

/// Cursor del polling de logs: bloque siguiente + guarda de consulta en vuelo.
/// Solo avanza con `commit`, así un fallo reintenta el mismo rango.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogCursor {
    next_block: Option<u64>,
    in_flight: bool,
}

impl LogCursor {
    /// Fija el bloque de armado; no pisa un cursor que ya avanzó
    pub fn seed(&mut self, armed_block: u64) {
        if self.next_block.is_none() {
            self.next_block = Some(armed_block);
        }
    }

    pub fn next_block(&self) -> Option<u64> {
        self.next_block
    }

    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn end(&mut self) {
        self.in_flight = false;
    }

    pub fn range_to(&self, latest: u64) -> Option<(u64, u64)> {
        next_log_range(self.next_block, latest)
    }

    pub fn commit(&mut self, to_block: u64) {
        self.next_block = Some(to_block + 1);
    }
}
