// ============================================================================
// CONTRATO COLORNFT - Handle del contrato + codec mínimo del ABI
// ============================================================================
// Solo se usan dos miembros del ABI:
// - `createNFT()` (sin argumentos, muta estado)
// - evento `ColorNFTMinted(address from, uint256 tokenId)`
// ============================================================================

use std::rc::Rc;
use sha3::{Digest, Keccak256};
use crate::config::ContractConfig;
use crate::error::WalletError;
use crate::models::{ColorNftMinted, LogEntry, LogFilter, TransactionReceipt, TransactionRequest, TxHash};
use crate::services::provider::{LogSubscription, WalletProvider};

const WORD_LEN: usize = 32;

pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

pub fn to_hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Firma canónica + flags `indexed` declarados por parámetro.
/// Acepta nombres y `indexed`: "Ev(address from, uint256 indexed id)".
/// Sin ningún `indexed` declarado los flags quedan en None.
fn parse_event_signature(signature: &str) -> (String, Option<Vec<bool>>) {
    let Some((name, rest)) = signature.split_once('(') else {
        return (signature.trim().to_string(), None);
    };
    let params = rest.trim_end().trim_end_matches(')');

    let mut types = Vec::new();
    let mut indexed = Vec::new();
    for param in params.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let mut parts = param.split_whitespace();
        types.push(parts.next().unwrap_or_default());
        indexed.push(parts.any(|word| word == "indexed"));
    }

    let canonical = format!("{}({})", name.trim(), types.join(","));
    let declared = indexed.iter().any(|flag| *flag);
    (canonical, declared.then_some(indexed))
}

/// Interfaz del contrato: selector/topic precalculados
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractAbi {
    create_selector: [u8; 4],
    minted_topic: [u8; 32],
    minted_indexed: Option<Vec<bool>>,
}

impl ContractAbi {
    pub fn new(create_signature: &str, minted_event_signature: &str) -> Self {
        let create_hash = keccak256(create_signature.as_bytes());
        let mut create_selector = [0u8; 4];
        create_selector.copy_from_slice(&create_hash[..4]);

        let (minted_canonical, minted_indexed) = parse_event_signature(minted_event_signature);
        Self {
            create_selector,
            minted_topic: keccak256(minted_canonical.as_bytes()),
            minted_indexed,
        }
    }

    /// Calldata de la función de minteo (solo selector, no hay argumentos)
    pub fn create_calldata(&self) -> String {
        to_hex_prefixed(&self.create_selector)
    }

    pub fn minted_topic(&self) -> String {
        to_hex_prefixed(&self.minted_topic)
    }

    /// Decodifica `ColorNFTMinted`. Con flags `indexed` declarados cada
    /// parámetro sale de topics o de data según su flag; sin ellos el orden
    /// es posicional (topics[1..] y después data)
    pub fn decode_minted(&self, log: &LogEntry) -> Result<ColorNftMinted, WalletError> {
        let topic0 = log
            .topics
            .first()
            .ok_or_else(|| WalletError::InvalidEvent("log without topics".to_string()))?;
        if !strip_hex_prefix(topic0).eq_ignore_ascii_case(&hex::encode(self.minted_topic)) {
            return Err(WalletError::InvalidEvent(format!("unexpected topic {}", topic0)));
        }

        let topic_words = log.topics[1..]
            .iter()
            .map(|topic| decode_word(topic))
            .collect::<Result<Vec<_>, _>>()?;
        let data = hex::decode(strip_hex_prefix(&log.data))
            .map_err(|e| WalletError::InvalidEvent(format!("log data is not hex: {}", e)))?;
        if data.len() % WORD_LEN != 0 {
            return Err(WalletError::InvalidEvent(format!(
                "log data length {} is not a multiple of {}",
                data.len(),
                WORD_LEN
            )));
        }
        let data_words = data.chunks(WORD_LEN).map(<[u8]>::to_vec);

        let words: Vec<Vec<u8>> = match &self.minted_indexed {
            Some(flags) => {
                let expected = flags.iter().filter(|flag| **flag).count();
                if topic_words.len() != expected {
                    return Err(WalletError::InvalidEvent(format!(
                        "expected {} indexed topics, got {}",
                        expected,
                        topic_words.len()
                    )));
                }
                let mut topics = topic_words.into_iter();
                let mut data_words = data_words;
                flags
                    .iter()
                    .map(|indexed| if *indexed { topics.next() } else { data_words.next() })
                    .collect::<Option<Vec<_>>>()
                    .unwrap_or_default()
            }
            None => topic_words.into_iter().chain(data_words).collect(),
        };

        if words.len() < 2 {
            return Err(WalletError::InvalidEvent(format!(
                "expected 2 event words, got {}",
                words.len()
            )));
        }

        let from = to_hex_prefixed(&words[0][12..]);
        let token_id = word_to_u64(&words[1])?;
        Ok(ColorNftMinted { from, token_id })
    }
}

impl From<&ContractConfig> for ContractAbi {
    fn from(config: &ContractConfig) -> Self {
        ContractAbi::new(&config.create_signature, &config.minted_event_signature)
    }
}

fn decode_word(topic: &str) -> Result<Vec<u8>, WalletError> {
    let bytes = hex::decode(strip_hex_prefix(topic))
        .map_err(|e| WalletError::InvalidEvent(format!("topic is not hex: {}", e)))?;
    if bytes.len() != WORD_LEN {
        return Err(WalletError::InvalidEvent(format!("topic has {} bytes", bytes.len())));
    }
    Ok(bytes)
}

/// uint256 -> u64; falla si no cabe
fn word_to_u64(word: &[u8]) -> Result<u64, WalletError> {
    let (high, low) = word.split_at(WORD_LEN - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(WalletError::InvalidEvent("token id does not fit in u64".to_string()));
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    Ok(u64::from_be_bytes(buf))
}

/// Contrato ligado a una dirección, un ABI y un proveedor
#[derive(Clone)]
pub struct ColorNftContract {
    address: String,
    abi: ContractAbi,
    provider: Rc<dyn WalletProvider>,
}

impl ColorNftContract {
    pub fn new(config: &ContractConfig, provider: Rc<dyn WalletProvider>) -> Self {
        Self {
            address: config.address.clone(),
            abi: ContractAbi::from(config),
            provider,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn abi(&self) -> &ContractAbi {
        &self.abi
    }

    pub fn create_nft_request(&self, from: &str) -> TransactionRequest {
        TransactionRequest {
            from: from.to_string(),
            to: self.address.clone(),
            data: self.abi.create_calldata(),
        }
    }

    /// Envía `createNFT()`; la wallet pide confirmación y gas al usuario
    pub async fn create_nft(&self, from: &str) -> Result<PendingTransaction, WalletError> {
        let request = self.create_nft_request(from);
        let hash = self.provider.send_transaction(&request).await?;
        Ok(PendingTransaction {
            hash,
            provider: self.provider.clone(),
        })
    }

    pub fn minted_filter(&self) -> LogFilter {
        LogFilter {
            address: self.address.clone(),
            topics: vec![self.abi.minted_topic()],
            from_block: None,
            to_block: None,
        }
    }

    pub fn decode_minted(&self, log: &LogEntry) -> Result<ColorNftMinted, WalletError> {
        if !strip_hex_prefix(&log.address).eq_ignore_ascii_case(strip_hex_prefix(&self.address)) {
            return Err(WalletError::InvalidEvent(format!("log from foreign contract {}", log.address)));
        }
        self.abi.decode_minted(log)
    }

    /// Arma el listener de `ColorNFTMinted`; los logs no decodificables se descartan
    pub fn on_minted<F>(&self, on_event: F) -> Result<LogSubscription, WalletError>
    where
        F: Fn(ColorNftMinted) + 'static,
    {
        let contract = self.clone();
        let callback = Rc::new(move |entry: LogEntry| match contract.decode_minted(&entry) {
            Ok(event) => on_event(event),
            Err(e) => log::warn!("⚠️ Log ignorado: {}", e),
        });
        self.provider.subscribe_logs(self.minted_filter(), callback)
    }
}

/// Transacción enviada, pendiente de minar
pub struct PendingTransaction {
    pub hash: TxHash,
    provider: Rc<dyn WalletProvider>,
}

impl PendingTransaction {
    /// Espera a que se mine; un recibo con status 0x0 es error
    pub async fn wait(&self) -> Result<TransactionReceipt, WalletError> {
        let receipt = self.provider.wait_for_transaction(&self.hash).await?;
        if receipt.is_reverted() {
            return Err(WalletError::Reverted(self.hash.clone()));
        }
        Ok(receipt)
    }
}
