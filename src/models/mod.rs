pub mod session;
pub mod chain;

pub use session::{MintSession, SessionPhase};
pub use chain::{ColorNftMinted, LogEntry, LogFilter, TransactionReceipt, TransactionRequest, TxHash};
