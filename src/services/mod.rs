pub mod provider;
pub mod ethereum_provider;
pub mod contract;
pub mod notifier;

pub use provider::{LogCallback, LogSubscription, WalletProvider};
pub use ethereum_provider::EthereumProvider;
pub use contract::{ColorNftContract, ContractAbi, PendingTransaction};
pub use notifier::{Notifier, WindowNotifier};
