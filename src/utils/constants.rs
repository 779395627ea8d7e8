/// Dirección del contrato ColorNFT desplegado
/// Configurable en tiempo de compilación via CONTRACT_ADDRESS (ver build.rs)
pub const CONTRACT_ADDRESS: &str = match option_env!("CONTRACT_ADDRESS") {
    Some(address) => address,
    None => "0x0e6eA75ca4D4bFEb6Ef059db27b3f95C9442F5Ac",
};

/// Base del explorador de bloques (se le añade `/{hash}`)
pub const EXPLORER_TX_URL: &str = match option_env!("EXPLORER_TX_URL") {
    Some(url) => url,
    None => "https://rinkeby.etherscan.io/tx",
};

/// Base del marketplace (se le añade `/{contrato}/{token_id}`)
pub const MARKETPLACE_ASSET_URL: &str = match option_env!("MARKETPLACE_ASSET_URL") {
    Some(url) => url,
    None => "https://testnets.opensea.io/assets",
};

pub const COLLECTION_URL: &str = match option_env!("COLLECTION_URL") {
    Some(url) => url,
    None => "https://testnets.opensea.io/collection/colornft-3niatckth9",
};

/// Intervalo de polling del proveedor, en milisegundos (como texto, se parsea en config)
pub const POLL_INTERVAL_MS: Option<&str> = option_env!("POLL_INTERVAL_MS");

pub const LOG_LEVEL: Option<&str> = option_env!("LOG_LEVEL");

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 4_000;

/// Firma de la función de minteo en el ABI del contrato
pub const CREATE_NFT_SIGNATURE: &str = "createNFT()";

/// Firma del evento emitido tras mintear
pub const MINTED_EVENT_SIGNATURE: &str = "ColorNFTMinted(address,uint256)";

/// Código EIP-1193 para "el usuario rechazó la solicitud"
pub const USER_REJECTED_CODE: i64 = 4001;

pub const NO_WALLET_NOTICE: &str = "Get MetaMask!";
