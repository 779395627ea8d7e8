// ============================================================================
// MINT VIEWMODEL - Conexión de wallet + minteo
// ============================================================================
// Dueño del estado de sesión. Solo tres operaciones lo mutan:
// connect / check_existing_connection / mint (+ el listener del evento).
// Los errores se capturan aquí y se loguean; nunca llegan a la vista.
// ============================================================================

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use crate::config::AppConfig;
use crate::error::WalletError;
use crate::models::{MintSession, SessionPhase, TxHash};
use crate::services::contract::ColorNftContract;
use crate::services::ethereum_provider::EthereumProvider;
use crate::services::notifier::{Notifier, WindowNotifier};
use crate::services::provider::{LogSubscription, WalletProvider};
use crate::state::MintState;
use crate::utils::constants::NO_WALLET_NOTICE;

pub struct MintViewModel {
    config: AppConfig,
    provider: Option<Rc<dyn WalletProvider>>,
    notifier: Rc<dyn Notifier>,
    state: MintState,
    /// Se crea la primera vez que hay wallet y se reutiliza
    contract: OnceCell<ColorNftContract>,
    subscription: RefCell<Option<LogSubscription>>,
}

fn first_account(accounts: Vec<String>) -> Result<String, WalletError> {
    accounts
        .into_iter()
        .next()
        .ok_or_else(|| WalletError::InvalidResponse("provider returned no accounts".to_string()))
}

impl MintViewModel {
    pub fn new(config: AppConfig, provider: Option<Rc<dyn WalletProvider>>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            config,
            provider,
            notifier,
            state: MintState::new(),
            contract: OnceCell::new(),
            subscription: RefCell::new(None),
        }
    }

    /// Proveedor y alert reales del navegador
    pub fn from_browser(config: AppConfig) -> Self {
        let provider = EthereumProvider::detect(config.provider.poll_interval_ms)
            .map(|p| Rc::new(p) as Rc<dyn WalletProvider>);
        Self::new(config, provider, Rc::new(WindowNotifier))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> MintSession {
        self.state.session()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Notificaciones de cambio (el hook re-renderiza con ellas)
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&MintSession) + 'static,
    {
        self.state.subscribe(callback);
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Link de éxito con el token actual
    pub fn marketplace_url(&self) -> String {
        self.config.marketplace_url(self.state.session().minted_token_id)
    }

    pub fn collection_url(&self) -> &str {
        &self.config.links.collection_url
    }

    fn connected_account(&self) -> Result<String, WalletError> {
        self.state.current_account().ok_or(WalletError::NotConnected)
    }

    fn contract(&self) -> Option<&ColorNftContract> {
        let provider = self.provider.as_ref()?;
        Some(
            self.contract
                .get_or_init(|| ColorNftContract::new(&self.config.contract, provider.clone())),
        )
    }

    /// Pide acceso a las cuentas (popup de la wallet)
    pub async fn connect(&self) {
        let Some(provider) = self.provider.clone() else {
            log::warn!("🦊 No hay wallet inyectada");
            self.notifier.alert(NO_WALLET_NOTICE);
            return;
        };

        match provider.request_accounts().await.and_then(first_account) {
            Ok(account) => {
                log::info!("✅ Conectado: {}", account);
                self.on_account(account);
            }
            Err(e) => log::error!("❌ Error conectando wallet: {}", e),
        }
    }

    /// Al arrancar: cuentas ya autorizadas, sin popup
    pub async fn check_existing_connection(&self) {
        let Some(provider) = self.provider.clone() else {
            log::info!("🦊 Make sure you have MetaMask!");
            return;
        };

        match provider.accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => {
                    log::info!("🔑 Cuenta autorizada encontrada: {}", account);
                    self.on_account(account);
                }
                None => log::info!("ℹ️ No hay cuentas autorizadas"),
            },
            Err(e) => log::error!("❌ Error consultando cuentas: {}", e),
        }
    }

    fn on_account(&self, account: String) {
        self.state.update(|s| s.connect(account));
        self.subscribe_to_mint_event();
    }

    /// Arma el listener de `ColorNFTMinted`; idempotente
    pub fn subscribe_to_mint_event(&self) {
        if self.is_listening() {
            log::info!("👂 Listener ya armado, se ignora");
            return;
        }
        let Some(contract) = self.contract() else {
            log::warn!("⚠️ Ethereum object doesn't exist!");
            return;
        };

        let state = self.state.clone();
        let result = contract.on_minted(move |event| {
            log::info!("🎨 ColorNFTMinted from={} token_id={}", event.from, event.token_id);
            state.update(|s| s.set_token_id(event.token_id));
        });

        match result {
            Ok(subscription) => {
                log::info!("✅ Listener de eventos armado");
                *self.subscription.borrow_mut() = Some(subscription);
            }
            Err(e) => log::error!("❌ Error armando listener: {}", e),
        }
    }

    pub fn unsubscribe(&self) {
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
    }

    /// Mintea un NFT. Los fallos se loguean y la sesión vuelve a "connected"
    /// sin aviso al usuario.
    pub async fn mint(&self) {
        let account = match self.connected_account() {
            Ok(account) => account,
            Err(e) => {
                log::warn!("⚠️ mint cancelado: {}", e);
                return;
            }
        };
        if self.state.is_minting() {
            log::warn!("⚠️ Ya hay un minteo en curso");
            return;
        }
        if self.state.is_minted() {
            log::info!("ℹ️ NFT ya minteado en esta sesión");
            return;
        }
        let Some(contract) = self.contract().cloned() else {
            log::error!("❌ Ethereum object doesn't exist");
            return;
        };

        self.state.update(MintSession::start_mint);
        match self.submit_mint(&contract, &account).await {
            Ok(hash) => {
                log::info!("✅ Minado, ver transacción: {}", self.config.explorer_url(&hash));
                log::info!("🖼️ {}", self.marketplace_url());
                self.state.update(MintSession::finish_mint);
            }
            Err(e) if e.is_user_rejection() => {
                log::warn!("🙅 Minteo rechazado en la wallet: {}", e);
                self.state.update(MintSession::abort_mint);
            }
            Err(e) => {
                log::error!("❌ Error minteando: {}", e);
                self.state.update(MintSession::abort_mint);
            }
        }
    }

    async fn submit_mint(&self, contract: &ColorNftContract, account: &str) -> Result<TxHash, WalletError> {
        log::info!("💸 Abriendo la wallet para pagar gas...");
        let pending = contract.create_nft(account).await?;
        log::info!("⛏️ Minando {}... espera", pending.hash);
        pending.wait().await?;
        Ok(pending.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use crate::testing::{minted_log, FakeProvider, RecordingNotifier};

    fn view_model(provider: Option<Rc<FakeProvider>>) -> (Rc<MintViewModel>, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let provider = provider.map(|p| p as Rc<dyn WalletProvider>);
        let vm = MintViewModel::new(AppConfig::default(), provider, notifier.clone());
        (Rc::new(vm), notifier)
    }

    fn emit_minted(provider: &FakeProvider, token_id: u64) {
        let config = AppConfig::default();
        let abi = crate::services::contract::ContractAbi::from(&config.contract);
        provider.emit_log(minted_log(
            &abi,
            &config.contract.address,
            "0x00000000000000000000000000000000000000aa",
            token_id,
            false,
        ));
    }

    #[test]
    fn startup_without_authorized_accounts_stays_disconnected() {
        let provider = Rc::new(FakeProvider::new());
        let (vm, notifier) = view_model(Some(provider.clone()));

        block_on(vm.check_existing_connection());

        assert_eq!(vm.phase(), SessionPhase::Disconnected);
        assert_eq!(provider.active_subscriptions(), 0);
        assert!(!vm.is_listening());
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn startup_with_authorized_account_connects_first_and_listens_once() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC", "0xDEF"]));
        let (vm, _) = view_model(Some(provider.clone()));

        block_on(vm.check_existing_connection());

        let session = vm.session();
        assert_eq!(session.current_account, "0xABC");
        assert!(!session.minted);
        assert_eq!(provider.active_subscriptions(), 1);
        assert_eq!(provider.request_calls(), 0);

        let filter = &provider.subscribed_filters()[0];
        assert_eq!(filter.address, AppConfig::default().contract.address);
    }

    #[test]
    fn startup_without_wallet_only_logs() {
        let (vm, notifier) = view_model(None);
        block_on(vm.check_existing_connection());
        assert_eq!(vm.phase(), SessionPhase::Disconnected);
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn connect_without_wallet_alerts_once_and_keeps_state() {
        let (vm, notifier) = view_model(None);
        let before = vm.session();

        block_on(vm.connect());

        assert_eq!(vm.session(), before);
        assert_eq!(notifier.alerts(), vec![NO_WALLET_NOTICE.to_string()]);
    }

    #[test]
    fn connect_stores_first_account() {
        let provider = Rc::new(FakeProvider::new());
        provider.set_request_result(Ok(vec!["0x111".to_string(), "0x222".to_string()]));
        let (vm, _) = view_model(Some(provider.clone()));

        block_on(vm.connect());

        assert_eq!(vm.session().current_account, "0x111");
        assert_eq!(provider.request_calls(), 1);
        assert_eq!(provider.active_subscriptions(), 1);
    }

    #[test]
    fn rejected_connect_leaves_state_unchanged() {
        let provider = Rc::new(FakeProvider::new());
        provider.set_request_result(Err(WalletError::UserRejected("denied".to_string())));
        let (vm, notifier) = view_model(Some(provider.clone()));

        block_on(vm.connect());

        assert_eq!(vm.phase(), SessionPhase::Disconnected);
        assert_eq!(provider.active_subscriptions(), 0);
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn repeated_connect_does_not_duplicate_listener() {
        let provider = Rc::new(FakeProvider::new());
        let (vm, _) = view_model(Some(provider.clone()));

        block_on(vm.connect());
        block_on(vm.connect());
        vm.subscribe_to_mint_event();

        assert_eq!(provider.active_subscriptions(), 1);
    }

    #[test]
    fn mint_success_then_event_sets_token_id() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        provider.set_tx_hash("0xdeadbeef");
        let (vm, _) = view_model(Some(provider.clone()));
        block_on(vm.check_existing_connection());

        block_on(vm.mint());
        emit_minted(&provider, 42);

        let session = vm.session();
        assert!(session.minted);
        assert!(!session.minting);
        assert_eq!(session.minted_token_id, 42);
        assert_eq!(vm.phase(), SessionPhase::Minted);

        let sent = provider.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "0xABC");
        assert!(vm.marketplace_url().ends_with("/42"));
    }

    #[test]
    fn rejected_mint_is_absorbed_silently() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        provider.fail_send(WalletError::UserRejected("User denied transaction signature".to_string()));
        let (vm, notifier) = view_model(Some(provider.clone()));
        block_on(vm.check_existing_connection());

        block_on(vm.mint());

        let session = vm.session();
        assert!(!session.minted);
        assert!(!session.minting);
        assert_eq!(vm.phase(), SessionPhase::Connected);
        // El fallo no se muestra al usuario
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn reverted_mint_returns_to_connected() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        provider.set_receipt_status("0x0");
        let (vm, _) = view_model(Some(provider.clone()));
        block_on(vm.check_existing_connection());

        block_on(vm.mint());

        assert_eq!(vm.phase(), SessionPhase::Connected);
    }

    #[test]
    fn mint_requires_connected_account() {
        let provider = Rc::new(FakeProvider::new());
        let (vm, _) = view_model(Some(provider.clone()));

        assert_eq!(vm.connected_account(), Err(WalletError::NotConnected));
        block_on(vm.mint());

        assert!(provider.sent_transactions().is_empty());
        assert_eq!(vm.phase(), SessionPhase::Disconnected);
    }

    #[test]
    fn mint_while_minting_is_noop() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        let release = provider.hold_next_transaction();
        let (vm, _) = view_model(Some(provider.clone()));
        block_on(vm.check_existing_connection());

        let mut pool = LocalPool::new();
        {
            let vm = vm.clone();
            pool.spawner()
                .spawn_local(async move { vm.mint().await })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(vm.phase(), SessionPhase::Minting);

        block_on(vm.mint());
        assert_eq!(provider.sent_transactions().len(), 1);
        assert_eq!(vm.phase(), SessionPhase::Minting);

        release.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(vm.phase(), SessionPhase::Minted);
    }

    #[test]
    fn minted_is_terminal() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        let (vm, _) = view_model(Some(provider.clone()));
        block_on(vm.check_existing_connection());

        block_on(vm.mint());
        block_on(vm.mint());

        assert_eq!(provider.sent_transactions().len(), 1);
        assert_eq!(vm.phase(), SessionPhase::Minted);
    }

    #[test]
    fn subscribers_see_each_transition() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        let (vm, _) = view_model(Some(provider.clone()));
        let phases = Rc::new(RefCell::new(Vec::new()));
        {
            let phases = phases.clone();
            vm.subscribe(move |s| phases.borrow_mut().push(s.phase()));
        }

        block_on(vm.check_existing_connection());
        block_on(vm.mint());

        assert_eq!(
            *phases.borrow(),
            vec![SessionPhase::Connected, SessionPhase::Minting, SessionPhase::Minted]
        );
    }

    #[test]
    fn unsubscribe_stops_event_updates() {
        let provider = Rc::new(FakeProvider::with_authorized(&["0xABC"]));
        let (vm, _) = view_model(Some(provider.clone()));
        block_on(vm.check_existing_connection());

        vm.unsubscribe();
        emit_minted(&provider, 9);

        assert_eq!(provider.active_subscriptions(), 0);
        assert_eq!(vm.session().minted_token_id, 0);
    }
}
