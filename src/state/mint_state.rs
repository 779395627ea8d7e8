// ============================================================================
// MINT STATE - Estado de sesión compartido (reemplaza los useState sueltos)
// ============================================================================

use crate::models::{MintSession, SessionPhase};
use crate::state::reactivity::ReactiveState;

/// Estado de minteo compartido entre view model, listener de eventos y hook
#[derive(Clone)]
pub struct MintState {
    inner: ReactiveState<MintSession>,
}

impl MintState {
    pub fn new() -> Self {
        Self {
            inner: ReactiveState::new(MintSession::default()),
        }
    }

    pub fn session(&self) -> MintSession {
        self.inner.snapshot()
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.with(MintSession::phase)
    }

    pub fn current_account(&self) -> Option<String> {
        self.inner
            .with(|s| s.is_connected().then(|| s.current_account.clone()))
    }

    pub fn is_minting(&self) -> bool {
        self.inner.with(|s| s.minting)
    }

    pub fn is_minted(&self) -> bool {
        self.inner.with(|s| s.minted)
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut MintSession),
    {
        self.inner.update(updater);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&MintSession) + 'static,
    {
        self.inner.subscribe(callback);
    }
}

impl Default for MintState {
    fn default() -> Self {
        Self::new()
    }
}
