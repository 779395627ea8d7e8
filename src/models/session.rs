use serde::{Deserialize, Serialize};

/// Fase de la sesión, derivada de los flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Disconnected,
    Connected,
    Minting,
    Minted,
}

/// Estado de sesión del minteo (no se persiste)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintSession {
    /// Dirección de la wallet; vacía = desconectado
    pub current_account: String,
    pub minting: bool,
    pub minted: bool,
    /// Solo tiene sentido cuando `minted` es true
    pub minted_token_id: u64,
}

impl MintSession {
    pub fn is_connected(&self) -> bool {
        !self.current_account.is_empty()
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.is_connected() {
            SessionPhase::Disconnected
        } else if self.minting {
            SessionPhase::Minting
        } else if self.minted {
            SessionPhase::Minted
        } else {
            SessionPhase::Connected
        }
    }

    pub fn connect(&mut self, account: impl Into<String>) {
        self.current_account = account.into();
    }

    /// Entra en "minting"; `minted` se limpia para no solapar ambos flags
    pub fn start_mint(&mut self) {
        self.minting = true;
        self.minted = false;
    }

    pub fn finish_mint(&mut self) {
        self.minting = false;
        self.minted = true;
    }

    /// Vuelve a "connected" sin error visible
    pub fn abort_mint(&mut self) {
        self.minting = false;
        self.minted = false;
    }

    pub fn set_token_id(&mut self, token_id: u64) {
        self.minted_token_id = token_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_lifecycle() {
        let mut session = MintSession::default();
        assert_eq!(session.phase(), SessionPhase::Disconnected);

        session.connect("0xabc");
        assert_eq!(session.phase(), SessionPhase::Connected);

        session.start_mint();
        assert_eq!(session.phase(), SessionPhase::Minting);
        assert!(!session.minted);

        session.finish_mint();
        assert_eq!(session.phase(), SessionPhase::Minted);
        assert!(!session.minting);
    }

    #[test]
    fn abort_returns_to_connected() {
        let mut session = MintSession::default();
        session.connect("0xabc");
        session.start_mint();
        session.abort_mint();
        assert_eq!(session.phase(), SessionPhase::Connected);
    }

    #[test]
    fn serializes_as_plain_value_object() {
        let mut session = MintSession::default();
        session.connect("0xabc");
        session.set_token_id(3);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "current_account": "0xabc",
                "minting": false,
                "minted": false,
                "minted_token_id": 3
            })
        );
    }
}
