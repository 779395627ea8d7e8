// ============================================================================
// NOTIFIER - Avisos bloqueantes al usuario
// ============================================================================

/// Aviso bloqueante (alert) inyectable
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert` del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNotifier;

impl Notifier for WindowNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                if win.alert_with_message(message).is_err() {
                    log::error!("❌ No se pudo mostrar alert: {}", message);
                }
            }
            None => log::warn!("⚠️ Sin window, alert omitido: {}", message),
        }
    }
}
