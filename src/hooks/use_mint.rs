// ============================================================================
// USE MINT HOOK - Puente entre MintViewModel y el re-render de Yew
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::config::AppConfig;
use crate::models::MintSession;
use crate::viewmodels::MintViewModel;

#[derive(Clone)]
pub struct UseMintHandle {
    pub session: MintSession,
    pub config: AppConfig,
    pub connect: Callback<()>,
    pub mint: Callback<()>,
    pub marketplace_url: String,
    pub collection_url: String,
}

#[hook]
pub fn use_mint() -> UseMintHandle {
    let vm: Rc<MintViewModel> = use_memo((), |_| MintViewModel::from_browser(AppConfig::from_env()));
    let session = use_state(|| vm.session());

    // Al montar: re-render en cada cambio + chequeo de wallet ya autorizada
    {
        let vm = vm.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            vm.subscribe(move |s| session.set(s.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                vm.check_existing_connection().await;
            });
            || ()
        });
    }

    let connect = {
        let vm = vm.clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.connect().await;
            });
        })
    };

    let mint = {
        let vm = vm.clone();
        Callback::from(move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.mint().await;
            });
        })
    };

    UseMintHandle {
        session: (*session).clone(),
        config: vm.config().clone(),
        connect,
        mint,
        marketplace_url: vm.marketplace_url(),
        collection_url: vm.collection_url().to_string(),
    }
}
