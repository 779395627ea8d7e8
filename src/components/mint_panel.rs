// ============================================================================
// MINT PANEL - Connect Wallet / Mint / Minting
// ============================================================================

use yew::prelude::*;
use crate::models::{MintSession, SessionPhase};

#[derive(Properties, PartialEq)]
pub struct MintPanelProps {
    pub session: MintSession,
    pub on_connect: Callback<()>,
    pub on_mint: Callback<()>,
}

#[function_component(MintPanel)]
pub fn mint_panel(props: &MintPanelProps) -> Html {
    let on_connect = {
        let cb = props.on_connect.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_mint = {
        let cb = props.on_mint.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let button = match props.session.phase() {
        SessionPhase::Disconnected => html! {
            <button class="btn btn-contained btn-large" onclick={on_connect}>
                {"Connect Wallet"}
            </button>
        },
        // Sin onclick: no se expone un segundo trigger mientras se mintea
        SessionPhase::Minting => html! {
            <button class="btn btn-outlined btn-large loading" disabled={true}>
                <span class="spinner"></span>
                {"Minting"}
            </button>
        },
        SessionPhase::Connected => html! {
            <button class="btn btn-contained btn-large" onclick={on_mint}>
                {"Mint"}
            </button>
        },
        SessionPhase::Minted => html! {
            <button class="btn btn-contained btn-large" disabled={true}>
                {"Mint"}
            </button>
        },
    };

    html! {
        <div class="mint-panel">
            {button}
        </div>
    }
}
