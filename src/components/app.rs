// ============================================================================
// APP - Página única: colección, hero, panel de minteo, aviso, footer
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_mint;
use super::{Footer, Hero, MintPanel, MintedAlert};

#[function_component(App)]
pub fn app() -> Html {
    let mint = use_mint();
    let ui = &mint.config.ui;

    html! {
        <>
            <main>
                <div class="page">
                    <div class="container top-bar">
                        <a class="btn btn-outlined btn-large" href={mint.collection_url.clone()}>
                            {"View Collection"}
                        </a>
                    </div>

                    <div class="container container-sm">
                        <Hero
                            title_image={ui.title_image.clone()}
                            preview_image={ui.preview_image.clone()}
                        />
                        <MintPanel
                            session={mint.session.clone()}
                            on_connect={mint.connect.clone()}
                            on_mint={mint.mint.clone()}
                        />
                        if mint.session.minted {
                            <MintedAlert marketplace_url={mint.marketplace_url.clone()} />
                        }
                    </div>
                </div>
            </main>
            <Footer author={ui.author.clone()} author_url={ui.author_url.clone()} />
        </>
    }
}
