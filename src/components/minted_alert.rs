use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MintedAlertProps {
    pub marketplace_url: AttrValue,
}

/// Aviso de éxito con el link al marketplace
#[function_component(MintedAlert)]
pub fn minted_alert(props: &MintedAlertProps) -> Html {
    html! {
        <div class="alert alert-success" role="alert">
            <div class="alert-title"><strong>{"NFT minted"}</strong></div>
            <a href={props.marketplace_url.clone()} target="_blank" rel="noopener noreferrer">
                <strong>{"Check out in OpenSea"}</strong>
            </a>
        </div>
    }
}
