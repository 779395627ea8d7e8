use chrono::Datelike;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub author: AttrValue,
    pub author_url: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <p class="footer-credit">
                {"Made with love by "}
                <a href={props.author_url.clone()}>{format!("@{}", props.author)}</a>
            </p>
            <p class="footer-copyright">
                {"Copyright © "}
                <a class="inherit" href={props.author_url.clone()}>{props.author.to_string()}</a>
                {format!(" {}.", year)}
            </p>
        </footer>
    }
}
