use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title_image: AttrValue,
    pub preview_image: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <div class="container hero">
            <div class="hero-title">
                <img width="250" src={props.title_image.clone()} alt="title" loading="lazy" />
            </div>
            <div class="hero-preview">
                <img width="250" src={props.preview_image.clone()} alt="preview" loading="lazy" />
            </div>
        </div>
    }
}
