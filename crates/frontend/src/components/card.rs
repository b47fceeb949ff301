//! Image card component.

use yew::prelude::*;

/// Properties for Card component.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub image: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Rendered under the description, e.g. a "read more" link.
    #[prop_or_default]
    pub children: Html,
}

/// Image/title/description card that lifts on hover.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card image-card">
            <img src={props.image.clone()} alt={props.title.clone()} class="card-image" />
            <div class="card-body">
                <h3 class="card-title">{ &props.title }</h3>
                <p class="card-description">{ &props.description }</p>
                { props.children.clone() }
            </div>
        </div>
    }
}
