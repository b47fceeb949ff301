//! Stand-in for pages served by other parts of the product.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for PlaceholderPage.
#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
    pub title: AttrValue,
}

/// Page that only names its destination and links back to the dashboard.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderPageProps) -> Html {
    html! {
        <div class="card placeholder">
            <h1>{ &props.title }</h1>
            <p class="text-secondary">{"This section is not part of the dashboard."}</p>
            <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
