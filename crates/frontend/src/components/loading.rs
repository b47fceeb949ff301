//! Loading spinner component.

use yew::prelude::*;

/// Full-height centered spinner shown while the dashboard is loading.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
