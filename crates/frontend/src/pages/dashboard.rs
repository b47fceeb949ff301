//! Dashboard page: sidebar shell, greeting and news grid.

use std::rc::Rc;

use floramed_core::{
    DashboardAction, DashboardConfig, DashboardLoader, DashboardModel, logout,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{Loading, NewsCard, Sidebar};
use crate::services::{
    BrowserTimer, HttpApi, LocalCredentialStore, ResizeSubscription, viewport_width,
};

/// Yew reducer wrapper around the core view-model.
#[derive(Clone, PartialEq)]
struct DashboardStore(DashboardModel);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut model = Rc::unwrap_or_clone(self).0;
        model.apply(action);
        Rc::new(Self(model))
    }
}

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<Rc<DashboardConfig>>().unwrap_or_default();
    let store = {
        let config = config.clone();
        use_reducer(move || DashboardStore(DashboardModel::new(&config, viewport_width())))
    };
    let location = use_location();
    let navigator = use_navigator();

    // Fetch profile and news; neither waits on the other
    {
        let dispatcher = store.dispatcher();
        let config = config.clone();

        use_effect_with((), move |_| {
            let loader = Rc::new(DashboardLoader::new(
                HttpApi::new(&config),
                BrowserTimer,
                config.request_timeout_ms,
            ));

            {
                let loader = loader.clone();
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    let viewer = loader.load_profile(&LocalCredentialStore).await;
                    dispatcher.dispatch(DashboardAction::ProfileSettled(viewer));
                });
            }

            spawn_local(async move {
                let news = loader.load_news().await;
                dispatcher.dispatch(DashboardAction::NewsSettled(news));
            });
        });
    }

    // Track the viewport while mounted
    {
        let dispatcher = store.dispatcher();

        use_effect_with((), move |_| {
            let subscription = ResizeSubscription::new(move |width| {
                dispatcher.dispatch(DashboardAction::ViewportResized(width));
            });
            move || drop(subscription)
        });
    }

    let on_toggle = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DashboardAction::ToggleSidebar))
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        let target = logout(&LocalCredentialStore);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::recognize(target).unwrap_or(Route::Login));
        }
    });

    let model = &store.0;

    if !model.is_ready() {
        return html! { <Loading /> };
    }

    let current_path = location
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class="app-container">
            <Sidebar
                collapsed={model.sidebar.collapsed}
                entries={model.nav_entries()}
                current_path={current_path}
                {on_toggle}
                {on_logout}
            />

            <main class="main-content">
                <h2 class="greeting">
                    {"👋 Welcome back, "}
                    <span class="greeting-name">{ model.display_name().to_string() }</span>
                </h2>
                <p class="text-secondary" style="margin-bottom: 2rem;">
                    {"Stay updated with the latest herbal wellness news 🍀"}
                </p>

                <section class="card news-section">
                    <div class="card-header">
                        <h2 class="card-title">{"Latest News"}</h2>
                    </div>
                    <div class="news-grid">
                        { for model.articles().iter().enumerate().map(|(index, article)| html! {
                            <NewsCard
                                key={index}
                                article={article.clone()}
                                default_image={config.default_news_image.clone()}
                            />
                        })}
                    </div>
                </section>
            </main>
        </div>
    }
}
