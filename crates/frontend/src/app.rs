//! Main application component with routing.

use std::rc::Rc;

use floramed_core::{DashboardConfig, NavTarget};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::pages::{DashboardPage, PlaceholderPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/myherbs")]
    MyHerbs,
    #[at("/dashboard/gardening-tips")]
    GardeningTips,
    #[at("/health")]
    HealthTips,
    #[at("/add-plants")]
    AddPlants,
    #[at("/doctors")]
    Doctors,
    #[at("/my-plants")]
    MyPlants,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home,
            NavTarget::MyHerbs => Route::MyHerbs,
            NavTarget::GardeningTips => Route::GardeningTips,
            NavTarget::HealthTips => Route::HealthTips,
            NavTarget::AddPlants => Route::AddPlants,
            NavTarget::Doctors => Route::Doctors,
            NavTarget::MyPlants => Route::MyPlants,
        }
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    let title = match routes {
        Route::Dashboard => return html! { <DashboardPage /> },
        Route::NotFound => {
            return html! {
                <div class="card">
                    <h1>{"404 - Page Not Found"}</h1>
                    <p>{"The page you're looking for doesn't exist."}</p>
                </div>
            };
        }
        Route::Home => NavTarget::Home.label(),
        Route::MyHerbs => NavTarget::MyHerbs.label(),
        Route::GardeningTips => NavTarget::GardeningTips.label(),
        Route::HealthTips => NavTarget::HealthTips.label(),
        Route::AddPlants => NavTarget::AddPlants.label(),
        Route::Doctors => NavTarget::Doctors.label(),
        Route::MyPlants => NavTarget::MyPlants.label(),
        Route::Login => "Login",
    };

    html! { <PlaceholderPage {title} /> }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| config::load());

    html! {
        <ContextProvider<Rc<DashboardConfig>> context={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<DashboardConfig>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floramed_core::{Role, nav_entries};

    #[test]
    fn test_nav_targets_map_to_their_paths() {
        for target in nav_entries(Some(Role::Herbalist)) {
            assert_eq!(Route::from(target).to_path(), target.path());
        }
    }

    #[test]
    fn test_logout_target_is_a_route() {
        assert_eq!(Route::recognize(floramed_core::LOGIN_PATH), Some(Route::Login));
    }

    #[test]
    fn test_gardening_tips_is_not_the_dashboard() {
        assert_eq!(
            Route::recognize("/dashboard/gardening-tips"),
            Some(Route::GardeningTips)
        );
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
    }
}
