//! Dashboard sidebar: toggle, navigation and logout.

use floramed_core::NavTarget;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for Sidebar component.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub collapsed: bool,
    pub entries: Vec<NavTarget>,
    /// Path of the current route, for the active highlight.
    pub current_path: AttrValue,
    pub on_toggle: Callback<MouseEvent>,
    pub on_logout: Callback<MouseEvent>,
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let collapsed = props.collapsed;

    html! {
        <aside class={classes!("sidebar", collapsed.then_some("collapsed"))}>
            <div>
                <button
                    class="sidebar-toggle"
                    title="Toggle sidebar"
                    onclick={props.on_toggle.clone()}
                >
                    {"☰"}
                </button>
                if !collapsed {
                    <h1 class="nav-brand">{"🌿 FloraMed"}</h1>
                }
                <nav>
                    <ul class="nav-links">
                        { for props.entries.iter().map(|&target| html! {
                            <li key={target.path()}>
                                <NavItem
                                    {target}
                                    {collapsed}
                                    active={target.is_active(&props.current_path)}
                                />
                            </li>
                        })}
                    </ul>
                </nav>
            </div>

            <button class="btn btn-logout" onclick={props.on_logout.clone()}>
                <span>{"⎋"}</span>
                if !collapsed {
                    <span>{"Logout"}</span>
                }
            </button>
        </aside>
    }
}

/// Properties for NavItem component.
#[derive(Properties, PartialEq)]
struct NavItemProps {
    target: NavTarget,
    collapsed: bool,
    active: bool,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let target = props.target;

    // `Link` takes no `title`, so the tooltip sits on a wrapper covering the whole link
    html! {
        <span class="nav-entry" title={target.label()}>
            <Link<Route>
                to={Route::from(target)}
                classes={classes!("nav-item", props.active.then_some("active"))}
            >
                <span class="nav-icon">{ target.icon() }</span>
                if !props.collapsed {
                    <span>{ target.label() }</span>
                }
            </Link<Route>>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floramed_core::{Role, nav_entries};
    use yew::ServerRenderer;
    use yew_router::Router;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[derive(Properties, PartialEq)]
    struct SidebarHostProps {
        collapsed: bool,
        current_path: &'static str,
    }

    #[function_component(SidebarHost)]
    fn sidebar_host(props: &SidebarHostProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());

        html! {
            <Router {history}>
                <Sidebar
                    collapsed={props.collapsed}
                    entries={nav_entries(Some(Role::Herbalist))}
                    current_path={props.current_path}
                    on_toggle={Callback::noop()}
                    on_logout={Callback::noop()}
                />
            </Router>
        }
    }

    async fn render(collapsed: bool, current_path: &'static str) -> String {
        ServerRenderer::<SidebarHost>::with_props(move || SidebarHostProps {
            collapsed,
            current_path,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_collapsed_entry_tooltip_covers_link() {
        let html = render(true, "/dashboard").await;

        let tooltip = html.find(r#"title="Home""#).unwrap();
        let link = html.find(r#"href="/""#).unwrap();
        assert!(tooltip < link);
        assert!(!html.contains("<span>Home</span>"));
        assert!(!html.contains("Logout"));
    }

    #[tokio::test]
    async fn test_expanded_sidebar_shows_labels() {
        let html = render(false, "/dashboard").await;

        assert!(html.contains("<span>Home</span>"));
        assert!(html.contains("<span>My Plants</span>"));
        assert!(html.contains("FloraMed"));
    }

    #[tokio::test]
    async fn test_only_current_route_is_highlighted() {
        let html = render(false, "/doctors").await;

        assert_eq!(html.matches("nav-item active").count(), 1);
        let active = html.find("nav-item active").unwrap();
        let doctors = html.find(r#"href="/doctors""#).unwrap();
        let open = html[..doctors].rfind("<a").unwrap();
        let close = open + html[open..].find('>').unwrap();
        assert!(open < active && active < close);
    }
}
