//! Dashboard view-model.
//!
//! Each fetch carries its own [`FetchStatus`]; the page renders only once both have settled.

use crate::config::DashboardConfig;
use crate::error::{FetchError, Result};
use crate::nav::{NavTarget, nav_entries};
use crate::news::{NewsArticle, NewsResponse};
use crate::profile::{Role, Viewer};
use crate::sidebar::SidebarState;

/// Progress of a single fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus<T> {
    #[default]
    Pending,
    Succeeded(T),
    Failed(FetchError),
}

impl<T> FetchStatus<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchStatus::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchStatus::Succeeded(value) => Some(value),
            FetchStatus::Pending | FetchStatus::Failed(_) => None,
        }
    }
}

impl<T> From<Result<T>> for FetchStatus<T> {
    fn from(outcome: Result<T>) -> Self {
        match outcome {
            Ok(value) => FetchStatus::Succeeded(value),
            Err(err) => FetchStatus::Failed(err),
        }
    }
}

/// Everything that can change the dashboard's view state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    ProfileSettled(Result<Viewer>),
    NewsSettled(Result<NewsResponse>),
    ToggleSidebar,
    ViewportResized(f64),
}

/// View state for one mounted dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub sidebar: SidebarState,
    pub profile: FetchStatus<Viewer>,
    pub news: FetchStatus<NewsResponse>,
    placeholder_name: String,
}

impl DashboardModel {
    /// Fresh state for a viewport `width_px` wide, both fetches pending.
    pub fn new(config: &DashboardConfig, width_px: f64) -> Self {
        Self {
            sidebar: SidebarState::new(width_px, config.collapse_breakpoint_px),
            profile: FetchStatus::Pending,
            news: FetchStatus::Pending,
            placeholder_name: config.placeholder_name.clone(),
        }
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::ProfileSettled(outcome) => self.profile = outcome.into(),
            DashboardAction::NewsSettled(outcome) => self.news = outcome.into(),
            DashboardAction::ToggleSidebar => self.sidebar.toggle(),
            DashboardAction::ViewportResized(width_px) => self.sidebar.on_resize(width_px),
        }
    }

    /// Both fetches have settled, one way or the other.
    pub fn is_ready(&self) -> bool {
        !self.profile.is_pending() && !self.news.is_pending()
    }

    /// Name for the greeting; the placeholder unless a profile loaded.
    pub fn display_name(&self) -> &str {
        self.profile
            .value()
            .and_then(Viewer::profile)
            .map_or(self.placeholder_name.as_str(), |profile| profile.name.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.profile
            .value()
            .and_then(Viewer::profile)
            .map(|profile| profile.role)
    }

    pub fn nav_entries(&self) -> Vec<NavTarget> {
        nav_entries(self.role())
    }

    /// Articles to render; empty when the news fetch failed.
    pub fn articles(&self) -> &[NewsArticle] {
        self.news
            .value()
            .map(|news| news.results.as_slice())
            .unwrap_or_default()
    }
}
