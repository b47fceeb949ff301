//! Core types for the FloraMed dashboard.
//!
//! This crate holds the browser-independent half of the dashboard: the
//! wire types for the profile and news endpoints, the fetch contracts,
//! the sidebar and navigation rules, and the view-model the Yew
//! frontend renders from.

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod nav;
pub mod news;
pub mod profile;
pub mod sidebar;

pub use config::DashboardConfig;
pub use error::{FetchError, Result};
pub use fetch::{CredentialStore, DashboardApi, DashboardLoader, Timer, logout, with_timeout};
pub use model::{DashboardAction, DashboardModel, FetchStatus};
pub use nav::{LOGIN_PATH, NavTarget, nav_entries};
pub use news::{NewsArticle, NewsQuery, NewsResponse};
pub use profile::{Role, UserProfile, Viewer};
pub use sidebar::SidebarState;
