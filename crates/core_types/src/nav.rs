//! Sidebar navigation entries and the active-link rule.

use crate::profile::Role;

/// Where logout sends the browser.
pub const LOGIN_PATH: &str = "/login";

/// Destinations reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    MyHerbs,
    GardeningTips,
    HealthTips,
    AddPlants,
    Doctors,
    MyPlants,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::MyHerbs => "/myherbs",
            NavTarget::GardeningTips => "/dashboard/gardening-tips",
            NavTarget::HealthTips => "/health",
            NavTarget::AddPlants => "/add-plants",
            NavTarget::Doctors => "/doctors",
            NavTarget::MyPlants => "/my-plants",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::MyHerbs => "My Herbs",
            NavTarget::GardeningTips => "Gardening Tips",
            NavTarget::HealthTips => "Health Tips",
            NavTarget::AddPlants => "Add Plants",
            NavTarget::Doctors => "Book Appointment",
            NavTarget::MyPlants => "My Plants",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavTarget::Home => "🏠",
            NavTarget::MyHerbs | NavTarget::AddPlants | NavTarget::MyPlants => "🌱",
            NavTarget::GardeningTips => "🍃",
            NavTarget::HealthTips => "💬",
            NavTarget::Doctors => "🩺",
        }
    }

    /// Exact path match; `/dashboard/gardening-tips` does not make `/` active.
    pub fn is_active(self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

const ALWAYS_SHOWN: [NavTarget; 6] = [
    NavTarget::Home,
    NavTarget::MyHerbs,
    NavTarget::GardeningTips,
    NavTarget::HealthTips,
    NavTarget::AddPlants,
    NavTarget::Doctors,
];

/// Entries to render for a viewer with the given role (`None` when no profile was loaded).
pub fn nav_entries(role: Option<Role>) -> Vec<NavTarget> {
    let mut entries = ALWAYS_SHOWN.to_vec();
    if role.is_some_and(Role::can_manage_plants) {
        entries.push(NavTarget::MyPlants);
    }
    entries
}
