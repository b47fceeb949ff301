//! Page components.

mod dashboard;
mod placeholder;

pub use dashboard::DashboardPage;
pub use placeholder::PlaceholderPage;
