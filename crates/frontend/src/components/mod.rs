//! Reusable UI components.

mod card;
mod loading;
mod news_card;
mod sidebar;

pub use card::Card;
pub use loading::Loading;
pub use news_card::NewsCard;
pub use sidebar::Sidebar;
