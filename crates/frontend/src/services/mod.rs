//! Browser-side adapters for the core crate's seams.

mod http;
mod storage;
mod viewport;

pub use http::{BrowserTimer, HttpApi};
pub use storage::LocalCredentialStore;
pub use viewport::{ResizeSubscription, viewport_width};
