//! Session credential in `localStorage`.

use floramed_core::CredentialStore;
use gloo_storage::{LocalStorage, Storage};

/// Key the login page writes the bearer token under.
pub const TOKEN_KEY: &str = "token";

/// The login page stores the token as a bare string, not JSON, so this reads it raw.
pub struct LocalCredentialStore;

impl CredentialStore for LocalCredentialStore {
    fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}
