//! localStorage-backed session store for the web platform.
//!
//! All operations silently swallow storage errors: a blocked or unavailable
//! localStorage degrades to "no session", which the rest of the app already
//! handles by sending unauthenticated requests and landing on the login view.

use crate::{SessionStore, TOKEN_KEY};

/// Browser localStorage SessionStore, scoped to the fixed [`TOKEN_KEY`].
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for BrowserStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
