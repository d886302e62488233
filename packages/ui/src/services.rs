//! Shared service constructors for all views.
//!
//! Returns clients backed by the platform session store:
//! - **Web** (WASM + `web` feature): browser localStorage via [`session::BrowserStore`]
//! - **Native** (tests, dev tooling): a process-wide in-memory store

use api::{ApiClient, AuthService, GalleryService, ProjectService};
use session::SessionStore;

/// The platform session store.
pub fn session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        session::BrowserStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static STORE: OnceLock<session::MemoryStore> = OnceLock::new();
        STORE.get_or_init(session::MemoryStore::new).clone()
    }
}

fn client() -> ApiClient<impl SessionStore> {
    ApiClient::from_env(session_store())
}

pub fn auth_service() -> AuthService<impl SessionStore> {
    AuthService::new(client())
}

pub fn project_service() -> ProjectService<impl SessionStore> {
    ProjectService::new(client())
}

pub fn gallery_service() -> GalleryService<impl SessionStore> {
    GalleryService::new(client())
}
