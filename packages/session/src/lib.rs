//! Persisted client state for the admin console: the bearer-token session
//! and the light/dark theme preference.

/// localStorage key holding the admin session token.
pub const TOKEN_KEY: &str = "adminToken";

/// localStorage key holding the theme preference.
pub const THEME_KEY: &str = "admin-theme";

/// Storage for the single opaque session token.
///
/// The backend is the sole authority on token validity; this store only
/// persists the token between page loads. Writes are last-write-wins.
pub trait SessionStore: Clone {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn set(&self, token: &str);

    /// Remove the stored token. A no-op when nothing is stored.
    fn clear(&self);

    /// Whether a token is currently stored.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub mod theme;
pub use theme::Theme;
