//! This crate contains all shared UI for the admin console.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod services;
pub use services::{auth_service, gallery_service, project_service, session_store};

mod auth;
pub use auth::{force_login_redirect, surface_error, use_auth, AuthProvider, AuthState};

mod guard;
pub use guard::{AdminGuard, GuardState};

mod layout;
pub use layout::AdminShell;

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, use_theme, ThemeSignal, ThemeToggle};

mod status;
pub use status::{status_class, StatusBadge};

mod spinner;
pub use spinner::Spinner;

mod confirm;
pub use confirm::confirm;
