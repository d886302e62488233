//! Authentication context and helpers for the admin console UI.

use api::{ApiError, User};
use dioxus::prelude::*;
use session::SessionStore;

use crate::services::{auth_service, session_store};
use crate::spinner::Spinner;

/// Authentication state seeded once at startup and held in memory for chrome
/// display (name and email in the navigation). Protected routes re-verify
/// independently through [`crate::AdminGuard`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub admin: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            admin: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the admin logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Establish the logged-in identity on mount
    let _ = use_resource(move || async move {
        let svc = auth_service();
        if !svc.is_authenticated() {
            auth_state.set(AuthState {
                admin: None,
                loading: false,
            });
            return;
        }
        match svc.current_user().await {
            Ok(user) if user.role.is_admin() => {
                tracing::info!(email = %user.email, "admin authenticated");
                auth_state.set(AuthState {
                    admin: Some(user),
                    loading: false,
                });
            }
            Ok(_) => {
                tracing::warn!("authenticated user is not an admin");
                session_store().clear();
                auth_state.set(AuthState {
                    admin: None,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "startup auth check failed");
                session_store().clear();
                auth_state.set(AuthState {
                    admin: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    // Gate the routes until the startup check settles
    if auth_state().loading {
        return rsx! {
            Spinner {}
        };
    }

    rsx! {
        {children}
    }
}

/// Hard navigation to the login entry point, skipped when the login view is
/// already showing (no redirect loop). Application state may be unreliable
/// after an auth failure, so this is a full page load, not an in-app route
/// change.
pub fn force_login_redirect() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let on_login = window
                .location()
                .pathname()
                .map(|p| p == "/login")
                .unwrap_or(false);
            if !on_login {
                let _ = window.location().set_href("/login");
            }
        }
    }
}

/// Interpret an API failure for a view: a 401 forces sign-out. Returns the
/// message to show inline.
pub fn surface_error(err: &ApiError) -> String {
    if err.is_unauthorized() {
        force_login_redirect();
    }
    err.display_message()
}
