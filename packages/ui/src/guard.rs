//! Client-side route guard for protected views.
//!
//! Re-runs on every protected-view mount; there is no cross-view cache of
//! the decision — each navigation trusts the backend's current answer at the
//! cost of one round trip.

use api::{ApiError, User};
use dioxus::prelude::*;
use session::SessionStore;

use crate::auth::force_login_redirect;
use crate::services::{auth_service, session_store};
use crate::spinner::Spinner;

/// Authorization progress for one protected-view mount. Terminal states are
/// `Authorized` and `Unauthorized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unknown,
    Checking,
    Authorized,
    Unauthorized,
}

/// The admission decision for a current-user outcome. Any failure — network,
/// malformed response, or a role other than admin — is a denial; the console
/// has exactly one privilege tier, so a denial is a full sign-out.
fn admit(outcome: Result<User, ApiError>) -> bool {
    match outcome {
        Ok(user) if user.role.is_admin() => true,
        Ok(user) => {
            tracing::warn!(email = %user.email, "non-admin user denied");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "guard auth check failed");
            false
        }
    }
}

/// Gate rendering of `children` behind an admin check.
#[component]
pub fn AdminGuard(children: Element) -> Element {
    let mut state = use_signal(|| GuardState::Unknown);

    let _check = use_resource(move || async move {
        state.set(GuardState::Checking);
        let svc = auth_service();

        // No token: deny without a current-user round trip.
        if !svc.is_authenticated() {
            state.set(GuardState::Unauthorized);
            force_login_redirect();
            return;
        }

        if admit(svc.current_user().await) {
            state.set(GuardState::Authorized);
        } else {
            session_store().clear();
            state.set(GuardState::Unauthorized);
            force_login_redirect();
        }
    });

    match state() {
        GuardState::Unknown | GuardState::Checking => rsx! {
            Spinner {}
        },
        GuardState::Authorized => rsx! {
            {children}
        },
        GuardState::Unauthorized => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha@mustardworks.com".into(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn test_admin_is_admitted() {
        assert!(admit(Ok(user(Role::Admin))));
    }

    #[test]
    fn test_non_admin_is_denied() {
        assert!(!admit(Ok(user(Role::User))));
    }

    #[test]
    fn test_any_failure_is_denied() {
        assert!(!admit(Err(ApiError::Unauthorized {
            message: "jwt expired".into()
        })));
        assert!(!admit(Err(ApiError::Decode("missing role".into()))));
        assert!(!admit(Err(ApiError::Backend {
            status: 500,
            message: "boom".into()
        })));
    }
}
