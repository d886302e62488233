//! Login page view with the admin credential form.

use api::Credentials;
use dioxus::prelude::*;
use session::SessionStore;
use ui::icons::{FaCircleExclamation, FaEnvelope, FaLock};
use ui::{auth_service, session_store, use_auth, AuthState, Icon};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let svc = auth_service();
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };

            match svc.login(&credentials).await {
                Ok(()) => {
                    if !svc.is_authenticated() {
                        error.set(Some("Login failed. No token received.".to_string()));
                        loading.set(false);
                        return;
                    }

                    // The token proves nothing about privileges yet
                    match svc.current_user().await {
                        Ok(user) if user.role.is_admin() => {
                            tracing::info!(email = %user.email, "login successful");
                            auth.set(AuthState {
                                admin: Some(user),
                                loading: false,
                            });
                            nav.replace(Route::Dashboard {});
                        }
                        Ok(_) => {
                            session_store().clear();
                            error.set(Some(
                                "Access denied. Admin privileges required.".to_string(),
                            ));
                            loading.set(false);
                        }
                        Err(e) => {
                            session_store().clear();
                            error.set(Some(e.display_message()));
                            loading.set(false);
                        }
                    }
                }
                Err(e) => {
                    session_store().clear();
                    error.set(Some(e.display_message()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",

                div {
                    class: "login-head",
                    div {
                        class: "login-icon",
                        Icon { icon: FaLock, width: 28, height: 28 }
                    }
                    h1 { class: "login-title", "Admin Login" }
                    p { class: "login-sub", "Sign in to access the dashboard" }
                }

                if let Some(err) = error() {
                    div {
                        class: "login-error",
                        Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                        p { "{err}" }
                    }
                }

                form {
                    class: "login-form",
                    onsubmit: handle_submit,

                    label {
                        class: "field",
                        span { class: "field-label", "Email" }
                        div {
                            class: "field-input",
                            Icon { icon: FaEnvelope, width: 16, height: 16 }
                            input {
                                r#type: "email",
                                required: true,
                                placeholder: "admin@mustardworks.com",
                                value: email(),
                                oninput: move |evt: FormEvent| {
                                    email.set(evt.value());
                                    error.set(None);
                                },
                            }
                        }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Password" }
                        div {
                            class: "field-input",
                            Icon { icon: FaLock, width: 16, height: 16 }
                            input {
                                r#type: "password",
                                required: true,
                                placeholder: "Enter your password",
                                value: password(),
                                oninput: move |evt: FormEvent| {
                                    password.set(evt.value());
                                    error.set(None);
                                },
                            }
                        }
                    }

                    button {
                        class: "btn btn-primary login-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                div {
                    class: "login-note",
                    p { "Admin access only. Unauthorized access attempts are logged." }
                }
            }
        }
    }
}
