//! Admin shell layout: sidebar navigation, top bar, content area, footer.
//!
//! The shell knows nothing about the router — the hosting package provides
//! navigation callbacks and the routed view as children.

use dioxus::prelude::*;

use crate::icons::{FaBars, FaFolderOpen, FaGauge, FaImage, FaRightFromBracket, FaUsers, FaXmark};
use crate::services::auth_service;
use crate::theme::ThemeToggle;
use crate::use_auth;
use crate::Icon;

#[component]
pub fn AdminShell(
    /// Active nav target ("dashboard", "projects", "gallery", "users").
    active: &'static str,
    /// Called with the nav target the user picked.
    on_navigate: EventHandler<&'static str>,
    /// Called after the logout call completes (successfully or not).
    on_logged_out: EventHandler<()>,
    /// The routed page content.
    children: Element,
) -> Element {
    let auth = use_auth();
    let mut sidebar_open = use_signal(|| false);

    let admin = auth().admin;
    let today = chrono::Local::now().format("%A, %B %e, %Y").to_string();
    let year = chrono::Local::now().format("%Y").to_string();

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(e) = auth_service().logout().await {
                tracing::error!(error = %e, "logout error");
            }
            on_logged_out.call(());
        });
    };

    rsx! {
        div {
            class: "shell",

            // Mobile overlay
            if sidebar_open() {
                div {
                    class: "shell-overlay",
                    onclick: move |_| sidebar_open.set(false),
                }
            }

            aside {
                class: if sidebar_open() { "sidebar sidebar-open" } else { "sidebar" },

                div {
                    class: "sidebar-brand",
                    div { class: "brand-mark", "MW" }
                    div {
                        h1 { class: "brand-name", "MustardWorks" }
                        p { class: "brand-sub", "Admin Panel" }
                    }
                    button {
                        class: "sidebar-close",
                        aria_label: "Close menu",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }

                nav {
                    class: "sidebar-nav",
                    NavItem {
                        label: "Dashboard",
                        target: "dashboard",
                        active: active == "dashboard",
                        on_pick: move |target| {
                            sidebar_open.set(false);
                            on_navigate.call(target);
                        },
                        Icon { icon: FaGauge, width: 18, height: 18 }
                    }
                    NavItem {
                        label: "Projects",
                        target: "projects",
                        active: active == "projects",
                        on_pick: move |target| {
                            sidebar_open.set(false);
                            on_navigate.call(target);
                        },
                        Icon { icon: FaFolderOpen, width: 18, height: 18 }
                    }
                    NavItem {
                        label: "Gallery",
                        target: "gallery",
                        active: active == "gallery",
                        on_pick: move |target| {
                            sidebar_open.set(false);
                            on_navigate.call(target);
                        },
                        Icon { icon: FaImage, width: 18, height: 18 }
                    }
                    NavItem {
                        label: "Users",
                        target: "users",
                        active: active == "users",
                        on_pick: move |target| {
                            sidebar_open.set(false);
                            on_navigate.call(target);
                        },
                        Icon { icon: FaUsers, width: 18, height: 18 }
                    }
                }

                div {
                    class: "sidebar-footer",
                    if let Some(admin) = admin {
                        div {
                            class: "admin-card",
                            div { class: "admin-avatar", "{admin.initials()}" }
                            div {
                                class: "admin-meta",
                                p { class: "admin-name", "{admin.full_name()}" }
                                p { class: "admin-email", "{admin.email}" }
                            }
                        }
                    }
                    button {
                        class: "logout-btn",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            div {
                class: "shell-main",

                header {
                    class: "topbar",
                    button {
                        class: "topbar-menu",
                        aria_label: "Open menu",
                        onclick: move |_| sidebar_open.set(true),
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                    span { class: "topbar-date", "{today}" }
                    ThemeToggle {}
                }

                main {
                    class: "shell-content",
                    {children}
                }

                footer {
                    class: "shell-footer",
                    p { "© {year} MustardWorks. All rights reserved." }
                }
            }
        }
    }
}

#[component]
fn NavItem(
    label: &'static str,
    target: &'static str,
    active: bool,
    on_pick: EventHandler<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if active { "nav-item nav-item-active" } else { "nav-item" },
            onclick: move |_| on_pick.call(target),
            {children}
            span { class: "nav-label", "{label}" }
        }
    }
}
