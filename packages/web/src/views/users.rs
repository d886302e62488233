//! Registered users: stats, role filter, paginated table.

use api::auth::UserListParams;
use api::{Role, User};
use dioxus::prelude::*;
use ui::icons::{FaArrowsRotate, FaMagnifyingGlass, FaShieldHalved, FaUserCheck, FaUsers};
use ui::{auth_service, surface_error, Icon, Spinner};

#[component]
pub fn Users() -> Element {
    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(|| Option::<Role>::None);
    let mut page = use_signal(|| 1u32);

    let mut data = use_resource(move || async move {
        let params = UserListParams {
            role: role_filter(),
            ..UserListParams::recent_first(page(), 10)
        };
        auth_service().all_users(&params).await
    });

    match &*data.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(e)) => {
            let message = surface_error(e);
            rsx! {
                div { class: "error-banner", "Failed to load users: {message}" }
            }
        }
        Some(Ok(listing)) => {
            let term = search().to_lowercase();
            let filtered: Vec<User> = listing
                .users
                .iter()
                .filter(|u| {
                    u.first_name.to_lowercase().contains(&term)
                        || u.last_name.to_lowercase().contains(&term)
                        || u.email.to_lowercase().contains(&term)
                })
                .cloned()
                .collect();

            let pagination = listing.pagination.clone();
            let admins = listing.users.iter().filter(|u| u.role.is_admin()).count();
            let regular = listing.users.len() - admins;

            rsx! {
                div {
                    class: "page",

                    div {
                        class: "page-head page-head-split",
                        div {
                            class: "page-head",
                            Icon { icon: FaUsers, width: 30, height: 30 }
                            div {
                                h1 { class: "page-title", "Registered Users" }
                                p { class: "page-sub", "{pagination.total_users} total users" }
                            }
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| data.restart(),
                            Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                            "Refresh"
                        }
                    }

                    div {
                        class: "stat-grid stat-grid-three",
                        div {
                            class: "stat-card",
                            div { class: "stat-icon stat-info", Icon { icon: FaUsers, width: 22, height: 22 } }
                            h3 { class: "stat-value", "{pagination.total_users}" }
                            p { class: "stat-label", "Total Users" }
                        }
                        div {
                            class: "stat-card",
                            div { class: "stat-icon stat-accent", Icon { icon: FaShieldHalved, width: 22, height: 22 } }
                            h3 { class: "stat-value", "{admins}" }
                            p { class: "stat-label", "Admins" }
                        }
                        div {
                            class: "stat-card",
                            div { class: "stat-icon stat-success", Icon { icon: FaUserCheck, width: 22, height: 22 } }
                            h3 { class: "stat-value", "{regular}" }
                            p { class: "stat-label", "Regular Users" }
                        }
                    }

                    div {
                        class: "toolbar",
                        div {
                            class: "search-box",
                            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                            input {
                                class: "search-input",
                                r#type: "text",
                                placeholder: "Search by name or email...",
                                value: search(),
                                oninput: move |evt: FormEvent| search.set(evt.value()),
                            }
                        }
                        select {
                            class: "filter-select",
                            onchange: move |evt: FormEvent| {
                                page.set(1);
                                role_filter.set(match evt.value().as_str() {
                                    "admin" => Some(Role::Admin),
                                    "user" => Some(Role::User),
                                    _ => None,
                                });
                            },
                            option { value: "all", selected: role_filter().is_none(), "All Roles" }
                            option { value: "user", selected: role_filter() == Some(Role::User), "Users Only" }
                            option { value: "admin", selected: role_filter() == Some(Role::Admin), "Admins Only" }
                        }
                    }

                    div {
                        class: "table-wrap",
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Joined" }
                                }
                            }
                            tbody {
                                if filtered.is_empty() {
                                    tr {
                                        td { colspan: 4, class: "empty-state", "No users found" }
                                    }
                                } else {
                                    for user in filtered {
                                        UserRow { key: "{user.id}", user: user.clone() }
                                    }
                                }
                            }
                        }
                    }

                    if pagination.total_pages > 1 {
                        div {
                            class: "pager",
                            p { "Page {pagination.current_page} of {pagination.total_pages}" }
                            div {
                                class: "pager-buttons",
                                button {
                                    class: "btn btn-secondary",
                                    disabled: !pagination.has_prev_page,
                                    onclick: move |_| {
                                        let current = page();
                                        page.set(current.saturating_sub(1).max(1));
                                    },
                                    "Previous"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    disabled: !pagination.has_next_page,
                                    onclick: move |_| page.set(page() + 1),
                                    "Next"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User) -> Element {
    let joined = user
        .created_at
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let short_id: String = user.id.chars().rev().take(8).collect::<Vec<_>>()
        .into_iter().rev().collect();

    rsx! {
        tr {
            td {
                div {
                    class: "user-cell",
                    div { class: "avatar-chip", "{user.initials()}" }
                    div {
                        div { class: "cell-primary", "{user.full_name()}" }
                        div { class: "cell-secondary", "ID: {short_id}" }
                    }
                }
            }
            td { "{user.email}" }
            td {
                span {
                    class: if user.role.is_admin() { "role-badge role-admin" } else { "role-badge role-user" },
                    if user.role.is_admin() {
                        Icon { icon: FaShieldHalved, width: 12, height: 12 }
                    } else {
                        Icon { icon: FaUserCheck, width: 12, height: 12 }
                    }
                    "{user.role.as_str().to_uppercase()}"
                }
            }
            td { class: "cell-secondary", "{joined}" }
        }
    }
}
