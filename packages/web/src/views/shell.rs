use dioxus::prelude::*;

use ui::{AdminGuard, AdminShell};

use crate::Route;

/// Protected shell: every routed child re-verifies admin access through the
/// guard before rendering inside the admin layout.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route: Route = use_route();

    let active = match route {
        Route::Projects {} => "projects",
        Route::Gallery {} => "gallery",
        Route::Users {} => "users",
        _ => "dashboard",
    };

    rsx! {
        AdminGuard {
            AdminShell {
                active,
                on_navigate: move |target: &'static str| {
                    let route = match target {
                        "projects" => Route::Projects {},
                        "gallery" => Route::Gallery {},
                        "users" => Route::Users {},
                        _ => Route::Dashboard {},
                    };
                    nav.push(route);
                },
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
                Outlet::<Route> {}
            }
        }
    }
}
