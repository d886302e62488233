use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Gallery, Login, Projects, Shell, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/projects")]
        Projects {},
        #[route("/gallery")]
        Gallery {},
        #[route("/users")]
        Users {},
    #[end_layout]
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Theme context, resolved from storage or the OS preference on mount
    let mut theme: ui::ThemeSignal = use_context_provider(|| Signal::new(session::Theme::default()));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Unknown paths land on the dashboard; the shell's guard re-checks there.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
