use dioxus::prelude::*;

/// Centered loading spinner shown while a view or guard check is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
