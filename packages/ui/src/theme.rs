//! Light/dark theme context.
//!
//! The preference lives under one localStorage key; when unset, the OS
//! `prefers-color-scheme` answer wins. The active theme is mirrored onto the
//! document element as a `data-theme` attribute for the stylesheet.

use dioxus::prelude::*;
use session::Theme;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Initialize the theme signal from storage, falling back to the OS
/// preference. Call once at app start.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let initial = session::theme::load_theme().unwrap_or_else(preferred_theme);
    theme.set(initial);
    set_document_theme(initial);
}

/// Apply and persist a theme choice.
pub fn apply_theme(theme: &mut ThemeSignal, choice: Theme) {
    theme.set(choice);
    session::theme::save_theme(choice);
    set_document_theme(choice);
}

fn preferred_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false);
        if prefers_dark {
            return Theme::Dark;
        }
    }
    Theme::Light
}

fn set_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

/// Sun/moon button switching between the two themes.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            title: if current == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let next = theme().toggled();
                apply_theme(&mut theme, next);
            },
            if current == Theme::Dark {
                Icon { icon: FaSun, width: 18, height: 18 }
            } else {
                Icon { icon: FaMoon, width: 18, height: 18 }
            }
        }
    }
}
