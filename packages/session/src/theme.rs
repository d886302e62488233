//! Light/dark theme preference, persisted beside the session token.

/// The two supported color schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference. Anything other than the two known values
    /// is treated as unset.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the persisted theme preference, if any.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn load_theme() -> Option<Theme> {
    let stored = crate::browser::local_storage()?.get_item(crate::THEME_KEY).ok()??;
    Theme::parse(&stored)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn load_theme() -> Option<Theme> {
    None
}

/// Persist the theme preference. Storage errors are swallowed.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn save_theme(theme: Theme) {
    if let Some(storage) = crate::browser::local_storage() {
        let _ = storage.set_item(crate::THEME_KEY, theme.as_str());
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn save_theme(_theme: Theme) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
