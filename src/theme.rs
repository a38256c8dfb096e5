//! Light/dark theme lookup. Only affects icon styling.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Arrow icons are drawn white, so they get inverted on light backgrounds
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "filter invert",
            Theme::Dark => "",
        }
    }
}

/// Persisted choice first, then the OS preference
pub fn detect_theme() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::default();
    };

    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item("theme").ok().flatten())
        .and_then(|name| Theme::from_name(&name));
    if let Some(theme) = stored {
        return theme;
    }

    match window.match_media("(prefers-color-scheme: light)") {
        Ok(Some(query)) if query.matches() => Theme::Light,
        _ => Theme::default(),
    }
}
