//! Light/dark theme state for the theme toggle.
//!
//! The toggle owns a single boolean. The palette for each side is resolved
//! from `WidgetConfig` and written to the document by `util::css_vars`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Deserialize;

use crate::config::WidgetConfig;

pub const COLOR_PROPERTY: &str = "--color";
pub const BACKGROUND_COLOR_PROPERTY: &str = "--background-color";

/// Foreground/background pair written to the two CSS custom properties.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemePalette {
    pub color: String,
    pub background_color: String,
}

impl ThemePalette {
    #[must_use]
    pub fn light() -> Self {
        Self { color: "#222".into(), background_color: "#FFF".into() }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self { color: "#EEE".into(), background_color: "#111".into() }
    }

    /// Property/value pairs in the order they are applied.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &str); 2] {
        [(COLOR_PROPERTY, self.color.as_str()), (BACKGROUND_COLOR_PROPERTY, self.background_color.as_str())]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn palette<'a>(self, config: &'a WidgetConfig) -> &'a ThemePalette {
        match self {
            Self::Light => &config.light,
            Self::Dark => &config.dark,
        }
    }
}

/// Toggle state. Starts light and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    #[must_use]
    pub fn current(self) -> Theme {
        if self.is_dark { Theme::Dark } else { Theme::Light }
    }

    /// Flip the theme and return the one now in effect.
    pub fn toggle(&mut self) -> Theme {
        self.is_dark = !self.is_dark;
        self.current()
    }
}
