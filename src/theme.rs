//! Day/night color themes.

use serde::{Deserialize, Serialize};

/// Client hint header carrying the browser's preferred color scheme.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

/// A concrete color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Day,
    /// Light text on a dark background.
    Night,
}

impl Theme {
    /// Parse a settings form value. Anything other than `night` is day.
    pub fn from_form_value(value: &str) -> Self {
        if value == "night" {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    /// Theme matching a `prefers-color-scheme` value (`dark` or `light`).
    pub fn from_color_scheme(scheme: Option<&str>) -> Self {
        match scheme.map(|s| s.trim().trim_matches('"')) {
            Some(s) if s.eq_ignore_ascii_case("dark") => Theme::Night,
            _ => Theme::Day,
        }
    }

    /// Value used by the settings form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// RGB triple for `--color-dark`.
    pub fn color_dark(&self) -> &'static str {
        match self {
            Theme::Day => "10, 10, 20",
            Theme::Night => "255, 255, 255",
        }
    }

    /// RGB triple for `--color-light`.
    pub fn color_light(&self) -> &'static str {
        match self {
            Theme::Day => "255, 255, 255",
            Theme::Night => "10, 10, 20",
        }
    }

    /// CSS custom properties as `(name, value)` pairs.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 2] {
        [
            ("--color-dark", self.color_dark()),
            ("--color-light", self.color_light()),
        ]
    }
}

/// Configured starting theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always start in day mode.
    Day,
    /// Always start in night mode.
    Night,
    /// Follow the client's color scheme hint.
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve to a concrete theme given the client's color scheme hint.
    pub fn resolve(&self, scheme: Option<&str>) -> Theme {
        match self {
            ThemePreference::Day => Theme::Day,
            ThemePreference::Night => Theme::Night,
            ThemePreference::System => Theme::from_color_scheme(scheme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_form_value_sets_dark_variables() {
        let theme = Theme::from_form_value("night");
        assert_eq!(theme, Theme::Night);
        assert_eq!(
            theme.css_variables(),
            [("--color-dark", "255, 255, 255"), ("--color-light", "10, 10, 20")]
        );
    }

    #[test]
    fn day_form_value_sets_light_variables() {
        let theme = Theme::from_form_value("day");
        assert_eq!(theme, Theme::Day);
        assert_eq!(
            theme.css_variables(),
            [("--color-dark", "10, 10, 20"), ("--color-light", "255, 255, 255")]
        );
    }

    #[test]
    fn unknown_form_value_falls_back_to_day() {
        assert_eq!(Theme::from_form_value("dusk"), Theme::Day);
        assert_eq!(Theme::from_form_value(""), Theme::Day);
    }

    #[test]
    fn system_preference_follows_hint() {
        let pref = ThemePreference::System;
        assert_eq!(pref.resolve(Some("dark")), Theme::Night);
        assert_eq!(pref.resolve(Some("\"dark\"")), Theme::Night);
        assert_eq!(pref.resolve(Some("light")), Theme::Day);
        assert_eq!(pref.resolve(None), Theme::Day);
    }

    #[test]
    fn fixed_preference_ignores_hint() {
        assert_eq!(ThemePreference::Day.resolve(Some("dark")), Theme::Day);
        assert_eq!(ThemePreference::Night.resolve(Some("light")), Theme::Night);
    }
}
