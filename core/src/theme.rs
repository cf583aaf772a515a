pub const LIGHT_CLASS: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Anything other than the two stored literals falls back to dark.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemePreference::Light
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn control_view(self) -> ThemeControlView {
        match self {
            ThemePreference::Light => ThemeControlView {
                aria_pressed: "true",
                aria_label: "Switch to dark mode",
                text: "☀️",
            },
            ThemePreference::Dark => ThemeControlView {
                aria_pressed: "false",
                aria_label: "Switch to light mode",
                text: "🌙",
            },
        }
    }
}

/// Attribute values written to the toggle control for one theme state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeControlView {
    pub aria_pressed: &'static str,
    pub aria_label: &'static str,
    pub text: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_dark() {
        assert_eq!(ThemePreference::parse(None), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("")), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("LIGHT")), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn padded_literal_is_not_a_theme() {
        assert_eq!(ThemePreference::parse(Some(" light")), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("light\n")), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("dark")), ThemePreference::Dark);
    }

    #[test]
    fn toggle_flips_and_returns() {
        let start = ThemePreference::Dark;
        assert_eq!(start.toggled(), ThemePreference::Light);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn light_view_offers_dark_mode() {
        let view = ThemePreference::Light.control_view();
        assert_eq!(view.aria_pressed, "true");
        assert_eq!(view.aria_label, "Switch to dark mode");
    }
}
