//! Theme values and their storage encoding.
//!
//! `ThemePreference` is the tri-state model used internally: nothing stored
//! yet, or an explicit light/dark choice. It collapses to the two strings
//! `"light"` and `"dark"` only at the storage boundary, via [`ThemePreference::decode`]
//! and [`Theme::as_str`]. `Unset` is never written.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Stored value for the dark theme.
pub const DARK: &str = "dark";
/// Stored value for the light theme.
pub const LIGHT: &str = "light";

/// A resolved light/dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Map a checkbox state to a theme: checked means dark.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The exact string persisted for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's stored choice, including the "never chosen" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Nothing persisted yet; the system color scheme decides.
    #[default]
    Unset,
    Light,
    Dark,
}

impl ThemePreference {
    /// Decode a raw stored value.
    ///
    /// Absent and empty values are `Unset`. Exactly `"dark"` is `Dark`; any
    /// other string is treated as `Light`.
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Unset,
            Some(DARK) => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// The explicit theme, if one was chosen.
    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Unset => None,
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
        }
    }

    /// Resolve to a concrete theme, asking `system_dark` only when unset.
    #[must_use]
    pub fn resolve(self, system_dark: impl FnOnce() -> bool) -> Theme {
        self.theme().unwrap_or_else(|| Theme::from_checked(system_dark()))
    }

    /// The transition taken when the user sets the toggle to `checked`.
    ///
    /// Every toggle leaves `Unset` for good; there is no way back.
    #[must_use]
    pub fn after_toggle(self, checked: bool) -> Transition {
        Transition { from: self, to: Theme::from_checked(checked) }
    }

    #[must_use]
    pub fn is_unset(self) -> bool {
        self == Self::Unset
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.theme() {
            Some(theme) => fmt::Display::fmt(&theme, f),
            None => f.write_str("unset"),
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

/// One step of the preference state machine, caused by a user toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ThemePreference,
    pub to: Theme,
}

impl Transition {
    /// The user's first explicit choice on this origin.
    #[must_use]
    pub fn is_first_choice(self) -> bool {
        self.from.is_unset()
    }

    /// Whether the stored theme actually changes.
    #[must_use]
    pub fn changes_theme(self) -> bool {
        self.from.theme() != Some(self.to)
    }

    #[must_use]
    pub fn next(self) -> ThemePreference {
        self.to.into()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
