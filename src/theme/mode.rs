//! Color modes, preference sources and the toggle control label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The theme currently rendered, or stored as a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Maps a "prefers dark" signal to a mode.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// The literal written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color mode '{0}'")]
pub struct UnknownColorMode(pub String);

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    /// Strict parse: only the two persisted literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}

/// Where the active theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// Chosen with the toggle control and persisted.
    UserExplicit,
    /// Derived from the environment's light/dark preference. Never persisted.
    SystemAmbient,
}

/// The preference behind the rendered theme.
///
/// `value` is `None` when nothing is set: no explicit choice was stored and
/// the environment does not report an ambient preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub value: Option<ColorMode>,
    pub source: ThemeSource,
}

impl ThemePreference {
    pub fn explicit(mode: ColorMode) -> Self {
        Self {
            value: Some(mode),
            source: ThemeSource::UserExplicit,
        }
    }

    pub fn ambient(mode: Option<ColorMode>) -> Self {
        Self {
            value: mode,
            source: ThemeSource::SystemAmbient,
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.source == ThemeSource::UserExplicit
    }

    /// Resolves the mode to render.
    ///
    /// An explicit value always wins; otherwise the ambient value is used,
    /// and `fallback` covers the unset case.
    pub fn resolve(&self, fallback: ColorMode) -> ColorMode {
        self.value.unwrap_or(fallback)
    }
}

/// Icon and text shown on the theme toggle control.
///
/// The label names the action, so it always shows the opposite of the
/// rendered mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLabel {
    pub icon_class: &'static str,
    pub text: &'static str,
}

impl ToggleLabel {
    pub fn for_rendered(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => ToggleLabel {
                icon_class: "fas fa-sun",
                text: "Light",
            },
            ColorMode::Light => ToggleLabel {
                icon_class: "fas fa-moon",
                text: "Dark",
            },
        }
    }
}
