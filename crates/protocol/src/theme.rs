use serde::{Deserialize, Serialize};

/// Light or dark presentation of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// What the host should do with its persisted scheme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "scheme", rename_all = "lowercase")]
pub enum SchemePreference {
    /// Forget the stored choice; the system scheme already matches.
    Clear,
    /// Persist an explicit override of the system scheme.
    Store(ColorScheme),
}
