use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Named style variables published by the header engine.
///
/// Stylesheets reference each key as the custom property `--<name>`; any key
/// may be absent, in which case the stylesheet's fallback applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKey {
    HeaderHeight,
    #[serde(rename = "header-mb")]
    HeaderMarginBottom,
    HeaderPosition,
    ContentOffset,
    HeaderInnerPosition,
    HeaderTop,
    AvatarTop,
    AvatarImageTransform,
    AvatarBorderTransform,
    AvatarBorderOpacity,
}

impl StyleKey {
    pub const ALL: [StyleKey; 10] = [
        StyleKey::HeaderHeight,
        StyleKey::HeaderMarginBottom,
        StyleKey::HeaderPosition,
        StyleKey::ContentOffset,
        StyleKey::HeaderInnerPosition,
        StyleKey::HeaderTop,
        StyleKey::AvatarTop,
        StyleKey::AvatarImageTransform,
        StyleKey::AvatarBorderTransform,
        StyleKey::AvatarBorderOpacity,
    ];

    /// Bare variable name, e.g. `header-mb`.
    pub fn name(self) -> &'static str {
        match self {
            StyleKey::HeaderHeight => "header-height",
            StyleKey::HeaderMarginBottom => "header-mb",
            StyleKey::HeaderPosition => "header-position",
            StyleKey::ContentOffset => "content-offset",
            StyleKey::HeaderInnerPosition => "header-inner-position",
            StyleKey::HeaderTop => "header-top",
            StyleKey::AvatarTop => "avatar-top",
            StyleKey::AvatarImageTransform => "avatar-image-transform",
            StyleKey::AvatarBorderTransform => "avatar-border-transform",
            StyleKey::AvatarBorderOpacity => "avatar-border-opacity",
        }
    }

    /// Custom property name as written to the document, e.g. `--header-mb`.
    pub fn property(self) -> &'static str {
        match self {
            StyleKey::HeaderHeight => "--header-height",
            StyleKey::HeaderMarginBottom => "--header-mb",
            StyleKey::HeaderPosition => "--header-position",
            StyleKey::ContentOffset => "--content-offset",
            StyleKey::HeaderInnerPosition => "--header-inner-position",
            StyleKey::HeaderTop => "--header-top",
            StyleKey::AvatarTop => "--avatar-top",
            StyleKey::AvatarImageTransform => "--avatar-image-transform",
            StyleKey::AvatarBorderTransform => "--avatar-border-transform",
            StyleKey::AvatarBorderOpacity => "--avatar-border-opacity",
        }
    }

    /// Keys that only the avatar interpolator writes.
    pub fn is_avatar(self) -> bool {
        matches!(
            self,
            StyleKey::AvatarImageTransform
                | StyleKey::AvatarBorderTransform
                | StyleKey::AvatarBorderOpacity
        )
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// CSS `position` keywords the engine switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Sticky,
    Fixed,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Sticky => "sticky",
            Position::Fixed => "fixed",
        }
    }
}

/// A horizontal translate (in `rem`) followed by a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub scale: f64,
}

impl Transform {
    pub fn new(translate_x: f64, scale: f64) -> Self {
        Self { translate_x, scale }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate3d({}rem, 0, 0) scale({})",
            CssNumber(self.translate_x),
            CssNumber(self.scale)
        )
    }
}

/// Shortest decimal rendering of a number, with `-0` folded to `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}")
    }
}

/// A typed style value. Renders to CSS text via `Display` and serializes as
/// that text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// A length in CSS pixels.
    Px(f64),
    Position(Position),
    Transform(Transform),
    /// A unitless number (opacity).
    Number(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Px(v) => write!(f, "{}px", CssNumber(*v)),
            StyleValue::Position(p) => f.write_str(p.as_str()),
            StyleValue::Transform(t) => t.fmt(f),
            StyleValue::Number(v) => CssNumber(*v).fmt(f),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
