//! Display color tags for promotions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of promotion accent colors.
///
/// The backend stores the color as a free-form lowercase string; anything
/// outside the known set deserializes to [`Color::Unknown`], which renders
/// with the default accent. A missing field defaults to [`Color::Blue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Pink,
    #[serde(other)]
    Unknown,
}

impl Color {
    /// All known colors, in display order.
    pub const KNOWN: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Orange,
        Color::Red,
        Color::Pink,
    ];

    /// The lowercase wire tag for this color.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Pink => "pink",
            Color::Unknown => "unknown",
        }
    }

    /// Whether this is one of the known accent colors.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Color::Unknown)
    }

    /// The color used for rendering: `Unknown` falls back to the default.
    #[must_use]
    pub fn effective(&self) -> Color {
        if self.is_known() {
            *self
        } else {
            Color::default()
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = std::convert::Infallible;

    /// Case-insensitive parse; unrecognized tags become `Unknown`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "blue" => Color::Blue,
            "green" => Color::Green,
            "purple" => Color::Purple,
            "orange" => Color::Orange,
            "red" => Color::Red,
            "pink" => Color::Pink,
            _ => Color::Unknown,
        })
    }
}
