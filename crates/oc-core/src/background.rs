//! Fill colors for voxels without an ROI

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ColoringError, Rgba};

/// Background fill for empty voxels
///
/// Serializes as `"w"`, `"k"`, `"transparent"` or `{"rgba": [r, g, b, a]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Background {
    /// Opaque white
    #[serde(rename = "w")]
    White,

    /// Opaque black
    #[serde(rename = "k")]
    Black,

    /// All-zero RGBA
    #[default]
    #[serde(rename = "transparent")]
    Transparent,

    /// Explicit color
    #[serde(rename = "rgba")]
    Custom(Rgba),
}

impl Background {
    /// Resolve to the fill color
    pub fn color(&self) -> Rgba {
        match self {
            Background::White => Rgba::WHITE,
            Background::Black => Rgba::BLACK,
            Background::Transparent => Rgba::TRANSPARENT,
            Background::Custom(color) => *color,
        }
    }
}

impl FromStr for Background {
    type Err = ColoringError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "w" => Ok(Background::White),
            "k" => Ok(Background::Black),
            "transparent" => Ok(Background::Transparent),
            _ => Err(ColoringError::UnknownBackground(name.to_string())),
        }
    }
}

impl From<Rgba> for Background {
    fn from(color: Rgba) -> Self {
        Background::Custom(color)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::White => write!(f, "w"),
            Background::Black => write!(f, "k"),
            Background::Transparent => write!(f, "transparent"),
            Background::Custom(Rgba([r, g, b, a])) => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_backgrounds() {
        assert_eq!("w".parse::<Background>().unwrap().color(), Rgba([255, 255, 255, 255]));
        assert_eq!("k".parse::<Background>().unwrap().color(), Rgba([0, 0, 0, 255]));
        assert_eq!("transparent".parse::<Background>().unwrap().color(), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_unknown_background() {
        let err = "white".parse::<Background>().unwrap_err();
        assert!(matches!(err, ColoringError::UnknownBackground(name) if name == "white"));
    }

    #[test]
    fn test_background_serde() {
        let bg: Background = serde_json::from_str("\"k\"").unwrap();
        assert_eq!(bg, Background::Black);

        let bg: Background = serde_json::from_str(r#"{"rgba": [10, 20, 30, 40]}"#).unwrap();
        assert_eq!(bg.color(), Rgba([10, 20, 30, 40]));

        assert!(serde_json::from_str::<Background>("\"grey\"").is_err());
        assert_eq!(serde_json::to_string(&Background::Transparent).unwrap(), "\"transparent\"");
    }
}
