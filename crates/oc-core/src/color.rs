//! Color types and small color utilities

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{Lch, Srgb};
use serde::{Deserialize, Serialize};

use crate::{ColoringError, Result};

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    /// Opaque color from its channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba([r, g, b, a])
    }

    /// Quantize a color with channels in [0, 1].
    ///
    /// Channels are clipped, scaled by 255 and truncated, so 1.0 maps to 255
    /// and anything short of it rounds down.
    pub fn from_unit(channels: [f64; 4]) -> Self {
        Rgba(channels.map(unit_to_u8))
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let valid_len = digits.len() == 6 || digits.len() == 8;
        if !valid_len || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColoringError::InvalidHexColor(hex.to_string()));
        }

        let mut channels = [255u8; 4];
        for (i, channel) in channels.iter_mut().take(digits.len() / 2).enumerate() {
            *channel = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
                .map_err(|_| ColoringError::InvalidHexColor(hex.to_string()))?;
        }
        Ok(Rgba(channels))
    }

    pub fn a(self) -> u8 {
        self.0[3]
    }

    pub fn rgb(self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(rgb: [u8; 3]) -> Self {
        Rgba::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<colorous::Color> for Rgba {
    fn from(color: colorous::Color) -> Self {
        Rgba::from_rgb(color.r, color.g, color.b)
    }
}

pub(crate) fn unit_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Shift the lightness of an sRGB color (channels in [0, 1]).
///
/// The shift happens in CIE LCh. Shifts with magnitude up to 1 are read as a
/// fraction of the lightness range and scaled by 100.
pub fn shift_lum(rgb: [f64; 3], s: f64) -> [f64; 3] {
    let s = if s.abs() <= 1.0 { s * 100.0 } else { s };

    let mut lch = Lch::<D65, f64>::from_color_unclamped(Srgb::new(rgb[0], rgb[1], rgb[2]));
    lch.l += s;

    let shifted = Srgb::<f64>::from_color_unclamped(lch);
    [shifted.red, shifted.green, shifted.blue].map(|c| c.clamp(0.0, 1.0))
}

/// Darken a color by subtracting `val` from every channel, floored at 0
pub fn dark_col(rgb: [f64; 3], val: f64) -> [f64; 3] {
    rgb.map(|c| (c - val).max(0.0))
}
