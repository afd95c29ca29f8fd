//! Evenly hue-spaced colors at constant lightness and chroma

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{Lch, Srgb};

use crate::color::unit_to_u8;

/// Generate `n` colors evenly spaced around the hue circle.
///
/// Every color shares the lightness `lum` and chroma `sat` in CIE LCh, so
/// they read as equally bright. Color `i` sits at hue `hshift - i * 360 / n`
/// degrees. Out-of-gamut channels are clipped before quantizing to 8 bits.
/// The output only depends on the arguments.
pub fn isoluminant_colors(n: usize, lum: f64, sat: f64, hshift: f64) -> Vec<[u8; 3]> {
    let step = 360.0 / n as f64;

    (0..n)
        .map(|i| {
            let hue = hshift - i as f64 * step;
            let rgb = Srgb::<f64>::from_color_unclamped(Lch::<D65, f64>::new(lum, sat, hue));
            [unit_to_u8(rgb.red), unit_to_u8(rgb.green), unit_to_u8(rgb.blue)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_empty() {
        assert!(isoluminant_colors(0, 60.0, 60.0, 0.0).is_empty());
        assert_eq!(isoluminant_colors(7, 60.0, 60.0, 0.0).len(), 7);
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors = isoluminant_colors(6, 60.0, 40.0, 0.0);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            isoluminant_colors(12, 45.0, 70.0, 90.0),
            isoluminant_colors(12, 45.0, 70.0, 90.0)
        );
    }

    #[test]
    fn test_hshift_rotates_palette() {
        // Shifting by one step moves every color one slot along the circle.
        let base = isoluminant_colors(4, 60.0, 40.0, 0.0);
        let shifted = isoluminant_colors(4, 60.0, 40.0, 90.0);
        assert_eq!(shifted[1], base[0]);
        assert_eq!(shifted[2], base[1]);
        assert_eq!(shifted[3], base[2]);
    }

    #[test]
    fn test_zero_chroma_is_grey() {
        for [r, g, b] in isoluminant_colors(5, 50.0, 0.0, 0.0) {
            assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
        }
    }
}
