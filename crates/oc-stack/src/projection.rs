//! Projection of colored stacks along their first axis

use std::fmt;
use std::str::FromStr;

use ndarray::{Array3, ArrayView4, Axis, Zip};
use oc_core::ColoringError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Later planes paint over earlier ones wherever they are non-zero
    #[default]
    Overlay,

    /// Planes add up; the sum is rescaled so the last channel peaks at 255
    Transparency,
}

impl FromStr for ProjectionMode {
    type Err = ColoringError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "overlay" => Ok(ProjectionMode::Overlay),
            "transparency" => Ok(ProjectionMode::Transparency),
            _ => Err(ColoringError::UnsupportedProjection(mode.to_string())),
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionMode::Overlay => write!(f, "overlay"),
            ProjectionMode::Transparency => write!(f, "transparency"),
        }
    }
}

/// Project a colored stack `(planes, X, Y, channels)` to `(X, Y, channels)`.
///
/// Works channel by channel: a zero in one channel never hides a non-zero
/// value in another.
pub fn color_zproject(stack: ArrayView4<'_, u8>, mode: ProjectionMode) -> Array3<u8> {
    let (_, nx, ny, nc) = stack.dim();

    match mode {
        ProjectionMode::Overlay => {
            let mut projected = Array3::<u8>::zeros((nx, ny, nc));
            for plane in stack.axis_iter(Axis(0)) {
                Zip::from(&mut projected).and(&plane).for_each(|p, &v| {
                    if v > 0 {
                        *p = v;
                    }
                });
            }
            projected
        }
        ProjectionMode::Transparency => {
            let mut summed = Array3::<f64>::zeros((nx, ny, nc));
            for plane in stack.axis_iter(Axis(0)) {
                Zip::from(&mut summed).and(&plane).for_each(|p, &v| *p += v as f64);
            }

            let peak = match nc {
                0 => 0.0,
                _ => summed
                    .index_axis(Axis(2), nc - 1)
                    .iter()
                    .copied()
                    .fold(0.0, f64::max),
            };
            if peak == 0.0 {
                return Array3::zeros((nx, ny, nc));
            }

            summed.mapv(|v| (v * 255.0 / peak).min(255.0) as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array4};

    #[test]
    fn test_mode_from_str() {
        assert_eq!("overlay".parse::<ProjectionMode>().unwrap(), ProjectionMode::Overlay);
        assert_eq!(
            "transparency".parse::<ProjectionMode>().unwrap(),
            ProjectionMode::Transparency
        );
        let err = "max".parse::<ProjectionMode>().unwrap_err();
        assert!(matches!(err, ColoringError::UnsupportedProjection(mode) if mode == "max"));
    }

    #[test]
    fn test_overlay_last_nonzero_wins() {
        // Three planes of a 1x2 image with two channels.
        #[rustfmt::skip]
        let stack = Array4::from_shape_vec((3, 1, 2, 2), vec![
            10u8, 255, 0, 0,
            0, 0, 20, 255,
            30, 0, 0, 0,
        ])
        .unwrap();
        let projected = color_zproject(stack.view(), ProjectionMode::Overlay);
        assert_eq!(projected, array![[[30u8, 255], [20, 255]]]);
    }

    #[test]
    fn test_transparency_rescales_to_alpha_peak() {
        #[rustfmt::skip]
        let stack = Array4::from_shape_vec((2, 1, 2, 2), vec![
            100u8, 100, 50, 100,
            100, 100, 0, 0,
        ])
        .unwrap();
        let projected = color_zproject(stack.view(), ProjectionMode::Transparency);
        // Alpha sums are 200 and 100, so everything is scaled by 255 / 200.
        assert_eq!(projected[[0, 0, 1]], 255);
        assert_eq!(projected[[0, 1, 1]], 127);
        assert_eq!(projected[[0, 0, 0]], 255);
        assert_eq!(projected[[0, 1, 0]], 63);
    }

    #[test]
    fn test_transparency_of_empty_stack() {
        let stack = Array4::<u8>::zeros((3, 2, 2, 4));
        let projected = color_zproject(stack.view(), ProjectionMode::Transparency);
        assert_eq!(projected, Array3::<u8>::zeros((2, 2, 4)));
    }
}
