//! Options for stack coloring

use oc_core::{Background, ColoringError, Normalize, Result};
use serde::{Deserialize, Serialize};

/// Percentiles used to rescale anatomy that is not already 8-bit
pub const DEFAULT_HIST_PERCENTILES: (f64, f64) = (5.0, 99.0);

/// Styling options for [`crate::color_stack`] and
/// [`crate::color_stack_over_anatomy`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorStackOptions {
    /// Fill for voxels without an ROI. Ignored when blending over anatomy.
    pub background: Background,

    /// Colormap limits for continuous variables. Defaults to the range of
    /// the non-excluded values.
    pub vlims: Option<(f64, f64)>,

    /// Lightness of the generated category colors (0-100)
    pub lum: f64,

    /// Chroma of the generated category colors
    pub sat: f64,

    /// Hue of the first generated category color, in degrees
    pub hshift: f64,

    /// Weight of the ROI color over the anatomy (0-1)
    pub alpha: f64,

    /// Show anatomy dark on light
    pub invert_anatomy: bool,

    /// Low and high percentiles for rescaling anatomy to 0-255. When unset,
    /// anatomy is only rescaled if it leaves that range.
    pub hist_percentiles: Option<(f64, f64)>,
}

impl Default for ColorStackOptions {
    fn default() -> Self {
        Self {
            background: Background::Transparent,
            vlims: None,
            lum: 60.0,
            sat: 60.0,
            hshift: 0.0,
            alpha: 0.9,
            invert_anatomy: true,
            hist_percentiles: None,
        }
    }
}

impl ColorStackOptions {
    /// Check ranges that would otherwise produce garbage colors
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ColoringError::InvalidAlpha(self.alpha));
        }

        if let Some((vmin, vmax)) = self.vlims {
            Normalize::new(vmin, vmax)?;
        }

        if let Some((low, high)) = self.hist_percentiles {
            let in_range = |p: f64| (0.0..=100.0).contains(&p);
            if !(in_range(low) && in_range(high) && low < high) {
                return Err(ColoringError::InvalidPercentiles(low, high));
            }
        }

        Ok(())
    }

    pub fn with_background(mut self, background: impl Into<Background>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_vlims(mut self, vmin: f64, vmax: f64) -> Self {
        self.vlims = Some((vmin, vmax));
        self
    }

    pub fn with_hist_percentiles(mut self, low: f64, high: f64) -> Self {
        self.hist_percentiles = Some((low, high));
        self
    }
}
