//! Color primitives for publication figures
//!
//! This crate provides the colors, palettes and colormaps shared by the
//! stack coloring routines, plus a few small figure helpers.

pub mod background;
pub mod color;
pub mod colormap;
pub mod defaults;
pub mod isoluminant;
pub mod labels;

use ndarray::ShapeError;
use thiserror::Error;

// Re-exports
pub use background::Background;
pub use color::{dark_col, shift_lum, Rgba};
pub use colormap::{Colormap, ListedColormap, Normalize};
pub use isoluminant::isoluminant_colors;
pub use labels::pval_stars;

/// Errors that can occur while coloring ROIs or stacks
#[derive(Error, Debug)]
pub enum ColoringError {
    #[error("ROI label {label} has no entry in a variable of length {len}")]
    LabelOutOfRange { label: usize, len: usize },

    #[error("Unknown background: {0:?} (expected \"w\", \"k\" or \"transparent\")")]
    UnknownBackground(String),

    #[error("Unknown colormap: {0:?}")]
    UnknownColormap(String),

    #[error("Category {0} has no color in the provided scheme")]
    MissingCategory(i64),

    #[error("Invalid color limits ({vmin}, {vmax}): expected finite vmin <= vmax")]
    InvalidLimits { vmin: f64, vmax: f64 },

    #[error("Alpha must be within [0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("Invalid histogram percentiles ({0}, {1})")]
    InvalidPercentiles(f64, f64),

    #[error("Shape mismatch: labels {labels:?}, anatomy {anatomy:?}")]
    ShapeMismatch { labels: Vec<usize>, anatomy: Vec<usize> },

    #[error("Unsupported projection mode {0:?} (expected \"overlay\" or \"transparency\")")]
    UnsupportedProjection(String),

    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    #[error("Contour tracing failed: {0}")]
    Contour(String),

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),
}

pub type Result<T> = std::result::Result<T, ColoringError>;
