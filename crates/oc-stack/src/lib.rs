//! False coloring of labeled ROI volumes
//!
//! Turns a 3D stack of ROI labels plus one value per ROI into an RGBA
//! volume, optionally blended over an anatomical reference, projects
//! colored stacks down to 2D and outlines projected masks.

pub mod anatomy;
pub mod contours;
mod fill;
pub mod options;
pub mod projection;
mod roi_colors;
mod stack;

// Re-exports
pub use contours::{max_projection, projection_contours, smooth_contour};
pub use fill::fill_roi_stack;
pub use options::ColorStackOptions;
pub use projection::{color_zproject, ProjectionMode};
pub use roi_colors::{
    categorical_roi_colors, continuous_roi_colors, CategoryColors, RoiColorTable, RoiVariable,
};
pub use stack::{color_stack, color_stack_over_anatomy};

pub use oc_core::{ColoringError, Result};
