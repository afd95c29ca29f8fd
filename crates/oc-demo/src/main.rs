//! Demo: color a synthetic ROI volume in every supported mode

mod sample;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array4, Axis};
use oc_core::{defaults, pval_stars, Colormap};
use oc_stack::contours::{DEFAULT_CONTOUR_LEVEL, DEFAULT_SMOOTH_WND};
use oc_stack::{
    color_stack, color_stack_over_anatomy, color_zproject, max_projection, projection_contours,
    ColorStackOptions, ProjectionMode, RoiVariable,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sample::SampleVolume;

fn load_options(path: Option<&Path>) -> Result<ColorStackOptions> {
    let Some(path) = path else {
        return Ok(ColorStackOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options from {}", path.display()))?;
    let options: ColorStackOptions = serde_json::from_str(&text)
        .with_context(|| format!("Invalid options in {}", path.display()))?;
    options.validate()?;
    Ok(options)
}

/// Number of distinct RGBA values in a colored volume
fn distinct_colors(volume: &Array4<u8>) -> usize {
    volume
        .lanes(Axis(3))
        .into_iter()
        .map(|px| px.to_vec())
        .collect::<HashSet<_>>()
        .len()
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options_path = std::env::args().nth(1);
    let options = load_options(options_path.as_deref().map(Path::new))?;
    info!(?options, "Starting stack coloring demo");

    let sample = SampleVolume::spheres(4, 4);
    info!(shape = ?sample.labels.shape(), rois = sample.roi_count(), "Generated sample volume");

    let categorical = color_stack(
        sample.labels.view(),
        &RoiVariable::categorical(&sample.categories),
        &options,
    )?;
    info!(colors = distinct_colors(&categorical), "Categorical coloring done");

    let phase: Colormap = "phase".parse()?;
    let continuous = color_stack(
        sample.labels.view(),
        &RoiVariable::Continuous {
            values: &sample.values,
            colormap: Some(&phase),
        },
        &options,
    )?;
    info!(colors = distinct_colors(&continuous), "Continuous coloring done");

    let blended = color_stack_over_anatomy(
        sample.labels.view(),
        &RoiVariable::categorical(&sample.categories),
        sample.anatomy.view(),
        &options,
    )?;
    info!(colors = distinct_colors(&blended), "Anatomy blending done");

    for mode in [ProjectionMode::Overlay, ProjectionMode::Transparency] {
        let projected = color_zproject(continuous.view(), mode);
        let filled = projected
            .lanes(Axis(2))
            .into_iter()
            .filter(|px| px.iter().any(|&v| v > 0))
            .count();
        info!(%mode, shape = ?projected.shape(), filled, "Projected continuous stack");
    }

    let mask = sample.labels.mapv(|label| u8::from(label >= 0));
    let outline = max_projection(mask.view(), 0)?;
    let contours =
        projection_contours(outline.view(), DEFAULT_SMOOTH_WND, DEFAULT_CONTOUR_LEVEL, 20)?;
    let points: usize = contours.iter().map(Vec::len).sum();
    info!(contours = contours.len(), points, "Outlined projected mask");

    info!(
        qualitative = defaults::QUALITATIVE.len(),
        isoluminant = defaults::ISOLUMINANT.len(),
        example_label = pval_stars(0.003),
        "Default palettes available"
    );

    Ok(())
}
