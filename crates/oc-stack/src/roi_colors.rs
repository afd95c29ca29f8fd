//! Per-ROI colors for categorical and continuous variables

use std::collections::{BTreeMap, BTreeSet};

use num_traits::PrimInt;
use oc_core::{isoluminant_colors, Colormap, ColoringError, Normalize, Result, Rgba};
use tracing::debug;

use crate::ColorStackOptions;

/// Explicit category code to RGB mapping
pub type CategoryColors = BTreeMap<i64, [u8; 3]>;

/// The per-ROI variable driving the coloring, one entry per ROI index
#[derive(Debug, Clone, Copy)]
pub enum RoiVariable<'a> {
    /// Integer category codes. Negative codes exclude the ROI.
    Categorical {
        codes: &'a [i64],
        scheme: Option<&'a CategoryColors>,
    },

    /// Scalar values. NaN excludes the ROI.
    Continuous {
        values: &'a [f64],
        colormap: Option<&'a Colormap>,
    },
}

impl<'a> RoiVariable<'a> {
    /// Categories colored with the generated isoluminant palette
    pub fn categorical(codes: &'a [i64]) -> Self {
        RoiVariable::Categorical { codes, scheme: None }
    }

    /// Values colored with viridis
    pub fn continuous(values: &'a [f64]) -> Self {
        RoiVariable::Continuous {
            values,
            colormap: None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RoiVariable::Categorical { codes, .. } => codes.len(),
            RoiVariable::Continuous { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether ROI `index` is left out of the coloring
    pub fn is_excluded(&self, index: usize) -> bool {
        match self {
            RoiVariable::Categorical { codes, .. } => codes.get(index).is_some_and(|&c| c < 0),
            RoiVariable::Continuous { values, .. } => values.get(index).is_some_and(|v| v.is_nan()),
        }
    }
}

/// Color every ROI by its category.
///
/// Without a scheme, the sorted non-negative codes get isoluminant colors in
/// hue order. Negative codes are opaque black.
pub fn categorical_roi_colors(
    codes: &[i64],
    scheme: Option<&CategoryColors>,
    lum: f64,
    sat: f64,
    hshift: f64,
) -> Result<Vec<Rgba>> {
    let generated;
    let scheme = match scheme {
        Some(scheme) => scheme,
        None => {
            let unique: BTreeSet<i64> = codes.iter().copied().filter(|&c| c >= 0).collect();
            let colors = isoluminant_colors(unique.len(), lum, sat, hshift);
            generated = unique.into_iter().zip(colors).collect::<CategoryColors>();
            &generated
        }
    };

    codes
        .iter()
        .map(|&code| {
            if code < 0 {
                return Ok(Rgba::BLACK);
            }
            scheme
                .get(&code)
                .map(|&rgb| Rgba::from(rgb))
                .ok_or(ColoringError::MissingCategory(code))
        })
        .collect()
}

/// Color every ROI by mapping its value through `colormap`.
///
/// `vlims` defaults to the range of the finite values. The colormap's alpha
/// is kept; NaN values come out transparent.
pub fn continuous_roi_colors(
    values: &[f64],
    colormap: &Colormap,
    vlims: Option<(f64, f64)>,
) -> Result<Vec<Rgba>> {
    let norm = match vlims {
        Some((vmin, vmax)) => Normalize::new(vmin, vmax)?,
        None => Normalize::from_values(values).unwrap_or(Normalize { vmin: 0.0, vmax: 1.0 }),
    };
    debug!(vmin = norm.vmin, vmax = norm.vmax, colormap = colormap.name(), "continuous limits");

    Ok(values.iter().map(|&v| colormap.map(v, &norm)).collect())
}

/// Lookup from ROI index to color, with excluded ROIs already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct RoiColorTable {
    colors: Vec<Option<Rgba>>,
}

impl RoiColorTable {
    /// Build the table for `variable`. Excluded ROIs map to `None`, so they
    /// fill exactly like unlabeled voxels.
    pub fn build(variable: &RoiVariable<'_>, options: &ColorStackOptions) -> Result<Self> {
        let colors = match variable {
            RoiVariable::Categorical { codes, scheme } => {
                debug!(rois = codes.len(), "categorical coloring");
                categorical_roi_colors(codes, *scheme, options.lum, options.sat, options.hshift)?
            }
            RoiVariable::Continuous { values, colormap } => {
                debug!(rois = values.len(), "continuous coloring");
                let default_map;
                let colormap = match colormap {
                    Some(colormap) => *colormap,
                    None => {
                        default_map = Colormap::default();
                        &default_map
                    }
                };
                continuous_roi_colors(values, colormap, options.vlims)?
            }
        };

        let colors: Vec<Option<Rgba>> = colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| (!variable.is_excluded(index)).then_some(color))
            .collect();

        let table = Self { colors };
        if table.excluded_count() > 0 {
            debug!(excluded = table.excluded_count(), "excluding ROIs");
        }
        Ok(table)
    }

    /// Table from explicit colors, `None` marking excluded ROIs
    pub fn from_colors(colors: Vec<Option<Rgba>>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn excluded_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_none()).count()
    }

    /// Color of a voxel label. `None` for negative labels and excluded ROIs;
    /// an error for labels past the end of the table.
    #[inline]
    pub fn lookup<L: PrimInt>(&self, label: L) -> Result<Option<Rgba>> {
        let Some(index) = label.to_usize() else {
            return Ok(None);
        };
        match self.colors.get(index) {
            Some(color) => Ok(*color),
            None => Err(ColoringError::LabelOutOfRange {
                label: index,
                len: self.colors.len(),
            }),
        }
    }
}
