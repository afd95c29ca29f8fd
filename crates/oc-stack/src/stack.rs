//! False coloring of labeled ROI stacks

use ndarray::{Array4, ArrayView3};
use num_traits::{AsPrimitive, PrimInt};
use oc_core::Result;
use tracing::debug;

use crate::anatomy::{anatomy_to_u8, blend_anatomy, check_shapes};
use crate::{fill_roi_stack, ColorStackOptions, RoiColorTable, RoiVariable};

/// Color a stack of ROIs by a per-ROI variable.
///
/// `labels` holds an ROI index per voxel, negative for empty voxels. The
/// variable needs an entry for every label present. ROIs with a negative
/// category or a NaN value are drawn as background. Returns an `(X, Y, Z, 4)`
/// RGBA volume.
pub fn color_stack<L: PrimInt>(
    labels: ArrayView3<'_, L>,
    variable: &RoiVariable<'_>,
    options: &ColorStackOptions,
) -> Result<Array4<u8>> {
    options.validate()?;
    let table = RoiColorTable::build(variable, options)?;

    debug!(shape = ?labels.shape(), background = %options.background, "filling ROI stack");
    fill_roi_stack(labels, &table, options.background.color())
}

/// Color a stack of ROIs over an anatomical reference.
///
/// ROI colors are blended over the (normalized, optionally inverted)
/// anatomy with `options.alpha`; voxels without an ROI show the anatomy. The
/// result is an opaque `(X, Y, Z, 4)` volume. `options.background` is not
/// used.
pub fn color_stack_over_anatomy<L, A>(
    labels: ArrayView3<'_, L>,
    variable: &RoiVariable<'_>,
    anatomy: ArrayView3<'_, A>,
    options: &ColorStackOptions,
) -> Result<Array4<u8>>
where
    L: PrimInt,
    A: AsPrimitive<f64>,
{
    options.validate()?;
    check_shapes(labels.shape(), anatomy.shape())?;
    let table = RoiColorTable::build(variable, options)?;

    let anatomy = anatomy_to_u8(anatomy, options.hist_percentiles, options.invert_anatomy);
    debug!(shape = ?labels.shape(), alpha = options.alpha, "blending ROI stack over anatomy");
    blend_anatomy(labels, &table, anatomy.view(), options.alpha)
}
