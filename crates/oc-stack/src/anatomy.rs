//! Anatomy normalization and blending under colored ROIs

use ndarray::{Array3, Array4, ArrayView3};
use num_traits::{AsPrimitive, PrimInt};
use oc_core::{ColoringError, Result};
use tracing::{debug, trace};

use crate::options::DEFAULT_HIST_PERCENTILES;
use crate::RoiColorTable;

/// Value at percentile `q` (0-100) with linear interpolation between the
/// closest ranks. Reorders `values`, which should not contain NaN.
pub fn percentile(values: &mut [f64], q: f64) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let idx = q.clamp(0.0, 100.0) * (n - 1) as f64 / 100.0;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    let (_, &mut low, above) = values.select_nth_unstable_by(lower, f64::total_cmp);
    if lower == upper || above.is_empty() {
        return Some(low);
    }

    let high = above.iter().copied().fold(f64::INFINITY, f64::min);
    let fraction = idx - lower as f64;
    Some(low * (1.0 - fraction) + high * fraction)
}

/// Rescale `anatomy` to 8 bits by clipping to the given percentiles
pub fn normalize_to_255<A: AsPrimitive<f64>>(
    anatomy: ArrayView3<'_, A>,
    hist_percentiles: (f64, f64),
) -> Array3<u8> {
    let mut scratch: Vec<f64> = anatomy
        .iter()
        .map(|&v| v.as_())
        .filter(|v| !v.is_nan())
        .collect();
    let (Some(low), Some(high)) = (
        percentile(&mut scratch, hist_percentiles.0),
        percentile(&mut scratch, hist_percentiles.1),
    ) else {
        return Array3::zeros(anatomy.raw_dim());
    };
    drop(scratch);
    debug!(low, high, "anatomy histogram bounds");

    let span = high - low;
    anatomy.mapv(|v| {
        let v: f64 = v.as_();
        if span > 0.0 {
            ((v - low) / span * 255.0).clamp(0.0, 255.0) as u8
        } else if v > low {
            255
        } else {
            0
        }
    })
}

/// Bring anatomy into 8 bits, rescaling only when asked or needed, and
/// optionally invert it.
///
/// Explicit `hist_percentiles` always rescale. Without them, anatomy that
/// already fits in [0, 255] is truncated as is and anything else is rescaled
/// with the default (5, 99) percentiles.
pub fn anatomy_to_u8<A: AsPrimitive<f64>>(
    anatomy: ArrayView3<'_, A>,
    hist_percentiles: Option<(f64, f64)>,
    invert: bool,
) -> Array3<u8> {
    let out_of_range = || {
        anatomy.iter().any(|&v| {
            let v: f64 = v.as_();
            !(0.0..=255.0).contains(&v)
        })
    };

    let mut scaled = match hist_percentiles {
        Some(percentiles) => normalize_to_255(anatomy, percentiles),
        None if out_of_range() => {
            trace!("anatomy outside 8-bit range, rescaling");
            normalize_to_255(anatomy, DEFAULT_HIST_PERCENTILES)
        }
        None => anatomy.mapv(|v| {
            let v: f64 = v.as_();
            v as u8
        }),
    };

    if invert {
        scaled.mapv_inplace(|v| 255 - v);
    }
    scaled
}

/// Blend ROI colors over 8-bit anatomy.
///
/// ROI voxels become `anatomy * (1 - alpha) + color * alpha` (the anatomy
/// term is truncated to 8 bits first); every other voxel, excluded ROIs
/// included, keeps the anatomy grey. The alpha channel is opaque.
pub fn blend_anatomy<L: PrimInt>(
    labels: ArrayView3<'_, L>,
    table: &RoiColorTable,
    anatomy: ArrayView3<'_, u8>,
    alpha: f64,
) -> Result<Array4<u8>> {
    check_shapes(labels.shape(), anatomy.shape())?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ColoringError::InvalidAlpha(alpha));
    }

    let (nx, ny, nz) = labels.dim();
    let mut buffer = Vec::with_capacity(labels.len() * 4);

    for (&label, &grey) in labels.iter().zip(anatomy.iter()) {
        match table.lookup(label)? {
            Some(color) => {
                let base = (grey as f64 * (1.0 - alpha)) as u8 as f64;
                let [r, g, b] = color.rgb().map(|c| (base + c as f64 * alpha) as u8);
                buffer.extend_from_slice(&[r, g, b, 255]);
            }
            None => buffer.extend_from_slice(&[grey, grey, grey, 255]),
        }
    }

    Ok(Array4::from_shape_vec((nx, ny, nz, 4), buffer)?)
}

pub(crate) fn check_shapes(labels: &[usize], anatomy: &[usize]) -> Result<()> {
    if labels != anatomy {
        return Err(ColoringError::ShapeMismatch {
            labels: labels.to_vec(),
            anatomy: anatomy.to_vec(),
        });
    }
    Ok(())
}
