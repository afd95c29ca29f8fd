//! Voxel fill from a per-ROI color table

use ndarray::{Array4, ArrayView3};
use num_traits::PrimInt;
use oc_core::{Result, Rgba};

use crate::RoiColorTable;

/// Color every voxel of `labels` with its ROI color.
///
/// Negative labels and excluded ROIs get `background`. The output has shape
/// `(X, Y, Z, 4)`, is written in a single pass and never aliases the input.
pub fn fill_roi_stack<L: PrimInt>(
    labels: ArrayView3<'_, L>,
    table: &RoiColorTable,
    background: Rgba,
) -> Result<Array4<u8>> {
    let (nx, ny, nz) = labels.dim();
    let mut buffer = Vec::with_capacity(labels.len() * 4);

    for &label in labels.iter() {
        let color = table.lookup(label)?.unwrap_or(background);
        buffer.extend_from_slice(&color.0);
    }

    Ok(Array4::from_shape_vec((nx, ny, nz, 4), buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    fn red() -> Rgba {
        Rgba::from_rgb(255, 0, 0)
    }

    #[test]
    fn test_fill_uses_table_and_background() {
        let labels = array![[[0i32, -1], [1, 0]]];
        let table =
            RoiColorTable::from_colors(vec![Some(red()), Some(Rgba::from_rgba(0, 0, 255, 128))]);

        let out = fill_roi_stack(labels.view(), &table, Rgba::WHITE).unwrap();
        assert_eq!(out.dim(), (1, 2, 2, 4));
        assert_eq!(out.slice(ndarray::s![0, 0, 0, ..]).to_vec(), red().0.to_vec());
        assert_eq!(out.slice(ndarray::s![0, 0, 1, ..]).to_vec(), vec![255; 4]);
        assert_eq!(out.slice(ndarray::s![0, 1, 0, ..]).to_vec(), vec![0, 0, 255, 128]);
        assert_eq!(out.slice(ndarray::s![0, 1, 1, ..]).to_vec(), red().0.to_vec());
    }

    #[test]
    fn test_excluded_rois_fill_as_background() {
        let labels = Array3::from_elem((2, 2, 2), 1i64);
        let table = RoiColorTable::from_colors(vec![Some(red()), None]);

        let out = fill_roi_stack(labels.view(), &table, Rgba::BLACK).unwrap();
        let pixels = out.as_slice().unwrap();
        assert!(pixels.chunks(4).all(|px| px == Rgba::BLACK.0));
    }

    #[test]
    fn test_fill_respects_non_standard_layout() {
        let labels = array![[[0i32, 1]], [[1, 1]]];
        let transposed = labels.view().reversed_axes();
        let table = RoiColorTable::from_colors(vec![Some(red()), Some(Rgba::BLACK)]);

        let out = fill_roi_stack(transposed, &table, Rgba::TRANSPARENT).unwrap();
        assert_eq!(out.dim(), (2, 1, 2, 4));
        assert_eq!(out[[0, 0, 0, 0]], 255);
        assert_eq!(out[[1, 0, 0, 0]], 0);
        assert_eq!(out[[1, 0, 0, 3]], 255);
    }

    #[test]
    fn test_label_out_of_range() {
        let labels = array![[[0u8, 2]]];
        let table = RoiColorTable::from_colors(vec![Some(red()), Some(red())]);
        assert!(fill_roi_stack(labels.view(), &table, Rgba::TRANSPARENT).is_err());
    }
}
