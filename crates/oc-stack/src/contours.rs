//! Outlines of projected ROI masks

use contour::ContourBuilder;
use ndarray::{s, Array2, ArrayView2, ArrayView3, Axis, ErrorKind, ShapeError};
use num_traits::{AsPrimitive, Bounded};
use oc_core::{ColoringError, Result};
use tracing::debug;

pub const DEFAULT_SMOOTH_WND: usize = 7;
pub const DEFAULT_CONTOUR_LEVEL: f64 = 0.5;
pub const DEFAULT_SIZE_THRESHOLD: usize = 40;

/// A closed outline as `(row, col)` points
pub type ContourPoints = Vec<(f64, f64)>;

/// Maximum of `volume` along `axis`
pub fn max_projection<A>(volume: ArrayView3<'_, A>, axis: usize) -> Result<Array2<A>>
where
    A: Copy + PartialOrd + Bounded,
{
    if axis >= volume.ndim() {
        return Err(ShapeError::from_kind(ErrorKind::OutOfBounds).into());
    }
    Ok(volume.map_axis(Axis(axis), |lane| {
        lane.iter()
            .copied()
            .fold(A::min_value(), |acc, v| if v > acc { v } else { acc })
    }))
}

/// Centered rolling mean of width `wnd` around a closed contour.
///
/// The window wraps, so the first points are averaged with the last ones.
pub fn smooth_contour(points: &[(f64, f64)], wnd: usize) -> ContourPoints {
    let n = points.len();
    if n == 0 || wnd <= 1 {
        return points.to_vec();
    }

    let half = (wnd / 2) as isize;
    (0..n as isize)
        .map(|i| {
            let (sum_r, sum_c) = (0..wnd as isize)
                .map(|k| points[(i + k - half).rem_euclid(n as isize) as usize])
                .fold((0.0, 0.0), |(r, c), (pr, pc)| (r + pr, c + pc));
            (sum_r / wnd as f64, sum_c / wnd as f64)
        })
        .collect()
}

/// Iso-contours of `image` at level `thr`, smoothed.
///
/// The image is padded with zeros so regions touching the border still
/// close. Contours with `size_threshold` points or fewer are dropped.
/// Points are `(row, col)` pixel-center coordinates of `image`.
pub fn projection_contours<A: AsPrimitive<f64>>(
    image: ArrayView2<'_, A>,
    smooth_wnd: usize,
    thr: f64,
    size_threshold: usize,
) -> Result<Vec<ContourPoints>> {
    let (nrows, ncols) = image.dim();
    let mut padded = Array2::<f64>::zeros((nrows + 2, ncols + 2));
    padded
        .slice_mut(s![1..nrows + 1, 1..ncols + 1])
        .zip_mut_with(&image, |p, &v| *p = v.as_());

    let builder = ContourBuilder::new((ncols + 2) as _, (nrows + 2) as _, true);
    let lines = builder
        .lines(&padded.into_raw_vec(), &[thr])
        .map_err(|e| ColoringError::Contour(e.to_string()))?;

    // Traced points sit half a pixel off the value centers, plus the padding.
    let offset = 1.5;
    let contours: Vec<ContourPoints> = lines
        .iter()
        .flat_map(|line| line.geometry().0.iter())
        .filter(|ring| ring.0.len() > size_threshold)
        .map(|ring| {
            let points: ContourPoints = ring.0.iter().map(|c| (c.y, c.x)).collect();
            smooth_contour(&points, smooth_wnd)
                .into_iter()
                .map(|(r, c)| (r - offset, c - offset))
                .collect()
        })
        .collect();

    debug!(thr, kept = contours.len(), "projection contours");
    Ok(contours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    fn bounds(points: &[(f64, f64)]) -> (f64, f64, f64, f64) {
        points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(r0, r1, c0, c1), &(r, c)| (r0.min(r), r1.max(r), c0.min(c), c1.max(c)),
        )
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_smooth_wraps_around() {
        let square = [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)];
        let smoothed = smooth_contour(&square, 3);
        assert_eq!(smoothed.len(), 4);
        // First point averages the last, itself and the second.
        assert_close(smoothed[0].0, 2.0 / 3.0);
        assert_close(smoothed[0].1, 2.0 / 3.0);
        // Last point averages the third, itself and the first.
        assert_close(smoothed[3].0, 4.0 / 3.0);
        assert_close(smoothed[3].1, 2.0 / 3.0);
    }

    #[test]
    fn test_smooth_narrow_window_is_identity() {
        let points = [(1.0, 2.0), (3.0, 4.0)];
        assert_eq!(smooth_contour(&points, 1), points.to_vec());
        assert_eq!(smooth_contour(&points, 0), points.to_vec());
        assert!(smooth_contour(&[], 7).is_empty());
    }

    #[test]
    fn test_border_region_closes_in_padding() {
        let mut image = Array2::<u8>::zeros((5, 5));
        image.slice_mut(s![0..3, 0..3]).fill(1);

        let contours = projection_contours(image.view(), 1, 0.5, 0).unwrap();
        assert_eq!(contours.len(), 1);

        let (r0, r1, c0, c1) = bounds(&contours[0]);
        assert_close(r0, -0.5);
        assert_close(r1, 2.5);
        assert_close(c0, -0.5);
        assert_close(c1, 2.5);
    }

    #[test]
    fn test_small_contours_are_dropped() {
        let mut image = Array2::<f64>::zeros((12, 12));
        image.slice_mut(s![1..3, 1..3]).fill(1.0);
        image.slice_mut(s![5..10, 5..10]).fill(1.0);

        let all = projection_contours(image.view(), 1, 0.5, 0).unwrap();
        assert_eq!(all.len(), 2);

        let large = projection_contours(image.view(), 1, 0.5, 12).unwrap();
        assert_eq!(large.len(), 1);
        let (r0, r1, c0, c1) = bounds(&large[0]);
        assert_close(r0, 4.5);
        assert_close(r1, 9.5);
        assert_close(c0, 4.5);
        assert_close(c1, 9.5);

        assert!(projection_contours(image.view(), 1, 0.5, 1000).unwrap().is_empty());
    }

    #[test]
    fn test_smoothing_stays_inside_the_outline() {
        let mut image = Array2::<f64>::zeros((10, 10));
        image.slice_mut(s![2..8, 2..8]).fill(1.0);

        let contours = projection_contours(image.view(), DEFAULT_SMOOTH_WND, 0.5, 0).unwrap();
        assert_eq!(contours.len(), 1);
        let (r0, r1, c0, c1) = bounds(&contours[0]);
        assert!(r0 >= 1.5 && r1 <= 7.5);
        assert!(c0 >= 1.5 && c1 <= 7.5);
    }

    #[test]
    fn test_empty_image_has_no_contours() {
        let image = Array2::<f64>::zeros((4, 4));
        assert!(projection_contours(image.view(), 7, 0.5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_max_projection() {
        let volume = Array3::from_shape_fn((2, 2, 3), |(z, x, y)| (z * 6 + x * 3 + y) as i32);
        assert_eq!(max_projection(volume.view(), 0).unwrap(), array![[6, 7, 8], [9, 10, 11]]);
        assert_eq!(max_projection(volume.view(), 2).unwrap(), array![[2, 5], [8, 11]]);
        assert!(matches!(max_projection(volume.view(), 3), Err(ColoringError::Shape(_))));
    }
}
