//! Synthetic labeled volume for the demo

use ndarray::Array3;

/// A labeled volume with matching anatomy and per-ROI variables
pub struct SampleVolume {
    pub labels: Array3<i32>,
    pub anatomy: Array3<u16>,
    /// Category per ROI; every fifth ROI is excluded with -1
    pub categories: Vec<i64>,
    /// Scalar per ROI; every seventh ROI is excluded with NaN
    pub values: Vec<f64>,
}

impl SampleVolume {
    /// Spherical ROIs of radius `radius` on a regular grid of `grid` cells
    /// per axis. Anatomy is a smooth ramp brighter inside the ROIs.
    pub fn spheres(grid: usize, radius: usize) -> Self {
        let cell = 2 * radius + 2;
        let size = grid * cell;
        let r2 = (radius * radius) as isize;

        let labels = Array3::from_shape_fn((size, size, size), |(x, y, z)| {
            let offset = |v: usize| (v % cell) as isize - (cell / 2) as isize;
            let (dx, dy, dz) = (offset(x), offset(y), offset(z));
            if dx * dx + dy * dy + dz * dz <= r2 {
                ((x / cell) * grid * grid + (y / cell) * grid + z / cell) as i32
            } else {
                -1
            }
        });

        let anatomy = Array3::from_shape_fn((size, size, size), |(x, y, z)| {
            let ramp = (x + y + z) as u16 * 10;
            if labels[[x, y, z]] >= 0 {
                ramp + 1500
            } else {
                ramp
            }
        });

        let n_rois = grid * grid * grid;
        let categories = (0..n_rois)
            .map(|i| if i % 5 == 4 { -1 } else { (i % 3) as i64 })
            .collect();
        let values = (0..n_rois)
            .map(|i| if i % 7 == 6 { f64::NAN } else { i as f64 / n_rois as f64 })
            .collect();

        Self {
            labels,
            anatomy,
            categories,
            values,
        }
    }

    pub fn roi_count(&self) -> usize {
        self.categories.len()
    }
}
