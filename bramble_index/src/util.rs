// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Target number of points per grid cell once the index is at capacity.
const POINTS_PER_CELL: usize = 4;

/// Returns the square root of the number, rounded up.
#[inline]
pub(crate) const fn isqrt_ceil(num: usize) -> usize {
    let s = num.isqrt();

    // This multiplication cannot overflow because `s` is the rounded-down square root of `num`,
    // i.e., `s * s` is guaranteed to be less than or equal to `num`.
    if s * s < num { s + 1 } else { s }
}

/// Pick a grid cell edge for `expected_points` spread over a `width` x `height` region.
///
/// The result aims for a handful of points per cell when the index is full,
/// which keeps nearest-neighbor queries to a few rings of cells.
#[allow(
    clippy::cast_precision_loss,
    reason = "Cell counts per axis are small; precision loss is irrelevant."
)]
pub fn suggested_cell_size(width: f64, height: f64, expected_points: usize) -> f64 {
    let cells = expected_points.div_ceil(POINTS_PER_CELL).max(1);
    let per_axis = isqrt_ceil(cells).max(1);
    let extent = width.max(height);
    if extent > 0.0 {
        extent / per_axis as f64
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn isqrt_ceil() {
        assert_eq!(super::isqrt_ceil(255), 16);
        assert_eq!(super::isqrt_ceil(256), 16);
        assert_eq!(super::isqrt_ceil(257), 17);
    }

    #[test]
    fn suggested_cell_size_scales_with_capacity() {
        // 3000 points at 4 per cell is 750 cells, so 28 cells along the long axis.
        let cell = super::suggested_cell_size(800.0, 600.0, 3000);
        assert!((cell - 800.0 / 28.0).abs() < 1e-9, "cell = {cell}");

        assert_eq!(super::suggested_cell_size(10.0, 10.0, 0), 10.0);
        assert_eq!(super::suggested_cell_size(0.0, 0.0, 100), 1.0);
    }
}
