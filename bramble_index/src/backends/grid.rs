// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend for 2D points.
//!
//! This backend buckets points into fixed-size grid cells and answers queries
//! by touching only the cells near the query. It is intended for workloads
//! with:
//! - moderately uniform spatial density (e.g., randomly sampled trees),
//! - insert-only growth, and
//! - nearest-neighbor queries issued from inside the populated region.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::backend::Backend;
use crate::types::{Nearest, dist2};

/// Map a coordinate to a grid coordinate along one axis.
///
/// Rounds towards negative infinity and saturates outside the `i32` range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
)]
#[inline]
pub(crate) fn cell_coord(value: f64, origin: f64, cell_size: f64) -> i32 {
    debug_assert!(cell_size > 0.0, "grid cell_size must be strictly positive");
    let t = (value - origin) / cell_size;
    let coord = t as i32;

    // Round towards -∞ (the cast above has already truncated).
    if t < 0.0 && (coord as f64) > t {
        coord.saturating_sub(1)
    } else {
        coord
    }
}

/// Uniform grid backend with fixed cell size.
pub struct Grid {
    cell_size: f64,
    origin_x: f64,
    origin_y: f64,
    cells: HashMap<(i32, i32), Cell>,
    slots: Vec<Option<SlotEntry>>,
    // Inclusive extent of cells that have ever held a point.
    occupied: Option<CellRange>,
}

#[derive(Clone, Copy, Debug)]
struct SlotEntry {
    x: f64,
    y: f64,
    cell: (i32, i32),
}

#[derive(Default)]
struct Cell {
    slots: SmallVec<[usize; 8]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellRange {
    ix0: i32,
    iy0: i32,
    ix1: i32,
    iy1: i32,
}

impl CellRange {
    fn single(ix: i32, iy: i32) -> Self {
        Self {
            ix0: ix,
            iy0: iy,
            ix1: ix,
            iy1: iy,
        }
    }

    fn grow(&mut self, ix: i32, iy: i32) {
        self.ix0 = self.ix0.min(ix);
        self.iy0 = self.iy0.min(iy);
        self.ix1 = self.ix1.max(ix);
        self.iy1 = self.iy1.max(iy);
    }

    fn contains(&self, ix: i64, iy: i64) -> bool {
        i64::from(self.ix0) <= ix
            && ix <= i64::from(self.ix1)
            && i64::from(self.iy0) <= iy
            && iy <= i64::from(self.iy1)
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total_slots = self.slots.len();
        let live_slots = self.slots.iter().filter(|s| s.is_some()).count();
        let num_cells = self.cells.len();
        f.debug_struct("Grid")
            .field("cell_size", &self.cell_size)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("total_slots", &total_slots)
            .field("live_slots", &live_slots)
            .field("cells", &num_cells)
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// Create a new grid backend with the given cell size and origin at (0, 0).
    pub fn new(cell_size: f64) -> Self {
        Self::with_origin(cell_size, 0.0, 0.0)
    }

    /// Create a new grid backend with the given cell size and origin.
    pub fn with_origin(cell_size: f64, origin_x: f64, origin_y: f64) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be strictly positive");
        Self {
            cell_size,
            origin_x,
            origin_y,
            cells: HashMap::new(),
            slots: Vec::new(),
            occupied: None,
        }
    }

    /// Edge length of a grid cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn cell_of(&self, x: f64, y: f64) -> (i32, i32) {
        (
            cell_coord(x, self.origin_x, self.cell_size),
            cell_coord(y, self.origin_y, self.cell_size),
        )
    }

    fn ensure_slot(&mut self, slot: usize) {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
    }

    fn slot_entry(&self, slot: usize) -> &SlotEntry {
        self.slots
            .get(slot)
            .expect("grid invariant violated: cell references out-of-bounds slot")
            .as_ref()
            .expect("grid invariant violated: cell references vacant slot")
    }

    fn remove_from_cell(&mut self, slot: usize, key: (i32, i32)) {
        let cell = self
            .cells
            .get_mut(&key)
            .expect("grid invariant violated: missing cell while moving slot");
        let pos = cell
            .slots
            .iter()
            .position(|&s| s == slot)
            .expect("grid invariant violated: slot not found in expected cell");
        // Keep insertion order within the bucket so visits are reproducible.
        cell.slots.remove(pos);
        if cell.slots.is_empty() {
            self.cells.remove(&key);
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Callers only pass coordinates inside the occupied i32 cell range."
    )]
    fn visit_cell<F: FnMut(usize, &SlotEntry)>(&self, ix: i64, iy: i64, f: &mut F) {
        if let Some(cell) = self.cells.get(&(ix as i32, iy as i32)) {
            for &slot in &cell.slots {
                f(slot, self.slot_entry(slot));
            }
        }
    }

    /// Visit every occupied cell on the square ring of Chebyshev radius `r`
    /// around `(cx, cy)`, clipped to `range`.
    fn visit_ring<F: FnMut(usize, &SlotEntry)>(
        &self,
        cx: i64,
        cy: i64,
        r: i64,
        range: CellRange,
        f: &mut F,
    ) {
        if r == 0 {
            if range.contains(cx, cy) {
                self.visit_cell(cx, cy, f);
            }
            return;
        }
        let (x0, x1, y0, y1) = (cx - r, cx + r, cy - r, cy + r);

        // Top and bottom rows, corners included.
        let row_start = x0.max(i64::from(range.ix0));
        let row_end = x1.min(i64::from(range.ix1));
        for ix in row_start..=row_end {
            if range.contains(ix, y0) {
                self.visit_cell(ix, y0, f);
            }
            if range.contains(ix, y1) {
                self.visit_cell(ix, y1, f);
            }
        }

        // Left and right columns, corners excluded.
        let col_start = (y0 + 1).max(i64::from(range.iy0));
        let col_end = (y1 - 1).min(i64::from(range.iy1));
        for iy in col_start..=col_end {
            if range.contains(x0, iy) {
                self.visit_cell(x0, iy, f);
            }
            if range.contains(x1, iy) {
                self.visit_cell(x1, iy, f);
            }
        }
    }
}

impl Backend for Grid {
    fn insert(&mut self, slot: usize, x: f64, y: f64) {
        self.ensure_slot(slot);

        // If this slot was previously used, clean up its old cell membership.
        if let Some(old) = self.slots[slot].take() {
            self.remove_from_cell(slot, old.cell);
        }

        let cell = self.cell_of(x, y);
        self.cells.entry(cell).or_default().slots.push(slot);
        match self.occupied.as_mut() {
            Some(range) => range.grow(cell.0, cell.1),
            None => self.occupied = Some(CellRange::single(cell.0, cell.1)),
        }
        self.slots[slot] = Some(SlotEntry { x, y, cell });
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.slots.clear();
        self.occupied = None;
    }

    fn nearest(&self, x: f64, y: f64) -> Option<usize> {
        let range = self.occupied?;
        let (cx, cy) = self.cell_of(x, y);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let (ix0, iy0) = (i64::from(range.ix0), i64::from(range.iy0));
        let (ix1, iy1) = (i64::from(range.ix1), i64::from(range.iy1));

        // Rings closer than the occupied extent are empty; rings past its far
        // side cannot contain anything either.
        let first_ring = 0.max(ix0 - cx).max(cx - ix1).max(iy0 - cy).max(cy - iy1);
        let last_ring = (cx - ix0).max(ix1 - cx).max(cy - iy0).max(iy1 - cy);

        let mut best = Nearest::default();
        let mut r = first_ring;
        while r <= last_ring {
            if let Some(best_d2) = best.best_dist2() {
                let gap = (r - 1).max(0) as f64 * self.cell_size;
                if gap * gap >= best_d2 {
                    break;
                }
            }
            self.visit_ring(cx, cy, r, range, &mut |slot: usize, entry: &SlotEntry| {
                best.offer(dist2(entry.x, entry.y, x, y), slot);
            });
            r += 1;
        }
        best.slot()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::FlatVec;

    #[test]
    fn empty_grid_has_no_nearest() {
        let grid = Grid::new(10.0);
        assert_eq!(grid.nearest(3.0, 4.0), None);
    }

    #[test]
    fn nearest_crosses_cell_boundaries() {
        let mut grid = Grid::new(10.0);
        // Same cell as the query, but farther than a point just across the boundary.
        grid.insert(0, 1.0, 1.0);
        grid.insert(1, 10.5, 9.5);
        assert_eq!(grid.nearest(9.5, 9.5), Some(1));
        assert_eq!(grid.nearest(2.0, 2.0), Some(0));
    }

    #[test]
    fn nearest_from_outside_occupied_extent() {
        let mut grid = Grid::new(5.0);
        grid.insert(0, 100.0, 100.0);
        grid.insert(1, 110.0, 100.0);
        assert_eq!(grid.nearest(-50.0, -50.0), Some(0));
        assert_eq!(grid.nearest(500.0, 100.0), Some(1));
    }

    #[test]
    fn ties_go_to_first_inserted() {
        let mut grid = Grid::new(1.0);
        // Two points equidistant from the origin in different cells.
        grid.insert(0, 3.0, 0.0);
        grid.insert(1, -3.0, 0.0);
        grid.insert(2, 0.0, 3.0);
        assert_eq!(grid.nearest(0.0, 0.0), Some(0));
    }

    #[test]
    fn reinsert_moves_slot() {
        let mut grid = Grid::new(10.0);
        grid.insert(0, 5.0, 5.0);
        grid.insert(1, 8.0, 8.0);
        grid.insert(0, 25.0, 25.0);

        assert_eq!(grid.nearest(0.0, 0.0), Some(1));
        assert_eq!(grid.nearest(30.0, 30.0), Some(0));
        grid.insert(1, 40.0, 40.0);
        assert_eq!(grid.nearest(0.0, 0.0), Some(0));
    }

    #[test]
    fn clear_forgets_extent() {
        let mut grid = Grid::new(4.0);
        grid.insert(0, 400.0, 400.0);
        grid.clear();
        assert_eq!(grid.nearest(400.0, 400.0), None);
        grid.insert(0, -4.0, 0.0);
        assert_eq!(grid.nearest(400.0, 400.0), Some(0));
    }

    #[test]
    fn negative_coordinates() {
        let mut grid = Grid::with_origin(10.0, -100.0, -100.0);
        grid.insert(0, -25.0, -25.0);
        grid.insert(1, -5.0, -5.0);
        assert_eq!(grid.nearest(-20.0, -20.0), Some(0));
        assert_eq!(grid.nearest(0.0, 0.0), Some(1));
    }

    #[test]
    fn matches_linear_scan() {
        // xorshift keeps this test dependency-free and reproducible.
        let mut state = 0x9E37_79B9_7F4A_7C15_u64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let v = (state >> 11) as f64 / (1_u64 << 53) as f64;
            v * 200.0 - 50.0
        };

        let mut grid = Grid::new(7.5);
        let mut flat = FlatVec::default();
        for slot in 0..500 {
            let (x, y) = (next(), next());
            grid.insert(slot, x, y);
            flat.insert(slot, x, y);
        }
        for _ in 0..200 {
            let (x, y) = (next(), next());
            assert_eq!(grid.nearest(x, y), flat.nearest(x, y), "query ({x}, {y})");
        }
    }

    #[test]
    fn cell_coord_rounds_towards_negative_infinity() {
        assert_eq!(cell_coord(-0.5, 0.0, 1.0), -1);
        assert_eq!(cell_coord(-1.0, 0.0, 1.0), -1);
        assert_eq!(cell_coord(0.0, 0.0, 1.0), 0);
        assert_eq!(cell_coord(9.99, 0.0, 10.0), 0);
        assert_eq!(cell_coord(1e20, 0.0, 1.0), i32::MAX);
        assert_eq!(cell_coord(-1e20, 0.0, 1.0), i32::MIN);
    }
}
