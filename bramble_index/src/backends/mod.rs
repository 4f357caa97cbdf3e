// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans. Exact and tiny; the reference
//!   every other backend is checked against.
//! - `grid` (feature `backend_grid`): uniform hash grid with configurable cell
//!   size and ring-expanding nearest-neighbor search.
//!
//! Nearest-neighbor search on the grid
//! -----------------------------------
//! The query point falls in cell `c`. Cells are visited in square rings of
//! increasing Chebyshev radius `r` around `c`. Any point in ring `r` is at
//! least `(r - 1) * cell_size` away from the query, so the search stops as
//! soon as that bound reaches the best squared distance seen so far. Rings are
//! clipped to the extent of occupied cells, which bounds the work for queries
//! far outside the indexed set.

pub(crate) mod flatvec;
#[cfg(feature = "backend_grid")]
pub(crate) mod grid;

pub use flatvec::FlatVec;
#[cfg(feature = "backend_grid")]
pub use grid::Grid;
