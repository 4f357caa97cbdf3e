// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;

/// Stable handle for an indexed point.
///
/// Keys are dense and assigned in insertion order, so comparing two keys
/// tells which point was inserted first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u32);

impl Key {
    /// Largest number of points an index can hold.
    pub const LIMIT: usize = u32::MAX as usize;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Slots are bounded by `Key::LIMIT` at insertion."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Position of this key in insertion order.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<P> {
    x: f64,
    y: f64,
    payload: P,
}

/// An insert-only point index parameterized by a spatial backend.
#[derive(Debug)]
pub struct IndexGeneric<P: Copy + Debug, B: Backend> {
    entries: Vec<Entry<P>>,
    backend: B,
}

impl<P, B> IndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<P, B> IndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend,
{
    /// Create an empty index using an explicit backend instance.
    ///
    /// This is useful when higher layers want to choose a backend type or
    /// configure it (for example a grid cell size) before wiring it into the
    /// index.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            backend,
        }
    }

    /// Reserve space for at least `n` additional points.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Insert a point with payload. Returns a stable handle `Key`.
    ///
    /// The point is immediately visible to queries.
    ///
    /// # Panics
    ///
    /// Panics if the index already holds [`Key::LIMIT`] points.
    pub fn insert(&mut self, x: f64, y: f64, payload: P) -> Key {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "indexed coordinates must be finite"
        );
        let idx = self.entries.len();
        assert!(idx < Key::LIMIT, "index is full: {idx} points");
        self.entries.push(Entry { x, y, payload });
        self.backend.insert(idx, x, y);
        Key::new(idx)
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every point. Previously issued keys become invalid.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.backend.clear();
    }

    /// Position and payload of a live key.
    pub fn get(&self, key: Key) -> Option<(f64, f64, P)> {
        self.entries
            .get(key.idx())
            .map(|e| (e.x, e.y, e.payload))
    }

    /// Whether `key` refers to an indexed point.
    pub fn contains(&self, key: Key) -> bool {
        key.idx() < self.entries.len()
    }

    /// The point closest to `(x, y)` and its payload.
    ///
    /// Among equally distant points the earliest inserted one is returned.
    /// Returns `None` when the index is empty.
    pub fn nearest(&self, x: f64, y: f64) -> Option<(Key, P)> {
        let slot = self.backend.nearest(x, y)?;
        let e = self
            .entries
            .get(slot)
            .expect("index invariant violated: backend returned unknown slot");
        Some((Key::new(slot), e.payload))
    }

    /// Iterate over `(key, x, y, payload)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, f64, f64, P)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (Key::new(i), e.x, e.y, e.payload))
    }

    /// Borrow the backend, e.g. to inspect its configuration.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Default index using a flat vector backend.
pub type Index<P> = IndexGeneric<P, crate::backends::flatvec::FlatVec>;

impl<P: Copy + Debug> Default for Index<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "backend_grid")]
impl<P: Copy + Debug> Index<P> {
    /// Create a grid-backed index sized for `expected_points` over `region`.
    ///
    /// The grid origin is placed at the region's minimum corner.
    pub fn with_grid_for(
        region: crate::types::Aabb2D,
        expected_points: usize,
    ) -> IndexGeneric<P, crate::backends::grid::Grid> {
        let cell = crate::util::suggested_cell_size(region.width(), region.height(), expected_points);
        IndexGeneric::with_backend(crate::backends::grid::Grid::with_origin(
            cell,
            region.min_x,
            region.min_y,
        ))
    }
}
