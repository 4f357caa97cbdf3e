// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

/// Spatial backend abstraction used by [`IndexGeneric`][crate::IndexGeneric].
///
/// Slots are dense, caller-assigned integers. Backends only store positions;
/// payloads live in the index.
pub trait Backend {
    /// Insert a point into the spatial structure under `slot`.
    ///
    /// Re-inserting an existing slot moves it.
    fn insert(&mut self, slot: usize, x: f64, y: f64);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Return the slot of the point closest to `(x, y)` under Euclidean distance.
    ///
    /// Ties are resolved in favor of the lowest slot. Returns `None` when empty.
    fn nearest(&self, x: f64, y: f64) -> Option<usize>;
}
