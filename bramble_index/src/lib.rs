// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Index: an incremental 2D point index with nearest-neighbor queries.
//!
//! Bramble Index is the spatial building block behind sampling-based planners.
//!
//! - Insert points with user payloads; each insert returns a stable [`Key`].
//! - Query the nearest point under Euclidean distance.
//! - Nearest-neighbor ties are deterministic: the earliest inserted point wins.
//!
//! It works on plain `f64` coordinates and does not depend on any geometry crate.
//! Higher layers (like a planning tree) convert their own point types at the boundary.
//!
//! Backends are pluggable via a simple trait so you can swap the spatial strategy without API churn.
//! The default backend is a flat vector (linear scan), which doubles as the reference
//! implementation. The uniform grid backend (feature `backend_grid`) is the one to use
//! once the point set grows past a few hundred entries.
//!
//! ## Features
//!
//! - `backend_grid` *(default)*: enables a uniform grid backend backed by `hashbrown` and
//!   `smallvec`. Disable this feature to avoid those dependencies and grid types.
//!
//! # Example
//!
//! ```rust
//! use bramble_index::Index;
//!
//! let mut idx: Index<u32> = Index::new();
//! let a = idx.insert(0.0, 0.0, 1);
//! let _b = idx.insert(10.0, 0.0, 2);
//!
//! let (key, payload) = idx.nearest(3.0, 1.0).unwrap();
//! assert_eq!(key, a);
//! assert_eq!(payload, 1);
//! ```
//!
//! With the `backend_grid` feature enabled (default), size a grid for the region you expect
//! to fill:
//!
//! ```rust
//! # #[cfg(feature = "backend_grid")]
//! # {
//! use bramble_index::{Aabb2D, Index};
//!
//! let region = Aabb2D::new(0.0, 0.0, 800.0, 600.0);
//! let mut idx = Index::<u32>::with_grid_for(region, 3000);
//! let _k = idx.insert(400.0, 300.0, 7);
//!
//! assert_eq!(idx.nearest(0.0, 0.0).map(|(_, p)| p), Some(7));
//! # }
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest and smallest, linear scans. Good for very small sets
//!   and as an oracle in tests.
//! - `Grid` *(feature `backend_grid`)*: uniform grid with configurable cell size. A good fit
//!   when points are spread roughly uniformly over a bounded region, which is exactly what
//!   uniform random sampling produces. See the [`backends`] docs for the search strategy.
//!
//! ### Float semantics
//!
//! This crate assumes finite coordinates. Debug builds assert on insert.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod index;
mod types;
pub(crate) mod util;

pub use backend::Backend;
pub use index::{Index, IndexGeneric, Key};
pub use types::Aabb2D;
pub use util::suggested_cell_size;
