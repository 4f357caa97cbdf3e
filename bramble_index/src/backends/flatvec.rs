// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;

use crate::backend::Backend;
use crate::types::{Nearest, dist2};

/// Flat vector backend with linear scans.
#[derive(Default)]
pub struct FlatVec {
    points: Vec<Option<(f64, f64)>>,
}

impl core::fmt::Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.points.len();
        let alive = self.points.iter().filter(|p| p.is_some()).count();
        f.debug_struct("FlatVec")
            .field("total_slots", &total)
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, x: f64, y: f64) {
        if self.points.len() <= slot {
            self.points.resize_with(slot + 1, || None);
        }
        self.points[slot] = Some((x, y));
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn nearest(&self, x: f64, y: f64) -> Option<usize> {
        let mut best = Nearest::default();
        for (i, p) in self.points.iter().enumerate() {
            if let Some((px, py)) = *p {
                best.offer(dist2(px, py, x, y), i);
            }
        }
        best.slot()
    }
}
