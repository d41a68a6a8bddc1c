// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Deterministic pixel ordering by ascending embedding cost.
//!
//! Encoder and decoder must derive the identical order from the unmodified
//! reference channel; this is the only synchronization mechanism between
//! them. Ties are frequent: every border pixel shares the infinite
//! sentinel, and flat regions share equal finite costs. The sort key is
//! the composite `(cost, raster index)`: equal costs break by ascending
//! row-major index. A plain float sort would leave tie order unspecified
//! and desynchronize the two sides.

use crate::stego::cost::CostMap;

/// Permutation of all pixel indices `[0, W·H)` by ascending cost.
pub struct PositionOrder {
    positions: Vec<usize>,
}

impl PositionOrder {
    /// Build the selection order for a cost map.
    ///
    /// Total order: by cost (via `f64::total_cmp`, which handles the
    /// infinite border sentinel), then by raster index.
    pub fn from_cost_map(map: &CostMap) -> Self {
        let costs = map.as_slice();
        let mut positions: Vec<usize> = (0..costs.len()).collect();
        positions.sort_unstable_by(|&a, &b| {
            costs[a].total_cmp(&costs[b]).then_with(|| a.cmp(&b))
        });
        Self { positions }
    }

    /// Number of positions (W·H).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The raster index selected k-th (0 = cheapest).
    pub fn get(&self, k: usize) -> usize {
        self.positions[k]
    }

    /// All raster indices in selection order.
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }
}
