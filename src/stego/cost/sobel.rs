// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Sobel-gradient embedding costs.
//!
//! High-gradient (edge) regions mask ±1 perturbations both perceptually and
//! statistically, so they get low cost; smooth regions get high cost and
//! are avoided. The gradient is computed on the reference channel only.
//!
//! Determinism contract: no randomness, fixed accumulation order
//! (kernel columns left to right, rows top to bottom), and an
//! intrinsic-only magnitude via [`det_hypot`]. Encoder and decoder must
//! produce bit-identical cost planes from the same reference channel.

use crate::det_math::det_hypot;
use crate::raster::{Channel, RasterImage};

use super::{CostMap, EPSILON};

const SOBEL_X: [[f64; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

const SOBEL_Y: [[f64; 3]; 3] = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

/// Compute per-pixel embedding costs from the Sobel gradient magnitude of
/// one channel.
///
/// For every interior pixel, `cost = 1 / (‖∇‖ + EPSILON)`. Border pixels
/// (first/last row and column), which the 3×3 kernel cannot cover, keep the
/// infinite [`BORDER_COST`](super::BORDER_COST) sentinel so they are never
/// selected before any interior pixel.
pub fn compute_sobel(img: &RasterImage, channel: Channel) -> CostMap {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut map = CostMap::new(width, height);

    if width < 3 || height < 3 {
        // No interior pixels; everything stays at the border sentinel.
        return map;
    }

    let plane = img.channel_plane(channel);

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = 0.0;
            let mut gy = 0.0;
            for i in 0..3 {
                for j in 0..3 {
                    let sx = x + i - 1;
                    let sy = y + j - 1;
                    let pixel = plane[sy * width + sx] as f64;
                    gx += pixel * SOBEL_X[i][j];
                    gy += pixel * SOBEL_Y[i][j];
                }
            }
            let magnitude = det_hypot(gx, gy);
            map.set(x, y, 1.0 / (magnitude + EPSILON));
        }
    }

    map
}
