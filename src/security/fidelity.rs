// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Pixel-fidelity metrics: PSNR and windowed SSIM.
//!
//! Both take a cover/stego pair of identical dimensions. Differences are
//! computed in f64 before squaring; the channel values are unsigned, and
//! subtracting them directly would wrap.

use crate::raster::{Channel, RasterImage};
use crate::stego::REFERENCE_CHANNEL;

/// SSIM window edge length. Windows are non-overlapping; trailing pixels
/// that do not fill a complete window are excluded.
const SSIM_WINDOW: usize = 8;

/// SSIM stabilization constants for 8-bit dynamic range.
const SSIM_C1: f64 = (0.01 * 255.0) * (0.01 * 255.0);
const SSIM_C2: f64 = (0.03 * 255.0) * (0.03 * 255.0);

/// Peak signal-to-noise ratio between two images, in dB.
///
/// MSE is averaged over the R, G and B channels (alpha excluded).
/// Identical images score `+∞`; empty images score 0.
///
/// # Panics
/// Panics if the images differ in dimensions.
pub fn psnr(a: &RasterImage, b: &RasterImage) -> f64 {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "image dimensions mismatch"
    );

    let count = 3 * a.pixel_count();
    if count == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for channel in [Channel::Red, Channel::Green, Channel::Blue] {
        let pa = a.channel_plane(channel);
        let pb = b.channel_plane(channel);
        for (&va, &vb) in pa.iter().zip(&pb) {
            let diff = va as f64 - vb as f64;
            sum += diff * diff;
        }
    }

    let mse = sum / count as f64;
    if mse == 0.0 {
        return f64::INFINITY;
    }
    10.0 * ((255.0 * 255.0) / mse).log10()
}

/// Mean structural similarity over non-overlapping 8×8 windows of the
/// reference channel.
///
/// Per window: `((2·μ₁μ₂ + c₁)(2·σ₁₂ + c₂)) / ((μ₁² + μ₂² + c₁)(σ₁² + σ₂² + c₂))`
/// with `c₁ = (0.01·255)²`, `c₂ = (0.03·255)²`. The result is the average
/// over all complete windows. Images smaller than one window score 1.0.
///
/// LSB-level perturbations barely move this metric; it is a coarse sanity
/// check, not a steganalysis tool.
///
/// # Panics
/// Panics if the images differ in dimensions.
pub fn ssim(a: &RasterImage, b: &RasterImage) -> f64 {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "image dimensions mismatch"
    );

    let width = a.width() as usize;
    let height = a.height() as usize;
    let windows_x = width / SSIM_WINDOW;
    let windows_y = height / SSIM_WINDOW;
    if windows_x == 0 || windows_y == 0 {
        return 1.0;
    }

    let pa = a.channel_plane(REFERENCE_CHANNEL);
    let pb = b.channel_plane(REFERENCE_CHANNEL);

    let mut total = 0.0;
    for wy in 0..windows_y {
        for wx in 0..windows_x {
            total += window_ssim(&pa, &pb, width, wx * SSIM_WINDOW, wy * SSIM_WINDOW);
        }
    }
    total / (windows_x * windows_y) as f64
}

/// SSIM of one complete window with its top-left corner at (x0, y0).
fn window_ssim(pa: &[u8], pb: &[u8], width: usize, x0: usize, y0: usize) -> f64 {
    let n = (SSIM_WINDOW * SSIM_WINDOW) as f64;

    let mut sum_a = 0.0;
    let mut sum_b = 0.0;
    let mut sum_aa = 0.0;
    let mut sum_bb = 0.0;
    let mut sum_ab = 0.0;
    for dy in 0..SSIM_WINDOW {
        for dx in 0..SSIM_WINDOW {
            let idx = (y0 + dy) * width + x0 + dx;
            let va = pa[idx] as f64;
            let vb = pb[idx] as f64;
            sum_a += va;
            sum_b += vb;
            sum_aa += va * va;
            sum_bb += vb * vb;
            sum_ab += va * vb;
        }
    }

    let mu_a = sum_a / n;
    let mu_b = sum_b / n;
    let var_a = sum_aa / n - mu_a * mu_a;
    let var_b = sum_bb / n - mu_b * mu_b;
    let cov = sum_ab / n - mu_a * mu_b;

    let numerator = (2.0 * mu_a * mu_b + SSIM_C1) * (2.0 * cov + SSIM_C2);
    let denominator = (mu_a * mu_a + mu_b * mu_b + SSIM_C1) * (var_a + var_b + SSIM_C2);
    numerator / denominator
}
