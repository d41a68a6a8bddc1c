// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! First-order histogram statistics.
//!
//! Chi-square flags the pair-count bias that LSB *replacement* leaves
//! behind; matching should keep it near the cover's value. The
//! Bhattacharyya distance measures how far the reference-channel intensity
//! distribution drifted between two images.

use crate::raster::RasterImage;
use crate::stego::{PAYLOAD_CHANNEL, REFERENCE_CHANNEL};

/// Chi-square statistic of the payload channel's LSB distribution.
///
/// Two bins (LSB 0 / LSB 1), expected `n/2` each under the uniform
/// hypothesis; returns `Σ (obs − exp)² / exp`. A perfectly balanced LSB
/// plane scores 0. Empty images score 0.
pub fn chi_square(img: &RasterImage) -> f64 {
    let plane = img.channel_plane(PAYLOAD_CHANNEL);
    if plane.is_empty() {
        return 0.0;
    }

    let mut bins = [0u64; 2];
    for value in &plane {
        bins[(value & 1) as usize] += 1;
    }

    let expected = plane.len() as f64 / 2.0;
    bins.iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Bhattacharyya distance between the reference-channel intensity
/// histograms of two images.
///
/// Both 256-bin histograms are normalized to probability distributions
/// first; the result is `−ln Σ √(p·q)`, or `+∞` when the distributions do
/// not overlap at all. Identical images score 0 (up to rounding). Empty
/// images score 0.
pub fn histogram_distance(a: &RasterImage, b: &RasterImage) -> f64 {
    let hist_a = intensity_histogram(a);
    let hist_b = intensity_histogram(b);

    let n_a = a.pixel_count() as f64;
    let n_b = b.pixel_count() as f64;
    if n_a == 0.0 || n_b == 0.0 {
        return 0.0;
    }

    let mut coefficient = 0.0;
    for i in 0..256 {
        let p = hist_a[i] as f64 / n_a;
        let q = hist_b[i] as f64 / n_b;
        coefficient += (p * q).sqrt();
    }

    if coefficient == 0.0 {
        return f64::INFINITY;
    }
    -coefficient.ln()
}

/// 256-bin intensity histogram of the reference channel.
fn intensity_histogram(img: &RasterImage) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for value in img.channel_plane(REFERENCE_CHANNEL) {
        hist[value as usize] += 1;
    }
    hist
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn raster_from(f: impl Fn(u32, u32) -> Rgba<u8>, w: u32, h: u32) -> RasterImage {
        RasterImage::from_rgba(RgbaImage::from_fn(w, h, |x, y| f(x, y)))
    }

    #[test]
    fn balanced_lsbs_score_zero() {
        // Red alternates even/odd: exactly 50/50 LSBs.
        let img = raster_from(|x, y| Rgba([((x + y) % 2) as u8, 0, 0, 255]), 16, 16);
        assert_eq!(chi_square(&img), 0.0);
    }

    #[test]
    fn constant_lsbs_score_pixel_count() {
        // All LSBs are 0: bins are (n, 0), chi-square = n/2 + n/2 = n.
        let img = raster_from(|_, _| Rgba([42, 0, 0, 255]), 10, 10);
        assert_eq!(chi_square(&img), 100.0);
    }

    #[test]
    fn chi_square_ignores_other_channels() {
        let balanced_red = |x: u32, y: u32| Rgba([((x + y) % 2) as u8, 255, 7, 255]);
        let img = raster_from(balanced_red, 8, 8);
        assert_eq!(chi_square(&img), 0.0);
    }

    #[test]
    fn identical_images_have_zero_distance() {
        let img = raster_from(|x, y| Rgba([0, ((x * y) % 256) as u8, 0, 255]), 32, 32);
        let d = histogram_distance(&img, &img);
        assert!(d.abs() < 1e-12, "distance {d} should be ~0");
    }

    #[test]
    fn disjoint_histograms_are_infinitely_far() {
        let dark = raster_from(|_, _| Rgba([0, 10, 0, 255]), 8, 8);
        let bright = raster_from(|_, _| Rgba([0, 200, 0, 255]), 8, 8);
        assert_eq!(histogram_distance(&dark, &bright), f64::INFINITY);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = raster_from(|x, _| Rgba([0, (x % 256) as u8, 0, 255]), 64, 4);
        let b = raster_from(|x, _| Rgba([0, ((x / 2) % 256) as u8, 0, 255]), 64, 4);
        let ab = histogram_distance(&a, &b);
        let ba = histogram_distance(&b, &a);
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.0);
    }

    #[test]
    fn distance_uses_reference_channel_only() {
        // Same green planes, wildly different red planes: distance ~0.
        let a = raster_from(|x, y| Rgba([0, ((x + y) % 256) as u8, 0, 255]), 16, 16);
        let b = raster_from(|x, y| Rgba([255, ((x + y) % 256) as u8, 0, 255]), 16, 16);
        assert!(histogram_distance(&a, &b).abs() < 1e-12);
    }
}
