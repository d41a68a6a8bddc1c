// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Security-metric scenarios against real encodes.
//!
//! The metrics are pure analysis functions; these tests check them both on
//! constructed images with known statistics and on actual stego output.

use edgeveil_core::{
    analyze, chi_square, encode_bytes, histogram_distance, psnr, ssim, Channel, RasterImage,
};
use image::{Rgba, RgbaImage};

fn patterned_carrier(width: u32, height: u32) -> RasterImage {
    RasterImage::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            ((x * y) % 256) as u8,
            ((x + y) % 256) as u8,
            x.wrapping_sub(y) as u8,
            255,
        ])
    }))
}

fn stego_pair(payload: &[u8]) -> (RasterImage, RasterImage) {
    let cover = patterned_carrier(512, 512);
    let stego_png = encode_bytes(&cover.to_png_bytes().unwrap(), payload).unwrap();
    let stego = RasterImage::from_bytes(&stego_png).unwrap();
    (cover, stego)
}

#[test]
fn chi_square_balanced_lsbs_is_zero() {
    // Red LSB alternates each pixel: exactly 50/50.
    let img = RasterImage::from_rgba(RgbaImage::from_fn(64, 64, |x, y| {
        Rgba([((x + y) % 2) as u8 * 255, 100, 100, 255])
    }));
    assert_eq!(chi_square(&img), 0.0);
}

#[test]
fn chi_square_barely_moves_under_embedding() {
    let (cover, stego) = stego_pair(b"a modest payload for statistics");
    let before = chi_square(&cover);
    let after = chi_square(&stego);

    // At most 8·(8+31) LSBs changed out of 262,144: the statistic may
    // move, but only marginally relative to the cover's own value.
    let shift = (after - before).abs();
    assert!(
        shift < before.max(1.0) * 0.05,
        "chi-square moved too much: {before} -> {after}"
    );
}

#[test]
fn histogram_distance_identical_is_zero() {
    let img = patterned_carrier(128, 128);
    assert!(histogram_distance(&img, &img).abs() < 1e-12);
}

#[test]
fn histogram_distance_of_stego_is_zero() {
    // The reference-channel histogram is untouched by embedding.
    let (cover, stego) = stego_pair(b"histogram check");
    assert!(histogram_distance(&cover, &stego).abs() < 1e-12);
}

#[test]
fn psnr_identical_is_infinite() {
    let img = patterned_carrier(64, 64);
    assert_eq!(psnr(&img, &img), f64::INFINITY);
}

#[test]
fn psnr_unit_perturbation_matches_formula() {
    // Every red value off by ±1: MSE = 1/3, PSNR = 10·log10(3·255²) ≈ 52.9 dB.
    let cover = patterned_carrier(64, 64);
    let mut stego = cover.clone();
    let plane: Vec<u8> = stego
        .channel_plane(Channel::Red)
        .iter()
        .map(|&v| if v == 255 { 254 } else { v + 1 })
        .collect();
    stego.write_channel_plane(Channel::Red, &plane);

    let expected = 10.0 * (3.0 * 255.0 * 255.0f64).log10();
    assert!((psnr(&cover, &stego) - expected).abs() < 1e-9);
}

#[test]
fn psnr_of_real_encode_is_high() {
    let (cover, stego) = stego_pair(b"This is a test message for the advanced steganography algorithm!");
    let db = psnr(&cover, &stego);
    // At most 576 pixels changed by ±1 across 262,144 pixels.
    assert!(db > 70.0, "psnr {db} dB unexpectedly low");
}

#[test]
fn ssim_of_real_encode_is_near_one() {
    let (cover, stego) = stego_pair(b"ssim check");
    let s = ssim(&cover, &stego);
    // Embedding never touches the reference channel.
    assert!((s - 1.0).abs() < 1e-12, "ssim {s}");
}

#[test]
fn analyze_aggregates_all_metrics() {
    let (cover, stego) = stego_pair(b"full report");
    let report = analyze(&cover, &stego);

    assert!(report.psnr > 70.0);
    assert!((report.ssim - 1.0).abs() < 1e-12);
    assert!(report.histogram_distance.abs() < 1e-12);
    assert!(report.chi_square >= 0.0);
}

#[test]
fn report_flags_lsb_replacement() {
    // Overwriting LSBs with a constant (crude replacement) produces a
    // worse chi-square than matching on the same carrier.
    let cover = patterned_carrier(256, 256);

    let mut replaced = cover.clone();
    let plane: Vec<u8> = replaced
        .channel_plane(Channel::Red)
        .iter()
        .map(|&v| v & 0xFE)
        .collect();
    replaced.write_channel_plane(Channel::Red, &plane);

    let stego_png = encode_bytes(&cover.to_png_bytes().unwrap(), b"same payload").unwrap();
    let matched = RasterImage::from_bytes(&stego_png).unwrap();

    assert!(chi_square(&replaced) > chi_square(&matched));
}
