// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! # edgeveil-core
//!
//! Edge-adaptive image steganography engine. Hides an arbitrary byte
//! payload in a color raster and extracts it bit-exact, without any key or
//! side channel:
//!
//! - A **Sobel cost map** over the green channel ranks pixels: edges are
//!   cheap, smooth regions expensive.
//! - The lowest-cost pixels are selected first, in a deterministic order
//!   both encoder and decoder derive independently.
//! - Payload bits go into the red channel's LSBs via **LSB matching**
//!   (±1 perturbation on a fair coin), which preserves the first-order
//!   statistics that LSB replacement distorts.
//!
//! Since the green channel is never modified, the decoder recomputes the
//! identical cost ordering from the stego image alone. Output is always
//! lossless PNG; JPEG carriers are upgraded on encode.
//!
//! The `security` module provides the chi-square, histogram-distance,
//! PSNR and SSIM measurements used to validate the embedding.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use edgeveil_core::{encode_bytes, decode_bytes};
//!
//! let carrier = std::fs::read("photo.png").unwrap();
//! let stego = encode_bytes(&carrier, b"meet at dawn").unwrap();
//! let recovered = decode_bytes(&stego).unwrap();
//! assert_eq!(recovered, b"meet at dawn");
//! ```

pub mod det_math;
pub mod raster;
pub mod security;
pub mod stego;

pub use raster::{Channel, RasterImage};
pub use security::{analyze, chi_square, histogram_distance, psnr, ssim, SecurityReport};
pub use stego::{
    decode, decode_bytes, encode, encode_bytes, encode_bytes_with_rng, encode_with_rng,
    max_payload_len, CostMap, PositionOrder, StegoError, PAYLOAD_CHANNEL, REFERENCE_CHANNEL,
};
