// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! LSB-matching (±1) embedding.
//!
//! LSB replacement skews the (2k, 2k+1) pair counts that chi-square and RS
//! steganalysis measure. Matching instead leaves a pixel alone when its LSB
//! already carries the bit and otherwise moves it ±1 on a fair coin, so the
//! first-order histogram stays nearly intact.
//!
//! The random source is an injected [`RngCore`], not a global: production
//! callers pass the thread-local CSPRNG, tests pin a seeded ChaCha20 to
//! reproduce exact perturbation patterns.

use rand::RngCore;

use crate::stego::order::PositionOrder;

/// Embed one bit into a payload-channel value by ±1 perturbation.
///
/// Rules:
/// - LSB already equal to `bit`: the value is returned unchanged.
/// - Otherwise a fair coin picks +1 or −1, clamped at the endpoints
///   (`0` can only become `1`, `255` only `254`).
/// - If the generator cannot produce bytes, the perturbation degrades to
///   a deterministic `+1` (with the same clamping) so the embed still
///   completes.
///
/// Post-condition: the result's LSB equals `bit` and the result differs
/// from `pixel` by at most 1.
pub fn embed_bit<R: RngCore>(pixel: u8, bit: u8, rng: &mut R) -> u8 {
    debug_assert!(bit <= 1, "bit must be 0 or 1");
    if pixel & 1 == bit {
        return pixel;
    }

    let mut coin = [0u8; 1];
    if rng.try_fill_bytes(&mut coin).is_err() {
        return if pixel == 255 { 254 } else { pixel + 1 };
    }

    if coin[0] & 1 == 1 {
        if pixel == 255 {
            254
        } else {
            pixel + 1
        }
    } else if pixel == 0 {
        1
    } else {
        pixel - 1
    }
}

/// Read the bit carried by a payload-channel value.
pub fn extract_bit(pixel: u8) -> u8 {
    pixel & 1
}

/// Write a bit stream into the lowest-cost positions of a payload plane.
///
/// Bit k goes to `order.get(k)`. The caller has already checked capacity,
/// so the stream never outruns the order.
pub fn embed_plane<R, I>(plane: &mut [u8], order: &PositionOrder, bits: I, rng: &mut R)
where
    R: RngCore,
    I: IntoIterator<Item = u8>,
{
    for (k, bit) in bits.into_iter().enumerate() {
        let pos = order.get(k);
        plane[pos] = embed_bit(plane[pos], bit, rng);
    }
}
