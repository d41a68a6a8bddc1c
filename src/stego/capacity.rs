// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Carrier capacity checks.
//!
//! The payload channel carries one bit per pixel, so a W×H carrier holds
//! exactly W·H frame bits. The capacity check runs before any pixel is
//! touched; a violation aborts the encode with no partial output.

use crate::stego::error::StegoError;
use crate::stego::frame::HEADER_SIZE;

/// Number of embeddable bits in a W×H carrier.
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Largest payload (in bytes) that fits in a W×H carrier once the length
/// header is accounted for. Zero for carriers too small for the header.
pub fn max_payload_len(width: u32, height: u32) -> usize {
    (capacity_bits(width, height) / 8).saturating_sub(HEADER_SIZE)
}

/// Check that a frame of `frame_len` bytes fits the carrier.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] when `8·frame_len > W·H`.
pub fn ensure_fits(frame_len: usize, width: u32, height: u32) -> Result<(), StegoError> {
    let needed_bits = frame_len.saturating_mul(8);
    let available_bits = capacity_bits(width, height);
    if needed_bits > available_bits {
        return Err(StegoError::CapacityExceeded {
            needed_bits,
            available_bits,
        });
    }
    Ok(())
}
