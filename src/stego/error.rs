// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier decoding through
//! frame extraction. Every error is fatal to the current call: there is no
//! retry and no partial output.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier image could not be parsed as PNG or JPEG.
    CarrierDecode(image::ImageError),
    /// Reading the payload stream failed.
    PayloadRead(std::io::Error),
    /// The framed payload needs more bits than the carrier provides.
    CapacityExceeded {
        needed_bits: usize,
        available_bits: usize,
    },
    /// The extracted length header is zero or exceeds the carrier capacity.
    CorruptHeader { declared_len: u64 },
    /// Reading the carrier stream or writing the output failed.
    Io(std::io::Error),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CarrierDecode(e) => write!(f, "cannot decode carrier image: {e}"),
            Self::PayloadRead(e) => write!(f, "cannot read payload: {e}"),
            Self::CapacityExceeded {
                needed_bits,
                available_bits,
            } => write!(
                f,
                "payload too large for the carrier image: {needed_bits} bits needed, {available_bits} available"
            ),
            Self::CorruptHeader { declared_len } => {
                write!(f, "invalid or corrupt message length: {declared_len}")
            }
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CarrierDecode(e) => Some(e),
            Self::PayloadRead(e) | Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for StegoError {
    fn from(e: image::ImageError) -> Self {
        Self::CarrierDecode(e)
    }
}

impl StegoError {
    /// Map a PNG-serialization failure onto the I/O variant.
    ///
    /// Encoding a valid in-memory RGBA raster only fails when the
    /// underlying writer does.
    pub(crate) fn from_png_write(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Self::Io(io),
            other => Self::Io(std::io::Error::new(std::io::ErrorKind::Other, other)),
        }
    }
}
