// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! 8-bit RGBA raster view over decoded carrier images.
//!
//! Decoding and encoding of the container formats is delegated to the
//! `image` crate; this module only exposes what the steganography layer
//! needs: per-channel pixel access, row-major channel planes, and lossless
//! PNG serialization. Whatever the carrier format (PNG or JPEG), the
//! in-memory representation is always 8-bit RGBA so that ±1 channel
//! perturbations survive round-trips exactly.

use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

/// A color channel of an RGBA raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Byte offset of this channel within an RGBA pixel.
    pub fn offset(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }
}

/// In-memory 8-bit-per-channel RGBA image, indexed (x, y) with the origin
/// at the top left.
///
/// Created by decoding a carrier stream, queried during cost computation,
/// mutated only on the payload channel during embedding, and re-serialized
/// as PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Decode a PNG or JPEG byte buffer into an RGBA raster.
    ///
    /// The container format is sniffed from the magic bytes. Non-RGBA
    /// sources (grayscale, paletted, RGB) are expanded to RGBA.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        Ok(Self::from_dynamic(image::load_from_memory(bytes)?))
    }

    /// Wrap an already-decoded image, expanding to RGBA if needed.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        Self { pixels: img.to_rgba8() }
    }

    /// Wrap an RGBA pixel buffer directly.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Total number of pixels (W·H).
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Read one channel of the pixel at (x, y).
    pub fn channel(&self, channel: Channel, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y).0[channel.offset()]
    }

    /// Overwrite one channel of the pixel at (x, y); the other three
    /// channels keep their values.
    pub fn set_channel(&mut self, channel: Channel, x: u32, y: u32, value: u8) {
        self.pixels.get_pixel_mut(x, y).0[channel.offset()] = value;
    }

    /// Extract one channel as a flat row-major plane (index `y·W + x`).
    pub fn channel_plane(&self, channel: Channel) -> Vec<u8> {
        let off = channel.offset();
        self.pixels.pixels().map(|p| p.0[off]).collect()
    }

    /// Write a flat row-major plane back into one channel.
    ///
    /// # Panics
    /// Panics if `plane.len()` differs from the pixel count.
    pub fn write_channel_plane(&mut self, channel: Channel, plane: &[u8]) {
        assert_eq!(plane.len(), self.pixel_count(), "plane length mismatch");
        let off = channel.offset();
        for (pixel, &value) in self.pixels.pixels_mut().zip(plane) {
            pixel.0[off] = value;
        }
    }

    /// Serialize as lossless 8-bit RGBA PNG.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), ImageError> {
        PngEncoder::new(writer).write_image(
            self.pixels.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )
    }

    /// Serialize as PNG into a fresh byte buffer.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, ImageError> {
        let mut out = Vec::new();
        self.write_png(&mut out)?;
        Ok(out)
    }

    /// Borrow the underlying RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}
