// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Encode/decode pipelines.
//!
//! Encode: decode the carrier to RGBA, frame the payload behind a length
//! header, check capacity, compute Sobel costs on the reference channel,
//! and write the frame bits into the payload channel's LSBs at the
//! lowest-cost positions. The stego image is always emitted as lossless
//! PNG; a JPEG carrier is upgraded on output, because recompression would
//! destroy the embedded bits.
//!
//! Decode: recompute the identical cost map and position order from the
//! (untouched) reference channel, read the 64 header bits, validate the
//! declared length against capacity, then read the body bits.

use std::io::{Read, Write};

use rand::RngCore;

use crate::raster::RasterImage;
use crate::stego::capacity;
use crate::stego::cost::compute_sobel;
use crate::stego::error::StegoError;
use crate::stego::frame::{self, FrameBits, HEADER_SIZE};
use crate::stego::matcher;
use crate::stego::order::PositionOrder;
use crate::stego::{PAYLOAD_CHANNEL, REFERENCE_CHANNEL};

/// Length header width in bits.
const HEADER_BITS: usize = HEADER_SIZE * 8;

/// Hide a payload inside a carrier image.
///
/// Reads the carrier (PNG or JPEG) and the payload to the end, embeds, and
/// writes the stego image to `out` as PNG. Perturbations are drawn from the
/// thread-local CSPRNG.
///
/// An empty payload encodes, but the decoder rejects a zero length header
/// as corrupt, so there is no way to extract it again.
///
/// # Errors
/// - [`StegoError::Io`] if the carrier stream or the output writer fails.
/// - [`StegoError::PayloadRead`] if the payload stream fails.
/// - [`StegoError::CarrierDecode`] if the carrier is not a decodable image.
/// - [`StegoError::CapacityExceeded`] if `8·(8+L) > W·H`.
pub fn encode<C, P, W>(carrier: C, payload: P, out: W) -> Result<(), StegoError>
where
    C: Read,
    P: Read,
    W: Write,
{
    encode_with_rng(carrier, payload, out, &mut rand::thread_rng())
}

/// [`encode`] with a caller-supplied random source.
///
/// The generator decides only the ±1 perturbation directions; pinning a
/// seeded generator makes the whole stego image reproducible.
pub fn encode_with_rng<C, P, W, R>(
    mut carrier: C,
    mut payload: P,
    out: W,
    rng: &mut R,
) -> Result<(), StegoError>
where
    C: Read,
    P: Read,
    W: Write,
    R: RngCore,
{
    let mut carrier_bytes = Vec::new();
    carrier
        .read_to_end(&mut carrier_bytes)
        .map_err(StegoError::Io)?;

    let mut data = Vec::new();
    payload
        .read_to_end(&mut data)
        .map_err(StegoError::PayloadRead)?;

    let raster = RasterImage::from_bytes(&carrier_bytes)?;
    let stego = embed_into_raster(raster, &data, rng)?;
    stego.write_png(out).map_err(StegoError::from_png_write)
}

/// Byte-slice variant of [`encode`]: returns the stego PNG as bytes.
pub fn encode_bytes(carrier: &[u8], payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    encode_bytes_with_rng(carrier, payload, &mut rand::thread_rng())
}

/// [`encode_bytes`] with a caller-supplied random source.
pub fn encode_bytes_with_rng<R: RngCore>(
    carrier: &[u8],
    payload: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>, StegoError> {
    let raster = RasterImage::from_bytes(carrier)?;
    let stego = embed_into_raster(raster, payload, rng)?;
    stego.to_png_bytes().map_err(StegoError::from_png_write)
}

/// Extract a hidden payload from a stego image.
///
/// Reads the stego stream to the end and writes the recovered payload
/// bytes to `out` in order.
///
/// # Errors
/// - [`StegoError::Io`] if the stego stream or the output writer fails.
/// - [`StegoError::CarrierDecode`] if the input is not a decodable image.
/// - [`StegoError::CorruptHeader`] if the declared length is zero or does
///   not fit the carrier.
pub fn decode<S, W>(mut stego: S, mut out: W) -> Result<(), StegoError>
where
    S: Read,
    W: Write,
{
    let mut stego_bytes = Vec::new();
    stego
        .read_to_end(&mut stego_bytes)
        .map_err(StegoError::Io)?;
    let data = decode_bytes(&stego_bytes)?;
    out.write_all(&data).map_err(StegoError::Io)
}

/// Byte-slice variant of [`decode`]: returns the recovered payload.
pub fn decode_bytes(stego: &[u8]) -> Result<Vec<u8>, StegoError> {
    let raster = RasterImage::from_bytes(stego)?;
    extract_from_raster(&raster)
}

/// Embed a payload into an already-decoded raster.
///
/// Shared by the stream and byte-slice entry points. Only the payload
/// channel is modified; every other channel passes through bit-exact.
fn embed_into_raster<R: RngCore>(
    mut raster: RasterImage,
    data: &[u8],
    rng: &mut R,
) -> Result<RasterImage, StegoError> {
    let framed = frame::build_frame(data);
    capacity::ensure_fits(framed.len(), raster.width(), raster.height())?;

    let costs = compute_sobel(&raster, REFERENCE_CHANNEL);
    let order = PositionOrder::from_cost_map(&costs);

    let mut plane = raster.channel_plane(PAYLOAD_CHANNEL);
    matcher::embed_plane(&mut plane, &order, FrameBits::new(&framed), rng);
    raster.write_channel_plane(PAYLOAD_CHANNEL, &plane);

    Ok(raster)
}

/// Recover the payload from a decoded stego raster.
fn extract_from_raster(raster: &RasterImage) -> Result<Vec<u8>, StegoError> {
    let available_bits = capacity::capacity_bits(raster.width(), raster.height());
    if available_bits < HEADER_BITS {
        // The carrier cannot even hold a length header.
        return Err(StegoError::CorruptHeader { declared_len: 0 });
    }

    let costs = compute_sobel(raster, REFERENCE_CHANNEL);
    let order = PositionOrder::from_cost_map(&costs);
    let plane = raster.channel_plane(PAYLOAD_CHANNEL);

    let header_bits: Vec<u8> = order.as_slice()[..HEADER_BITS]
        .iter()
        .map(|&pos| matcher::extract_bit(plane[pos]))
        .collect();
    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&frame::bits_to_bytes(&header_bits));
    let declared_len = frame::parse_header(&header);

    let total_bits = (HEADER_BITS as u64).saturating_add(declared_len.saturating_mul(8));
    if declared_len == 0 || total_bits > available_bits as u64 {
        return Err(StegoError::CorruptHeader { declared_len });
    }

    let body_bits: Vec<u8> = order.as_slice()[HEADER_BITS..total_bits as usize]
        .iter()
        .map(|&pos| matcher::extract_bit(plane[pos]))
        .collect();
    Ok(frame::bits_to_bytes(&body_bits))
}
