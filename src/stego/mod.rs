// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/edgeveil

//! Edge-adaptive steganographic encoding and decoding.
//!
//! The pipeline hides a byte payload in the LSBs of one color channel of
//! an RGBA raster:
//!
//! 1. A Sobel cost map over the **reference channel** ranks every pixel by
//!    how well local texture masks a ±1 change.
//! 2. A deterministic position order selects the lowest-cost pixels first.
//! 3. A length-prefixed frame is written bit by bit into the **payload
//!    channel** using LSB matching.
//!
//! The decoder recomputes the identical cost map and order from the
//! reference channel, which the embedder never touches, so no side
//! channel or key material is exchanged.

pub mod capacity;
pub mod cost;
pub mod error;
pub mod frame;
pub mod matcher;
pub mod order;
mod pipeline;

pub use capacity::max_payload_len;
pub use cost::CostMap;
pub use error::StegoError;
pub use order::PositionOrder;
pub use pipeline::{
    decode, decode_bytes, encode, encode_bytes, encode_bytes_with_rng, encode_with_rng,
};

use crate::raster::Channel;

/// Channel whose Sobel gradients drive the cost map. Never modified, so
/// both sides derive the same embedding order from it.
pub const REFERENCE_CHANNEL: Channel = Channel::Green;

/// Channel whose LSBs carry the embedded bit stream.
pub const PAYLOAD_CHANNEL: Channel = Channel::Red;
