// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Steganographic embedding and extraction for binary PPM images.
//!
//! A hidden payload is laid out in the cover's pixel LSBs as:
//!
//! ```text
//! [3 bytes]  recognition prefix "stg"
//! [N bytes]  message
//! [1 byte]   zero terminator
//! ```
//!
//! Every payload byte is spread MSB-first over the least-significant bits
//! of 8 consecutive pixel bytes, starting at the first pixel byte. Capacity
//! is therefore `pixel_bytes / 8` payload bytes, of which
//! [`PAYLOAD_OVERHEAD`] go to framing.
//!
//! Embedding never mutates the cover image; [`hide`] returns a modified
//! deep copy, and [`unhide`] recovers the exact message bytes from it.

pub mod error;
pub mod lsb;
mod pipeline;

pub use error::StegoError;

use crate::ppm::PpmImage;

/// Recognition prefix embedded ahead of every message. Its presence in the
/// first 24 pixel LSBs is what marks an image as carrying a payload.
pub const PAYLOAD_MAGIC: [u8; 3] = *b"stg";

/// Terminator byte written after the message. The terminator is in-band,
/// which is why extracted messages never contain a zero byte.
pub const PAYLOAD_TERMINATOR: u8 = 0x00;

/// Fixed framing overhead in payload bytes: recognition prefix plus
/// terminator.
pub const PAYLOAD_OVERHEAD: usize = PAYLOAD_MAGIC.len() + 1;

/// Maximum message length embeddable in `image`, in bytes.
///
/// Pixel-byte capacity minus the fixed framing overhead. A result of 0
/// does not guarantee that even an empty message fits: the framing alone
/// needs `8 * PAYLOAD_OVERHEAD` pixel bytes.
pub fn max_message_len(image: &PpmImage) -> usize {
    lsb::capacity_bytes(image.pixels().len()).saturating_sub(PAYLOAD_OVERHEAD)
}

pub use lsb::capacity_bytes;
pub use pipeline::{has_payload, hide, hide_bytes, unhide, unhide_bytes};
