// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Hide/unhide pipeline over parsed PPM images.
//!
//! Embedding writes one payload into the cover's pixel LSBs:
//! 1. Refuse covers that already carry the recognition prefix
//! 2. Check capacity (prefix + message + terminator must fit)
//! 3. Deep-copy the cover and frame the message
//! 4. Pack the framed payload into the copy's pixel LSBs from offset 0
//!
//! Extraction reverses this: probe for the prefix, then read message bytes
//! until the zero terminator.

use crate::ppm::PpmImage;
use crate::stego::error::StegoError;
use crate::stego::lsb::{self, LsbReader, LsbWriter};
use crate::stego::{PAYLOAD_MAGIC, PAYLOAD_OVERHEAD, PAYLOAD_TERMINATOR};

/// Embed a message into a cover image, returning the stego image.
///
/// The cover itself is never modified; the returned image is a deep copy
/// with the payload packed into its pixel LSBs. The terminator is in-band,
/// so a message byte of 0x00 ends extraction early; callers that need
/// arbitrary binary payloads must escape zero bytes themselves.
///
/// # Arguments
/// - `cover`: The parsed cover image.
/// - `message`: The message bytes to embed (may be empty).
///
/// # Errors
/// - [`StegoError::AlreadyHidden`] if the cover already carries the
///   recognition prefix.
/// - [`StegoError::MessageTooLarge`] if prefix + message + terminator
///   exceeds the cover's capacity.
pub fn hide(cover: &PpmImage, message: &[u8]) -> Result<PpmImage, StegoError> {
    // 1. Refuse double embedding before looking at capacity.
    if has_payload(cover) {
        return Err(StegoError::AlreadyHidden);
    }

    // 2. Capacity check. Every payload byte costs 8 pixel bytes.
    let capacity = lsb::capacity_bytes(cover.pixels().len());
    let needed = PAYLOAD_OVERHEAD + message.len();
    if needed > capacity {
        return Err(StegoError::MessageTooLarge { needed, capacity });
    }

    // 3. Frame the message: prefix, message bytes, zero terminator.
    let mut payload = Vec::with_capacity(needed);
    payload.extend_from_slice(&PAYLOAD_MAGIC);
    payload.extend_from_slice(message);
    payload.push(PAYLOAD_TERMINATOR);

    // 4. Pack into a deep copy of the cover.
    let mut stego = cover.clone();
    LsbWriter::new(stego.pixels_mut(), 0).write_bytes(&payload);
    Ok(stego)
}

/// Extract the hidden message from a stego image.
///
/// # Returns
/// The message bytes, excluding the recognition prefix and the terminator.
///
/// # Errors
/// - [`StegoError::NoMessage`] if the image does not carry the recognition
///   prefix.
/// - [`StegoError::MessageCorrupted`] if the prefix is present but the
///   pixel data runs out before a terminator appears.
pub fn unhide(image: &PpmImage) -> Result<Vec<u8>, StegoError> {
    if !has_payload(image) {
        return Err(StegoError::NoMessage);
    }

    // Skip the prefix (8 cover bytes per payload byte) and read to the
    // terminator.
    let mut reader = LsbReader::new(image.pixels(), PAYLOAD_MAGIC.len() * 8);
    reader.read_until_zero().ok_or(StegoError::MessageCorrupted)
}

/// Whether the image's pixel LSBs start with the recognition prefix.
///
/// Covers too small to carry even the prefix simply report `false`.
pub fn has_payload(image: &PpmImage) -> bool {
    let mut reader = LsbReader::new(image.pixels(), 0);
    reader
        .read_bytes(PAYLOAD_MAGIC.len())
        .map_or(false, |prefix| prefix == PAYLOAD_MAGIC)
}

/// Embed a message into a cover PPM given as raw bytes.
///
/// Parses `ppm_bytes`, embeds `message`, and serializes the stego image.
///
/// # Errors
/// - [`StegoError::InvalidPpm`] if `ppm_bytes` is not a valid binary PPM.
/// - Everything [`hide`] can return.
pub fn hide_bytes(ppm_bytes: &[u8], message: &[u8]) -> Result<Vec<u8>, StegoError> {
    let cover = PpmImage::from_bytes(ppm_bytes)?;
    let stego = hide(&cover, message)?;
    Ok(stego.to_bytes())
}

/// Extract the hidden message from a stego PPM given as raw bytes.
///
/// # Errors
/// - [`StegoError::InvalidPpm`] if `ppm_bytes` is not a valid binary PPM.
/// - Everything [`unhide`] can return.
pub fn unhide_bytes(ppm_bytes: &[u8]) -> Result<Vec<u8>, StegoError> {
    let image = PpmImage::from_bytes(ppm_bytes)?;
    unhide(&image)
}
