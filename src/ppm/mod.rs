// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Pure-Rust binary PPM (P6) codec (zero external dependencies).
//!
//! Reads and writes raw, uncompressed P6 pixmaps, providing direct access
//! to the RGB sample bytes. This is the foundation for steganographic
//! embedding, which operates entirely on pixel bytes.
//!
//! Supports:
//! - Binary P6 pixmaps with 8-bit channels (max color value 255)
//! - Any mix of space, tab, LF, and CR between header fields
//! - Byte-for-byte round-trip for unmodified images
//!
//! Does NOT support:
//! - ASCII formats (P1/P2/P3) and binary P4/P5 -- rejected at parse time
//! - 16-bit channels (max color value above 255) -- rejected at parse time
//! - Header comment lines (`# ...`) -- rejected at parse time

pub mod error;

use error::{PpmError, Result};

/// Magic marker that opens every binary pixmap.
pub const MAGIC: [u8; 2] = *b"P6";

/// The only supported maximum color value (one byte per sample).
pub const MAX_COLOR_VALUE: u16 = 255;

/// A parsed binary PPM image providing access to raw RGB sample bytes.
///
/// Created by parsing a P6 byte stream with [`PpmImage::from_bytes`]. After
/// modifying pixel bytes (e.g., for steganographic embedding), call
/// [`PpmImage::to_bytes`] to serialize. The original header bytes are kept
/// verbatim, so an unmodified image serializes back to exactly the input.
///
/// Cloning deep-copies both the header and the pixel buffer. Two images
/// never share backing storage, so mutating one can never leak into the
/// other.
#[derive(Debug, Clone)]
pub struct PpmImage {
    /// Image width in pixels. Always non-zero.
    width: u32,
    /// Image height in pixels. Always non-zero.
    height: u32,
    /// Maximum color value. Always 255 (8-bit samples).
    max_value: u16,
    /// Raw header bytes in original order: magic, the three decimal fields
    /// with their whitespace, and the single separator byte that precedes
    /// pixel data.
    header: Vec<u8>,
    /// Pixel bytes: exactly `3 * width * height` RGB samples, row-major,
    /// one byte per sample.
    pixels: Vec<u8>,
}

impl PpmImage {
    /// Parse a binary PPM (P6) file from bytes.
    ///
    /// The header grammar is the magic marker, three whitespace-delimited
    /// decimal fields (width, height, max color value), and exactly one
    /// separator byte before the pixel data. The total input length must
    /// equal the header length plus `3 * width * height`; anything shorter
    /// or longer is rejected.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < MAGIC.len() {
            return Err(PpmError::UnexpectedEof);
        }
        if data[..MAGIC.len()] != MAGIC[..] {
            return Err(PpmError::InvalidMagic);
        }

        let mut pos = MAGIC.len();
        let width = read_header_field(data, &mut pos, "width")?;
        let height = read_header_field(data, &mut pos, "height")?;
        let max_value = read_header_field(data, &mut pos, "max color value")?;

        // Exactly one separator byte between the header and pixel data.
        // Its value is not constrained; writers emit LF by convention.
        if pos >= data.len() {
            return Err(PpmError::UnexpectedEof);
        }
        pos += 1;

        if width == 0 || height == 0 {
            return Err(PpmError::InvalidDimensions);
        }
        if max_value != u32::from(MAX_COLOR_VALUE) {
            return Err(PpmError::UnsupportedMaxValue(max_value));
        }

        // Saturating math so absurd dimensions fail the length check instead
        // of wrapping around it.
        let pixel_len = 3u64
            .saturating_mul(u64::from(width))
            .saturating_mul(u64::from(height));
        let expected = (pos as u64).saturating_add(pixel_len);
        if data.len() as u64 != expected {
            return Err(PpmError::LengthMismatch {
                expected,
                actual: data.len() as u64,
            });
        }

        Ok(Self {
            width,
            height,
            max_value: MAX_COLOR_VALUE,
            header: data[..pos].to_vec(),
            pixels: data[pos..].to_vec(),
        })
    }

    /// Serialize the (possibly modified) image back to PPM bytes.
    ///
    /// Writes the preserved header followed by the pixel buffer. For an
    /// image whose pixels were not touched this reproduces the parsed
    /// input byte for byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.header.len() + self.pixels.len());
        out.extend_from_slice(&self.header);
        out.extend_from_slice(&self.pixels);
        out
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum color value (always 255).
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// The raw header bytes, including the trailing separator byte.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// The raw pixel bytes (`3 * width * height` RGB samples, row-major).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the pixel bytes.
    ///
    /// The buffer length is fixed; embedding only rewrites bytes in place.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// Read one whitespace-delimited decimal header field.
///
/// Skips any run of header whitespace, then consumes a maximal run of ASCII
/// digits, accumulating with overflow checks. A missing field (end of data
/// while skipping) is [`PpmError::UnexpectedEof`]; a non-digit where a field
/// should start, or a value past `u32::MAX`, is
/// [`PpmError::InvalidHeaderField`] naming the field.
fn read_header_field(data: &[u8], pos: &mut usize, field: &'static str) -> Result<u32> {
    while *pos < data.len() && is_header_whitespace(data[*pos]) {
        *pos += 1;
    }
    if *pos >= data.len() {
        return Err(PpmError::UnexpectedEof);
    }
    if !data[*pos].is_ascii_digit() {
        return Err(PpmError::InvalidHeaderField(field));
    }

    let mut value: u32 = 0;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        let digit = u32::from(data[*pos] - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(PpmError::InvalidHeaderField(field))?;
        *pos += 1;
    }
    Ok(value)
}

/// Header whitespace is exactly space, tab, LF, and CR. Narrower than
/// `u8::is_ascii_whitespace`, which also accepts form feed.
fn is_header_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
