// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Bit-level I/O over the least-significant bits of cover bytes.
//!
//! Provides [`LsbReader`] for extraction and [`LsbWriter`] for embedding.
//! One payload bit rides in the least-significant bit of each cover byte,
//! MSB-first within every payload byte, so a payload byte always spans
//! exactly 8 cover bytes and the upper 7 bits of the cover are never
//! touched.

/// Number of whole payload bytes that fit in `cover_len` cover bytes.
///
/// Eight cover bytes carry one payload byte; leftover cover bytes are
/// unused.
pub fn capacity_bytes(cover_len: usize) -> usize {
    cover_len / 8
}

/// Bit-level reader over the least-significant bits of cover data.
///
/// Bits are assembled MSB-first into payload bytes. Running out of cover
/// is not an error at this level; reads return `None` and the caller
/// decides what that means.
pub struct LsbReader<'a> {
    cover: &'a [u8],
    pos: usize,
}

impl<'a> LsbReader<'a> {
    /// Create a new LsbReader over the given cover bytes.
    /// `pos` is the byte offset at which extraction starts.
    pub fn new(cover: &'a [u8], pos: usize) -> Self {
        Self { cover, pos }
    }

    /// Read one payload byte from the next 8 cover bytes.
    ///
    /// Returns `None` when fewer than 8 cover bytes remain.
    pub fn read_byte(&mut self) -> Option<u8> {
        if self.cover.len().saturating_sub(self.pos) < 8 {
            return None;
        }
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | (self.cover[self.pos] & 1);
            self.pos += 1;
        }
        Some(byte)
    }

    /// Read exactly `count` payload bytes, whatever their values.
    ///
    /// Returns `None` if the cover cannot supply `count * 8` more bits.
    pub fn read_bytes(&mut self, count: usize) -> Option<Vec<u8>> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read_byte()?);
        }
        Some(out)
    }

    /// Read payload bytes up to (but not including) the first zero byte.
    ///
    /// Consumes the zero byte. Returns `None` if the cover runs out before
    /// a zero byte appears.
    pub fn read_until_zero(&mut self) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            match self.read_byte()? {
                0 => return Some(out),
                byte => out.push(byte),
            }
        }
    }
}

/// Bit-level writer into the least-significant bits of cover data.
///
/// Each embedded bit rewrites one cover byte in place, keeping its upper
/// 7 bits. Staying inside the cover is the caller's job; the embedding
/// pipeline checks capacity before constructing a writer.
pub struct LsbWriter<'a> {
    cover: &'a mut [u8],
    pos: usize,
}

impl<'a> LsbWriter<'a> {
    pub fn new(cover: &'a mut [u8], pos: usize) -> Self {
        Self { cover, pos }
    }

    /// Embed one payload byte into the next 8 cover bytes, MSB-first.
    pub fn write_byte(&mut self, byte: u8) {
        debug_assert!(self.pos + 8 <= self.cover.len());
        for i in (0..8).rev() {
            let bit = (byte >> i) & 1;
            self.cover[self.pos] = (self.cover[self.pos] & 0xFE) | bit;
            self.pos += 1;
        }
    }

    /// Embed a run of payload bytes.
    pub fn write_bytes(&mut self, payload: &[u8]) {
        for &byte in payload {
            self.write_byte(byte);
        }
    }
}
