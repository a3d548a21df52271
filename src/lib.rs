// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! # veil-core
//!
//! Pure-Rust steganography engine for hiding opaque byte payloads in binary
//! PPM (P6) images.
//!
//! The PPM codec (`ppm` module) parses a P6 file into header and pixel
//! bytes and serializes it back byte-for-byte. The steganography layer
//! (`stego` module) packs a framed payload (recognition prefix, message,
//! zero terminator) into the least-significant bits of the pixel bytes,
//! one bit per byte, leaving the image visually unchanged.
//!
//! Everything is plain owned data and pure functions; no global state, no
//! I/O. [`hide`] never touches the cover it is given, so sharing parsed
//! covers across threads needs no coordination.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{hide_bytes, unhide_bytes};
//!
//! let cover_ppm = std::fs::read("photo.ppm").unwrap();
//! let stego = hide_bytes(&cover_ppm, b"secret message").unwrap();
//! let decoded = unhide_bytes(&stego).unwrap();
//! assert_eq!(decoded, b"secret message");
//! ```

pub mod ppm;
pub mod stego;

pub use ppm::error::{PpmError, Result as PpmResult};
pub use ppm::PpmImage;
pub use stego::{has_payload, hide, hide_bytes, unhide, unhide_bytes, StegoError};
pub use stego::{capacity_bytes, max_message_len, PAYLOAD_MAGIC, PAYLOAD_OVERHEAD, PAYLOAD_TERMINATOR};
