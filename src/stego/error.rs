// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from PPM parsing through
//! payload embedding and extraction.

use core::fmt;

/// Errors that can occur during steganographic embedding or extraction.
#[derive(Debug)]
pub enum StegoError {
    /// The cover image could not be parsed as a valid PPM.
    InvalidPpm(crate::ppm::error::PpmError),
    /// The message plus its framing exceeds the cover image's capacity.
    MessageTooLarge { needed: usize, capacity: usize },
    /// The cover image already carries a hidden message.
    AlreadyHidden,
    /// The image carries no recognition prefix, so there is nothing to
    /// extract.
    NoMessage,
    /// A recognition prefix was found but the terminator never appeared.
    MessageCorrupted,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPpm(e) => write!(f, "invalid PPM: {e}"),
            Self::MessageTooLarge { needed, capacity } => write!(
                f,
                "message too large for this image (payload {needed} bytes, capacity {capacity})"
            ),
            Self::AlreadyHidden => write!(f, "image already carries a hidden message"),
            Self::NoMessage => write!(f, "no hidden message found"),
            Self::MessageCorrupted => write!(f, "hidden message is corrupted (unterminated)"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPpm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ppm::error::PpmError> for StegoError {
    fn from(e: crate::ppm::error::PpmError) -> Self {
        Self::InvalidPpm(e)
    }
}
