// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Error types for PPM parsing.

use std::fmt;

/// Errors that can occur while parsing binary PPM (P6) data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PpmError {
    /// Input ended before the header was complete.
    UnexpectedEof,
    /// The data does not start with the `P6` magic marker.
    InvalidMagic,
    /// A header field is missing, non-numeric, or too large to represent.
    InvalidHeaderField(&'static str),
    /// Width or height is zero.
    InvalidDimensions,
    /// Maximum color value other than 255. Only 8-bit channels are
    /// supported.
    UnsupportedMaxValue(u32),
    /// Total input length does not match the header plus the pixel data
    /// the header promises.
    LengthMismatch { expected: u64, actual: u64 },
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of PPM data"),
            Self::InvalidMagic => write!(f, "not a binary PPM (missing P6 magic)"),
            Self::InvalidHeaderField(field) => {
                write!(f, "invalid PPM header field: {field}")
            }
            Self::InvalidDimensions => write!(f, "PPM dimensions must be non-zero"),
            Self::UnsupportedMaxValue(value) => {
                write!(f, "unsupported max color value {value} (expected 255)")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "PPM length mismatch: header promises {expected} bytes, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for PpmError {}

/// Convenience alias used throughout the PPM module.
pub type Result<T> = std::result::Result<T, PpmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PpmError::InvalidMagic.to_string(),
            "not a binary PPM (missing P6 magic)"
        );
        assert_eq!(
            PpmError::InvalidHeaderField("width").to_string(),
            "invalid PPM header field: width"
        );
        assert_eq!(
            PpmError::UnsupportedMaxValue(65535).to_string(),
            "unsupported max color value 65535 (expected 255)"
        );
        assert_eq!(
            PpmError::LengthMismatch {
                expected: 15,
                actual: 14
            }
            .to_string(),
            "PPM length mismatch: header promises 15 bytes, got 14"
        );
    }
}
