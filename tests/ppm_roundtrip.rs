// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! PPM codec round-trip tests verifying byte-for-byte parse/serialize fidelity.

use veil_core::{PpmError, PpmImage};

/// Deterministic RGB gradient covering all byte values over a large enough
/// image.
fn test_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 17 % 256) as u8);
            pixels.push((y * 23 % 256) as u8);
            pixels.push(((x + y) * 31 % 256) as u8);
        }
    }
    pixels
}

fn test_ppm(header: &str, width: u32, height: u32) -> Vec<u8> {
    let mut data = header.as_bytes().to_vec();
    data.extend(test_pixels(width, height));
    data
}

#[test]
fn roundtrip_single_line_header() {
    let data = test_ppm("P6 64 48 255\n", 64, 48);
    let img = PpmImage::from_bytes(&data).unwrap();
    let output = img.to_bytes();
    assert_eq!(data, output, "single-line header round-trip failed");
}

#[test]
fn roundtrip_multiline_header() {
    // The layout most encoders emit: one field per line.
    let data = test_ppm("P6\n320\n240\n255\n", 320, 240);
    let img = PpmImage::from_bytes(&data).unwrap();
    assert_eq!(data, img.to_bytes(), "multi-line header round-trip failed");
}

#[test]
fn roundtrip_crlf_header() {
    let data = test_ppm("P6\r\n16 16\r\n255\r\n", 16, 16);
    let img = PpmImage::from_bytes(&data).unwrap();
    assert_eq!(data, img.to_bytes(), "CRLF header round-trip failed");
}

#[test]
fn roundtrip_one_pixel() {
    let data = test_ppm("P6 1 1 255\n", 1, 1);
    let img = PpmImage::from_bytes(&data).unwrap();
    assert_eq!(data, img.to_bytes());
}

#[test]
fn parsed_fields_match_header() {
    let data = test_ppm("P6\n320 240\n255\n", 320, 240);
    let img = PpmImage::from_bytes(&data).unwrap();
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 240);
    assert_eq!(img.max_value(), 255);
    assert_eq!(img.header(), b"P6\n320 240\n255\n");
    assert_eq!(img.pixels().len(), 320 * 240 * 3);
}

#[test]
fn modified_pixels_serialize_in_place() {
    let data = test_ppm("P6 8 8 255\n", 8, 8);
    let mut img = PpmImage::from_bytes(&data).unwrap();
    img.pixels_mut()[0] ^= 1;

    let output = img.to_bytes();
    assert_eq!(output.len(), data.len());
    // Header untouched, exactly one pixel byte differs.
    assert_eq!(&output[..img.header().len()], &data[..img.header().len()]);
    let diffs = output
        .iter()
        .zip(data.iter())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(diffs, 1);
}

#[test]
fn clone_is_independent() {
    let data = test_ppm("P6 4 4 255\n", 4, 4);
    let img = PpmImage::from_bytes(&data).unwrap();
    let mut copy = img.clone();
    for byte in copy.pixels_mut() {
        *byte = 0;
    }
    // The original still serializes to the untouched input.
    assert_eq!(img.to_bytes(), data);
}

#[test]
fn reject_malformed_inputs() {
    // Anything that is not a complete, well-formed P6 buffer must fail.
    let cases: &[&[u8]] = &[
        b"",
        b"P6",
        b"P3 1 1 255\n\0\0\0",
        b"P6 1 1 255",
        b"P6 x 1 255\n\0\0\0",
        b"P6 1 1 1023\n\0\0\0",
    ];
    for &data in cases {
        assert!(
            PpmImage::from_bytes(data).is_err(),
            "accepted malformed input {data:?}"
        );
    }
}

#[test]
fn reject_pixel_length_mismatch() {
    let mut data = test_ppm("P6 4 4 255\n", 4, 4);
    data.pop();
    assert_eq!(
        PpmImage::from_bytes(&data).unwrap_err(),
        PpmError::LengthMismatch {
            expected: 59,
            actual: 58
        }
    );

    data.push(0);
    data.push(0);
    assert!(matches!(
        PpmImage::from_bytes(&data).unwrap_err(),
        PpmError::LengthMismatch { .. }
    ));
}

#[test]
fn reject_header_claiming_more_than_memory() {
    // Dimensions whose pixel size overflows any real buffer.
    let mut data = b"P6 4294967295 4294967295 255\n".to_vec();
    data.extend_from_slice(&[0u8; 64]);
    assert!(matches!(
        PpmImage::from_bytes(&data).unwrap_err(),
        PpmError::LengthMismatch { .. }
    ));
}
