// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Example: hide and recover a message in a binary PPM image.
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: hide_unhide <input.ppm> <message>");
        eprintln!("       hide_unhide --unhide <stego.ppm>");
        std::process::exit(1);
    }

    if args[1] == "--unhide" {
        let stego = fs::read(&args[2]).expect("Could not read stego image");
        match veil_core::unhide_bytes(&stego) {
            Ok(message) => {
                println!("Hidden message: {}", String::from_utf8_lossy(&message));
            }
            Err(e) => eprintln!("Unhide failed: {e}"),
        }
    } else {
        let cover = fs::read(&args[1]).expect("Could not read cover image");
        let message = args[2].as_bytes();

        let stego = veil_core::hide_bytes(&cover, message).expect("Hide failed");

        let out_path = args[1].replace(".ppm", "_stego.ppm");
        fs::write(&out_path, &stego).expect("Could not write output");
        println!("Stego image written to: {}", out_path);
        println!("Message: {} bytes, Image: {} bytes", message.len(), stego.len());
    }
}
