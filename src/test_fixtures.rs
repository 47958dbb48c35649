//! In-memory image fixtures shared across test modules.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

/// A solid-color image of the given size, encoded as PNG bytes.
pub fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([180, 90, 30, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("in-memory PNG encode");
    buf.into_inner()
}

/// A tightly packed RGBA buffer matching the given dimensions.
pub fn solid_rgba(width: u32, height: u32) -> Vec<u8> {
    vec![127u8; (width * height * 4) as usize]
}
