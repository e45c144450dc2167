//! Test fixtures: in-memory images.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Solid-color PNG of the given dimensions, encoded in memory.
pub fn png_image(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([40, 90, 200, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("encode PNG fixture");
    buffer
}
