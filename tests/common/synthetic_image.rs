use image::{GrayImage, ImageFormat, Luma};
use std::io::Cursor;

/// Encode a solid-value grayscale PNG in memory.
pub fn solid_png(width: u32, height: u32, value: u8) -> Vec<u8> {
    encode(GrayImage::from_pixel(width, height, Luma([value])), ImageFormat::Png)
}

/// Encode a solid-value grayscale JPEG in memory.
pub fn solid_jpeg(width: u32, height: u32, value: u8) -> Vec<u8> {
    encode(GrayImage::from_pixel(width, height, Luma([value])), ImageFormat::Jpeg)
}

/// A doodle-like PNG with content variation, so tone mapping has ratios to
/// preserve: dark scribble band on a light background.
pub fn scribble_png(width: u32, height: u32) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 3 == 0 {
            Luma([40u8])
        } else {
            Luma([210u8])
        }
    });
    encode(img, ImageFormat::Png)
}

fn encode(img: GrayImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .expect("in-memory encode of a synthetic image");
    bytes
}
