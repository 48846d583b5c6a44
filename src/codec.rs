//! Byte-level I/O for the pipeline.
//!
//! - `probe_dimensions`: read width/height from the image header only.
//! - `decode_grayscale`: decode PNG/JPEG bytes into a normalized luma buffer.
//! - `encode_png`: encode a luma buffer to in-memory PNG bytes.
//! - `to_data_uri`: wrap PNG bytes for direct embedding in a display surface.
//! - `write_json_file`: pretty-print a serializable value to disk.

use crate::error::ProcessingError;
use crate::raster::ImageF32;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{GrayImage, ImageFormat, ImageReader};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Read pixel dimensions from the image header without a full decode.
/// Returns `None` when the bytes do not carry readable metadata.
pub fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Decode image bytes and convert to a normalized grayscale buffer.
pub fn decode_grayscale(bytes: &[u8]) -> Result<ImageF32, ProcessingError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ProcessingError::with_source("failed to decode input image", e))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let mut out = ImageF32::new(w, h);
    for (i, px) in img.into_raw().into_iter().enumerate() {
        out.data[i] = px as f32 / 255.0;
    }
    Ok(out)
}

/// Encode a luma buffer as 8-bit grayscale PNG bytes, clamping to [0, 1].
pub fn encode_png(img: &ImageF32) -> Result<Vec<u8>, ProcessingError> {
    let mut gray = GrayImage::new(img.w as u32, img.h as u32);
    for y in 0..img.h {
        let row = img.row(y);
        for (x, &v) in row.iter().enumerate() {
            gray.put_pixel(x as u32, y as u32, image::Luma([(v.clamp(0.0, 1.0) * 255.0) as u8]));
        }
    }
    let mut png = Vec::new();
    gray.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ProcessingError::with_source("failed to encode output PNG", e))?;
    Ok(png)
}

/// Wrap PNG bytes as a `data:image/png;base64,...` URI.
pub fn to_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png(w: u32, h: u32, value: u8) -> Vec<u8> {
        let img = GrayImage::from_pixel(w, h, image::Luma([value]));
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        png
    }

    #[test]
    fn probe_reads_header_dimensions() {
        let png = tiny_png(17, 9, 128);
        assert_eq!(probe_dimensions(&png), Some((17, 9)));
    }

    #[test]
    fn probe_rejects_garbage() {
        assert_eq!(probe_dimensions(b"definitely not an image"), None);
    }

    #[test]
    fn decode_normalizes_to_unit_range() {
        let png = tiny_png(4, 4, 255);
        let img = decode_grayscale(&png).unwrap();
        assert_eq!((img.w, img.h), (4, 4));
        assert!((img.get(2, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn decode_fails_on_garbage() {
        assert!(decode_grayscale(b"nope").is_err());
    }

    #[test]
    fn encode_preserves_dimensions() {
        let mut img = ImageF32::new(11, 7);
        img.fill(0.5);
        let png = encode_png(&img).unwrap();
        assert_eq!(probe_dimensions(&png), Some((11, 7)));
    }

    #[test]
    fn data_uri_has_png_prefix() {
        let uri = to_data_uri(&[1, 2, 3]);
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
