//! Tone mapping: multiply a vertical linear gradient over the grayscale
//! canvas.
//!
//! The gradient runs from `top` at row 0 to `bottom` at the last gradient
//! row, so the default `#000000 -> #555555` stops darken the top of the image
//! completely while keeping up to a third of the original luminance at the
//! bottom. Per-pixel luminance ratios of the source are preserved.

use crate::raster::ImageF32;

/// Multiply a `grad_w x grad_h` vertical gradient into `canvas` at the
/// origin, clipped to the canvas. The gradient dimensions normally equal the
/// canvas dimensions; they diverge only when header metadata was unreadable
/// and placement fell back to defaults.
pub fn gradient_multiply(canvas: &mut ImageF32, grad_w: usize, grad_h: usize, top: u8, bottom: u8) {
    let w = grad_w.min(canvas.w);
    let h = grad_h.min(canvas.h);
    let start = top as f32 / 255.0;
    let end = bottom as f32 / 255.0;
    let denom = grad_h.saturating_sub(1).max(1) as f32;
    for y in 0..h {
        let t = start + (end - start) * (y as f32 / denom);
        let row = canvas.row_mut(y);
        for v in row.iter_mut().take(w) {
            *v *= t;
        }
    }
}
