//! Procedural glow sprite generation for the eye and mouth overlays.
//!
//! Each sprite is built the same way: rasterize the sharp shape, blur a copy
//! of it, stack the blurred copy three times with source-over merges, then
//! put the sharp shape back on top. Stacking the blur three times triples the
//! apparent glow intensity compared to a single pass; the count is a
//! parameter but defaults to three.
//!
//! Sprites are premultiplied white-on-transparent single-channel rasters, so
//! they composite onto the canvas with a plain screen blend.

use crate::raster::{blend, blur, draw, ImageF32};

// Shape geometry, proportional to the sprite's driving dimension.
const EYE_CANVAS_SCALE: f32 = 1.4;
const EYE_CENTRE_SCALE: f32 = 0.7;
const MOUTH_CANVAS_SCALE: f32 = 1.2;
const MOUTH_CANVAS_HEIGHT: usize = 16;
const MOUTH_RECT_TOP: f32 = 3.0;
const MOUTH_RECT_HEIGHT: f32 = 10.0;
const MOUTH_TILT_DEG: f32 = -4.0;
const MOUTH_PIVOT_Y: f32 = 8.0;

/// Rasterize one glowing eye: an anti-aliased white circle of diameter
/// `circle_size` on a square canvas of side `circle_size * 1.4`, centred at
/// 0.7x the driving dimension. The same sprite serves both eyes.
pub fn eye_sprite(circle_size: u32, sigma: f32, glow_passes: u32) -> ImageF32 {
    let side = (circle_size as f32 * EYE_CANVAS_SCALE).round() as usize;
    let centre = circle_size as f32 * EYE_CENTRE_SCALE;
    let mut shape = ImageF32::new(side, side);
    draw::fill_circle(&mut shape, centre, centre, circle_size as f32 / 2.0);
    glow(&shape, sigma, glow_passes)
}

/// Rasterize the glowing mouth: a crisp white rectangle `mouth_width x 10` at
/// (0, 3), tilted -4 degrees about its midpoint, on a `mouth_width * 1.2 x 16`
/// canvas.
pub fn mouth_sprite(mouth_width: u32, sigma: f32, glow_passes: u32) -> ImageF32 {
    let w = (mouth_width as f32 * MOUTH_CANVAS_SCALE).round() as usize;
    let mut shape = ImageF32::new(w, MOUTH_CANVAS_HEIGHT);
    draw::fill_rect_rotated(
        &mut shape,
        0.0,
        MOUTH_RECT_TOP,
        mouth_width as f32,
        MOUTH_RECT_HEIGHT,
        MOUTH_TILT_DEG,
        mouth_width as f32 / 2.0,
        MOUTH_PIVOT_Y,
    );
    glow(&shape, sigma, glow_passes)
}

/// Layer `glow_passes` copies of the blurred shape beneath the sharp shape.
fn glow(shape: &ImageF32, sigma: f32, glow_passes: u32) -> ImageF32 {
    let blurred = blur::gaussian(shape, sigma);
    let mut merged = ImageF32::new(shape.w, shape.h);
    for _ in 0..glow_passes {
        merged = blend::over(&blurred, &merged);
    }
    blend::over(shape, &merged)
}
