//! Procedural shape rasterization onto f32 coverage buffers.
//!
//! Shapes are written as coverage (premultiplied white): 1.0 inside, 0.0
//! outside. The circle is anti-aliased with a half-pixel coverage ramp; the
//! rotated rectangle is rendered with crisp (binary) edges.

use super::ImageF32;

/// Rasterize a filled circle centred at (cx, cy) with the given radius.
///
/// Coverage ramps linearly over one pixel around the boundary, sampled at
/// pixel centres.
pub fn fill_circle(img: &mut ImageF32, cx: f32, cy: f32, radius: f32) {
    for y in 0..img.h {
        let py = y as f32 + 0.5;
        for x in 0..img.w {
            let px = x as f32 + 0.5;
            let dist = ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt();
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                img.set(x, y, coverage);
            }
        }
    }
}

/// Rasterize a filled axis-aligned rectangle rotated by `angle_deg` about the
/// pivot (px, py), with crisp edges (no anti-aliasing).
///
/// Angles follow screen conventions (y down, positive angles clockwise), so a
/// negative angle tilts the rectangle counter-clockwise.
pub fn fill_rect_rotated(
    img: &mut ImageF32,
    x0: f32,
    y0: f32,
    rect_w: f32,
    rect_h: f32,
    angle_deg: f32,
    px: f32,
    py: f32,
) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    for y in 0..img.h {
        let sy = y as f32 + 0.5;
        for x in 0..img.w {
            let sx = x as f32 + 0.5;
            // inverse-rotate the sample point about the pivot
            let dx = sx - px;
            let dy = sy - py;
            let ux = px + dx * cos + dy * sin;
            let uy = py - dx * sin + dy * cos;
            if ux >= x0 && ux < x0 + rect_w && uy >= y0 && uy < y0 + rect_h {
                img.set(x, y, 1.0);
            }
        }
    }
}
