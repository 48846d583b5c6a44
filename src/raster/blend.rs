//! Per-channel compositing arithmetic over normalized [0, 1] buffers.
//!
//! - `over`: source-over merge of premultiplied layers (glow stacking).
//! - `multiply_at`: darkening blend, `out = base * overlay`.
//! - `screen_at`: brightening blend, `out = 1 - (1 - base) * (1 - overlay)`.
//!
//! The positioned variants clip the overlay at the canvas edge; the canvas is
//! never resized by a composite.

use super::ImageF32;

/// Composite `top` over `bottom` (same dimensions, premultiplied values).
pub fn over(top: &ImageF32, bottom: &ImageF32) -> ImageF32 {
    debug_assert_eq!(top.w, bottom.w);
    debug_assert_eq!(top.h, bottom.h);
    let mut out = ImageF32::new(top.w, top.h);
    for i in 0..out.data.len() {
        let s = top.data[i];
        let d = bottom.data[i];
        out.data[i] = s + d * (1.0 - s);
    }
    out
}

/// Multiply `overlay` into `base` with its top-left corner at (left, top).
pub fn multiply_at(base: &mut ImageF32, overlay: &ImageF32, left: usize, top: usize) {
    let (w, h) = clipped_extent(base, overlay, left, top);
    for oy in 0..h {
        for ox in 0..w {
            let i = base.idx(left + ox, top + oy);
            base.data[i] *= overlay.get(ox, oy);
        }
    }
}

/// Screen `overlay` onto `base` with its top-left corner at (left, top).
///
/// With premultiplied white overlays this reduces to
/// `out = base + ov - base * ov`, which both brightens under the shape and
/// leaves the base untouched where the overlay is transparent.
pub fn screen_at(base: &mut ImageF32, overlay: &ImageF32, left: usize, top: usize) {
    let (w, h) = clipped_extent(base, overlay, left, top);
    for oy in 0..h {
        for ox in 0..w {
            let i = base.idx(left + ox, top + oy);
            let b = base.data[i];
            let s = overlay.get(ox, oy);
            base.data[i] = b + s - b * s;
        }
    }
}

fn clipped_extent(base: &ImageF32, overlay: &ImageF32, left: usize, top: usize) -> (usize, usize) {
    if left >= base.w || top >= base.h {
        return (0, 0);
    }
    let w = overlay.w.min(base.w - left);
    let h = overlay.h.min(base.h - top);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(w: usize, h: usize, v: f32) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        img.fill(v);
        img
    }

    #[test]
    fn over_matches_source_over_formula() {
        let top = uniform(2, 2, 0.5);
        let bottom = uniform(2, 2, 0.4);
        let out = over(&top, &bottom);
        assert!((out.get(0, 0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn over_transparent_top_keeps_bottom() {
        let top = ImageF32::new(3, 3);
        let bottom = uniform(3, 3, 0.8);
        let out = over(&top, &bottom);
        assert_eq!(out.get(1, 1), 0.8);
    }

    #[test]
    fn multiply_darkens_only_under_overlay() {
        let mut base = uniform(4, 4, 0.5);
        let overlay = uniform(2, 2, 0.5);
        multiply_at(&mut base, &overlay, 1, 1);
        assert_eq!(base.get(0, 0), 0.5);
        assert!((base.get(1, 1) - 0.25).abs() < 1e-6);
        assert!((base.get(2, 2) - 0.25).abs() < 1e-6);
        assert_eq!(base.get(3, 3), 0.5);
    }

    #[test]
    fn screen_brightens_and_respects_transparency() {
        let mut base = uniform(3, 3, 0.2);
        let mut overlay = ImageF32::new(2, 2);
        overlay.set(0, 0, 1.0);
        screen_at(&mut base, &overlay, 0, 0);
        // full white overlay pixel saturates
        assert!((base.get(0, 0) - 1.0).abs() < 1e-6);
        // transparent overlay pixel leaves the base alone
        assert!((base.get(1, 1) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn composites_clip_at_the_canvas_edge() {
        let mut base = uniform(3, 3, 0.0);
        let overlay = uniform(4, 4, 1.0);
        screen_at(&mut base, &overlay, 2, 2);
        assert_eq!(base.get(2, 2), 1.0);
        assert_eq!(base.get(1, 1), 0.0);
        assert_eq!(base.w, 3);
        assert_eq!(base.h, 3);
        // fully off-canvas placement is a no-op
        screen_at(&mut base, &overlay, 5, 5);
        assert_eq!(base.get(0, 0), 0.0);
    }
}
