//! Overlay sizing and placement arithmetic.
//!
//! All positions are top-left corners of the sprite canvases in layout
//! coordinates. Fractions are rounded to whole pixels first and the mouth
//! offset is then computed from the rounded eye positions, so placement is
//! stable under parameter round-trips.

use super::options::StylizeParams;

/// Resolved overlay geometry for one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Eye circle diameter in pixels.
    pub circle_size: u32,
    /// Mouth rectangle width in pixels.
    pub mouth_width: u32,
    pub left_eye_x: u32,
    pub right_eye_x: u32,
    pub eyes_y: u32,
    pub mouth_x: u32,
    pub mouth_y: u32,
}

impl Placement {
    /// Compute overlay geometry for a `w x h` layout.
    ///
    /// The mouth sits at the midpoint between the eyes, deliberately biased
    /// right by `mouth_bias` mouth widths.
    pub fn compute(w: u32, h: u32, params: &StylizeParams) -> Self {
        let circle_size = (w as f32 * params.eye_scale).round() as u32;
        let mouth_width = (w as f32 * params.mouth_scale).round() as u32;
        let left_eye_x = (w as f32 * params.left_eye_frac).round() as u32;
        let right_eye_x = (w as f32 * params.right_eye_frac).round() as u32;
        let eyes_y = (h as f32 * params.eyes_frac).round() as u32;
        let mouth_x = (left_eye_x as f32
            + (right_eye_x as f32 - left_eye_x as f32) / 2.0
            + mouth_width as f32 * params.mouth_bias)
            .round() as u32;
        let mouth_y = (eyes_y as f32 + circle_size as f32 * params.mouth_drop).round() as u32;
        Self {
            circle_size,
            mouth_width,
            left_eye_x,
            right_eye_x,
            eyes_y,
            mouth_x,
            mouth_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_400_square_worked_example() {
        let p = Placement::compute(400, 400, &StylizeParams::default());
        assert_eq!(p.circle_size, 60);
        assert_eq!(p.mouth_width, 32);
        assert_eq!(p.left_eye_x, 140);
        assert_eq!(p.right_eye_x, 260);
        assert_eq!(p.eyes_y, 128);
        assert_eq!(p.mouth_x, 226); // 140 + 60 + 25.6, rounded
        assert_eq!(p.mouth_y, 176); // 128 + 48
    }

    #[test]
    fn mouth_is_strictly_right_of_the_eye_midpoint() {
        for (w, h) in [(400u32, 400u32), (800, 600), (321, 123), (1920, 1080)] {
            let p = Placement::compute(w, h, &StylizeParams::default());
            let midpoint = (p.left_eye_x + p.right_eye_x) as f32 / 2.0;
            assert!(
                p.mouth_x as f32 > midpoint,
                "{w}x{h}: mouth_x={} midpoint={midpoint}",
                p.mouth_x
            );
        }
    }

    #[test]
    fn fallback_layout_places_like_an_800_600_image() {
        let params = StylizeParams::default();
        let p = Placement::compute(params.fallback_width, params.fallback_height, &params);
        assert_eq!(p.left_eye_x, 280);
        assert_eq!(p.right_eye_x, 520);
        assert_eq!(p.eyes_y, 192);
        assert_eq!(p.circle_size, 120);
        assert_eq!(p.mouth_width, 64);
    }

    #[test]
    fn placement_scales_with_width_not_content() {
        let a = Placement::compute(1000, 500, &StylizeParams::default());
        assert_eq!(a.left_eye_x, 350);
        assert_eq!(a.right_eye_x, 650);
        assert_eq!(a.eyes_y, 160);
    }
}
