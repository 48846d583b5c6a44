//! Parameters controlling the stylization pipeline.
//!
//! Defaults reproduce the canonical look exactly; every knob exists so the
//! demo config can vary the treatment without code changes.

use serde::Deserialize;

/// Pipeline-wide parameters. All proportions are fractions of the layout
/// width/height resolved in stage 1.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StylizeParams {
    /// Eye circle diameter as a fraction of the layout width.
    pub eye_scale: f32,
    /// Mouth rectangle width as a fraction of the layout width.
    pub mouth_scale: f32,
    /// Gaussian stddev for the eye glow.
    pub eye_blur_sigma: f32,
    /// Gaussian stddev for the mouth glow.
    pub mouth_blur_sigma: f32,
    /// How many blurred copies are stacked beneath the sharp shape.
    pub glow_passes: u32,
    /// Horizontal position of the left eye sprite (fraction of width).
    pub left_eye_frac: f32,
    /// Horizontal position of the right eye sprite (fraction of width).
    pub right_eye_frac: f32,
    /// Vertical position of both eye sprites (fraction of height).
    pub eyes_frac: f32,
    /// Rightward bias of the mouth from the eye midpoint, in mouth widths.
    pub mouth_bias: f32,
    /// Vertical drop of the mouth below the eyes, in eye diameters.
    pub mouth_drop: f32,
    /// Gradient stop at the top row (0 = black).
    pub gradient_top: u8,
    /// Gradient stop at the bottom row.
    pub gradient_bottom: u8,
    /// Layout width assumed when header metadata is unreadable.
    pub fallback_width: u32,
    /// Layout height assumed when header metadata is unreadable.
    pub fallback_height: u32,
}

impl Default for StylizeParams {
    fn default() -> Self {
        Self {
            eye_scale: 0.15,
            mouth_scale: 0.08,
            eye_blur_sigma: 8.0,
            mouth_blur_sigma: 4.0,
            glow_passes: 3,
            left_eye_frac: 0.35,
            right_eye_frac: 0.65,
            eyes_frac: 0.32,
            mouth_bias: 0.8,
            mouth_drop: 0.80,
            gradient_top: 0x00,
            gradient_bottom: 0x55,
            fallback_width: 800,
            fallback_height: 600,
        }
    }
}
