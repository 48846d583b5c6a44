//! Pipeline orchestrator mapping raw image bytes to stylized PNG bytes.
//!
//! Stages, run as a straight line with no shared state between invocations:
//! 1. Metadata: probe header dimensions, falling back to the configured
//!    defaults when unreadable; decode to a grayscale canvas.
//! 2. Tone: multiply the vertical gradient over the canvas.
//! 3. Overlays: rasterize the glowing eye and mouth sprites.
//! 4. Composite: screen-blend both eyes and the mouth at their placements.
//! 5. Encode: grayscale PNG, same pixel dimensions as the decoded input.
//!
//! Typical usage:
//! ```no_run
//! use doodle_stylizer::{StylizeParams, Stylizer};
//!
//! # fn example(bytes: &[u8]) {
//! let stylizer = Stylizer::new(StylizeParams::default());
//! match stylizer.process(bytes) {
//!     Ok(png) => println!("stylized {} bytes", png.len()),
//!     Err(err) => eprintln!("stylization failed: {err}"),
//! }
//! # }
//! ```

mod options;
mod placement;

pub use options::StylizeParams;
pub use placement::Placement;

use crate::codec;
use crate::diagnostics::{StylizeReport, TimingBreakdown};
use crate::error::ProcessingError;
use crate::overlay;
use crate::raster::blend;
use crate::tone;
use log::debug;
use std::time::Instant;

/// Stylized PNG bytes plus the per-stage report.
#[derive(Clone, Debug)]
pub struct Stylized {
    pub png: Vec<u8>,
    pub report: StylizeReport,
}

/// Deterministic doodle stylizer. Holds only parameters; every `process`
/// call is independent and allocates its own buffers.
#[derive(Clone, Debug, Default)]
pub struct Stylizer {
    params: StylizeParams,
}

impl Stylizer {
    /// Create a stylizer with the supplied parameters.
    pub fn new(params: StylizeParams) -> Self {
        Self { params }
    }

    /// Run the pipeline: image bytes in, PNG bytes out.
    pub fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ProcessingError> {
        Ok(self.process_with_diagnostics(bytes)?.png)
    }

    /// Run the pipeline and capture per-stage timings.
    pub fn process_with_diagnostics(&self, bytes: &[u8]) -> Result<Stylized, ProcessingError> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        // Stage 1: metadata + decode
        let t0 = Instant::now();
        let probed = codec::probe_dimensions(bytes);
        let (layout_w, layout_h) =
            probed.unwrap_or((self.params.fallback_width, self.params.fallback_height));
        let mut canvas = codec::decode_grayscale(bytes)?;
        timings.decode_ms = ms_since(t0);
        debug!(
            "stylize: decoded {}x{} canvas, layout {}x{} (fallback={})",
            canvas.w,
            canvas.h,
            layout_w,
            layout_h,
            probed.is_none()
        );

        // Stage 2: tone mapping
        let t0 = Instant::now();
        tone::gradient_multiply(
            &mut canvas,
            layout_w as usize,
            layout_h as usize,
            self.params.gradient_top,
            self.params.gradient_bottom,
        );
        timings.tone_ms = ms_since(t0);

        // Stages 3-4: overlay sprites
        let t0 = Instant::now();
        let placement = Placement::compute(layout_w, layout_h, &self.params);
        let eye = overlay::eye_sprite(
            placement.circle_size,
            self.params.eye_blur_sigma,
            self.params.glow_passes,
        );
        let mouth = overlay::mouth_sprite(
            placement.mouth_width,
            self.params.mouth_blur_sigma,
            self.params.glow_passes,
        );
        timings.overlays_ms = ms_since(t0);
        debug!(
            "stylize: eyes at ({}, {}) and ({}, {}), mouth at ({}, {})",
            placement.left_eye_x,
            placement.eyes_y,
            placement.right_eye_x,
            placement.eyes_y,
            placement.mouth_x,
            placement.mouth_y
        );

        // Stage 5: composite
        let t0 = Instant::now();
        blend::screen_at(
            &mut canvas,
            &eye,
            placement.left_eye_x as usize,
            placement.eyes_y as usize,
        );
        blend::screen_at(
            &mut canvas,
            &eye,
            placement.right_eye_x as usize,
            placement.eyes_y as usize,
        );
        blend::screen_at(
            &mut canvas,
            &mouth,
            placement.mouth_x as usize,
            placement.mouth_y as usize,
        );
        timings.composite_ms = ms_since(t0);

        // Stage 6: encode
        let t0 = Instant::now();
        let png = codec::encode_png(&canvas)?;
        timings.encode_ms = ms_since(t0);
        timings.total_ms = ms_since(total_start);

        Ok(Stylized {
            png,
            report: StylizeReport {
                canvas_width: canvas.w,
                canvas_height: canvas.h,
                layout_width: layout_w,
                layout_height: layout_h,
                used_fallback_dimensions: probed.is_none(),
                timings,
            },
        })
    }
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
