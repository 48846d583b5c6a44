//! Serializable per-invocation diagnostics for the stylization pipeline.

use serde::Serialize;

/// Wall-clock timings for each pipeline stage, in milliseconds.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub decode_ms: f64,
    pub tone_ms: f64,
    pub overlays_ms: f64,
    pub composite_ms: f64,
    pub encode_ms: f64,
    pub total_ms: f64,
}

/// Report produced alongside the stylized PNG.
///
/// `canvas_*` are the decoded pixel dimensions (the output always matches
/// them); `layout_*` are the dimensions used for overlay sizing and
/// placement, which differ from the canvas only when the header probe failed
/// and the pipeline fell back to its default dimensions.
#[derive(Clone, Debug, Serialize)]
pub struct StylizeReport {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub layout_width: u32,
    pub layout_height: u32,
    pub used_fallback_dimensions: bool,
    pub timings: TimingBreakdown,
}
