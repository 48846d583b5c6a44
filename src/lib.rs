#![doc = include_str!("../README.md")]

pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod overlay;
pub mod raster;
pub mod stylizer;
pub mod tone;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{StylizeReport, TimingBreakdown};
pub use crate::error::ProcessingError;
pub use crate::stylizer::{Placement, StylizeParams, Stylized, Stylizer};

/// Stylize image bytes with the default parameters.
///
/// Convenience wrapper around [`Stylizer::process`] for callers that have no
/// reason to tune anything.
pub fn stylize(bytes: &[u8]) -> Result<Vec<u8>, ProcessingError> {
    Stylizer::new(StylizeParams::default()).process(bytes)
}

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{stylize, ProcessingError, StylizeParams, Stylizer};
}
