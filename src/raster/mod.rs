//! Pixel-level primitives the pipeline is assembled from.
//!
//! - `buffer`: owned single-channel f32 raster in row-major layout.
//! - `blur`: separable Gaussian blur with arbitrary sigma.
//! - `blend`: per-channel compositing arithmetic (over, multiply, screen).
//! - `draw`: procedural shape rasterization (circle, rotated rectangle).

pub mod blend;
pub mod blur;
pub mod buffer;
pub mod draw;

pub use self::buffer::ImageF32;
