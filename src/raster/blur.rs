//! Separable Gaussian blur with arbitrary standard deviation.
//!
//! The 1D kernel is sampled from the Gaussian and truncated at ceil(3·sigma)
//! taps on each side, then normalized. Pixels outside the canvas contribute
//! zero: sprite layers are transparent beyond their edges, so energy is
//! allowed to fall off at the border rather than being replicated into it.

use super::ImageF32;

/// Blur `src` with standard deviation `sigma`. A non-positive sigma returns
/// an unmodified copy.
pub fn gaussian(src: &ImageF32, sigma: f32) -> ImageF32 {
    if sigma <= 0.0 || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let taps = kernel(sigma);
    let radius = (taps.len() / 2) as isize;
    let w = src.w;
    let h = src.h;

    // horizontal pass
    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &t) in taps.iter().enumerate() {
                let sx = x as isize + k as isize - radius;
                if sx >= 0 && (sx as usize) < w {
                    acc += t * src.get(sx as usize, y);
                }
            }
            tmp.set(x, y, acc);
        }
    }

    // vertical pass
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &t) in taps.iter().enumerate() {
                let sy = y as isize + k as isize - radius;
                if sy >= 0 && (sy as usize) < h {
                    acc += t * tmp.get(x, sy as usize);
                }
            }
            out.set(x, y, acc);
        }
    }
    out
}

/// Normalized 1D Gaussian taps, `2 * ceil(3 sigma) + 1` of them.
fn kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as isize;
    let mut taps = Vec::with_capacity((2 * radius + 1) as usize);
    for i in -radius..=radius {
        let x = i as f32 / sigma;
        taps.push((-0.5 * x * x).exp());
    }
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}
