//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Values are interpreted as normalized intensity in [0, 1]. Sprite layers
//! use the same representation with premultiplied alpha: a white glow at
//! coverage `a` is simply the value `a`.

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized (fully transparent/black) buffer.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a slice.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Borrow row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Set every pixel to `v`.
    pub fn fill(&mut self, v: f32) {
        self.data.fill(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut img = ImageF32::new(4, 3);
        img.set(2, 1, 0.5);
        assert_eq!(img.idx(2, 1), 6);
        assert_eq!(img.get(2, 1), 0.5);
        assert_eq!(img.row(1)[2], 0.5);
    }

    #[test]
    fn fill_sets_all_pixels() {
        let mut img = ImageF32::new(3, 2);
        img.fill(0.25);
        assert!(img.data.iter().all(|&v| v == 0.25));
    }
}
