//! Binary masks and their rasterization from canonical rectangles.

mod raster;

pub use raster::{rasterize, PixelBounds, EDGE_TOLERANCE};

/// Largest mask, in pixels, that [`pixel_count`] accepts (a 32768 x 32768
/// frame).
pub const MAX_PIXELS: usize = 1 << 30;

/// Returns `width * height` if it is non-zero and at most [`MAX_PIXELS`].
pub fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&count| count > 0 && count <= MAX_PIXELS)
}

/// A `width x height` grid of masked / unmasked pixels, stored row-major.
///
/// Masked pixels are the ones the inpainting model should repaint.
#[derive(Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Mask {
    /// Creates a mask with no pixel set.
    ///
    /// Sizes are not checked; use [`pixel_count`] first for untrusted input.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns whether pixel `(x, y)` is masked; out-of-grid pixels are not.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[self.offset(x, y)]
    }

    /// Sets every pixel inside `bounds`.
    ///
    /// Bounds must already be clamped to this mask's dimensions.
    pub fn fill(&mut self, bounds: &PixelBounds) {
        debug_assert!(bounds.x_max <= self.width && bounds.y_max <= self.height);
        for y in bounds.y_min..bounds.y_max {
            let start = self.offset(bounds.x_min, y);
            let end = self.offset(bounds.x_max, y);
            self.pixels[start..end].fill(true);
        }
    }

    /// Returns row `y` as a slice of `width` flags.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[bool] {
        let start = self.offset(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Number of masked pixels.
    pub fn masked_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Returns true if no pixel is masked.
    pub fn is_empty(&self) -> bool {
        !self.pixels.iter().any(|&p| p)
    }

    /// Pixel-wise OR of two masks of equal size.
    ///
    /// Returns `None` when the dimensions differ.
    pub fn union(&self, other: &Mask) -> Option<Mask> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        let pixels = self
            .pixels
            .iter()
            .zip(&other.pixels)
            .map(|(a, b)| *a || *b)
            .collect();
        Some(Mask {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// One byte per pixel, row-major: 255 where masked, 0 elsewhere.
    pub fn to_gray_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&p| if p { u8::MAX } else { 0 })
            .collect()
    }
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mask")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("masked", &self.masked_count())
            .finish()
    }
}
