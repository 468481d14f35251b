//! Immutable grayscale pixel grid
//!
//! One grid is produced per generation call by the image-loading boundary
//! and read concurrently-safely by every page scan; no component mutates it.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};

/// Width×height grid of grayscale intensities (0 = black, 255 = white)
///
/// Rows index the vertical axis: `sample(x, y)` reads column `x` at row `y`,
/// with row 0 at the top of the image.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    samples: Array2<u8>,
}

impl PixelGrid {
    /// Build a grid from row-major samples
    ///
    /// # Errors
    ///
    /// Returns an error if the sample count is not exactly `width * height`.
    pub fn from_samples(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        let count = samples.len();
        let grid = Array2::from_shape_vec((height, width), samples).map_err(|source| {
            invalid_parameter(
                "samples",
                &count,
                &format!("expected {width} x {height} row-major samples: {source}"),
            )
        })?;
        Ok(Self { samples: grid })
    }

    /// Wrap an already shaped intensity array
    pub const fn from_array(samples: Array2<u8>) -> Self {
        Self { samples }
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.samples.dim().1
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.samples.dim().0
    }

    /// Intensity at column `x`, row `y`, or `None` outside the grid
    pub fn sample(&self, x: usize, y: usize) -> Option<u8> {
        self.samples.get([y, x]).copied()
    }
}

/// Image column sampled for a physical page
///
/// Page `page` (0-indexed) out of `total_pages` maps to
/// `floor(page * (width / total_pages))`, spreading the pages evenly across
/// the image width. A zero page count yields column 0.
pub fn column_for_page(page: usize, total_pages: usize, width: usize) -> usize {
    if total_pages == 0 {
        return 0;
    }
    ((page as f64) * (width as f64 / total_pages as f64)).floor() as usize
}
