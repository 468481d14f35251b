//! Image decoding into grayscale pixel grids

use std::path::Path;

use ndarray::Array2;

use crate::io::error::{PatternError, Result};
use crate::pattern::generator::{GenerationParams, GenerationReport, generate, validate};
use crate::raster::PixelGrid;

// Rec. 601 luma weights
/// Luminance weight of the red channel
pub const LUMA_RED: f64 = 0.299;
/// Luminance weight of the green channel
pub const LUMA_GREEN: f64 = 0.587;
/// Luminance weight of the blue channel
pub const LUMA_BLUE: f64 = 0.114;

/// Perceived brightness of an RGB sample on the 8-bit scale
pub fn luminance(red: u8, green: u8, blue: u8) -> u8 {
    let luma = LUMA_RED.mul_add(
        f64::from(red),
        LUMA_GREEN.mul_add(f64::from(green), LUMA_BLUE * f64::from(blue)),
    );
    luma.round() as u8
}

/// Decodes an image file into a grayscale pixel grid.
///
/// Color content is reduced to its luminance so that colored artwork
/// thresholds the way a viewer perceives its brightness.
///
/// # Errors
///
/// Returns an image load error when the file cannot be read or decoded.
pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid> {
    let rgb = image::open(path)
        .map_err(|e| PatternError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgb8();

    let (width, height) = rgb.dimensions();
    let mut samples = Array2::zeros((height as usize, width as usize));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [red, green, blue] = pixel.0;
        if let Some(sample) = samples.get_mut((y as usize, x as usize)) {
            *sample = luminance(red, green, blue);
        }
    }
    Ok(PixelGrid::from_array(samples))
}

/// Runs pattern generation against an image file.
///
/// Parameters are validated before the file is opened, so an invalid set
/// reports its validation failure without any decode work. Decode failures
/// fold into a failure report of the same shape, so batch callers see one
/// outcome type per file.
pub fn generate_from_path(path: &Path, params: &GenerationParams) -> GenerationReport {
    if let Err(error) = validate(params) {
        return GenerationReport::failure(params.mode, error.to_string());
    }
    match load_pixel_grid(path) {
        Ok(grid) => generate(&grid, params),
        Err(error) => {
            let mode = params.mode;
            GenerationReport::failure(mode, format!("{mode} generation failed: {error}"))
        }
    }
}
