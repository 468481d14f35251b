//! Grayscale raster data consumed by the pattern engine

/// Immutable pixel grid and page-to-column mapping
pub mod grid;

pub use grid::PixelGrid;
