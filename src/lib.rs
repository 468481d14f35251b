//! Book folding pattern generation from raster images
//!
//! The engine scans one image column per physical page of a book, converts
//! runs of dark or light pixels into fold zones measured in centimeters, and
//! assembles a per-page folding plan. Different modes reinterpret the same
//! scan: folding the content, folding the background, adding fixed edge
//! folds, skipping pages on a period, or merging each page into one zone.

#![forbid(unsafe_code)]

/// Input/output operations, chart rendering, and error handling
pub mod io;
/// Unit conversion and mark precision
pub mod measure;
/// Zone detection, mode strategies, and the generation orchestrator
pub mod pattern;
/// Grayscale pixel grid storage and page-to-column mapping
pub mod raster;

pub use io::error::{PatternError, Result};
