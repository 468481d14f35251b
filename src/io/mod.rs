//! Input and output boundary around the pattern engine

/// Plain-text fold chart rendering
pub mod chart;
/// Command-line interface and batch file processing
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Image decoding into pixel grids
pub mod image;
/// Multi-file progress tracking
pub mod progress;
