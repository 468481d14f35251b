//! Physical measurement utilities for fold marks

/// Rounding of lengths to a snapping grid and display precision
pub mod precision;
/// Length unit conversion and physical page arithmetic
pub mod units;
