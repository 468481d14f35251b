//! Pattern-generation engine
//!
//! The engine walks one image column per physical page, converts intensity
//! runs into centimeter fold marks, and hands the page list to a mode
//! strategy for post-processing.

/// Orchestration of a single generation call
pub mod generator;
/// Mode strategies and the page pattern they produce
pub mod modes;
/// Column scanning and zone algebra
pub mod zones;
