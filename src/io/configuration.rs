//! Engine constants and runtime configuration defaults

// Detection settings
/// Default intensity cutoff, the midpoint of the 8-bit range
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Default width of each Combi edge fold in centimeters
pub const DEFAULT_EDGE_WIDTH_CM: f64 = 1.0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to chart output filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
