//! Length unit conversion and physical page arithmetic
//!
//! All fold marks are computed and stored in centimeters; inputs given in
//! inches are converted once at the start of a generation call.

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Unit in which a user-supplied length is expressed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthUnit {
    /// Metric centimeters
    #[default]
    Centimeters,
    /// Imperial inches
    Inches,
}

impl LengthUnit {
    /// Parse a unit from its short label (`cm` or `in`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "cm" => Some(Self::Centimeters),
            "in" => Some(Self::Inches),
            _ => None,
        }
    }

    /// Short label used in argument parsing and chart output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

/// Convert a length to centimeters
pub const fn to_cm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Centimeters => value,
        LengthUnit::Inches => value * CM_PER_INCH,
    }
}

/// Number of physical sheets holding `last_page` logical pages
///
/// Each physical sheet carries two logical page numbers (recto and verso),
/// so an odd last page number still occupies a full sheet.
pub const fn physical_pages(last_page: u32) -> u32 {
    last_page.div_ceil(2)
}
