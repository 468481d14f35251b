//! Rounding of fold marks to a snapping grid
//!
//! Marks are snapped to the requested millimeter grid first, then normalized
//! to two decimal places for display and storage. The two-decimal step is a
//! fixed global policy independent of the selected grid, which keeps chart
//! output uniform across precision settings.

const MM_PER_CM: f64 = 10.0;

/// Snapping grid applied to all physical measurements before reporting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// Snap to the nearest 0.1 mm
    #[default]
    TenthMillimeter,
    /// Snap to the nearest 0.5 mm
    HalfMillimeter,
    /// Snap to the nearest whole millimeter
    Millimeter,
    /// No snapping beyond the two-decimal display policy
    Exact,
}

impl Precision {
    /// Parse a precision from its label (`0.1mm`, `0.5mm`, `1mm`, `exact`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "0.1mm" => Some(Self::TenthMillimeter),
            "0.5mm" => Some(Self::HalfMillimeter),
            "1mm" => Some(Self::Millimeter),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }

    /// Label used in argument parsing and chart output
    pub const fn label(self) -> &'static str {
        match self {
            Self::TenthMillimeter => "0.1mm",
            Self::HalfMillimeter => "0.5mm",
            Self::Millimeter => "1mm",
            Self::Exact => "exact",
        }
    }

    /// Grid step in millimeters, or `None` for exact passthrough
    const fn grid_mm(self) -> Option<f64> {
        match self {
            Self::TenthMillimeter => Some(0.1),
            Self::HalfMillimeter => Some(0.5),
            Self::Millimeter => Some(1.0),
            Self::Exact => None,
        }
    }
}

/// Snap a centimeter value to the precision grid
///
/// Converts to millimeters, rounds to the nearest grid step, and converts
/// back. `Precision::Exact` passes the value through unchanged.
pub fn round_cm(value_cm: f64, precision: Precision) -> f64 {
    precision.grid_mm().map_or(value_cm, |step| {
        let mm = value_cm * MM_PER_CM;
        (mm / step).round() * step / MM_PER_CM
    })
}

/// Snap a centimeter value and normalize it to two decimal places
///
/// Idempotent: formatting an already formatted value returns it unchanged,
/// because every grid step is itself representable at two decimals.
pub fn format_cm(value_cm: f64, precision: Precision) -> f64 {
    let snapped = round_cm(value_cm, precision);
    (snapped * 100.0).round() / 100.0
}
