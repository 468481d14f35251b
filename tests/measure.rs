//! Validates unit conversion, physical page arithmetic, and mark snapping

use bookfold::measure::precision::{Precision, format_cm, round_cm};
use bookfold::measure::units::{CM_PER_INCH, LengthUnit, physical_pages, to_cm};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_inches_convert_through_exact_factor() {
    assert_close(to_cm(1.0, LengthUnit::Inches), CM_PER_INCH);
    assert_close(to_cm(8.5, LengthUnit::Inches), 21.59);
    assert_close(to_cm(21.0, LengthUnit::Centimeters), 21.0);
}

#[test]
fn test_unit_labels_parse_case_insensitively() {
    assert_eq!(LengthUnit::from_label("cm"), Some(LengthUnit::Centimeters));
    assert_eq!(LengthUnit::from_label("IN"), Some(LengthUnit::Inches));
    assert_eq!(LengthUnit::from_label("mm"), None);
    assert_eq!(LengthUnit::Centimeters.label(), "cm");
    assert_eq!(LengthUnit::Inches.label(), "in");
}

#[test]
fn test_physical_pages_pair_logical_pages() {
    assert_eq!(physical_pages(10), 5);
    assert_eq!(physical_pages(11), 6);
    assert_eq!(physical_pages(1), 1);
    assert_eq!(physical_pages(300), 150);
    assert_eq!(physical_pages(0), 0);
}

#[test]
fn test_rounding_snaps_to_each_grid() {
    // 4.234 cm is 42.34 mm
    assert_close(round_cm(4.234, Precision::TenthMillimeter), 4.23);
    assert_close(round_cm(4.234, Precision::HalfMillimeter), 4.25);
    assert_close(round_cm(4.234, Precision::Millimeter), 4.2);
    assert_close(round_cm(4.234, Precision::Exact), 4.234);
}

#[test]
fn test_format_normalizes_to_two_decimals() {
    assert_close(format_cm(4.234, Precision::Exact), 4.23);
    assert_close(format_cm(4.236, Precision::Exact), 4.24);
    // Snapping happens before the display normalization
    assert_close(format_cm(4.236, Precision::HalfMillimeter), 4.25);
}

#[test]
fn test_format_is_idempotent() {
    for precision in [
        Precision::TenthMillimeter,
        Precision::HalfMillimeter,
        Precision::Millimeter,
        Precision::Exact,
    ] {
        let once = format_cm(7.777, precision);
        assert_close(format_cm(once, precision), once);
    }
}

#[test]
fn test_precision_labels_round_trip() {
    for precision in [
        Precision::TenthMillimeter,
        Precision::HalfMillimeter,
        Precision::Millimeter,
        Precision::Exact,
    ] {
        assert_eq!(Precision::from_label(precision.label()), Some(precision));
    }
    assert_eq!(Precision::from_label("2mm"), None);
}
