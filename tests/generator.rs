//! Validates parameter checking, report assembly, and run statistics

use bookfold::io::error::PatternError;
use bookfold::measure::precision::Precision;
use bookfold::measure::units::LengthUnit;
use bookfold::pattern::generator::{GenerationParams, generate, validate};
use bookfold::pattern::modes::{ModeKind, ShadowPeriod};
use bookfold::raster::PixelGrid;

fn grid_from(width: usize, height: usize, samples: Vec<u8>) -> PixelGrid {
    let Ok(grid) = PixelGrid::from_samples(width, height, samples) else {
        unreachable!("sample count matches the grid dimensions");
    };
    grid
}

/// White grid with one black band from 25% to 50% of its height
fn banded_grid(width: usize, height: usize) -> PixelGrid {
    let mut samples = vec![255_u8; width * height];
    for row in height / 4..height / 2 {
        for col in 0..width {
            if let Some(sample) = samples.get_mut(row * width + col) {
                *sample = 0;
            }
        }
    }
    grid_from(width, height, samples)
}

fn parameter_of(result: &Result<(), PatternError>) -> &'static str {
    match result {
        Err(PatternError::InvalidParameter { parameter, .. }) => *parameter,
        other => unreachable!("expected an invalid parameter error, got {other:?}"),
    }
}

#[test]
fn test_defaults_fill_optional_parameters() {
    let params = GenerationParams::new(ModeKind::Inverted, 300, 21.0);
    assert_eq!(params.threshold, 128);
    assert_eq!(params.height_unit, LengthUnit::Centimeters);
    assert_eq!(params.precision, Precision::TenthMillimeter);
    assert_eq!(params.shadow_period, ShadowPeriod::OneToOne);
    assert!((params.edge_width_cm - 1.0).abs() < 1e-9);
    assert!(validate(&params).is_ok());
}

#[test]
fn test_validate_rejects_nonpositive_height() {
    let params = GenerationParams::new(ModeKind::Inverted, 300, -3.5);
    assert_eq!(parameter_of(&validate(&params)), "page_height");

    let params = GenerationParams::new(ModeKind::Inverted, 300, 0.0);
    assert_eq!(parameter_of(&validate(&params)), "page_height");

    let params = GenerationParams::new(ModeKind::Inverted, 300, f64::NAN);
    assert_eq!(parameter_of(&validate(&params)), "page_height");
}

#[test]
fn test_validate_rejects_empty_book() {
    let params = GenerationParams::new(ModeKind::Inverted, 0, 21.0);
    assert_eq!(parameter_of(&validate(&params)), "last_page");
}

#[test]
fn test_validate_checks_combi_edges_fit() {
    let mut params = GenerationParams::new(ModeKind::Combi, 100, 20.0);

    params.edge_width_cm = 10.0;
    assert_eq!(parameter_of(&validate(&params)), "edge_width");

    params.edge_width_cm = 0.0;
    assert_eq!(parameter_of(&validate(&params)), "edge_width");

    params.edge_width_cm = 9.9;
    assert!(validate(&params).is_ok());

    // On a 4 cm page a 2.5 cm edge cannot fit twice, a 1 cm edge can
    let mut small = GenerationParams::new(ModeKind::Combi, 100, 4.0);
    small.edge_width_cm = 2.5;
    assert_eq!(parameter_of(&validate(&small)), "edge_width");
    small.edge_width_cm = 1.0;
    assert!(validate(&small).is_ok());

    // Other modes never consult the edge width
    let mut inverted = GenerationParams::new(ModeKind::Inverted, 100, 20.0);
    inverted.edge_width_cm = 50.0;
    assert!(validate(&inverted).is_ok());
}

#[test]
fn test_generate_reports_validation_failures() {
    let grid = grid_from(2, 2, vec![255_u8; 4]);
    let params = GenerationParams::new(ModeKind::Embossed, 10, 0.0);
    let report = generate(&grid, &params);
    assert!(!report.success);
    assert!(report.pages.is_none());
    assert_eq!(report.mode, ModeKind::Embossed);
    assert!(report.message.contains("page_height"));
}

#[test]
fn test_generate_produces_one_pattern_per_physical_page() {
    let grid = banded_grid(16, 40);
    let report = generate(&grid, &GenerationParams::new(ModeKind::Inverted, 301, 20.0));
    assert!(report.success);
    let Some(pages) = &report.pages else {
        unreachable!("a successful report carries pages");
    };
    // 301 numbered pages fill 151 physical sheets
    assert_eq!(pages.len(), 151);
    assert!(pages.iter().all(|page| page.has_content));
    assert!(report.message.contains("151 pages"));
}

#[test]
fn test_generate_message_counts_folded_pages_and_zones() {
    // Left half black: the first two of four pages fold, the rest are blank
    let width = 8;
    let height = 8;
    let mut samples = vec![255_u8; width * height];
    for row in 0..height {
        for col in 0..width / 2 {
            if let Some(sample) = samples.get_mut(row * width + col) {
                *sample = 0;
            }
        }
    }
    let grid = grid_from(width, height, samples);

    let report = generate(&grid, &GenerationParams::new(ModeKind::Inverted, 8, 16.0));
    assert!(report.success);
    assert!(report.message.contains("Inverted pattern across 4 pages"));
    assert!(report.message.contains("2 with folds, 2 zones"));
}

#[test]
fn test_inch_heights_scale_the_marks() {
    let grid = banded_grid(4, 40);
    let mut params = GenerationParams::new(ModeKind::Inverted, 2, 10.0);
    params.height_unit = LengthUnit::Inches;

    let report = generate(&grid, &params);
    let Some(pages) = &report.pages else {
        unreachable!("a successful report carries pages");
    };
    let Some(zone) = pages.first().and_then(|page| page.zones.first()) else {
        unreachable!("the band produces one zone");
    };
    // 25% through 50% of 25.4 cm
    assert!((zone.start_cm - 6.35).abs() < 1e-9);
    assert!((zone.end_cm - 12.7).abs() < 1e-9);
}

#[test]
fn test_reports_carry_a_timestamp() {
    let before = std::time::SystemTime::now();
    let grid = banded_grid(4, 8);
    let report = generate(&grid, &GenerationParams::new(ModeKind::Mmf, 4, 20.0));
    assert!(report.processed_at >= before);
}
