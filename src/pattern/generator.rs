//! Orchestration of a single generation call
//!
//! The generator validates parameters, resolves them into a mode context,
//! runs the selected strategy over the pixel grid, and wraps the result in a
//! report. Reports carry failures as data rather than errors so batch
//! callers can keep processing the remaining inputs.

use std::time::SystemTime;

use crate::io::configuration::{DEFAULT_EDGE_WIDTH_CM, DEFAULT_THRESHOLD};
use crate::io::error::{Result, invalid_parameter};
use crate::measure::precision::Precision;
use crate::measure::units::{LengthUnit, physical_pages, to_cm};
use crate::pattern::modes::{ModeContext, ModeKind, PagePattern, ShadowPeriod, strategy};
use crate::raster::PixelGrid;

/// User-supplied configuration for one generation call
#[derive(Clone, Copy, Debug)]
pub struct GenerationParams {
    /// Selected mode strategy
    pub mode: ModeKind,
    /// Intensity cutoff; samples below it count as dark
    pub threshold: u8,
    /// Last numbered page of the book
    pub last_page: u32,
    /// Physical page height, measured in `height_unit`
    pub page_height: f64,
    /// Unit `page_height` is measured in
    pub height_unit: LengthUnit,
    /// Snapping grid for emitted marks
    pub precision: Precision,
    /// Skip period, used by Shadow Fold only
    pub shadow_period: ShadowPeriod,
    /// Edge fold width in centimeters, used by Combi only
    pub edge_width_cm: f64,
}

impl GenerationParams {
    /// Parameters for a book measured in centimeters, with default
    /// threshold, precision, shadow period, and edge width.
    pub const fn new(mode: ModeKind, last_page: u32, page_height: f64) -> Self {
        Self {
            mode,
            threshold: DEFAULT_THRESHOLD,
            last_page,
            page_height,
            height_unit: LengthUnit::Centimeters,
            precision: Precision::TenthMillimeter,
            shadow_period: ShadowPeriod::OneToOne,
            edge_width_cm: DEFAULT_EDGE_WIDTH_CM,
        }
    }

    /// Page height converted to centimeters
    pub const fn page_height_cm(&self) -> f64 {
        to_cm(self.page_height, self.height_unit)
    }
}

/// Outcome of one generation call
#[derive(Clone, Debug)]
pub struct GenerationReport {
    /// Whether generation completed
    pub success: bool,
    /// Summary of the run, or the failure reason
    pub message: String,
    /// Mode the call ran under
    pub mode: ModeKind,
    /// One pattern per physical page, present only on success
    pub pages: Option<Vec<PagePattern>>,
    /// Wall-clock time the report was assembled
    pub processed_at: SystemTime,
}

impl GenerationReport {
    /// Failure report carrying no pattern data.
    pub fn failure(mode: ModeKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            mode,
            pages: None,
            processed_at: SystemTime::now(),
        }
    }
}

/// Checks that the parameters describe a physically realizable pattern.
///
/// The threshold needs no check here because its type already spans exactly
/// the valid intensity range.
///
/// # Errors
///
/// Returns an invalid parameter error when the page height is not a positive
/// finite length, when the book has no pages, or when Combi edge folds would
/// not fit on the page.
pub fn validate(params: &GenerationParams) -> Result<()> {
    if !params.page_height.is_finite() || params.page_height <= 0.0 {
        return Err(invalid_parameter(
            "page_height",
            &params.page_height,
            &"page height must be positive",
        ));
    }
    if params.last_page == 0 {
        return Err(invalid_parameter(
            "last_page",
            &params.last_page,
            &"at least one numbered page is required",
        ));
    }
    if params.mode == ModeKind::Combi {
        let page_height_cm = params.page_height_cm();
        if !params.edge_width_cm.is_finite() || params.edge_width_cm <= 0.0 {
            return Err(invalid_parameter(
                "edge_width",
                &params.edge_width_cm,
                &"edge width must be positive",
            ));
        }
        if params.edge_width_cm * 2.0 >= page_height_cm {
            return Err(invalid_parameter(
                "edge_width",
                &params.edge_width_cm,
                &format!("two edge folds of this width leave no center on a {page_height_cm} cm page"),
            ));
        }
    }
    Ok(())
}

/// Runs the selected mode over a pixel grid and reports the outcome.
///
/// Validation failures come back as a failure report rather than an error,
/// in the same shape image decode failures take at the I/O boundary. Once
/// parameters pass validation the run itself cannot fail.
pub fn generate(grid: &PixelGrid, params: &GenerationParams) -> GenerationReport {
    if let Err(error) = validate(params) {
        return GenerationReport::failure(params.mode, error.to_string());
    }

    let context = ModeContext {
        total_pages: physical_pages(params.last_page) as usize,
        page_height_cm: params.page_height_cm(),
        threshold: params.threshold,
        precision: params.precision,
        shadow_period: params.shadow_period,
        edge_width_cm: params.edge_width_cm,
    };

    let pages = strategy(params.mode)(grid, &context);

    let mode = params.mode;
    let total_pages = context.total_pages;
    let folded = pages.iter().filter(|page| page.has_content).count();
    let zone_count: usize = pages.iter().map(|page| page.zones.len()).sum();
    let message =
        format!("{mode} pattern across {total_pages} pages: {folded} with folds, {zone_count} zones");

    GenerationReport {
        success: true,
        message,
        mode,
        pages: Some(pages),
        processed_at: SystemTime::now(),
    }
}
