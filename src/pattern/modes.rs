//! Mode strategies and the page pattern they produce
//!
//! Every mode shares the same shape: pick one column per physical page, scan
//! it for target runs, then post-process the resulting zones. Inverted folds
//! dark content, Embossed folds the light background, Combi adds fixed edge
//! folds around a center scan, Shadow Fold skips pages on a period, and MMF
//! merges each page into a single cut-free zone.

use std::fmt;
use std::ops::Range;

use crate::io::error::{Result, unknown_mode};
use crate::measure::precision::Precision;
use crate::pattern::zones::{ColumnScan, FoldZone};
use crate::raster::PixelGrid;
use crate::raster::grid::column_for_page;

/// Pattern generation mode selected by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    /// Fold dark content against a light background
    Inverted,
    /// Fold the light background around dark content
    Embossed,
    /// Fixed edge folds plus dark content detected between them
    Combi,
    /// Dark content with periodic pages left unfolded
    ShadowFold,
    /// Measure, mark and fold: one merged zone per page, no cuts
    Mmf,
}

impl ModeKind {
    /// Every supported mode, in presentation order
    pub const ALL: [Self; 5] = [
        Self::Inverted,
        Self::Embossed,
        Self::Combi,
        Self::ShadowFold,
        Self::Mmf,
    ];

    /// Parses a mode from its command-line name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::PatternError::UnknownMode`] when the name
    /// matches no supported mode.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "inverted" => Ok(Self::Inverted),
            "embossed" => Ok(Self::Embossed),
            "combi" => Ok(Self::Combi),
            "shadow" | "shadowfold" | "shadow-fold" => Ok(Self::ShadowFold),
            "mmf" => Ok(Self::Mmf),
            _ => Err(unknown_mode(&name)),
        }
    }

    /// Display name used in reports and charts
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inverted => "Inverted",
            Self::Embossed => "Embossed",
            Self::Combi => "Combi",
            Self::ShadowFold => "Shadow Fold",
            Self::Mmf => "MMF",
        }
    }

    /// Whether this mode folds dark samples rather than light ones
    pub const fn detects_dark(self) -> bool {
        !matches!(self, Self::Embossed)
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skip period for Shadow Fold patterns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadowPeriod {
    /// Alternate folded and skipped pages
    #[default]
    OneToOne,
    /// Two folded pages followed by one skipped page
    TwoToOne,
}

impl ShadowPeriod {
    /// Parses a period from its `folded:skipped` label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1:1" => Some(Self::OneToOne),
            "2:1" => Some(Self::TwoToOne),
            _ => None,
        }
    }

    /// The `folded:skipped` label this period parses from
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneToOne => "1:1",
            Self::TwoToOne => "2:1",
        }
    }

    /// Whether the zero-indexed page at `page_index` is left unfolded
    pub const fn skips_page(self, page_index: usize) -> bool {
        match self {
            Self::OneToOne => page_index % 2 == 1,
            Self::TwoToOne => (page_index + 1) % 3 == 0,
        }
    }
}

/// Resolved inputs shared by every mode strategy
#[derive(Clone, Copy, Debug)]
pub struct ModeContext {
    /// Number of physical pages to produce patterns for
    pub total_pages: usize,
    /// Page height in centimeters after unit conversion
    pub page_height_cm: f64,
    /// Intensity cutoff separating dark from light samples
    pub threshold: u8,
    /// Snapping grid for emitted marks
    pub precision: Precision,
    /// Skip period, consulted by Shadow Fold only
    pub shadow_period: ShadowPeriod,
    /// Edge fold width in centimeters, consulted by Combi only
    pub edge_width_cm: f64,
}

impl ModeContext {
    const fn scanner(&self, detect_dark: bool) -> ColumnScan {
        ColumnScan {
            threshold: self.threshold,
            page_height_cm: self.page_height_cm,
            precision: self.precision,
            detect_dark,
        }
    }
}

/// Fold plan for one physical page
#[derive(Clone, Debug)]
pub struct PagePattern {
    /// One-indexed physical page number
    pub page: usize,
    /// Zones ordered by start mark, top to bottom
    pub zones: Vec<FoldZone>,
    /// Whether the page carries any fold work
    pub has_content: bool,
    /// Whether a periodic mode left this page unfolded
    pub skipped: bool,
}

impl PagePattern {
    fn detected(page: usize, zones: Vec<FoldZone>) -> Self {
        let has_content = !zones.is_empty();
        Self {
            page,
            zones,
            has_content,
            skipped: false,
        }
    }
}

/// Strategy signature every mode implements
pub type ModeFn = fn(&PixelGrid, &ModeContext) -> Vec<PagePattern>;

/// Looks up the strategy function for a mode.
pub const fn strategy(kind: ModeKind) -> ModeFn {
    match kind {
        ModeKind::Inverted => inverted,
        ModeKind::Embossed => embossed,
        ModeKind::Combi => combi,
        ModeKind::ShadowFold => shadow_fold,
        ModeKind::Mmf => mmf,
    }
}

/// Scans one full column per page with the polarity of the given mode.
fn detect_pages(grid: &PixelGrid, context: &ModeContext, kind: ModeKind) -> Vec<PagePattern> {
    let scan = context.scanner(kind.detects_dark());
    (0..context.total_pages)
        .map(|index| {
            let column = column_for_page(index, context.total_pages, grid.width());
            PagePattern::detected(index + 1, scan.scan(grid, column))
        })
        .collect()
}

fn inverted(grid: &PixelGrid, context: &ModeContext) -> Vec<PagePattern> {
    detect_pages(grid, context, ModeKind::Inverted)
}

fn embossed(grid: &PixelGrid, context: &ModeContext) -> Vec<PagePattern> {
    detect_pages(grid, context, ModeKind::Embossed)
}

fn shadow_fold(grid: &PixelGrid, context: &ModeContext) -> Vec<PagePattern> {
    let mut pages = detect_pages(grid, context, ModeKind::ShadowFold);
    for (index, page) in pages.iter_mut().enumerate() {
        if context.shadow_period.skips_page(index) {
            page.zones.clear();
            page.has_content = false;
            page.skipped = true;
        }
    }
    pages
}

fn combi(grid: &PixelGrid, context: &ModeContext) -> Vec<PagePattern> {
    let scan = context.scanner(ModeKind::Combi.detects_dark());
    let page_height = context.page_height_cm;
    let edge = context.edge_width_cm;
    let rows = center_rows(grid.height(), page_height, edge);

    (0..context.total_pages)
        .map(|index| {
            let column = column_for_page(index, context.total_pages, grid.width());
            let mut zones = vec![
                FoldZone::edge(0.0, edge, context.precision),
                FoldZone::edge(page_height - edge, page_height, context.precision),
            ];
            zones.extend(scan.scan_rows(grid, column, rows.clone()));
            zones.sort_by(|a, b| a.start_cm.total_cmp(&b.start_cm));
            PagePattern {
                page: index + 1,
                zones,
                has_content: true,
                skipped: false,
            }
        })
        .collect()
}

/// Rows whose full pixel span lies inside the center window between the two
/// edge folds.
fn center_rows(grid_height: usize, page_height_cm: f64, edge_width_cm: f64) -> Range<usize> {
    if grid_height == 0 {
        return 0..0;
    }
    let row_span = page_height_cm / grid_height as f64;
    let first = (edge_width_cm / row_span).ceil() as usize;
    let last = ((page_height_cm - edge_width_cm) / row_span).floor() as usize;
    first..last.min(grid_height)
}

fn mmf(grid: &PixelGrid, context: &ModeContext) -> Vec<PagePattern> {
    let mut pages = detect_pages(grid, context, ModeKind::Mmf);
    for page in &mut pages {
        let span = page.zones.first().zip(page.zones.last());
        if let Some((first, last)) = span.map(|(a, b)| (a.start_cm, b.end_cm)) {
            page.zones = vec![FoldZone::from_marks(first, last, context.precision)];
        }
    }
    pages
}
