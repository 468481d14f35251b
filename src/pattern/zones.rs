//! Column scanning and zone algebra
//!
//! A fold zone is a vertical run of target pixels in one image column,
//! expressed in centimeters on the physical page. The scanner walks a column
//! top to bottom with a two-state machine and closes a zone on the first
//! non-target row, so the end mark always sits one pixel row past the last
//! target sample.

use std::ops::Range;

use crate::measure::precision::{Precision, format_cm};
use crate::raster::PixelGrid;

/// A vertical span of one page to mark, cut, and fold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldZone {
    /// Distance from the page top to the start of the zone, in centimeters
    pub start_cm: f64,
    /// Distance from the page top to the end of the zone, in centimeters
    pub end_cm: f64,
    /// Zone extent, always `end_cm - start_cm` of the snapped marks
    pub height_cm: f64,
    /// Set for the fixed edge folds Combi mode adds to every page
    pub edge_fold: bool,
}

impl FoldZone {
    /// Builds a zone from raw start and end marks.
    ///
    /// Both marks are snapped to the precision grid before the height is
    /// derived, so `height_cm` matches what a reader would compute from the
    /// printed marks.
    pub fn from_marks(start_cm: f64, end_cm: f64, precision: Precision) -> Self {
        let start = format_cm(start_cm, precision);
        let end = format_cm(end_cm, precision);
        Self {
            start_cm: start,
            end_cm: end,
            height_cm: format_cm(end - start, precision),
            edge_fold: false,
        }
    }

    /// Builds a fixed edge fold spanning the given marks.
    pub fn edge(start_cm: f64, end_cm: f64, precision: Precision) -> Self {
        Self {
            edge_fold: true,
            ..Self::from_marks(start_cm, end_cm, precision)
        }
    }
}

/// Scanner position while walking a column top to bottom
enum ScanState {
    /// Between zones, waiting for a target sample
    Idle,
    /// Inside a zone opened at the stored row
    InZone {
        /// First target row of the open zone
        start: usize,
    },
}

/// Per-call scan settings shared by every column of a generation run
#[derive(Clone, Copy, Debug)]
pub struct ColumnScan {
    /// Intensity cutoff separating dark from light samples
    pub threshold: u8,
    /// Physical page height in centimeters
    pub page_height_cm: f64,
    /// Snapping grid for emitted marks
    pub precision: Precision,
    /// Treat samples below the threshold as targets when set, samples at or
    /// above it when clear
    pub detect_dark: bool,
}

impl ColumnScan {
    /// Scans a full column and returns its zones ordered top to bottom.
    ///
    /// A column index outside the grid yields no zones.
    pub fn scan(&self, grid: &PixelGrid, column: usize) -> Vec<FoldZone> {
        self.scan_rows(grid, column, 0..grid.height())
    }

    /// Scans a row sub-range of a column.
    ///
    /// The range is clamped to the grid height. A zone still open when the
    /// range ends is closed at the final row, so content touching the bottom
    /// of the window is never dropped.
    pub fn scan_rows(&self, grid: &PixelGrid, column: usize, rows: Range<usize>) -> Vec<FoldZone> {
        if column >= grid.width() {
            return Vec::new();
        }
        let rows = rows.start..rows.end.min(grid.height());

        let mut zones = Vec::new();
        let mut state = ScanState::Idle;
        for row in rows.clone() {
            let target = grid
                .sample(column, row)
                .is_some_and(|intensity| self.is_target(intensity));
            state = match (state, target) {
                (ScanState::Idle, true) => ScanState::InZone { start: row },
                (ScanState::InZone { start }, false) => {
                    zones.push(self.close(grid.height(), start, row));
                    ScanState::Idle
                }
                (state, _) => state,
            };
        }
        if let ScanState::InZone { start } = state {
            zones.push(self.close(grid.height(), start, rows.end));
        }
        zones
    }

    /// Converts a pixel run `[start_row, end_row)` into a fold zone.
    ///
    /// The end mark uses the exclusive row bound, so a run covering rows
    /// 40..=59 of a 200 row grid maps to 20% through 30% of the page.
    fn close(&self, grid_height: usize, start_row: usize, end_row: usize) -> FoldZone {
        let scale = self.page_height_cm / grid_height as f64;
        FoldZone::from_marks(
            start_row as f64 * scale,
            end_row as f64 * scale,
            self.precision,
        )
    }

    const fn is_target(&self, intensity: u8) -> bool {
        if self.detect_dark {
            intensity < self.threshold
        } else {
            intensity >= self.threshold
        }
    }
}

/// Computes the gaps between consecutive zones of one page.
///
/// The complement runs from the page top through `page_height_cm`, emitting
/// only gaps with strictly positive height. An empty zone list yields a
/// single gap covering the whole page. Zones must be ordered by start mark,
/// which every scanner and mode in this crate guarantees.
pub fn invert_zones(zones: &[FoldZone], page_height_cm: f64, precision: Precision) -> Vec<FoldZone> {
    let page_end = format_cm(page_height_cm, precision);
    let mut gaps = Vec::new();
    let mut cursor = 0.0;
    for zone in zones {
        if zone.start_cm > cursor {
            gaps.push(FoldZone::from_marks(cursor, zone.start_cm, precision));
        }
        cursor = zone.end_cm;
    }
    if page_end > cursor {
        gaps.push(FoldZone::from_marks(cursor, page_end, precision));
    }
    gaps
}
