//! Plain-text fold charts rendered from generation reports
//!
//! A chart is what actually sits next to the book while folding: one line
//! per zone with start and end marks in centimeters, measured from the top
//! edge of the page.

use std::fmt::Write;

use crate::measure::precision::Precision;
use crate::pattern::generator::GenerationReport;
use crate::pattern::modes::PagePattern;
use crate::pattern::zones::{FoldZone, invert_zones};

/// Presentation settings for a rendered chart
#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    /// Page height in centimeters, used to complement zones into gaps
    pub page_height_cm: f64,
    /// Snapping grid the pattern was generated with
    pub precision: Precision,
    /// Append the unfolded gaps of each page below its zones
    pub show_gaps: bool,
}

/// Renders a report as a plain-text fold chart.
///
/// Failure reports produce a short notice carrying the failure message;
/// success reports list every page with its marks, one zone per line.
pub fn render_chart(report: &GenerationReport, options: &ChartOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} fold chart", report.mode);
    let _ = writeln!(out, "{}", report.message);

    let Some(pages) = &report.pages else {
        return out;
    };

    let _ = writeln!(
        out,
        "page height {:.2} cm, precision {}",
        options.page_height_cm,
        options.precision.label()
    );
    let _ = writeln!(out);
    for page in pages {
        render_page(&mut out, page, options);
    }
    out
}

fn render_page(out: &mut String, page: &PagePattern, options: &ChartOptions) {
    let label = format!("page {:>4}", page.page);
    let pad = " ".repeat(label.len());

    if page.skipped {
        let _ = writeln!(out, "{label}  skipped");
        return;
    }
    if page.zones.is_empty() {
        let _ = writeln!(out, "{label}  no folds");
    }
    for (index, zone) in page.zones.iter().enumerate() {
        let prefix = if index == 0 { &label } else { &pad };
        let _ = writeln!(out, "{prefix}  {}", zone_line(zone));
    }

    if options.show_gaps {
        for gap in invert_zones(&page.zones, options.page_height_cm, options.precision) {
            let _ = writeln!(out, "{pad}  gap {:.2} - {:.2} cm", gap.start_cm, gap.end_cm);
        }
    }
}

fn zone_line(zone: &FoldZone) -> String {
    let marker = if zone.edge_fold { "  edge" } else { "" };
    format!(
        "{:.2} - {:.2} cm  ({:.2} cm){marker}",
        zone.start_cm, zone.end_cm, zone.height_cm
    )
}
