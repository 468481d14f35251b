//! Command-line interface for batch chart generation from image files

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use crate::io::chart::{ChartOptions, render_chart};
use crate::io::configuration::{DEFAULT_EDGE_WIDTH_CM, DEFAULT_THRESHOLD, OUTPUT_SUFFIX};
use crate::io::error::{PatternError, Result, invalid_parameter, path_error};
use crate::io::image::generate_from_path;
use crate::io::progress::ProgressManager;
use crate::measure::precision::Precision;
use crate::measure::units::{LengthUnit, physical_pages};
use crate::pattern::generator::{GenerationParams, validate};
use crate::pattern::modes::{ModeKind, ShadowPeriod};

#[derive(Parser)]
#[command(name = "bookfold")]
#[command(
    author,
    version,
    about = "Generate book folding charts from raster images"
)]
/// Command-line arguments for the chart generation tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pattern mode: inverted, embossed, combi, shadow, or mmf
    #[arg(short, long, default_value = "inverted")]
    pub mode: String,

    /// Last numbered page of the book
    #[arg(short = 'p', long)]
    pub last_page: u32,

    /// Physical page height, measured from the top edge
    #[arg(short = 'H', long)]
    pub page_height: f64,

    /// Unit the page height is measured in: cm or in
    #[arg(short, long, default_value = "cm")]
    pub unit: String,

    /// Intensity cutoff (0-255); samples below it count as dark
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Mark precision: 0.1mm, 0.5mm, 1mm, or exact
    #[arg(long, default_value = "0.1mm")]
    pub precision: String,

    /// Shadow Fold skip period: 1:1 or 2:1
    #[arg(long, default_value = "1:1")]
    pub period: String,

    /// Combi edge fold width in centimeters
    #[arg(long, default_value_t = DEFAULT_EDGE_WIDTH_CM)]
    pub edge_width: f64,

    /// Append each page's unfolded gaps to the chart
    #[arg(short, long)]
    pub gaps: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the textual arguments into generation parameters
    ///
    /// # Errors
    ///
    /// Returns an error when the mode, unit, precision, or period label is
    /// not recognized.
    pub fn params(&self) -> Result<GenerationParams> {
        let mode = ModeKind::from_name(&self.mode)?;
        let height_unit = LengthUnit::from_label(&self.unit)
            .ok_or_else(|| invalid_parameter("unit", &self.unit, &"expected cm or in"))?;
        let precision = Precision::from_label(&self.precision).ok_or_else(|| {
            invalid_parameter(
                "precision",
                &self.precision,
                &"expected 0.1mm, 0.5mm, 1mm, or exact",
            )
        })?;
        let shadow_period = ShadowPeriod::from_label(&self.period)
            .ok_or_else(|| invalid_parameter("period", &self.period, &"expected 1:1 or 2:1"))?;

        Ok(GenerationParams {
            mode,
            threshold: self.threshold,
            last_page: self.last_page,
            page_height: self.page_height,
            height_unit,
            precision,
            shadow_period,
            edge_width_cm: self.edge_width,
        })
    }
}

/// Orchestrates batch chart generation with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the target is not
    /// usable, or a chart cannot be generated or written.
    pub fn process(&mut self) -> Result<()> {
        let params = self.cli.params()?;
        validate(&params)?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &params)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(path_error(
                    &self.cli.target,
                    "target file must be a PNG or JPEG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_supported_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(
                &self.cli.target,
                "target must be an image file or directory",
            ))
        }
    }

    fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback when skipping files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        params: &GenerationParams,
    ) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path);
        let total_pages = physical_pages(params.last_page) as usize;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, total_pages);
        }

        let report = generate_from_path(input_path, params);
        if !report.success {
            return Err(path_error(input_path, &report.message));
        }

        let options = ChartOptions {
            page_height_cm: params.page_height_cm(),
            precision: params.precision,
            show_gaps: self.cli.gaps,
        };
        let chart = render_chart(&report, &options);

        std::fs::write(&output_path, chart).map_err(|e| PatternError::FileSystem {
            path: output_path.clone(),
            operation: "write chart",
            source: e,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, total_pages, start_time.elapsed());
        }

        Ok(())
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.txt", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
