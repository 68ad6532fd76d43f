// src/plot_config.rs

use std::path::{Path, PathBuf};

use crate::constants::{BASENAME_TRUNCATE_CHARS, PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_analysis::linear_fit::FitKind;
use crate::data_analysis::series_transform::TransformOptions;
use crate::plot_style::StyleLists;

/// Low/high override for one axis. An unset bound is computed from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisLimits {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl AxisLimits {
    pub fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self { low, high }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegendPosition {
    /// Inside the plot, upper right.
    #[default]
    Best,
    /// Centered above the data.
    UpperCenter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Vector page with a transparent background.
    #[default]
    Pdf,
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// How the output name is derived when no plot name is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BasenameStrategy {
    /// Drop the last four characters of the first input path (`run.xvg` -> `run`).
    #[default]
    TruncateFour,
    /// Drop the real extension, whatever its length.
    FileStem,
}

/// Everything one run needs, resolved once from the command line and shared
/// read-only by every stage.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub input_files: Vec<PathBuf>,
    pub plot_name: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: AxisLimits,
    pub y_limits: AxisLimits,
    pub transform: TransformOptions,
    pub stdev_column: Option<usize>,
    pub styles: StyleLists,
    pub legend_position: LegendPosition,
    pub basename_strategy: BasenameStrategy,
    pub output_format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

impl PlotConfig {
    /// A config with defaults for everything but the input files.
    pub fn new(input_files: Vec<PathBuf>) -> Self {
        Self {
            input_files,
            plot_name: None,
            x_label: None,
            y_label: None,
            x_limits: AxisLimits::default(),
            y_limits: AxisLimits::default(),
            transform: TransformOptions::default(),
            stdev_column: None,
            styles: StyleLists::default(),
            legend_position: LegendPosition::default(),
            basename_strategy: BasenameStrategy::default(),
            output_format: OutputFormat::default(),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }

    pub fn fit(&self) -> FitKind {
        self.transform.fit
    }

    /// Output file name without extension.
    pub fn output_basename(&self) -> String {
        if let Some(name) = &self.plot_name {
            return name.clone();
        }
        match self.input_files.first() {
            Some(first) => derive_basename(first, self.basename_strategy),
            None => String::new(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}.{}",
            self.output_basename(),
            self.output_format.extension()
        ))
    }
}

/// Basename from an input path. The default strategy is a fixed-width cut
/// that assumes a three-letter extension; it keeps any directory part.
pub fn derive_basename(path: &Path, strategy: BasenameStrategy) -> String {
    match strategy {
        BasenameStrategy::TruncateFour => {
            let full = path.to_string_lossy();
            let keep = full.chars().count().saturating_sub(BASENAME_TRUNCATE_CHARS);
            full.chars().take(keep).collect()
        }
        BasenameStrategy::FileStem => path.with_extension("").to_string_lossy().into_owned(),
    }
}


// src/plot_config.rs
