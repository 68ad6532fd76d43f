// src/cli.rs

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_analysis::linear_fit::FitKind;
use crate::data_analysis::series_transform::TransformOptions;
use crate::plot_config::{AxisLimits, BasenameStrategy, LegendPosition, OutputFormat, PlotConfig};
use crate::plot_style::StyleLists;

/// Single-dash multi-letter spellings and the long options they stand for.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-pn", "--plot_name"),
    ("-pl", "--plot_labels"),
    ("-ra", "--rolling_average"),
    ("-x_high", "--x_axis_high_lim"),
    ("-x_low", "--x_axis_low_lim"),
    ("-y_high", "--y_axis_high_lim"),
    ("-y_low", "--y_axis_low_lim"),
    ("-fc", "--factor_conversion"),
    ("-fx", "--x_axis_conversion"),
    ("-lc", "--line_colors"),
    ("-ls", "--line_styles"),
    ("-mk", "--markers"),
    ("-fit", "--fit_type"),
    ("-sd", "--stdev"),
    ("-fs", "--fontsize"),
];

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "Series_Plot_Render",
    version = crate::crate_version(),
    about = "Plot whitespace-delimited numeric series files with optional rolling averages and linear fits.",
    after_help = "Single-dash forms such as -pn, -ra, -x_low or -fit are accepted as aliases of the long options.\n\
                  Line styles starting with '-' can be written as solid, dashed, dotted or dashdot."
)]
pub struct Cli {
    /// Input file(s) containing the data to plot
    #[arg(required = true, value_name = "FILENAME", value_hint = ValueHint::FilePath)]
    pub filename: Vec<PathBuf>,

    /// Custom name for the plot title and the output file (-pn)
    #[arg(long = "plot_name")]
    pub plot_name: Option<String>,

    /// Custom labels for the plot curves, one per file (-pl)
    #[arg(long = "plot_labels", num_args = 1..)]
    pub plot_labels: Option<Vec<String>>,

    /// Window size for the rolling average; 1 disables it (-ra)
    #[arg(long = "rolling_average", default_value_t = 1)]
    pub rolling_average: usize,

    /// Label for the x-axis
    #[arg(short = 'x', long = "x_axis_label")]
    pub x_axis_label: Option<String>,

    /// Upper limit for the x-axis (-x_high)
    #[arg(long = "x_axis_high_lim", allow_negative_numbers = true)]
    pub x_axis_high_lim: Option<f64>,

    /// Lower limit for the x-axis (-x_low)
    #[arg(long = "x_axis_low_lim", allow_negative_numbers = true)]
    pub x_axis_low_lim: Option<f64>,

    /// Label for the y-axis
    #[arg(short = 'y', long = "y_axis_label")]
    pub y_axis_label: Option<String>,

    /// Upper limit for the y-axis (-y_high)
    #[arg(long = "y_axis_high_lim", allow_negative_numbers = true)]
    pub y_axis_high_lim: Option<f64>,

    /// Lower limit for the y-axis (-y_low)
    #[arg(long = "y_axis_low_lim", allow_negative_numbers = true)]
    pub y_axis_low_lim: Option<f64>,

    /// Factor to convert y-values by (-fc)
    #[arg(long = "factor_conversion", default_value_t = 1.0, allow_negative_numbers = true)]
    pub factor_conversion: f64,

    /// Factor to scale the x-axis by (-fx)
    #[arg(long = "x_axis_conversion", default_value_t = 1.0, allow_negative_numbers = true)]
    pub x_axis_conversion: f64,

    /// Colors for the plot curves, one per file (-lc)
    #[arg(long = "line_colors", num_args = 1..)]
    pub line_colors: Option<Vec<String>>,

    /// Line styles for the plot curves, one per file (-ls)
    #[arg(long = "line_styles", num_args = 1..)]
    pub line_styles: Option<Vec<String>>,

    /// Markers for the plot curves, one per file (-mk)
    #[arg(long = "markers", num_args = 1..)]
    pub markers: Option<Vec<String>>,

    /// Type of fit to apply; only "linear" is supported (-fit)
    #[arg(long = "fit_type")]
    pub fit_type: Option<String>,

    /// Index of the column holding standard deviation values (-sd)
    #[arg(long = "stdev")]
    pub stdev: Option<usize>,

    /// Font size for the title, axis labels and ticks (-fs)
    #[arg(long = "fontsize")]
    pub fontsize: Option<u32>,

    /// Legend placement
    #[arg(long = "legend", value_enum, default_value_t = LegendArg::Best)]
    pub legend: LegendArg,

    /// Derive the output name by removing the real file extension instead of
    /// the last four characters
    #[arg(long = "stem_basename")]
    pub stem_basename: bool,

    /// Output file format
    #[arg(long = "format", value_enum, default_value_t = FormatArg::Pdf)]
    pub format: FormatArg,

    /// Canvas width in pixels
    #[arg(long = "width", default_value_t = PLOT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long = "height", default_value_t = PLOT_HEIGHT)]
    pub height: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendArg {
    Best,
    UpperCenter,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Pdf,
    Svg,
    Png,
}

impl Cli {
    /// Parses the process arguments, accepting the legacy single-dash flags.
    pub fn parse_with_legacy_flags() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn try_parse_with_legacy_flags<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(args))
    }

    pub fn into_config(self) -> PlotConfig {
        PlotConfig {
            input_files: self.filename,
            plot_name: self.plot_name,
            x_label: self.x_axis_label,
            y_label: self.y_axis_label,
            x_limits: AxisLimits::new(self.x_axis_low_lim, self.x_axis_high_lim),
            y_limits: AxisLimits::new(self.y_axis_low_lim, self.y_axis_high_lim),
            transform: TransformOptions {
                x_factor: self.x_axis_conversion,
                y_factor: self.factor_conversion,
                rolling_window: self.rolling_average,
                fit: FitKind::parse(self.fit_type.as_deref()),
            },
            stdev_column: self.stdev,
            styles: StyleLists {
                labels: self.plot_labels,
                colors: self.line_colors,
                line_styles: self.line_styles,
                markers: self.markers,
                // A zero size means "not set", as with no --fontsize at all.
                fontsize: self.fontsize.filter(|&size| size > 0),
            },
            legend_position: match self.legend {
                LegendArg::Best => LegendPosition::Best,
                LegendArg::UpperCenter => LegendPosition::UpperCenter,
            },
            basename_strategy: if self.stem_basename {
                BasenameStrategy::FileStem
            } else {
                BasenameStrategy::TruncateFour
            },
            output_format: match self.format {
                FormatArg::Pdf => OutputFormat::Pdf,
                FormatArg::Svg => OutputFormat::Svg,
                FormatArg::Png => OutputFormat::Png,
            },
            width: self.width,
            height: self.height,
        }
    }
}

/// Rewrites `-pn`, `-x_low`, ... (and their `-flag=value` forms) into the
/// matching long options. Everything after a bare `--` is left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if after_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_terminator = true;
                return arg;
            }
            let (flag, value) = match text.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (text, None),
            };
            match LEGACY_FLAGS.iter().find(|(short, _)| *short == flag) {
                Some((_, long)) => match value {
                    Some(value) => OsString::from(format!("{long}={value}")),
                    None => OsString::from(*long),
                },
                None => arg,
            }
        })
        .collect()
}


// src/cli.rs
