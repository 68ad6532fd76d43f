// src/lib.rs - Library interface for the series plotting pipeline

pub mod cli;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod pipeline;
pub mod plot_config;
pub mod plot_framework;
pub mod plot_style;

pub use data_analysis::linear_fit::{linear_fit, FitKind, FitOverlay};
pub use data_analysis::rolling_average::rolling_average;
pub use data_analysis::series_transform::{transform_series, TransformOptions, TransformedSeries};
pub use data_input::raw_series::RawSeries;
pub use data_input::series_parser::{parse_series_file, parse_series_str};
pub use error::{SeriesError, SeriesResult};
pub use plot_config::PlotConfig;
pub use plot_style::{resolve_style, SeriesStyle, StyleLists};

/// Version string reported by `--version`.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
