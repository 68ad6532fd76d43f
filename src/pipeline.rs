// src/pipeline.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::data_analysis::series_transform::transform_series;
use crate::data_input::series_parser::parse_series_file;
use crate::error::SeriesResult;
use crate::plot_config::PlotConfig;
use crate::plot_framework::{PlotComposer, PreparedSeries};
use crate::plot_style::resolve_style;

/// Parses, transforms and styles the input file at position `index`.
pub fn prepare_one(config: &PlotConfig, index: usize, path: &Path) -> SeriesResult<PreparedSeries> {
    log::info!("Reading '{}'...", path.display());
    let raw = parse_series_file(path, config.stdev_column)?;
    let (series, fit) = transform_series(&raw, &config.transform)?;
    log::info!(
        "  {} points read, {} points after transformation.",
        raw.len(),
        series.len()
    );
    Ok(PreparedSeries {
        index,
        series,
        fit,
        style: resolve_style(index, &config.styles),
        fit_requested: config.fit().is_requested(),
    })
}

/// All input files in command-line order. Stops at the first failure.
pub fn prepare_series(config: &PlotConfig) -> SeriesResult<Vec<PreparedSeries>> {
    config
        .input_files
        .iter()
        .enumerate()
        .map(|(index, path)| prepare_one(config, index, path))
        .collect()
}

/// Feeds every file to `composer` as soon as it is ready, then writes the
/// chart once. Returns the written path.
pub fn run(config: &PlotConfig, composer: &mut dyn PlotComposer) -> Result<PathBuf, Box<dyn Error>> {
    for (index, path) in config.input_files.iter().enumerate() {
        composer.add_series(prepare_one(config, index, path)?);
    }
    composer.finish(config)
}
