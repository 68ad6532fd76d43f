// src/data_input/series_parser.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::constants::COMMENT_PREFIXES;
use crate::data_input::raw_series::RawSeries;
use crate::error::{SeriesError, SeriesResult};

/// Parses a whitespace-delimited series file.
///
/// Column 0 is x, column 1 is y. When `stdev_column` is set and the column is
/// present on a line, its value is appended to the stderr sequence; lines that
/// are too short for it simply contribute nothing.
pub fn parse_series_file(path: &Path, stdev_column: Option<usize>) -> SeriesResult<RawSeries> {
    let file = File::open(path).map_err(|e| SeriesError::from_io(path.to_path_buf(), e))?;
    parse_series_reader(path, BufReader::new(file), stdev_column)
}

/// Same as [`parse_series_file`] for text that is already in memory.
pub fn parse_series_str(
    source: &Path,
    text: &str,
    stdev_column: Option<usize>,
) -> SeriesResult<RawSeries> {
    parse_series_reader(source, text.as_bytes(), stdev_column)
}

fn parse_series_reader<R: BufRead>(
    source: &Path,
    reader: R,
    stdev_column: Option<usize>,
) -> SeriesResult<RawSeries> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut stderr = Vec::new();
    let mut comment_lines = 0usize;

    for (line_index, line_result) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line_result.map_err(|e| SeriesError::from_io(source.to_path_buf(), e))?;
        let trimmed = line.trim_start();

        if trimmed.starts_with(COMMENT_PREFIXES) {
            comment_lines += 1;
            continue;
        }

        let columns: Vec<&str> = trimmed.split_whitespace().collect();

        x.push(parse_column(source, line_number, &columns, 0, "x")?);
        y.push(parse_column(source, line_number, &columns, 1, "y")?);

        if let Some(sd_index) = stdev_column {
            if sd_index < columns.len() {
                stderr.push(parse_column(source, line_number, &columns, sd_index, "stdev")?);
            }
        }
    }

    debug!(
        "{}: {} data rows, {} comment lines skipped",
        source.display(),
        y.len(),
        comment_lines
    );

    // A stdev column that never appeared means no band, not a band of zeros.
    let stderr = if stderr.is_empty() { None } else { Some(stderr) };

    let series = RawSeries {
        source: source.to_path_buf(),
        x,
        y,
        stderr,
    };

    if series.has_ragged_stderr() {
        warn!(
            "{}: stdev column present on only {} of {} rows; band values are not realigned",
            source.display(),
            series.stderr.as_ref().map_or(0, Vec::len),
            series.len()
        );
    }

    Ok(series)
}

fn parse_column(
    source: &Path,
    line_number: usize,
    columns: &[&str],
    index: usize,
    what: &str,
) -> SeriesResult<f64> {
    let text = columns.get(index).ok_or_else(|| SeriesError::Parse {
        path: source.to_path_buf(),
        line: line_number,
        message: format!("missing {what} column (index {index})"),
    })?;
    text.parse::<f64>().map_err(|_| SeriesError::Parse {
        path: source.to_path_buf(),
        line: line_number,
        message: format!("invalid {what} value '{text}'"),
    })
}


// src/data_input/series_parser.rs
