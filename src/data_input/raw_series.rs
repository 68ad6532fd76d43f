// src/data_input/raw_series.rs

use std::path::{Path, PathBuf};

/// Columns read from a single input file, before any scaling or smoothing.
///
/// `x` and `y` always have the same length. `stderr` only holds values for the
/// lines that actually had the requested column, so it can be shorter than `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    pub source: PathBuf,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub stderr: Option<Vec<f64>>,
}

impl RawSeries {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Name used in log lines and fit errors.
    pub fn name(&self) -> String {
        series_name(&self.source)
    }

    /// True when some lines carried a stderr value and others did not.
    pub fn has_ragged_stderr(&self) -> bool {
        matches!(&self.stderr, Some(sd) if sd.len() < self.y.len())
    }
}

pub(crate) fn series_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// src/data_input/raw_series.rs
