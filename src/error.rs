// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

/// Failures raised while reading or transforming an input series.
///
/// Every variant is fatal for the run: the pipeline stops at the first one.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("linear fit failed for series '{series}': {reason}")]
    Fit { series: String, reason: String },
}

impl SeriesError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            SeriesError::FileNotFound { path }
        } else {
            SeriesError::Io { path, source }
        }
    }
}
