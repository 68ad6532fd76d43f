// src/data_analysis/linear_fit.rs

use ndarray::{Array1, ArrayView1};

use crate::constants::FIT_MIN_X_VARIANCE;
use crate::error::{SeriesError, SeriesResult};

/// Supported fit types. Anything other than `linear` disables fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitKind {
    #[default]
    None,
    Linear,
}

impl FitKind {
    /// Maps the `--fit_type` value to a fit. Unknown names are not an error.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("linear") => FitKind::Linear,
            Some(other) => {
                log::warn!("Ignoring unsupported fit type '{other}' (only 'linear' is available)");
                FitKind::None
            }
            None => FitKind::None,
        }
    }

    pub fn is_requested(self) -> bool {
        self != FitKind::None
    }
}

/// Least-squares line through a series, with the line evaluated at its x-values.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOverlay {
    pub slope: f64,
    pub intercept: f64,
    pub line: Array1<f64>,
}

/// Ordinary least-squares fit of `y = slope * x + intercept`.
///
/// Needs at least two finite points with distinct x-values; otherwise returns
/// [`SeriesError::Fit`] naming `series_name`.
pub fn linear_fit(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    series_name: &str,
) -> SeriesResult<FitOverlay> {
    let n = x.len().min(y.len());
    if n < 2 {
        return Err(SeriesError::Fit {
            series: series_name.to_string(),
            reason: format!("needs at least 2 points, got {n}"),
        });
    }
    let x = x.slice(ndarray::s![..n]);
    let y = y.slice(ndarray::s![..n]);

    if let Some(row) = x.iter().zip(y.iter()).position(|(a, b)| !a.is_finite() || !b.is_finite()) {
        return Err(SeriesError::Fit {
            series: series_name.to_string(),
            reason: format!("non-finite value at point {row}"),
        });
    }

    let x_mean = x.sum() / n as f64;
    let y_mean = y.sum() / n as f64;

    let dx = x.mapv(|v| v - x_mean);
    let dy = y.mapv(|v| v - y_mean);
    let sxx = dx.dot(&dx);
    let sxy = dx.dot(&dy);

    if sxx <= FIT_MIN_X_VARIANCE {
        return Err(SeriesError::Fit {
            series: series_name.to_string(),
            reason: "all x-values are identical".to_string(),
        });
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let line = x.mapv(|v| slope * v + intercept);

    Ok(FitOverlay {
        slope,
        intercept,
        line,
    })
}


// src/data_analysis/linear_fit.rs
