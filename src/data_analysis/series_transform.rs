// src/data_analysis/series_transform.rs

use ndarray::{s, Array1};

use crate::data_analysis::linear_fit::{linear_fit, FitKind, FitOverlay};
use crate::data_analysis::rolling_average::{rolling_average, rolling_output_len};
use crate::data_input::raw_series::RawSeries;
use crate::error::SeriesResult;

/// Per-run transformation settings shared by every series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    pub x_factor: f64,
    pub y_factor: f64,
    pub rolling_window: usize,
    pub fit: FitKind,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            x_factor: 1.0,
            y_factor: 1.0,
            rolling_window: 1,
            fit: FitKind::None,
        }
    }
}

/// A series ready for drawing. `x` and `y` always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedSeries {
    pub name: String,
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub stderr: Option<Array1<f64>>,
}

impl TransformedSeries {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// (x, y) pairs for drawing.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// Lower and upper band edges, paired positionally with the first points
    /// of the series. Empty when there is no stderr.
    pub fn band(&self) -> Vec<(f64, f64, f64)> {
        match &self.stderr {
            Some(sd) => self
                .x
                .iter()
                .zip(self.y.iter())
                .zip(sd.iter())
                .map(|((&x, &y), &e)| (x, y - e, y + e))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Scales, smooths and optionally fits one parsed series.
///
/// Scaling happens before smoothing. With a rolling window above 1 the
/// y-values (and stderr, independently) are replaced by their valid-mode
/// moving average and x is cut to the first N values; it is not re-centred.
pub fn transform_series(
    raw: &RawSeries,
    options: &TransformOptions,
) -> SeriesResult<(TransformedSeries, Option<FitOverlay>)> {
    let name = raw.name();
    let x_scaled: Array1<f64> = raw.x.iter().map(|v| v * options.x_factor).collect();
    let y_scaled: Array1<f64> = raw.y.iter().map(|v| v * options.y_factor).collect();
    let stderr = raw.stderr.as_ref().map(|sd| Array1::from_vec(sd.clone()));

    let (x, y, stderr) = if options.rolling_window > 1 {
        let y_smoothed = rolling_average(y_scaled.view(), options.rolling_window);
        let kept = rolling_output_len(x_scaled.len(), options.rolling_window);
        let x_truncated = x_scaled.slice(s![..kept]).to_owned();
        let stderr_smoothed = stderr.map(|sd| rolling_average(sd.view(), options.rolling_window));
        (x_truncated, y_smoothed, stderr_smoothed)
    } else {
        (x_scaled, y_scaled, stderr)
    };

    if y.is_empty() && !raw.is_empty() {
        log::warn!(
            "{}: rolling window {} is not shorter than the series ({} points); nothing left to draw",
            name,
            options.rolling_window,
            raw.len()
        );
    }

    let fit = match options.fit {
        FitKind::Linear => {
            let overlay = linear_fit(x.view(), y.view(), &name)?;
            log::info!(
                "{}: linear fit slope = {:.6e}, intercept = {:.6e}",
                name,
                overlay.slope,
                overlay.intercept
            );
            Some(overlay)
        }
        FitKind::None => None,
    };

    Ok((TransformedSeries { name, x, y, stderr }, fit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeriesError;
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::path::PathBuf;

    fn raw(x: Vec<f64>, y: Vec<f64>, stderr: Option<Vec<f64>>) -> RawSeries {
        RawSeries {
            source: PathBuf::from("data/run.xvg"),
            x,
            y,
            stderr,
        }
    }

    #[test]
    fn test_passthrough_without_options() {
        let input = raw(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0], None);
        let (series, fit) = transform_series(&input, &TransformOptions::default()).unwrap();
        assert_eq!(series.x, array![1.0, 2.0, 3.0]);
        assert_eq!(series.y, array![10.0, 20.0, 30.0]);
        assert_eq!(series.name, "run.xvg");
        assert!(fit.is_none());
    }

    #[test]
    fn test_scaling_applies_before_smoothing() {
        let input = raw(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0], None);
        let options = TransformOptions {
            x_factor: 0.001,
            y_factor: 4.184,
            rolling_window: 2,
            ..Default::default()
        };
        let (series, _) = transform_series(&input, &options).unwrap();
        assert_eq!(series.len(), 2);
        assert_relative_eq!(series.x[0], 0.001);
        assert_relative_eq!(series.x[1], 0.002);
        assert_relative_eq!(series.y[0], 15.0 * 4.184, epsilon = 1e-9);
        assert_relative_eq!(series.y[1], 25.0 * 4.184, epsilon = 1e-9);
    }

    #[test]
    fn test_rolling_average_truncates_x_from_the_start() {
        let input = raw(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0], None);
        let options = TransformOptions {
            rolling_window: 2,
            ..Default::default()
        };
        let (series, _) = transform_series(&input, &options).unwrap();
        assert_eq!(series.x, array![1.0, 2.0]);
        assert_eq!(series.y, array![15.0, 25.0]);
    }

    #[test]
    fn test_stderr_is_smoothed_independently() {
        let input = raw(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 1.0, 1.0, 1.0],
            Some(vec![0.2, 0.4, 0.6, 0.8]),
        );
        let options = TransformOptions {
            y_factor: 10.0,
            rolling_window: 3,
            ..Default::default()
        };
        let (series, _) = transform_series(&input, &options).unwrap();
        let sd = series.stderr.as_ref().unwrap();
        assert_eq!(sd.len(), 2);
        assert_relative_eq!(sd[0], 0.4, epsilon = 1e-12);
        assert_relative_eq!(sd[1], 0.6, epsilon = 1e-12);
        assert_eq!(series.band().len(), 2);
    }

    #[test]
    fn test_window_longer_than_series_is_empty_not_error() {
        let input = raw(vec![1.0, 2.0], vec![3.0, 4.0], None);
        let options = TransformOptions {
            rolling_window: 5,
            ..Default::default()
        };
        let (series, fit) = transform_series(&input, &options).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.x.len(), series.y.len());
        assert!(fit.is_none());
    }

    #[test]
    fn test_linear_fit_runs_on_smoothed_values() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let options = TransformOptions {
            rolling_window: 3,
            fit: FitKind::Linear,
            ..Default::default()
        };
        let (series, fit) = transform_series(&raw(x, y, None), &options).unwrap();
        let fit = fit.unwrap();
        assert_eq!(fit.line.len(), series.len());
        // Smoothing a line shifts it by one step of x: y = 2x + 3 on the truncated x.
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_on_single_point_is_fit_error() {
        let options = TransformOptions {
            fit: FitKind::Linear,
            ..Default::default()
        };
        let err = transform_series(&raw(vec![1.0], vec![1.0], None), &options).unwrap_err();
        assert!(matches!(err, SeriesError::Fit { ref series, .. } if series == "run.xvg"));
    }

    #[test]
    fn test_ragged_stderr_band_pairs_from_the_start() {
        let input = raw(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0], Some(vec![1.0]));
        let (series, _) = transform_series(&input, &TransformOptions::default()).unwrap();
        assert_eq!(series.band(), vec![(1.0, 9.0, 11.0)]);
    }
}

// src/data_analysis/series_transform.rs
