// src/data_analysis/rolling_average.rs

use ndarray::{Array1, ArrayView1};

/// Simple moving average with "valid" convolution semantics.
///
/// Produces `max(0, n - window + 1)` values, each the unweighted mean of
/// `window` consecutive inputs. No padding and no edge extrapolation.
/// A window of 0 or 1 returns the input unchanged.
pub fn rolling_average(data: ArrayView1<f64>, window_size: usize) -> Array1<f64> {
    if window_size <= 1 {
        return data.to_owned();
    }
    if rolling_output_len(data.len(), window_size) == 0 {
        return Array1::zeros(0);
    }

    // Each window is summed on its own so a non-finite or huge value only
    // affects the windows that contain it.
    let inv_window = 1.0 / window_size as f64;
    data.windows(window_size)
        .into_iter()
        .map(|window| window.sum() * inv_window)
        .collect()
}

/// Length of the output of [`rolling_average`] for `n` inputs.
pub fn rolling_output_len(n: usize, window_size: usize) -> usize {
    if window_size <= 1 {
        n
    } else {
        (n + 1).saturating_sub(window_size)
    }
}


// src/data_analysis/rolling_average.rs
