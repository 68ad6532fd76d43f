// tests/property_series_tests.rs

use ndarray::Array1;
use proptest::prelude::*;

use series_plot_render::plot_style::{resolve_style, StyleLists};
use series_plot_render::{
    linear_fit, parse_series_str, rolling_average, transform_series, FitKind, TransformOptions,
};
use std::path::Path;

proptest! {
    #[test]
    fn rolling_average_has_valid_mode_length(
        values in proptest::collection::vec(-1.0e6f64..1.0e6, 0..200),
        window in 0usize..50
    ) {
        let data = Array1::from_vec(values.clone());
        let smoothed = rolling_average(data.view(), window);
        let expected = if window <= 1 { values.len() } else { (values.len() + 1).saturating_sub(window) };
        prop_assert_eq!(smoothed.len(), expected);
    }

    #[test]
    fn rolling_average_stays_within_input_bounds(
        values in proptest::collection::vec(-1.0e3f64..1.0e3, 1..100),
        window in 2usize..20
    ) {
        let data = Array1::from_vec(values.clone());
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for v in rolling_average(data.view(), window).iter() {
            prop_assert!(*v >= min - 1e-6 && *v <= max + 1e-6);
        }
    }

    #[test]
    fn transformed_x_and_y_lengths_match(
        n in 0usize..100,
        window in 0usize..120,
        x_factor in -10.0f64..10.0,
        y_factor in -10.0f64..10.0
    ) {
        let text: String = (0..n).map(|i| format!("{} {}\n", i, (i * 7 % 13) as f64 - 6.0)).collect();
        let raw = parse_series_str(Path::new("prop.xvg"), &text, None).unwrap();
        let options = TransformOptions { x_factor, y_factor, rolling_window: window, fit: FitKind::None };
        let (series, fit) = transform_series(&raw, &options).unwrap();
        prop_assert_eq!(series.x.len(), series.y.len());
        prop_assert!(fit.is_none());
    }

    #[test]
    fn comment_lines_never_contribute(
        rows in proptest::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 0..30),
        junk in "[ -~]{0,20}",
        prefix in prop_oneof![Just("#"), Just("@"), Just("  #"), Just("\t@")]
    ) {
        let mut text = String::new();
        for (x, y) in &rows {
            text.push_str(&format!("{prefix}{junk}\n"));
            text.push_str(&format!("{x} {y}\n"));
        }
        let raw = parse_series_str(Path::new("junk.xvg"), &text, None).unwrap();
        prop_assert_eq!(raw.len(), rows.len());
        let xs: Vec<f64> = rows.iter().map(|r| r.0).collect();
        prop_assert_eq!(raw.x, xs);
    }

    #[test]
    fn linear_fit_recovers_exact_lines(
        slope in -100.0f64..100.0,
        intercept in -100.0f64..100.0,
        n in 2usize..60
    ) {
        let x: Array1<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
        let y = x.mapv(|v| slope * v + intercept);
        let fit = linear_fit(x.view(), y.view(), "prop").unwrap();
        prop_assert!((fit.slope - slope).abs() < 1e-6);
        prop_assert!((fit.intercept - intercept).abs() < 1e-6);
    }

    #[test]
    fn style_lookup_never_wraps(
        labels in proptest::collection::vec("[a-z]{1,8}", 0..5),
        index in 0usize..10
    ) {
        let lists = StyleLists { labels: Some(labels.clone()), ..Default::default() };
        let style = resolve_style(index, &lists);
        prop_assert_eq!(style.label, labels.get(index).cloned());
    }
}

// tests/property_series_tests.rs
