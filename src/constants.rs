// src/constants.rs

// Lines starting with one of these (after leading whitespace) are comments or
// GROMACS/xmgrace metadata and never contribute data.
pub const COMMENT_PREFIXES: &[char] = &['#', '@'];

// Characters dropped from the first input name when no plot name is given.
pub const BASENAME_TRUNCATE_CHARS: usize = 4;

// Default canvas size.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;

// Font sizes used when no --fontsize is given.
pub const FONT_SIZE_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 22;
pub const FONT_SIZE_TICK_LABEL: i32 = 18;
pub const FONT_SIZE_LEGEND: i32 = 18;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_FIT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Dash patterns (dash length, gap length) in pixels.
pub const DASH_PATTERN_DASHED: (i32, i32) = (10, 6);
pub const DASH_PATTERN_DOTTED: (i32, i32) = (2, 4);
pub const DASH_PATTERN_DASHDOT: (i32, i32) = (8, 4);

pub const MARKER_SIZE: i32 = 4;

// Opacity of the y ± stderr band.
pub const STDERR_BAND_ALPHA: f64 = 0.3;

// Fraction of the data span added on each side of auto-computed axis ranges.
pub const AXIS_PADDING_FRACTION: f64 = 0.05;
// Padding used when all values on an axis are identical.
pub const AXIS_PADDING_FLAT: f64 = 0.5;

pub const CHART_MARGIN: u32 = 20;
pub const X_LABEL_AREA_SIZE: u32 = 60;
pub const Y_LABEL_AREA_SIZE: u32 = 80;
pub const TICK_LABEL_COUNT_X: usize = 10;
pub const TICK_LABEL_COUNT_Y: usize = 10;

// Smallest sum of squared x deviations the linear fit accepts.
pub const FIT_MIN_X_VARIANCE: f64 = 1e-300;

// src/constants.rs
