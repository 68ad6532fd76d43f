// src/font_config.rs

// Font settings for chart text. A --fontsize value replaces every default size
// (title, axis labels, tick labels, legend).

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, FONT_SIZE_TICK_LABEL, FONT_SIZE_TITLE};

/// Font family used for all text (resolved by plotters from system fonts).
pub const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub title: i32,
    pub axis_label: i32,
    pub tick_label: i32,
    pub legend: i32,
}

impl FontSizes {
    pub fn resolve(fontsize: Option<u32>) -> Self {
        match fontsize {
            Some(size) => {
                let size = i32::try_from(size).unwrap_or(i32::MAX);
                Self {
                    title: size,
                    axis_label: size,
                    tick_label: size,
                    legend: size,
                }
            }
            None => Self::default(),
        }
    }

    pub fn title_font(&self) -> (&'static str, i32) {
        (FONT_FAMILY, self.title)
    }

    pub fn axis_label_font(&self) -> (&'static str, i32) {
        (FONT_FAMILY, self.axis_label)
    }

    pub fn tick_label_font(&self) -> (&'static str, i32) {
        (FONT_FAMILY, self.tick_label)
    }

    pub fn legend_font(&self) -> (&'static str, i32) {
        (FONT_FAMILY, self.legend)
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: FONT_SIZE_TITLE,
            axis_label: FONT_SIZE_AXIS_LABEL,
            tick_label: FONT_SIZE_TICK_LABEL,
            legend: FONT_SIZE_LEGEND,
        }
    }
}
