// src/plot_style.rs

// Per-series styling: positional resolution of the CLI style lists and the
// translation of matplotlib-style color/line/marker names into drawing values.

use plotters::style::RGBColor;

/// Visual attributes of one series. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesStyle {
    pub label: Option<String>,
    pub color: Option<String>,
    pub line_style: Option<String>,
    pub marker: Option<String>,
    pub fontsize: Option<u32>,
}

/// Style lists as given on the command line, indexed by input file position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleLists {
    pub labels: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub line_styles: Option<Vec<String>>,
    pub markers: Option<Vec<String>>,
    pub fontsize: Option<u32>,
}

/// Resolves the style of the series at `index`.
///
/// Absent lists give `None` for every series; a list that is too short gives
/// `None` for the positions it does not cover (no wraparound, no repeat of the
/// last entry). `fontsize` is shared by all series.
pub fn resolve_style(index: usize, lists: &StyleLists) -> SeriesStyle {
    fn pick(list: &Option<Vec<String>>, index: usize) -> Option<String> {
        list.as_ref().and_then(|values| values.get(index)).cloned()
    }

    SeriesStyle {
        label: pick(&lists.labels, index),
        color: pick(&lists.colors, index),
        line_style: pick(&lists.line_styles, index),
        marker: pick(&lists.markers, index),
        fontsize: lists.fontsize,
    }
}

/// Default color for the series at `index` (the Tableau-10 cycle).
pub fn default_series_color(index: usize) -> RGBColor {
    let c = colorous::TABLEAU10[index % colorous::TABLEAU10.len()];
    RGBColor(c.r, c.g, c.b)
}

/// Parses a color name, falling back to the default cycle for unknown names.
pub fn resolve_color(name: Option<&str>, index: usize) -> RGBColor {
    match name {
        Some(name) => parse_color(name).unwrap_or_else(|| {
            log::warn!("Unknown color '{name}' for series {index}; using the default color");
            default_series_color(index)
        }),
        None => default_series_color(index),
    }
}

/// Parses matplotlib-style color names: single letters, `C0`..`C9`,
/// `tab:<name>`, common named colors and `#rrggbb`.
pub fn parse_color(name: &str) -> Option<RGBColor> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(digit) = name.strip_prefix('C') {
        if let Ok(i) = digit.parse::<usize>() {
            return Some(default_series_color(i));
        }
    }
    let lower = name.to_ascii_lowercase();
    if let Some(tab) = lower.strip_prefix("tab:") {
        let i = TABLEAU_NAMES.iter().position(|&n| n == tab || (tab == "grey" && n == "gray"))?;
        return Some(default_series_color(i));
    }
    let rgb = match lower.as_str() {
        "b" | "blue" => (0, 0, 255),
        "g" => (0, 128, 0),
        "r" | "red" => (255, 0, 0),
        "c" => (0, 191, 191),
        "m" => (191, 0, 191),
        "y" => (191, 191, 0),
        "k" | "black" => (0, 0, 0),
        "w" | "white" => (255, 255, 255),
        "green" => (0, 128, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        "gray" | "grey" => (128, 128, 128),
        "olive" => (128, 128, 0),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "maroon" => (128, 0, 0),
        "lime" => (0, 255, 0),
        "gold" => (255, 215, 0),
        "darkred" => (139, 0, 0),
        "darkblue" => (0, 0, 139),
        "darkgreen" => (0, 100, 0),
        "lightblue" => (173, 216, 230),
        "lightgreen" => (144, 238, 144),
        _ => return None,
    };
    Some(RGBColor(rgb.0, rgb.1, rgb.2))
}

const TABLEAU_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
];

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    NoLine,
}

impl LineStyle {
    /// `None` (no style given) is a solid line.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            None | Some("-") | Some("solid") => LineStyle::Solid,
            Some("--") | Some("dashed") => LineStyle::Dashed,
            Some(":") | Some("dotted") => LineStyle::Dotted,
            Some("-.") | Some("dashdot") => LineStyle::DashDot,
            Some("") | Some("None") | Some("none") | Some(" ") => LineStyle::NoLine,
            Some(other) => {
                log::warn!("Unknown line style '{other}'; drawing a solid line");
                LineStyle::Solid
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Point,
    Pixel,
    Cross,
    Plus,
    TriangleUp,
    TriangleDown,
    Square,
    Diamond,
    Star,
}

impl MarkerShape {
    /// `None`, `"None"` and `""` mean no marker.
    pub fn resolve(name: Option<&str>) -> Option<Self> {
        let shape = match name.map(str::trim)? {
            "o" => MarkerShape::Circle,
            "." => MarkerShape::Point,
            "," => MarkerShape::Pixel,
            "x" | "X" => MarkerShape::Cross,
            "+" | "P" => MarkerShape::Plus,
            "^" => MarkerShape::TriangleUp,
            "v" => MarkerShape::TriangleDown,
            "s" => MarkerShape::Square,
            "d" | "D" => MarkerShape::Diamond,
            "*" => MarkerShape::Star,
            "" | "None" | "none" => return None,
            other => {
                log::warn!("Unknown marker '{other}'; drawing no markers");
                return None;
            }
        };
        Some(shape)
    }
}


// src/plot_style.rs
