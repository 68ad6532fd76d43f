// src/plot_framework.rs

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use svg2pdf::usvg;

use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::PathBuf;

use crate::constants::{
    AXIS_PADDING_FLAT, AXIS_PADDING_FRACTION, CHART_MARGIN, DASH_PATTERN_DASHDOT,
    DASH_PATTERN_DASHED, DASH_PATTERN_DOTTED, LINE_WIDTH_FIT, LINE_WIDTH_LEGEND, LINE_WIDTH_PLOT,
    MARKER_SIZE, STDERR_BAND_ALPHA, TICK_LABEL_COUNT_X, TICK_LABEL_COUNT_Y, X_LABEL_AREA_SIZE,
    Y_LABEL_AREA_SIZE,
};
use crate::data_analysis::linear_fit::FitOverlay;
use crate::data_analysis::series_transform::TransformedSeries;
use crate::font_config::FontSizes;
use crate::plot_config::{AxisLimits, LegendPosition, OutputFormat, PlotConfig};
use crate::plot_style::{resolve_color, LineStyle, MarkerShape, SeriesStyle};

type SeriesChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// One input file after transformation, with everything needed to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    /// Position of the source file on the command line.
    pub index: usize,
    pub series: TransformedSeries,
    pub fit: Option<FitOverlay>,
    pub style: SeriesStyle,
    /// When set the data is drawn without a connecting line so that the
    /// dashed fit is the only line for this series.
    pub fit_requested: bool,
}

impl PreparedSeries {
    pub fn fit_label(&self) -> String {
        match &self.style.label {
            Some(label) => format!("{label} (fit)"),
            None => "fit".to_string(),
        }
    }
}

/// Sink that accumulates series in order and writes the chart once.
pub trait PlotComposer {
    fn add_series(&mut self, series: PreparedSeries);

    /// Applies the global settings, writes the output and returns its path.
    fn finish(&mut self, config: &PlotConfig) -> Result<PathBuf, Box<dyn Error>>;
}

/// Composer that renders with plotters to PDF or SVG (both transparent) or PNG.
#[derive(Debug, Default)]
pub struct PlottersComposer {
    series: Vec<PreparedSeries>,
}

impl PlottersComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self) -> &[PreparedSeries] {
        &self.series
    }
}

impl PlotComposer for PlottersComposer {
    fn add_series(&mut self, series: PreparedSeries) {
        self.series.push(series);
    }

    fn finish(&mut self, config: &PlotConfig) -> Result<PathBuf, Box<dyn Error>> {
        let output_path = config.output_path();
        let size = (config.width, config.height);

        match config.output_format {
            OutputFormat::Pdf => {
                let mut svg = String::new();
                {
                    let root_area = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                    draw_composed_chart(&root_area, &self.series, config)?;
                    root_area.present()?;
                }
                fs::write(&output_path, svg_to_pdf(&svg)?)?;
            }
            OutputFormat::Svg => {
                // Nothing is filled, so the background stays transparent.
                let root_area = SVGBackend::new(&output_path, size).into_drawing_area();
                draw_composed_chart(&root_area, &self.series, config)?;
                root_area.present()?;
            }
            OutputFormat::Png => {
                let root_area = BitMapBackend::new(&output_path, size).into_drawing_area();
                root_area.fill(&WHITE)?;
                draw_composed_chart(&root_area, &self.series, config)?;
                root_area.present()?;
            }
        }

        log::info!("Plot saved as '{}'.", output_path.display());
        Ok(output_path)
    }
}

/// Converts a rendered SVG document into a single-page PDF.
///
/// Unfilled areas stay transparent. Text is resolved against the system fonts.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| format!("PDF conversion failed: {e:?}"))?;
    Ok(pdf)
}

/// Calculate an axis range with padding around the data.
/// Adds a fraction of the span on each side, or a fixed padding when the
/// span is (nearly) zero.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-12 {
        AXIS_PADDING_FLAT
    } else {
        range * AXIS_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Min and max of the finite values, if there are any.
pub fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let finite: Array1<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let min = *finite.min().ok()?;
    let max = *finite.max().ok()?;
    Some((min, max))
}

/// Final axis range: explicit bounds win, unset bounds come from the data.
pub fn resolve_axis_range(limits: AxisLimits, bounds: Option<(f64, f64)>) -> Range<f64> {
    let (auto_low, auto_high) = match bounds {
        Some((min, max)) => calculate_range(min, max),
        None => (0.0, 1.0),
    };
    let low = limits.low.unwrap_or(auto_low);
    let high = limits.high.unwrap_or(auto_high);

    if low < high {
        low..high
    } else if high < low {
        log::warn!("Axis limits {low} > {high}; swapping them");
        high..low
    } else {
        log::warn!("Empty axis range at {low}; widening it");
        (low - AXIS_PADDING_FLAT)..(low + AXIS_PADDING_FLAT)
    }
}

/// x- and y-bounds of everything that will be drawn.
fn data_bounds(series: &[PreparedSeries]) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for prepared in series {
        let s = &prepared.series;
        xs.extend(s.x.iter().copied());
        ys.extend(s.y.iter().copied());
        for (_, low, high) in s.band() {
            ys.push(low);
            ys.push(high);
        }
        if let Some(fit) = &prepared.fit {
            ys.extend(fit.line.iter().copied());
        }
    }
    (finite_bounds(&xs), finite_bounds(&ys))
}

fn draw_composed_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    series: &[PreparedSeries],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let fonts = FontSizes::resolve(config.styles.fontsize);
    let (x_bounds, y_bounds) = data_bounds(series);
    let x_range = resolve_axis_range(config.x_limits, x_bounds);
    let y_range = resolve_axis_range(config.y_limits, y_bounds);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE);
    if let Some(title) = &config.plot_name {
        builder.caption(title, fonts.title_font());
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    // Only the left and bottom axes are drawn; there is no frame on the
    // top/right and no grid.
    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(TICK_LABEL_COUNT_X)
            .y_labels(TICK_LABEL_COUNT_Y)
            .label_style(fonts.tick_label_font())
            .axis_desc_style(fonts.axis_label_font());
        if let Some(x_label) = &config.x_label {
            mesh.x_desc(x_label.as_str());
        }
        if let Some(y_label) = &config.y_label {
            mesh.y_desc(y_label.as_str());
        }
        mesh.draw()?;
    }

    let mut legend_series_count = 0;

    for prepared in series {
        if prepared.series.is_empty() {
            log::warn!(
                "Series '{}' has no points after smoothing; nothing drawn",
                prepared.series.name
            );
            continue;
        }

        let color = resolve_color(prepared.style.color.as_deref(), prepared.index);
        let line_style = if prepared.fit_requested {
            LineStyle::NoLine
        } else {
            LineStyle::resolve(prepared.style.line_style.as_deref())
        };
        let marker = MarkerShape::resolve(prepared.style.marker.as_deref());
        let points = prepared.series.points();

        // Band first so the curve sits on top of it.
        let band = prepared.series.band();
        if !band.is_empty() {
            let mut outline: Vec<(f64, f64)> = band.iter().map(|&(x, low, _)| (x, low)).collect();
            outline.extend(band.iter().rev().map(|&(x, _, high)| (x, high)));
            chart.draw_series(std::iter::once(Polygon::new(
                outline,
                color.mix(STDERR_BAND_ALPHA).filled(),
            )))?;
        }

        draw_line(&mut chart, &points, line_style, color.stroke_width(LINE_WIDTH_PLOT))?;
        if let Some(shape) = marker {
            draw_markers(&mut chart, &points, shape, color)?;
        }

        if let Some(label) = &prepared.style.label {
            add_legend_entry(
                &mut chart,
                points[0],
                label,
                color,
                line_style != LineStyle::NoLine,
                marker.is_some(),
            )?;
            legend_series_count += 1;
        }

        if let Some(fit) = &prepared.fit {
            let fit_points: Vec<(f64, f64)> = prepared
                .series
                .x
                .iter()
                .copied()
                .zip(fit.line.iter().copied())
                .collect();
            draw_line(&mut chart, &fit_points, LineStyle::Dashed, color.stroke_width(LINE_WIDTH_FIT))?;
            add_legend_entry(&mut chart, fit_points[0], &prepared.fit_label(), color, true, false)?;
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        let position = match config.legend_position {
            LegendPosition::Best => SeriesLabelPosition::UpperRight,
            LegendPosition::UpperCenter => SeriesLabelPosition::UpperMiddle,
        };
        chart
            .configure_series_labels()
            .position(position)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(fonts.legend_font())
            .draw()?;
    }

    Ok(())
}

fn draw_line<DB>(
    chart: &mut SeriesChart<'_, DB>,
    points: &[(f64, f64)],
    line_style: LineStyle,
    style: ShapeStyle,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let dash = match line_style {
        LineStyle::NoLine => return Ok(()),
        LineStyle::Solid => {
            chart.draw_series(LineSeries::new(points.iter().copied(), style))?;
            return Ok(());
        }
        LineStyle::Dashed => DASH_PATTERN_DASHED,
        LineStyle::Dotted => DASH_PATTERN_DOTTED,
        LineStyle::DashDot => DASH_PATTERN_DASHDOT,
    };
    chart.draw_series(DashedLineSeries::new(points.to_vec(), dash.0, dash.1, style))?;
    Ok(())
}

fn draw_markers<DB>(
    chart: &mut SeriesChart<'_, DB>,
    points: &[(f64, f64)],
    shape: MarkerShape,
    color: RGBColor,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let s = MARKER_SIZE;
    let fill = color.filled();
    let stroke = color.stroke_width(2);
    let pts = points.iter().copied();

    match shape {
        MarkerShape::Circle => {
            chart.draw_series(pts.map(|p| Circle::new(p, s, fill)))?;
        }
        MarkerShape::Point => {
            chart.draw_series(pts.map(|p| Circle::new(p, s / 2, fill)))?;
        }
        MarkerShape::Pixel => {
            chart.draw_series(pts.map(|p| Pixel::new(p, fill)))?;
        }
        MarkerShape::Cross => {
            chart.draw_series(pts.map(|p| Cross::new(p, s, stroke)))?;
        }
        MarkerShape::Plus => {
            chart.draw_series(pts.map(|p| {
                EmptyElement::at(p)
                    + PathElement::new(vec![(-s, 0), (s, 0)], stroke)
                    + PathElement::new(vec![(0, -s), (0, s)], stroke)
            }))?;
        }
        MarkerShape::TriangleUp => {
            chart.draw_series(pts.map(|p| TriangleMarker::new(p, s, fill)))?;
        }
        MarkerShape::TriangleDown => {
            chart.draw_series(
                pts.map(|p| EmptyElement::at(p) + Polygon::new(vec![(-s, -s), (s, -s), (0, s)], fill)),
            )?;
        }
        MarkerShape::Square => {
            chart.draw_series(
                pts.map(|p| EmptyElement::at(p) + Rectangle::new([(-s, -s), (s, s)], fill)),
            )?;
        }
        MarkerShape::Diamond => {
            chart.draw_series(pts.map(|p| {
                EmptyElement::at(p) + Polygon::new(vec![(0, -s), (s, 0), (0, s), (-s, 0)], fill)
            }))?;
        }
        MarkerShape::Star => {
            chart.draw_series(pts.map(|p| {
                EmptyElement::at(p)
                    + Cross::new((0, 0), s, stroke)
                    + PathElement::new(vec![(-s, 0), (s, 0)], stroke)
            }))?;
        }
    }
    Ok(())
}

/// Adds a legend-only entry through an invisible point at `anchor`.
fn add_legend_entry<'a, DB>(
    chart: &mut SeriesChart<'a, DB>,
    anchor: (f64, f64),
    label: &str,
    color: RGBColor,
    has_line: bool,
    has_marker: bool,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    let line_style = color.stroke_width(LINE_WIDTH_LEGEND);
    let marker_radius = if has_marker { MARKER_SIZE } else { 0 };
    chart
        .draw_series(std::iter::once(Circle::new(anchor, 0, color.filled())))?
        .label(label)
        .legend(move |(x, y)| {
            let path = if has_line { vec![(0, 0), (20, 0)] } else { vec![] };
            EmptyElement::at((x, y))
                + PathElement::new(path, line_style)
                + Circle::new((10, 0), marker_radius, color.filled())
        });
    Ok(())
}


// src/plot_framework.rs
