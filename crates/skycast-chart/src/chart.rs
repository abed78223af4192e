// File: crates/skycast-chart/src/chart.rs
// Summary: Chart renderer; lays a series out on a named surface and paints it with Skia (raster or SVG).

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info, warn};

use crate::axis::{format_tick, AxisRange, Tick};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{PointF, RectF};
use crate::options::ChartOptions;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::{ChartSeries, SeriesStyle};
use crate::spline::{spline_segments, BezierSegment};
use crate::surface::Document;
use crate::text::{Anchor, TextShaper};
use crate::theme::{self, Theme};
use crate::types::{LEGEND_FONT_SIZE, LEGEND_HEIGHT, TICK_FONT_SIZE};

const LEGEND_SWATCH_W: f32 = 40.0;
const LEGEND_SWATCH_H: f32 = 12.0;
const LEGEND_GAP: f32 = 6.0;

/// A drawn data point, in x order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPoint {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub position: PointF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub label: String,
    pub swatch: RectF,
    /// Baseline-left of the label text.
    pub text_origin: PointF,
}

/// Everything a render drew, bound to the id of the surface it was drawn on.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub target: String,
    pub width: i32,
    pub height: i32,
    pub plot_area: RectF,
    pub y_range: AxisRange,
    pub y_ticks: Vec<Tick>,
    pub x_ticks: Vec<Tick>,
    pub points: Vec<RenderedPoint>,
    /// Curve pieces between gaps; each run joins consecutive drawn points.
    pub runs: Vec<Vec<BezierSegment>>,
    /// Pixel row the area fill closes against.
    pub baseline_px: f32,
    pub style: SeriesStyle,
    pub legend: Option<LegendLayout>,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl RenderedChart {
    pub fn y_min(&self) -> f64 { self.y_range.min }
    pub fn y_max(&self) -> f64 { self.y_range.max }
    pub fn tick_step(&self) -> f64 { self.y_range.step }

    pub fn value_to_px(&self, value: f64) -> f32 {
        ValueScale::from_range(self.plot_area.top, self.plot_area.bottom, &self.y_range).to_px(value)
    }

    pub fn segments(&self) -> impl Iterator<Item = &BezierSegment> {
        self.runs.iter().flatten()
    }

    /// First point holding the largest value.
    pub fn peak(&self) -> Option<&RenderedPoint> {
        self.points.iter().fold(None, |best: Option<&RenderedPoint>, p| match best {
            Some(b) if b.value >= p.value => Some(b),
            _ => Some(p),
        })
    }

    /// First point holding the smallest value.
    pub fn trough(&self) -> Option<&RenderedPoint> {
        self.points.iter().fold(None, |best: Option<&RenderedPoint>, p| match best {
            Some(b) if b.value <= p.value => Some(b),
            _ => Some(p),
        })
    }

    /// Replay the chart onto an SVG canvas of the chart's size.
    pub fn to_svg_bytes(&self) -> Vec<u8> {
        let canvas = skia::svg::Canvas::new(skia::Rect::from_iwh(self.width, self.height), None);
        paint_chart(&canvas, self);
        canvas.end().as_bytes().to_vec()
    }

    pub fn save_svg(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let bytes = self.to_svg_bytes();
        if bytes.is_empty() {
            return Err(ChartError::Encode("SVG"));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(surface = %self.target, path = %path.display(), bytes = bytes.len(), "wrote SVG");
        Ok(())
    }
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw `series` onto the surface named `target_id` in `document`.
    ///
    /// Fails with [`ChartError::TargetNotFound`] when no such surface is attached;
    /// nothing is drawn in that case.
    pub fn render(
        document: &mut Document,
        target_id: &str,
        series: &ChartSeries,
        options: &ChartOptions,
    ) -> ChartResult<RenderedChart> {
        let surface = document.surface_mut(target_id).ok_or_else(|| {
            warn!(surface = target_id, "draw surface missing; chart not rendered");
            ChartError::TargetNotFound { id: target_id.to_string() }
        })?;

        let chart = Self::layout(target_id, series, options, surface.width(), surface.height());
        paint_chart(surface.canvas(), &chart);
        info!(
            surface = target_id,
            width = chart.width,
            height = chart.height,
            points = chart.points.len(),
            "rendered chart"
        );
        Ok(chart)
    }

    /// Compute the chart geometry for a surface of `surface_w` x `surface_h` without drawing.
    pub fn layout(
        target_id: &str,
        series: &ChartSeries,
        options: &ChartOptions,
        surface_w: i32,
        surface_h: i32,
    ) -> RenderedChart {
        let (width, height) = options.chart_size(surface_w, surface_h);
        let legend_h = if options.legend.display { LEGEND_HEIGHT } else { 0 };
        let ins = options.insets;

        let left = ins.left as f32;
        let top = (ins.top + legend_h) as f32;
        let right = ((width - ins.right as i32) as f32).max(left + 1.0);
        let bottom = ((height - ins.bottom as i32) as f32).max(top + 1.0);
        let plot_area = RectF::from_ltrb(left, top, right, bottom);

        let (data_min, data_max) = series.value_range().unwrap_or((0.0, 0.0));
        let y_range = AxisRange::resolve(
            data_min,
            data_max,
            options.y_axis.begin_at_zero,
            options.y_axis.tick_step_size,
            options.y_axis.max_ticks_limit,
        );
        let y_scale = ValueScale::from_range(top, bottom, &y_range);
        let x_scale = CategoryScale::new(left, right, series.len());
        debug!(?y_range, ?plot_area, width, height, "chart layout");

        let y_ticks = y_range
            .values()
            .into_iter()
            .map(|v| Tick { value: v, label: format_tick(v), px: y_scale.to_px(v) })
            .collect();
        let x_ticks = series
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| Tick {
                value: i as f64,
                label: label.clone(),
                px: x_scale.to_px(i).unwrap_or(left),
            })
            .collect();

        let mut points = Vec::with_capacity(series.len());
        for (index, (label, value)) in series.points().enumerate() {
            if !value.is_finite() {
                warn!(label, "skipping non-finite value");
                continue;
            }
            if !(0.0..=100.0).contains(&value) {
                warn!(label, value, "value outside 0..=100");
            }
            let x = x_scale.to_px(index).unwrap_or(left);
            points.push(RenderedPoint {
                index,
                label: label.to_string(),
                value,
                position: PointF::new(x, y_scale.to_px(value)),
            });
        }

        let style = *series.style();
        let runs = split_runs(&points)
            .into_iter()
            .map(|run| {
                let positions: Vec<PointF> = run.iter().map(|p| p.position).collect();
                spline_segments(&positions, style.tension, Some(&plot_area))
            })
            .filter(|segments| !segments.is_empty())
            .collect();

        let legend = options.legend.display.then(|| {
            // approximate label width; exact metrics depend on installed fonts
            let text_w = series.label().chars().count() as f32 * LEGEND_FONT_SIZE * 0.6;
            let total = LEGEND_SWATCH_W + LEGEND_GAP + text_w;
            let x = width as f32 * 0.5 - total * 0.5;
            let y = ins.top as f32 + 8.0;
            LegendLayout {
                label: series.label().to_string(),
                swatch: RectF::from_ltrb(x, y, x + LEGEND_SWATCH_W, y + LEGEND_SWATCH_H),
                text_origin: PointF::new(x + LEGEND_SWATCH_W + LEGEND_GAP, y + LEGEND_SWATCH_H - 1.0),
            }
        });

        RenderedChart {
            target: target_id.to_string(),
            width,
            height,
            plot_area,
            baseline_px: y_scale.to_px(y_range.base_value()),
            y_range,
            y_ticks,
            x_ticks,
            points,
            runs,
            style,
            legend,
            theme: theme::find(&options.theme),
            draw_labels: options.draw_labels,
        }
    }
}

/// Split drawn points wherever a skipped value leaves a gap in the indices.
fn split_runs(points: &[RenderedPoint]) -> Vec<&[RenderedPoint]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=points.len() {
        if i == points.len() || points[i].index != points[i - 1].index + 1 {
            runs.push(&points[start..i]);
            start = i;
        }
    }
    runs
}

// ---- painting ---------------------------------------------------------------

fn paint_chart(canvas: &skia::Canvas, chart: &RenderedChart) {
    let mut bg = skia::Paint::default();
    bg.set_color(chart.theme.background.to_skia());
    canvas.draw_rect(skia::Rect::from_iwh(chart.width, chart.height), &bg);

    draw_grid(canvas, chart);
    if chart.style.fill_under {
        draw_fill(canvas, chart);
    }
    draw_line(canvas, chart);
    draw_points(canvas, chart);

    let shaper = chart.draw_labels.then(TextShaper::new);
    if let Some(shaper) = &shaper {
        draw_tick_labels(canvas, chart, shaper);
    }
    if let Some(legend) = &chart.legend {
        draw_legend(canvas, chart, legend, shaper.as_ref());
    }
}

fn draw_grid(canvas: &skia::Canvas, chart: &RenderedChart) {
    let mut paint = skia::Paint::default();
    paint.set_color(chart.theme.grid.to_skia());
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let a = &chart.plot_area;
    for t in &chart.y_ticks {
        canvas.draw_line((a.left, t.px), (a.right, t.px), &paint);
    }
    for t in &chart.x_ticks {
        canvas.draw_line((t.px, a.top), (t.px, a.bottom), &paint);
    }
}

fn curve_path(run: &[BezierSegment], path: &mut skia::Path) {
    for seg in run {
        path.cubic_to(seg.cp1, seg.cp2, seg.to);
    }
}

fn draw_fill(canvas: &skia::Canvas, chart: &RenderedChart) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(chart.style.fill.to_skia());

    for run in &chart.runs {
        let (Some(first), Some(last)) = (run.first(), run.last()) else { continue };
        let mut path = skia::Path::new();
        path.move_to((first.from.x, chart.baseline_px));
        path.line_to(first.from);
        curve_path(run, &mut path);
        path.line_to((last.to.x, chart.baseline_px));
        path.close();
        canvas.draw_path(&path, &paint);
    }
}

fn draw_line(canvas: &skia::Canvas, chart: &RenderedChart) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(chart.style.line_width);
    stroke.set_color(chart.style.stroke.to_skia());

    for run in &chart.runs {
        let Some(first) = run.first() else { continue };
        let mut path = skia::Path::new();
        path.move_to(first.from);
        curve_path(run, &mut path);
        canvas.draw_path(&path, &stroke);
    }
}

fn draw_points(canvas: &skia::Canvas, chart: &RenderedChart) {
    let r = chart.style.point_radius;
    if r <= 0.0 {
        return;
    }
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(chart.style.fill.to_skia());

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(chart.style.point_border_width);
    border.set_color(chart.style.stroke.to_skia());

    for p in &chart.points {
        canvas.draw_circle(p.position, r, &fill);
        canvas.draw_circle(p.position, r, &border);
    }
}

fn draw_tick_labels(canvas: &skia::Canvas, chart: &RenderedChart, shaper: &TextShaper) {
    let color = chart.theme.tick_label.to_skia();
    let a = &chart.plot_area;
    for t in &chart.y_ticks {
        shaper.draw(canvas, &t.label, a.left - 8.0, t.px + TICK_FONT_SIZE * 0.35, TICK_FONT_SIZE, color, Anchor::Right);
    }
    for t in &chart.x_ticks {
        shaper.draw(canvas, &t.label, t.px, a.bottom + TICK_FONT_SIZE + 6.0, TICK_FONT_SIZE, color, Anchor::Center);
    }
}

fn draw_legend(canvas: &skia::Canvas, chart: &RenderedChart, legend: &LegendLayout, shaper: Option<&TextShaper>) {
    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(chart.style.fill.to_skia());
    canvas.draw_rect(legend.swatch.to_skia(), &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(chart.style.line_width);
    border.set_color(chart.style.stroke.to_skia());
    canvas.draw_rect(legend.swatch.to_skia(), &border);

    if let Some(shaper) = shaper {
        shaper.draw(
            canvas,
            &legend.label,
            legend.text_origin.x,
            legend.text_origin.y,
            LEGEND_FONT_SIZE,
            chart.theme.legend_label.to_skia(),
            Anchor::Left,
        );
    }
}
