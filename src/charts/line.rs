use crate::animation::{RevealProgress, RevealStrategy};
use crate::api::ChartConfig;
use crate::core::{PixelPoint, Series, ValueScale, line_vertices};
use crate::render::{ArcPrimitive, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};
use crate::theme::resolve_theme;

use super::{
    AXIS_STROKE_PX, ChartKind, ChartRenderer, ChartScene, GRID_STROKE_PX, LABEL_FONT_PX,
    SERIES_STROKE_PX, format_value, nearest_vertex,
};

const HORIZONTAL_GRID_LINES: usize = 4;
const MARKER_RADIUS_PX: f64 = 4.0;
const LABEL_GAP_PX: f64 = 8.0;

/// Polyline through normalized points over a gridded pair of axes.
///
/// Animates point by point: vertices appear one at a time left to right,
/// while axes, gridlines and x labels are drawn from the first frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChartRenderer;

/// Returns `(override_len, series_len)` when an x-axis label override does not
/// match the series length.
///
/// Mismatches are tolerated: extra override labels are ignored and missing
/// ones fall back to the point's own label.
#[must_use]
pub fn axis_label_mismatch(series: &Series, config: &ChartConfig) -> Option<(usize, usize)> {
    config
        .axis_labels
        .as_ref()
        .filter(|labels| labels.len() != series.len())
        .map(|labels| (labels.len(), series.len()))
}

fn x_label<'a>(series: &'a Series, config: &'a ChartConfig, index: usize) -> &'a str {
    config
        .axis_labels
        .as_ref()
        .and_then(|labels| labels.get(index))
        .map_or_else(|| series.points()[index].label.as_str(), String::as_str)
}

impl ChartRenderer for LineChartRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn reveal_strategy(&self) -> RevealStrategy {
        RevealStrategy::PointByPoint
    }

    fn build_frame(&self, scene: &ChartScene<'_>, progress: RevealProgress) -> RenderFrame {
        let mut frame = RenderFrame::new(scene.viewport);
        if scene.series.is_empty() {
            return frame;
        }

        let colors = resolve_theme(scene.theme);
        let area = scene.plot_area();
        let scale = ValueScale::from_series_max(scene.series);
        let vertices = line_vertices(scene.series, scale, area);

        for step in 1..=HORIZONTAL_GRID_LINES {
            let y = area.bottom() - area.height * step as f64 / HORIZONTAL_GRID_LINES as f64;
            frame.push_line(LinePrimitive::new(
                area.left,
                y,
                area.right(),
                y,
                GRID_STROKE_PX,
                colors.grid_color,
            ));
        }
        for vertex in &vertices {
            frame.push_line(LinePrimitive::new(
                vertex.x,
                area.top,
                vertex.x,
                area.bottom(),
                GRID_STROKE_PX,
                colors.grid_color,
            ));
        }

        frame.push_line(LinePrimitive::new(
            area.left,
            area.top,
            area.left,
            area.bottom(),
            AXIS_STROKE_PX,
            colors.axis_color,
        ));
        frame.push_line(LinePrimitive::new(
            area.left,
            area.bottom(),
            area.right(),
            area.bottom(),
            AXIS_STROKE_PX,
            colors.axis_color,
        ));

        for (index, vertex) in vertices.iter().enumerate() {
            let label = x_label(scene.series, scene.config, index);
            if label.is_empty() {
                continue;
            }
            frame.push_text(TextPrimitive::new(
                label,
                vertex.x,
                area.bottom() + LABEL_GAP_PX,
                LABEL_FONT_PX,
                colors.label_color,
                TextHAlign::Center,
            ));
        }

        let visible = &vertices[..progress.visible_points(vertices.len())];
        let line_color = scene.config.primary_color();
        for pair in visible.windows(2) {
            frame.push_line(LinePrimitive::between(
                pair[0],
                pair[1],
                SERIES_STROKE_PX,
                line_color,
            ));
        }
        for (vertex, point) in visible.iter().zip(scene.series.iter()) {
            frame.push_fill_arc(ArcPrimitive::circle(
                *vertex,
                MARKER_RADIUS_PX,
                SERIES_STROKE_PX,
                line_color,
            ));
            frame.push_text(TextPrimitive::new(
                format_value(point.plotted_value()),
                vertex.x,
                vertex.y - LABEL_GAP_PX - LABEL_FONT_PX,
                LABEL_FONT_PX,
                colors.label_color,
                TextHAlign::Center,
            ));
        }

        frame
    }

    fn hit_test(&self, scene: &ChartScene<'_>, x: f64, y: f64) -> Option<usize> {
        let scale = ValueScale::from_series_max(scene.series);
        let vertices: Vec<PixelPoint> = line_vertices(scene.series, scale, scene.plot_area());
        nearest_vertex(vertices.into_iter().enumerate(), x, y)
    }
}
