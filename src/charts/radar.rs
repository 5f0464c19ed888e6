use crate::animation::{RevealProgress, RevealStrategy};
use crate::core::{PixelPoint, ValueScale, polar_angle, polar_point};
use crate::render::{
    ArcPrimitive, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::theme::resolve_theme;

use super::{
    ChartKind, ChartRenderer, ChartScene, GRID_STROKE_PX, LABEL_FONT_PX, SERIES_STROKE_PX,
    nearest_vertex,
};

const REFERENCE_RINGS: usize = 4;
const LABEL_OFFSET_PX: f64 = 12.0;
const VERTEX_RADIUS_PX: f64 = 3.0;
const FILL_ALPHA: f64 = 0.2;

/// Radar (spider) chart over `N` evenly spaced axes.
///
/// The normalization ceiling comes from `ChartConfig::max_value` and is never
/// derived from the data. All vertex radii grow together while animating.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarChartRenderer;

fn center_and_radius(scene: &ChartScene<'_>) -> (PixelPoint, f64) {
    let width = scene.width();
    let height = scene.height();
    let radius = (width.min(height) * 0.5 - scene.config.padding).max(0.0);
    (PixelPoint::new(width * 0.5, height * 0.5), radius)
}

fn data_vertices(scene: &ChartScene<'_>, growth: f64) -> Vec<PixelPoint> {
    let (center, radius) = center_and_radius(scene);
    let scale = ValueScale::with_ceiling(scene.config.radar_max_value());
    let count = scene.series.len();
    scene
        .series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let reach = scale.normalize(point.plotted_value()) * radius * growth;
            polar_point(center, reach, polar_angle(index, count))
        })
        .collect()
}

fn label_alignment(angle: f64) -> TextHAlign {
    let horizontal = angle.cos();
    if horizontal > 0.1 {
        TextHAlign::Left
    } else if horizontal < -0.1 {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    }
}

impl ChartRenderer for RadarChartRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn reveal_strategy(&self) -> RevealStrategy {
        RevealStrategy::Continuous
    }

    fn build_frame(&self, scene: &ChartScene<'_>, progress: RevealProgress) -> RenderFrame {
        let mut frame = RenderFrame::new(scene.viewport);
        if scene.series.is_empty() {
            return frame;
        }

        let colors = resolve_theme(scene.theme);
        let (center, radius) = center_and_radius(scene);
        let count = scene.series.len();

        for ring in 1..=REFERENCE_RINGS {
            frame.push_stroke_arc(ArcPrimitive::circle(
                center,
                radius * ring as f64 / REFERENCE_RINGS as f64,
                GRID_STROKE_PX,
                colors.grid_color,
            ));
        }

        for (index, point) in scene.series.iter().enumerate() {
            let angle = polar_angle(index, count);
            frame.push_line(LinePrimitive::between(
                center,
                polar_point(center, radius, angle),
                GRID_STROKE_PX,
                colors.axis_color,
            ));
            if point.label.is_empty() {
                continue;
            }
            let anchor = polar_point(center, radius + LABEL_OFFSET_PX, angle);
            frame.push_text(TextPrimitive::new(
                point.label.clone(),
                anchor.x,
                anchor.y - LABEL_FONT_PX * 0.5,
                LABEL_FONT_PX,
                colors.label_color,
                label_alignment(angle),
            ));
        }

        let vertices = data_vertices(scene, progress.fraction());
        let color = scene.config.primary_color();
        frame.push_polygon(PolygonPrimitive::new(
            vertices.clone(),
            color.with_alpha(FILL_ALPHA),
        ));
        for (index, vertex) in vertices.iter().enumerate() {
            let next = vertices[(index + 1) % vertices.len()];
            frame.push_line(LinePrimitive::between(*vertex, next, SERIES_STROKE_PX, color));
        }
        for vertex in &vertices {
            frame.push_fill_arc(ArcPrimitive::circle(
                *vertex,
                VERTEX_RADIUS_PX,
                SERIES_STROKE_PX,
                color,
            ));
        }

        frame
    }

    fn hit_test(&self, scene: &ChartScene<'_>, x: f64, y: f64) -> Option<usize> {
        nearest_vertex(data_vertices(scene, 1.0).into_iter().enumerate(), x, y)
    }
}
