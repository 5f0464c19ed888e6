use crate::animation::{RevealProgress, RevealStrategy};
use crate::core::mapping::normalize_from_top;
use crate::core::{DataPoint, PixelPoint, pie_slices};
use crate::render::{ArcPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};
use crate::theme::resolve_theme;

use super::{ChartKind, ChartRenderer, ChartScene, LABEL_FONT_PX, format_value};

const LEGEND_ROW_PX: f64 = 20.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_TEXT_OFFSET_PX: f64 = 18.0;

/// Legend entry text.
///
/// Shows the raw value with a percent sign and does not divide by the total,
/// so it only reads as a percentage when the values already sum to about 100.
#[must_use]
pub fn pie_legend_text(point: &DataPoint) -> String {
    format!("{}: {}%", point.label, format_value(point.plotted_value()))
}

/// Pie geometry for one scene.
struct PieLayout {
    center: PixelPoint,
    radius: f64,
    legend_top: f64,
}

impl PieLayout {
    fn resolve(scene: &ChartScene<'_>) -> Self {
        let width = scene.width();
        let legend_height = LEGEND_ROW_PX * scene.series.len() as f64;
        let pie_height = (scene.height() - legend_height).max(0.0);
        let radius = (width.min(pie_height) * 0.5 - scene.config.padding).max(0.0);
        Self {
            center: PixelPoint::new(width * 0.5, pie_height * 0.5),
            radius,
            legend_top: pie_height,
        }
    }
}

/// Pie with slices in series order, starting straight up and sweeping
/// clockwise, with a legend underneath.
///
/// All slice angles grow together while animating. A series whose positive
/// values sum to zero draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieChartRenderer;

impl ChartRenderer for PieChartRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn reveal_strategy(&self) -> RevealStrategy {
        RevealStrategy::Continuous
    }

    fn build_frame(&self, scene: &ChartScene<'_>, progress: RevealProgress) -> RenderFrame {
        let mut frame = RenderFrame::new(scene.viewport);
        let slices = pie_slices(scene.series, progress.fraction());
        if slices.is_empty() {
            return frame;
        }

        let colors = resolve_theme(scene.theme);
        let layout = PieLayout::resolve(scene);

        if layout.radius > 0.0 {
            for slice in slices.iter().filter(|slice| slice.sweep > 0.0) {
                frame.push_fill_arc(ArcPrimitive::wedge(
                    layout.center,
                    layout.radius,
                    slice.start,
                    slice.sweep,
                    scene.config.color_at(slice.index),
                ));
            }
        }

        let left = scene.config.padding.max(0.0);
        for (index, point) in scene.series.iter().enumerate() {
            let row_top = layout.legend_top + index as f64 * LEGEND_ROW_PX;
            let swatch_top = row_top + (LEGEND_ROW_PX - LEGEND_SWATCH_PX) * 0.5;
            frame.push_rect(RectPrimitive::new(
                left,
                swatch_top,
                LEGEND_SWATCH_PX,
                LEGEND_SWATCH_PX,
                scene.config.color_at(index),
            ));
            frame.push_text(TextPrimitive::new(
                pie_legend_text(point),
                left + LEGEND_TEXT_OFFSET_PX,
                swatch_top,
                LABEL_FONT_PX,
                colors.label_color,
                TextHAlign::Left,
            ));
        }

        frame
    }

    fn hit_test(&self, scene: &ChartScene<'_>, x: f64, y: f64) -> Option<usize> {
        let slices = pie_slices(scene.series, 1.0);
        if slices.is_empty() {
            return None;
        }

        let layout = PieLayout::resolve(scene);
        let dx = x - layout.center.x;
        let dy = y - layout.center.y;
        if dx.hypot(dy) > layout.radius {
            return None;
        }

        let angle = normalize_from_top(dy.atan2(dx));
        slices
            .iter()
            .filter(|slice| slice.sweep > 0.0)
            .find(|slice| angle >= slice.start && angle < slice.end())
            .or_else(|| slices.iter().rev().find(|slice| slice.sweep > 0.0))
            .filter(|slice| angle >= slice.start)
            .map(|slice| slice.index)
    }
}
