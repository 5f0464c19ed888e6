use crate::animation::{RevealProgress, RevealStrategy};
use crate::core::{ValueScale, bar_height, bar_slots};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};
use crate::theme::resolve_theme;

use super::{AXIS_STROKE_PX, ChartKind, ChartRenderer, ChartScene, LABEL_FONT_PX, format_value};

const LABEL_GAP_PX: f64 = 6.0;

/// Vertical bars, one per point, left to right in series order.
///
/// Heights are normalized by the series maximum and scaled by progress, so
/// every bar grows together while animating. Value labels are left out while
/// progress is zero and otherwise sit just above the top of their bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChartRenderer;

impl ChartRenderer for BarChartRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
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
        let area = scene.plot_area();
        let scale = ValueScale::from_series_max(scene.series);
        let slots = bar_slots(scene.series.len(), area, scene.config.bar_gap);

        frame.push_line(LinePrimitive::new(
            area.left,
            area.bottom(),
            area.right(),
            area.bottom(),
            AXIS_STROKE_PX,
            colors.axis_color,
        ));

        for (index, (point, slot)) in scene.series.iter().zip(&slots).enumerate() {
            let full_height = bar_height(scale.normalize(point.plotted_value()), area);
            let height = full_height * progress.fraction();
            let top = area.bottom() - height;
            frame.push_rect(RectPrimitive::new(
                slot.x,
                top,
                slot.width,
                height,
                scene.config.color_at(index),
            ));

            let center_x = slot.x + slot.width * 0.5;
            if progress.fraction() > 0.0 {
                frame.push_text(TextPrimitive::new(
                    format_value(point.plotted_value()),
                    center_x,
                    top - LABEL_GAP_PX - LABEL_FONT_PX,
                    LABEL_FONT_PX,
                    colors.label_color,
                    TextHAlign::Center,
                ));
            }
            if !point.label.is_empty() {
                frame.push_text(TextPrimitive::new(
                    point.label.clone(),
                    center_x,
                    area.bottom() + LABEL_GAP_PX,
                    LABEL_FONT_PX,
                    colors.label_color,
                    TextHAlign::Center,
                ));
            }
        }

        frame
    }

    /// Hits the whole column of a bar, from the top of the plot area down to
    /// the baseline, so short bars stay easy to point at.
    fn hit_test(&self, scene: &ChartScene<'_>, x: f64, y: f64) -> Option<usize> {
        if scene.series.is_empty() {
            return None;
        }

        let area = scene.plot_area();
        if y < area.top || y > area.bottom() {
            return None;
        }

        bar_slots(scene.series.len(), area, scene.config.bar_gap)
            .iter()
            .position(|slot| x >= slot.x && x <= slot.x + slot.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChartConfig;
    use crate::core::{Series, Viewport};
    use crate::theme::Theme;

    #[test]
    fn half_progress_halves_every_bar() {
        let series = Series::from_pairs([("A", 50.0), ("B", 100.0)]);
        let config = ChartConfig::new(300.0);
        let scene = ChartScene::new(&series, &config, Theme::Light, Viewport::new(400, 300));

        let full = BarChartRenderer.build_frame(&scene, RevealProgress::complete());
        let half = BarChartRenderer.build_frame(&scene, RevealProgress::new(0.5));

        for (full_rect, half_rect) in full.rects().zip(half.rects()) {
            assert!((half_rect.height - full_rect.height * 0.5).abs() <= 1e-9);
            assert!((half_rect.y + half_rect.height - 260.0).abs() <= 1e-9);
        }
    }
}
