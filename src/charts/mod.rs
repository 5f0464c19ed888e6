//! Chart renderers.
//!
//! Each renderer turns a series, a config and a theme into a `RenderFrame` for
//! one animation progress value. Renderers are stateless: the same inputs
//! always produce the same frame, and hit testing is a pure function of the
//! same inputs.

mod bar;
mod line;
mod pie;
mod radar;

pub use bar::BarChartRenderer;
pub use line::{LineChartRenderer, axis_label_mismatch};
pub use pie::{PieChartRenderer, pie_legend_text};
pub use radar::RadarChartRenderer;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::animation::{RevealProgress, RevealStrategy};
use crate::api::ChartConfig;
use crate::core::{PixelPoint, PlotArea, Series, Viewport};
use crate::render::RenderFrame;
use crate::theme::Theme;

pub(crate) const LABEL_FONT_PX: f64 = 12.0;
pub(crate) const AXIS_STROKE_PX: f64 = 1.0;
pub(crate) const GRID_STROKE_PX: f64 = 1.0;
pub(crate) const SERIES_STROKE_PX: f64 = 2.0;
pub(crate) const HIT_RADIUS_PX: f64 = 10.0;

/// Chart variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Radar,
}

impl ChartKind {
    #[must_use]
    pub fn renderer(self) -> &'static dyn ChartRenderer {
        match self {
            Self::Bar => &BarChartRenderer,
            Self::Line => &LineChartRenderer,
            Self::Pie => &PieChartRenderer,
            Self::Radar => &RadarChartRenderer,
        }
    }
}

/// Inputs shared by every renderer for one draw.
#[derive(Debug, Clone, Copy)]
pub struct ChartScene<'a> {
    pub series: &'a Series,
    pub config: &'a ChartConfig,
    pub theme: Theme,
    pub viewport: Viewport,
}

impl<'a> ChartScene<'a> {
    #[must_use]
    pub fn new(
        series: &'a Series,
        config: &'a ChartConfig,
        theme: Theme,
        viewport: Viewport,
    ) -> Self {
        Self {
            series,
            config,
            theme,
            viewport,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.config.effective_height(self.viewport)
    }

    /// Padded cartesian plot area.
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_size(self.width(), self.height(), self.config.padding)
    }
}

pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;

    fn reveal_strategy(&self) -> RevealStrategy;

    /// Builds the frame for `progress`. An empty series yields an empty frame.
    fn build_frame(&self, scene: &ChartScene<'_>, progress: RevealProgress) -> RenderFrame;

    /// Index of the point under pixel `(x, y)` in the fully revealed chart.
    fn hit_test(&self, scene: &ChartScene<'_>, x: f64, y: f64) -> Option<usize>;
}

/// Formats a value label: integral values without decimals, others with one.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Closest candidate to `(x, y)` no farther than `HIT_RADIUS_PX`.
pub(crate) fn nearest_vertex(
    candidates: impl IntoIterator<Item = (usize, PixelPoint)>,
    x: f64,
    y: f64,
) -> Option<usize> {
    let pointer = PixelPoint::new(x, y);
    candidates
        .into_iter()
        .map(|(index, vertex)| (OrderedFloat(vertex.distance_to(pointer)), index))
        .filter(|(distance, _)| distance.0 <= HIT_RADIUS_PX)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, index)| index)
}
