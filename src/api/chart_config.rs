use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Palette used when a config carries no colors of its own.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0x10, 0xb9, 0x81),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0x06, 0xb6, 0xd4),
];

/// Radar ceiling used when the caller does not supply one.
pub const DEFAULT_RADAR_MAX_VALUE: f64 = 100.0;

/// Per-chart presentation settings.
///
/// This type is serializable so hosts can persist chart setup next to the
/// data it presents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_animated")]
    pub animated: bool,
    /// Radar ceiling. Never derived from the series.
    #[serde(default)]
    pub max_value: Option<f64>,
    /// Line chart x-axis label override.
    #[serde(default)]
    pub axis_labels: Option<Vec<String>>,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_bar_gap")]
    pub bar_gap: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            height: default_height(),
            animated: default_animated(),
            max_value: None,
            axis_labels: None,
            duration_ms: default_duration_ms(),
            padding: default_padding(),
            bar_gap: default_bar_gap(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_axis_labels<L: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = L>,
    ) -> Self {
        self.axis_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_bar_gap(mut self, bar_gap: f64) -> Self {
        self.bar_gap = bar_gap;
        self
    }

    /// Palette color for point `index`, cycling through the palette.
    ///
    /// Entries with a channel outside `[0, 1]` are replaced by the default
    /// palette color at the same index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        let fallback = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        if self.palette.is_empty() {
            return fallback;
        }
        let color = self.palette[index % self.palette.len()];
        if color.validate().is_ok() {
            color
        } else {
            fallback
        }
    }

    /// Number of palette entries `color_at` replaces with a default color.
    #[must_use]
    pub fn invalid_palette_entries(&self) -> usize {
        self.palette
            .iter()
            .filter(|color| color.validate().is_err())
            .count()
    }

    #[must_use]
    pub fn primary_color(&self) -> Color {
        self.color_at(0)
    }

    /// Radar ceiling, falling back to `DEFAULT_RADAR_MAX_VALUE` when unset.
    #[must_use]
    pub fn radar_max_value(&self) -> f64 {
        self.max_value.unwrap_or(DEFAULT_RADAR_MAX_VALUE)
    }

    /// Drawing height on a surface: the configured height clamped to the
    /// surface, or the full surface when the configured height is unusable.
    #[must_use]
    pub fn effective_height(&self, viewport: Viewport) -> f64 {
        let surface_height = f64::from(viewport.height);
        if self.height.is_finite() && self.height > 0.0 {
            self.height.min(surface_height)
        } else {
            surface_height
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("failed to serialize config: {err}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidData(format!("failed to parse config: {err}")))
    }
}

fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.to_vec()
}

fn default_height() -> f64 {
    300.0
}

fn default_animated() -> bool {
    true
}

fn default_duration_ms() -> f64 {
    1000.0
}

fn default_padding() -> f64 {
    40.0
}

fn default_bar_gap() -> f64 {
    10.0
}
