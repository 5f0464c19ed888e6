//! Data-space to pixel-space transforms.
//!
//! Cartesian helpers serve the bar and line charts, polar helpers serve the
//! pie and radar charts. Everything here is a pure function of its inputs and
//! guards every division so degenerate input maps to finite pixels.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::scale::ValueScale;
use crate::core::types::Series;

/// Pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Inner plotting rectangle left after padding is removed from every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Builds the plot area for a `width x height` region.
    ///
    /// Padding that would invert the area collapses it to zero size instead.
    #[must_use]
    pub fn from_size(width: f64, height: f64, padding: f64) -> Self {
        let padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            0.0
        };
        let left = padding.min(width * 0.5);
        let top = padding.min(height * 0.5);
        Self {
            left,
            top,
            width: (width - 2.0 * padding).max(0.0),
            height: (height - 2.0 * padding).max(0.0),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

/// Horizontal placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub x: f64,
    pub width: f64,
}

/// Lays out `count` bars left to right with a fixed gap.
///
/// `x = left + i * (bar_width + gap)`. The gap shrinks for crowded series so
/// every bar keeps a positive width and the last bar ends on `area.right()`.
#[must_use]
pub fn bar_slots(count: usize, area: PlotArea, gap: f64) -> Vec<BarSlot> {
    if count == 0 {
        return Vec::new();
    }

    let n = count as f64;
    let gap = if count > 1 && gap.is_finite() {
        gap.max(0.0).min(area.width / (2.0 * n))
    } else {
        0.0
    };
    let bar_width = ((area.width - gap * (n - 1.0)) / n).max(0.0);

    (0..count)
        .map(|index| BarSlot {
            x: area.left + index as f64 * (bar_width + gap),
            width: bar_width,
        })
        .collect()
}

/// Height of a bar for an already normalized value.
#[must_use]
pub fn bar_height(normalized: f64, area: PlotArea) -> f64 {
    normalized.clamp(0.0, 1.0) * area.height
}

/// X position of vertex `index` of a line with `count` vertices.
///
/// A single vertex sits at the horizontal center of the plot area.
#[must_use]
pub fn line_x(index: usize, count: usize, area: PlotArea) -> f64 {
    if count <= 1 {
        return area.left + area.width * 0.5;
    }
    area.left + index as f64 * (area.width / (count - 1) as f64)
}

/// Y position for an already normalized value; `1.0` reaches the top edge.
#[must_use]
pub fn line_y(normalized: f64, area: PlotArea) -> f64 {
    area.bottom() - normalized.clamp(0.0, 1.0) * area.height
}

/// Projects every point of `series` into line vertices.
#[must_use]
pub fn line_vertices(series: &Series, scale: ValueScale, area: PlotArea) -> Vec<PixelPoint> {
    let count = series.len();
    series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            PixelPoint::new(
                line_x(index, count, area),
                line_y(scale.normalize(point.plotted_value()), area),
            )
        })
        .collect()
}

/// Angle of axis or slice boundary `index` out of `count`.
///
/// Index 0 points straight up and angles grow clockwise in screen space.
#[must_use]
pub fn polar_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    (index as f64 / count as f64) * TAU - FRAC_PI_2
}

/// Point at `radius` from `center` along `angle`.
#[must_use]
pub fn polar_point(center: PixelPoint, radius: f64, angle: f64) -> PixelPoint {
    PixelPoint::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Angular extent of one pie slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceAngles {
    pub index: usize,
    pub start: f64,
    pub sweep: f64,
}

impl SliceAngles {
    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.sweep
    }
}

/// Lays out pie slices cumulatively in series order, starting at `-PI/2`.
///
/// Every sweep is `value / total * TAU * progress`, so all slices grow together
/// while animating. A zero total yields no slices at all.
#[must_use]
pub fn pie_slices(series: &Series, progress: f64) -> Vec<SliceAngles> {
    let scale = ValueScale::from_series_total(series);
    if scale.is_degenerate() {
        return Vec::new();
    }

    let progress = progress.clamp(0.0, 1.0);
    let mut start = -FRAC_PI_2;
    series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let sweep = scale.normalize(point.plotted_value()) * TAU * progress;
            let slice = SliceAngles {
                index,
                start,
                sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Normalizes `angle` into `[-PI/2, 3PI/2)`, the range pie slices are laid out in.
#[must_use]
pub fn normalize_from_top(angle: f64) -> f64 {
    (angle + FRAC_PI_2).rem_euclid(TAU) - FRAC_PI_2
}
