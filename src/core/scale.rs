use serde::{Deserialize, Serialize};

use crate::core::types::Series;

/// Maps raw values onto `[0, 1]` against a ceiling.
///
/// Bar, line and pie derive the ceiling from the series; the radar chart
/// always receives it from configuration. A zero, negative or non-finite
/// ceiling yields a degenerate scale that normalizes everything to `0.0`
/// instead of producing infinities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    ceiling: f64,
}

impl ValueScale {
    #[must_use]
    pub fn with_ceiling(ceiling: f64) -> Self {
        Self { ceiling }
    }

    /// Scale whose ceiling is the largest value of `series`.
    #[must_use]
    pub fn from_series_max(series: &Series) -> Self {
        Self::with_ceiling(series.max_value())
    }

    /// Scale whose ceiling is the sum of the positive values of `series`.
    #[must_use]
    pub fn from_series_total(series: &Series) -> Self {
        Self::with_ceiling(series.positive_total())
    }

    #[must_use]
    pub fn ceiling(self) -> f64 {
        self.ceiling
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.ceiling.is_finite() || self.ceiling <= 0.0
    }

    /// Normalized share of `value`, clamped to `[0, 1]`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return 0.0;
        }
        (value / self.ceiling).clamp(0.0, 1.0)
    }
}
