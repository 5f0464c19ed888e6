use serde::{Deserialize, Serialize};

/// How a chart turns animation progress into visible geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealStrategy {
    /// One more vertex becomes visible every `duration / N`, left to right.
    PointByPoint,
    /// A single fraction scales every height, angle and radius at once.
    Continuous,
}

/// Animation progress handed to renderers, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealProgress {
    fraction: f64,
}

impl RevealProgress {
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self { fraction }
    }

    /// Final, fully revealed state.
    #[must_use]
    pub const fn complete() -> Self {
        Self { fraction: 1.0 }
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.fraction
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.fraction >= 1.0
    }

    /// Number of vertices visible out of `count` under point-by-point reveal.
    ///
    /// Vertex `k` appears once `fraction >= k / count`, so the first vertex is
    /// visible from the first frame and all are visible at completion.
    #[must_use]
    pub fn visible_points(self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        if self.is_complete() {
            return count;
        }
        let stepped = (self.fraction * count as f64).floor() as usize + 1;
        stepped.min(count)
    }
}

impl Default for RevealProgress {
    fn default() -> Self {
        Self::complete()
    }
}
