use serde::{Deserialize, Serialize};

/// Pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labeled sample of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Value used for layout: non-finite samples count as zero.
    #[must_use]
    pub fn plotted_value(&self) -> f64 {
        if self.value.is_finite() {
            self.value
        } else {
            0.0
        }
    }
}

/// Ordered sequence of data points.
///
/// Order is significant: it decides bar, line and radar axis position and pie
/// slice order. Nothing in the engine sorts a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self {
            points: pairs
                .into_iter()
                .map(|(label, value)| DataPoint::new(label, value))
                .collect(),
        }
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Largest plotted value, or `0.0` for an empty series.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(DataPoint::plotted_value)
            .fold(0.0, f64::max)
    }

    /// Sum of the positive plotted values. Non-positive samples take no share
    /// of a pie.
    #[must_use]
    pub fn positive_total(&self) -> f64 {
        self.points
            .iter()
            .map(DataPoint::plotted_value)
            .filter(|value| *value > 0.0)
            .sum()
    }

    /// Number of samples that had to be replaced because they were not finite.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.points
            .iter()
            .filter(|point| !point.value.is_finite())
            .count()
    }
}

impl From<Vec<DataPoint>> for Series {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
