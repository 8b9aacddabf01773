// Series domain models
use serde::{Deserialize, Serialize};

/// One sample of a plotted series. The charting layer sends it as a
/// `[timestamp, value]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct TimeSeriesPoint {
    pub time_ms: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}

impl From<(i64, f64)> for TimeSeriesPoint {
    fn from((time_ms, value): (i64, f64)) -> Self {
        Self::new(time_ms, value)
    }
}

impl From<TimeSeriesPoint> for (i64, f64) {
    fn from(point: TimeSeriesPoint) -> Self {
        (point.time_ms, point.value)
    }
}

/// Samples of one tracked metric, ordered by timestamp. Series of the same
/// chart are parallel: sample `k` of every series carries the same timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<TimeSeriesPoint>,
}

impl Series {
    pub fn new(points: Vec<TimeSeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn get(&self, position: usize) -> Option<&TimeSeriesPoint> {
        self.points.get(position)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of the first sample stamped `time_ms`, scanning from the start.
    pub fn position_of(&self, time_ms: i64) -> Option<usize> {
        self.points.iter().position(|p| p.time_ms == time_ms)
    }
}

impl From<Vec<TimeSeriesPoint>> for Series {
    fn from(points: Vec<TimeSeriesPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<(i64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(TimeSeriesPoint::from).collect())
    }
}
