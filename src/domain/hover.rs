// Hover domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub label: String,
}

/// Coordinate under the pointer, as reported by the charting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    pub x: f64,
    pub y: f64,
    pub series: SeriesMeta,
}

impl HoverPoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            series: SeriesMeta { label: label.into() },
        }
    }

    pub fn label(&self) -> &str {
        &self.series.label
    }
}

/// How the x coordinate of an axis tooltip is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AxisKind {
    /// x is a 1-based month index.
    Month,
    /// x is printed as is.
    #[default]
    Raw,
}

impl From<&str> for AxisKind {
    fn from(kind: &str) -> Self {
        match kind {
            "month" => AxisKind::Month,
            _ => AxisKind::Raw,
        }
    }
}

impl From<String> for AxisKind {
    fn from(kind: String) -> Self {
        Self::from(kind.as_str())
    }
}
