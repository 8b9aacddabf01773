// Tooltip domain model
use serde::Serialize;
use std::fmt;

/// Text shown when a point tooltip is requested without any series.
pub const NO_DATASET: &str = "NO DATASET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigureLine {
    pub value: String,
    pub label: String,
}

impl FigureLine {
    pub fn new(value: String, label: String) -> Self {
        Self { value, label }
    }
}

impl fmt::Display for FigureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.label)
    }
}

/// Payload of a point tooltip: one figure per series, in label order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "figures", rename_all = "snake_case")]
pub enum Tooltip {
    NoDataset,
    Figures(Vec<FigureLine>),
}

impl Tooltip {
    pub fn figures(&self) -> &[FigureLine] {
        match self {
            Tooltip::NoDataset => &[],
            Tooltip::Figures(lines) => lines,
        }
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tooltip::NoDataset => f.write_str(NO_DATASET),
            Tooltip::Figures(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{line}")?;
                }
                Ok(())
            }
        }
    }
}
