// Tooltip resolver - Builds hover text for line and pie charts
use crate::application::formatter::{format, number_to_string, round_half_up};
use crate::domain::hover::{AxisKind, HoverPoint};
use crate::domain::measurement::UnitKind;
use crate::domain::series::Series;
use crate::domain::tooltip::{FigureLine, Tooltip};
use crate::error::{Error, Result};
use chrono::Month;
use serde::Deserialize;

/// What to do when the hovered timestamp is missing from the reference series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedTimestamp {
    #[default]
    Fail,
    /// Use the final sample, as the legacy report pages did.
    LastSample,
}

/// How far the parallel-series precondition is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesAlignment {
    /// Every series must carry the reference timestamp at the found position.
    #[default]
    Verified,
    /// Series are assumed aligned and indexed by position only.
    Positional,
}

/// Month names indexed from January. Always 12 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames([String; 12]);

impl MonthNames {
    /// Name for a 1-based month index; indices outside 1..=12 wrap around.
    pub fn for_index(&self, index: i64) -> &str {
        let slot = (index.rem_euclid(12) + 11) % 12;
        &self.0[slot as usize]
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        let mut month = Month::January;
        Self(std::array::from_fn(|_| {
            let name = month.name()[..3].to_string();
            month = month.succ();
            name
        }))
    }
}

impl TryFrom<Vec<String>> for MonthNames {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        let len = names.len();
        names
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidMonthTable { len })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipResolver {
    months: MonthNames,
    unmatched: UnmatchedTimestamp,
    alignment: SeriesAlignment,
}

impl TooltipResolver {
    pub fn new(months: MonthNames, unmatched: UnmatchedTimestamp, alignment: SeriesAlignment) -> Self {
        Self {
            months,
            unmatched,
            alignment,
        }
    }

    pub fn months(&self) -> &MonthNames {
        &self.months
    }

    /// Figures of every series at the hovered timestamp, one line per label.
    ///
    /// `series` holds one optional entry per label; absent entries are
    /// skipped. The position is looked up in the first present series and
    /// reused for the others.
    pub fn resolve_point_tooltip<S: AsRef<str>>(
        &self,
        point: &HoverPoint,
        kind: UnitKind,
        labels: &[S],
        series: Option<&[Option<Series>]>,
    ) -> Result<Tooltip> {
        let Some(series) = series else {
            tracing::debug!("No dataset for tooltip at x={}", point.x);
            return Ok(Tooltip::NoDataset);
        };

        if labels.len() != series.len() {
            return Err(Error::LabelCountMismatch {
                labels: labels.len(),
                series: series.len(),
            });
        }

        let Some(reference) = series.iter().flatten().next() else {
            tracing::debug!("All {} series are empty slots", series.len());
            return Ok(Tooltip::NoDataset);
        };

        let timestamp = finite('x', point.x)?.trunc() as i64;
        let position = self.locate(reference, timestamp)?;
        let reference_time = reference.points()[position].time_ms;
        tracing::debug!("Timestamp {} resolved to position {}", timestamp, position);

        let mut lines = Vec::with_capacity(series.len());
        for (index, (label, entry)) in labels.iter().zip(series).enumerate() {
            let Some(entry) = entry else {
                continue;
            };

            let sample = entry
                .get(position)
                .ok_or(Error::MisalignedSeries { index, position })?;
            if self.alignment == SeriesAlignment::Verified && sample.time_ms != reference_time {
                return Err(Error::MisalignedSeries { index, position });
            }

            lines.push(FigureLine::new(
                format(sample.value, kind)?,
                label.as_ref().to_string(),
            ));
        }

        Ok(Tooltip::Figures(lines))
    }

    fn locate(&self, reference: &Series, timestamp: i64) -> Result<usize> {
        if let Some(position) = reference.position_of(timestamp) {
            return Ok(position);
        }

        match (self.unmatched, reference.len()) {
            (UnmatchedTimestamp::LastSample, len) if len > 0 => {
                tracing::warn!(
                    "Timestamp {} not found in {} samples, using the last one",
                    timestamp,
                    len
                );
                Ok(len - 1)
            }
            _ => Err(Error::TimestampNotFound { timestamp }),
        }
    }

    /// `"<x label>, <series label>: <rounded y>"`.
    ///
    /// Takes no unit kind: the y value is always rounded, never scaled, so the
    /// text is the same whatever the series measures.
    pub fn resolve_axis_tooltip(&self, point: &HoverPoint, axis: AxisKind) -> Result<String> {
        let x = finite('x', point.x)?;
        let y = finite('y', point.y)?;

        let label = match axis {
            AxisKind::Month => self.months.for_index(x.trunc() as i64).to_string(),
            AxisKind::Raw => number_to_string(x),
        };

        Ok(format!(
            "{}, {}: {}",
            label,
            point.label(),
            number_to_string(round_half_up(y))
        ))
    }

    /// `"<series label>: <rounded y>"`.
    pub fn resolve_pie_tooltip(&self, point: &HoverPoint) -> Result<String> {
        let y = finite('y', point.y)?;
        Ok(format!("{}: {}", point.label(), number_to_string(round_half_up(y))))
    }
}

fn finite(axis: char, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidCoordinate { axis, value })
    }
}
