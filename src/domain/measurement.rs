// Measurement domain models
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Display treatment of a plotted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UnitKind {
    /// Byte counts, scaled by powers of 1024.
    Size,
    /// Milliseconds, promoted to seconds from 1000 up.
    Duration,
    /// Plain counters, scaled by powers of 1000.
    #[default]
    Count,
}

impl From<&str> for UnitKind {
    fn from(kind: &str) -> Self {
        match kind {
            "size" => UnitKind::Size,
            "duration" => UnitKind::Duration,
            _ => UnitKind::Count,
        }
    }
}

impl From<String> for UnitKind {
    fn from(kind: String) -> Self {
        Self::from(kind.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementValue {
    value: f64,
    kind: UnitKind,
}

impl MeasurementValue {
    pub fn new(value: f64, kind: UnitKind) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidMeasurement { value });
        }
        Ok(Self { value, kind })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_kind_from_report_type() {
        assert_eq!(UnitKind::from("size"), UnitKind::Size);
        assert_eq!(UnitKind::from("duration"), UnitKind::Duration);
        assert_eq!(UnitKind::from("count"), UnitKind::Count);
        assert_eq!(UnitKind::from("hits"), UnitKind::Count);
        assert_eq!(UnitKind::from(""), UnitKind::Count);
    }

    #[test]
    fn test_unit_kind_deserialize_falls_back_to_count() {
        let kinds: Vec<UnitKind> = serde_json::from_str(r#"["size", "duration", "requests"]"#).unwrap();
        assert_eq!(kinds, vec![UnitKind::Size, UnitKind::Duration, UnitKind::Count]);
    }

    #[test]
    fn test_measurement_rejects_invalid_values() {
        assert!(MeasurementValue::new(0.0, UnitKind::Size).is_ok());
        assert!(matches!(
            MeasurementValue::new(-1.0, UnitKind::Size),
            Err(Error::InvalidMeasurement { .. })
        ));
        assert!(MeasurementValue::new(f64::NAN, UnitKind::Count).is_err());
        assert!(MeasurementValue::new(f64::INFINITY, UnitKind::Duration).is_err());
    }
}
