// Error types shared by the formatter, resolvers and config loader
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot format {value}: measurements must be finite and non-negative")]
    InvalidMeasurement { value: f64 },

    #[error("hover coordinate {axis} is not a finite number ({value})")]
    InvalidCoordinate { axis: char, value: f64 },

    #[error("{labels} labels supplied for {series} series")]
    LabelCountMismatch { labels: usize, series: usize },

    #[error("no sample at timestamp {timestamp} in the reference series")]
    TimestampNotFound { timestamp: i64 },

    #[error("series {index} is not aligned with the reference series at position {position}")]
    MisalignedSeries { index: usize, position: usize },

    #[error("month table must have 12 entries, got {len}")]
    InvalidMonthTable { len: usize },
}
