//! Error types for tabstatlib

use thiserror::Error;

/// Errors that can occur while building, summarizing, or serializing
/// report tables
#[derive(Error, Debug)]
pub enum TabstatError {
    /// A record carries the wrong number of measurements for its set
    #[error("record '{id}' has {actual} measurements, expected {expected}")]
    MeasurementCount {
        id: String,
        expected: usize,
        actual: usize,
    },

    /// Ratio derivation needs at least two measurement fields
    #[error("field derivation needs at least 2 measurement fields, found {0}")]
    NotEnoughFields(usize),

    /// A requested summary field is not part of the record set
    #[error("unknown measurement field: '{0}'")]
    UnknownField(String),

    /// Distribution parameters the sampler rejects
    #[error("invalid distribution for field '{field}': {message}")]
    InvalidDistribution { field: String, message: String },

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
