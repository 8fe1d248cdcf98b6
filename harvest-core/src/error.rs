//! Error types for harvest scheduling

use thiserror::Error;

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for harvest operations
#[derive(Error, Debug)]
pub enum Error {
    /// Plant date is not a `YYYY-MM-DD` calendar date
    #[error("invalid plant date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    /// Input entry is missing a required field
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Harvest date falls outside the supported calendar range
    #[error("harvest date for {plant_date} plus {dtm} days is out of range")]
    DateOutOfRange { plant_date: String, dtm: i64 },

    /// Negative days to maturity while negative values are disabled
    #[error("days to maturity must not be negative (got {dtm})")]
    NegativeDtm { dtm: i64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Planting input could not be loaded
    #[error("Input error: {0}")]
    Input(String),
}
