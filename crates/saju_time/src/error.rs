//! Error types for solar-term tables and civil dates.

use thiserror::Error;

use crate::solar_term::SolarTerm;

/// Errors from solar-term table construction, loading, or date validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The designated fallback year has no table.
    #[error("default year {0} is missing from the solar-term table")]
    MissingDefaultYear(i32),
    /// A year's instants are not strictly increasing in canonical term order.
    #[error("solar-term table for {year} is not increasing at {term}")]
    NonMonotonic { year: i32, term: SolarTerm },
    /// A term name could not be resolved.
    #[error("unknown solar term: {0}")]
    UnknownTerm(String),
    /// Table document could not be parsed.
    #[error("solar-term table parse error: {0}")]
    Parse(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
    /// Calendar date or hour outside the representable range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl From<std::io::Error> for TimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for TimeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
