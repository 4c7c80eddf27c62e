//! Error type for the facade.

use saju_time::TimeError;
use thiserror::Error;

/// Errors from chart calculation or engine setup.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Year, month, day or hour outside its domain.
    #[error("invalid birth data: {0}")]
    InvalidBirthData(String),
    /// Solar-term table or date error.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// `init` was called after the global engine was already set.
    #[error("global engine already initialized")]
    AlreadyInitialized,
}
