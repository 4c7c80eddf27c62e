//! Birth data input and validation.

use saju_base::Gender;
use saju_time::{BirthMoment, TimeError};
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1;
/// Latest accepted birth year.
pub const MAX_YEAR: i32 = 9999;

/// Birth date, hour and gender as supplied by a caller.
///
/// `timezone` is carried but not applied: the hour is read as UTC wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// 1..=31, must exist in the month
    pub day: u32,
    /// 0..=23
    pub hour: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Selects the luck-period starting age.
    #[serde(default)]
    pub gender: Gender,
}

impl BirthData {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            timezone: None,
            gender: Gender::default(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Check every field and produce the birth moment.
    pub fn validate(&self) -> Result<BirthMoment, SajuError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(SajuError::InvalidBirthData(format!(
                "year {} outside {MIN_YEAR}..={MAX_YEAR}",
                self.year
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(SajuError::InvalidBirthData(format!(
                "month {} outside 1..=12",
                self.month
            )));
        }
        if self.hour > 23 {
            return Err(SajuError::InvalidBirthData(format!(
                "hour {} outside 0..=23",
                self.hour
            )));
        }
        BirthMoment::new(self.year, self.month, self.day, self.hour).map_err(|e| match e {
            TimeError::InvalidDate(msg) => SajuError::InvalidBirthData(msg),
            other => SajuError::Time(other),
        })
    }
}
