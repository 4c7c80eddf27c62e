//! Civil date handling: the day-count epoch and validated birth moments.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::Serialize;

use crate::error::TimeError;

/// `num_days_from_ce()` of 1900-01-01, the day-pillar epoch.
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 693_596;

/// Whole days from 1900-01-01 to `date`; negative before the epoch.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(DAY_EPOCH_DAYS_FROM_CE)
}

/// A calendar date plus birth hour, already checked to be a real date.
///
/// The wall-clock time is compared against UTC solar-term instants as if it
/// were UTC; no timezone shift is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BirthMoment {
    datetime: NaiveDateTime,
}

impl BirthMoment {
    /// Validate and build a birth moment (hour 0..=23, on the hour).
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidDate(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
        })?;
        let datetime = date
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| TimeError::InvalidDate(format!("hour {hour} is outside 0..=23")))?;
        Ok(Self { datetime })
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// The moment as a UTC instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.datetime.and_utc()
    }

    /// Whole days since the 1900-01-01 epoch.
    pub fn day_count(&self) -> i64 {
        days_since_epoch(self.date())
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%d %H:00"))
    }
}
