//! Solar-term tables and civil day counting for the saju engine.
//!
//! This crate provides:
//! - The 24 solar terms in canonical order (Start of Spring first)
//! - Year-keyed solar-term tables with a designated fallback year
//! - An embedded table for the default year, built once per process
//! - Whole-day counting from the 1900-01-01 epoch used by the day pillar
//! - `BirthMoment`, a validated civil date plus birth hour

pub mod civil;
pub mod error;
pub mod solar_term;
pub mod table;

pub use civil::{BirthMoment, DAY_EPOCH_DAYS_FROM_CE, days_since_epoch};
pub use error::TimeError;
pub use solar_term::{ALL_SOLAR_TERMS, MONTH_BOUNDARY_TERMS, SolarTerm};
pub use table::{DEFAULT_TABLE_YEAR, SolarTermProvider, SolarTermTable, SolarTermYear};
