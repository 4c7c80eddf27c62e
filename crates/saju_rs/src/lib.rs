//! Birth-chart facade for the saju engine.
//!
//! Takes a birth date, hour and gender and returns the four pillars, element
//! counts, ten-relation table, useful elements and luck periods in one
//! `BirthChart`. Callers can hold a `SajuEngine` or use the global one.
//!
//! # Quick start
//!
//! ```rust
//! use saju_rs::*;
//!
//! let chart = calculate(&BirthData::new(1990, 5, 15, 10)).unwrap();
//! assert_eq!(chart.pillars.year.to_string(), "경오");
//! assert_eq!(chart.luck_periods.len(), 8);
//! ```

pub mod birth;
pub mod chart;
pub mod engine;
pub mod error;
pub mod global;

pub use birth::{BirthData, MAX_YEAR, MIN_YEAR};
pub use chart::BirthChart;
pub use engine::{EngineConfig, SajuEngine};
pub use error::SajuError;
pub use global::{engine, init, is_initialized};

// Re-export the types a chart is made of so callers need only this crate.
pub use saju_base::{
    EarthlyBranch, Element, ElementCounts, FourPillars, Gender, HeavenlyStem, LuckPeriod,
    Pillar, PillarPosition, PillarSlot, RelationTable, TenRelation,
};
pub use saju_time::{SolarTerm, SolarTermProvider, SolarTermTable, TimeError};

/// Calculate a birth chart with the global engine.
pub fn calculate(birth: &BirthData) -> Result<BirthChart, SajuError> {
    engine().calculate(birth)
}

/// Four pillars with the global engine.
pub fn pillars(birth: &BirthData) -> Result<FourPillars, SajuError> {
    engine().pillars(birth)
}
