//! Four Pillars (saju) calculations.
//!
//! This crate provides:
//! - The 10 heavenly stems, 12 earthly branches, 5 elements and 10 relations
//!   as closed enums with total lookups
//! - Year, month, day and hour pillar derivation
//! - Element counts, ten-relation tables and useful-element selection
//! - Eight-step luck periods
//!
//! All tables are compile-time constants; every function is pure.

pub mod analysis;
pub mod branch;
pub mod element;
pub mod luck;
pub mod pillar;
pub mod stem;
pub mod ten_relation;

pub use analysis::{
    ElementCounts, MAX_USEFUL_ELEMENTS, PillarSlot, RelationEntry, RelationTable,
    USEFUL_ELEMENT_THRESHOLD, element_counts, relation_table, useful_elements,
};
pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use luck::{
    Gender, LUCK_PERIOD_COUNT, LUCK_PERIOD_YEARS, LuckPeriod, luck_periods, luck_theme,
};
pub use pillar::{
    ALL_POSITIONS, FourPillars, Pillar, PillarPosition, day_pillar, four_pillars,
    hour_branch_index, hour_pillar, month_index, month_pillar, year_pillar,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_relation::{ALL_TEN_RELATIONS, TenRelation};
