//! The birth-chart result.

use saju_base::{
    Element, ElementCounts, FourPillars, Gender, HeavenlyStem, LuckPeriod, RelationTable,
};
use serde::Serialize;

/// Everything derived for one birth. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthChart {
    pub pillars: FourPillars,
    pub element_counts: ElementCounts,
    pub ten_relations: RelationTable,
    /// 0..=2 weak elements, in element order.
    pub useful_elements: Vec<Element>,
    /// Exactly eight periods, earliest first.
    pub luck_periods: Vec<LuckPeriod>,
    pub day_stem: HeavenlyStem,
    pub day_element: Element,
    /// Gender used for the luck periods.
    pub gender: Gender,
    /// Table year that answered the month-boundary lookup.
    pub solar_term_year: i32,
}
