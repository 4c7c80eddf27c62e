//! Pillar derivation: year, month, day and hour stem/branch pairs.
//!
//! These are the engine's own simplified formulas, not almanac derivations:
//! - Year: `(year - 4) mod 10 / mod 12`, switching on 1 January rather than at
//!   Start of Spring or the lunar new year.
//! - Month: the branch is `branches[month_index]` and the stem is
//!   `stems[((year - 4) * 2 + month_index + 1) mod 10]`; this is not the
//!   five-tiger table.
//! - Day: whole days since 1900-01-01, `mod 10 / mod 12`.
//! - Hour: branch `floor(hour / 2) mod 12`, stem `(days * 12 + branch) mod 10`.

use saju_time::{BirthMoment, MONTH_BOUNDARY_TERMS, SolarTermProvider};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::trace;

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Position 0..59 in the sexagenary cycle (갑자 = 0).
    ///
    /// `None` when stem and branch differ in parity and so never meet in the cycle.
    pub fn cycle_index(&self) -> Option<u8> {
        let s = i32::from(self.stem.index());
        let b = i32::from(self.branch.index());
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Pillar at a sexagenary position; wraps in both directions.
    pub fn from_cycle_index(n: i64) -> Self {
        Self::new(HeavenlyStem::from_cycle(n), EarthlyBranch::from_cycle(n))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Pillar", 3)?;
        s.serialize_field("stem", &self.stem)?;
        s.serialize_field("branch", &self.branch)?;
        s.serialize_field("label", &self.to_string())?;
        s.end()
    }
}

/// The four pillar positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Lowercase key ("year", "month", "day", "hour").
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// Year, month, day and hour pillars of one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.into_iter().map(|p| (p, self.get(p)))
    }
}

/// Year pillar from the calendar year.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(i64::from(year) - 4)
}

/// Index (0..11) of the last month-opening term at or before the birth instant.
///
/// Terms are looked up for the birth's calendar year (with the provider's
/// fallback). A birth before every tabulated boundary gets index 0; terms the
/// table lacks are skipped.
pub fn month_index<P: SolarTermProvider + ?Sized>(birth: &BirthMoment, terms: &P) -> u8 {
    let instant = birth.instant();
    let mut index = 0u8;
    for (i, term) in MONTH_BOUNDARY_TERMS.iter().enumerate() {
        if let Some(start) = terms.term_instant(birth.year(), *term) {
            if start <= instant {
                index = i as u8;
            }
        }
    }
    trace!(
        year = birth.year(),
        table_year = terms.resolved_year(birth.year()),
        index,
        "month boundary resolved"
    );
    index
}

/// Month pillar from the calendar year and the month index (0..11).
pub fn month_pillar(year: i32, month_index: u8) -> Pillar {
    let stem = HeavenlyStem::from_cycle((i64::from(year) - 4) * 2 + i64::from(month_index) + 1);
    let branch = EarthlyBranch::from_cycle(i64::from(month_index));
    Pillar::new(stem, branch)
}

/// Day pillar from whole days since 1900-01-01.
pub fn day_pillar(day_count: i64) -> Pillar {
    Pillar::from_cycle_index(day_count)
}

/// Hour branch index: each branch spans two clock hours starting at 00:00.
pub const fn hour_branch_index(hour: u32) -> u8 {
    ((hour / 2) % 12) as u8
}

/// Hour pillar from the day count and clock hour.
pub fn hour_pillar(day_count: i64, hour: u32) -> Pillar {
    let branch_index = hour_branch_index(hour);
    let stem = HeavenlyStem::from_cycle(day_count * 12 + i64::from(branch_index));
    Pillar::new(stem, EarthlyBranch::from_cycle(i64::from(branch_index)))
}

/// All four pillars for a birth moment.
pub fn four_pillars<P: SolarTermProvider + ?Sized>(birth: &BirthMoment, terms: &P) -> FourPillars {
    let day_count = birth.day_count();
    FourPillars {
        year: year_pillar(birth.year()),
        month: month_pillar(birth.year(), month_index(birth, terms)),
        day: day_pillar(day_count),
        hour: hour_pillar(day_count, birth.hour()),
    }
}
