//! The 24 solar terms (jeolgi).
//!
//! Canonical order starts at Start of Spring. Minor Cold and Major Cold close the
//! cycle, so within one table year they fall in January of the following calendar
//! year. Only the 12 "sectional" terms (every other term, starting at Start of
//! Spring) open a month pillar.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// The 24 solar terms in canonical order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SolarTerm {
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    ClearAndBright,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
}

/// All 24 terms in canonical order (index 0 = Start of Spring).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::ClearAndBright,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
];

/// The 12 month-opening terms, in the order the month pillar scans them.
pub const MONTH_BOUNDARY_TERMS: [SolarTerm; 12] = [
    SolarTerm::StartOfSpring,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::ClearAndBright,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainInEar,
    SolarTerm::MinorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::WhiteDew,
    SolarTerm::ColdDew,
    SolarTerm::StartOfWinter,
    SolarTerm::MajorSnow,
    SolarTerm::MinorCold,
];

impl SolarTerm {
    /// 0-based canonical index (Start of Spring = 0 .. Major Cold = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at a canonical index, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(index as usize).copied()
    }

    /// Whether this term opens a month pillar.
    pub const fn is_month_boundary(self) -> bool {
        self.index() % 2 == 0
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartOfSpring => "Start of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
            Self::SpringEquinox => "Spring Equinox",
            Self::ClearAndBright => "Clear and Bright",
            Self::GrainRain => "Grain Rain",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainBuds => "Grain Buds",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostDescent => "Frost's Descent",
            Self::StartOfWinter => "Start of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
        }
    }

    /// Korean name (as used in manseryeok almanacs).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::StartOfSpring => "입춘",
            Self::RainWater => "우수",
            Self::AwakeningOfInsects => "경칩",
            Self::SpringEquinox => "춘분",
            Self::ClearAndBright => "청명",
            Self::GrainRain => "곡우",
            Self::StartOfSummer => "입하",
            Self::GrainBuds => "소만",
            Self::GrainInEar => "망종",
            Self::SummerSolstice => "하지",
            Self::MinorHeat => "소서",
            Self::MajorHeat => "대서",
            Self::StartOfAutumn => "입추",
            Self::EndOfHeat => "처서",
            Self::WhiteDew => "백로",
            Self::AutumnEquinox => "추분",
            Self::ColdDew => "한로",
            Self::FrostDescent => "상강",
            Self::StartOfWinter => "입동",
            Self::MinorSnow => "소설",
            Self::MajorSnow => "대설",
            Self::WinterSolstice => "동지",
            Self::MinorCold => "소한",
            Self::MajorCold => "대한",
        }
    }

    /// Stable kebab-case key, as used in table documents.
    pub const fn key(self) -> &'static str {
        match self {
            Self::StartOfSpring => "start-of-spring",
            Self::RainWater => "rain-water",
            Self::AwakeningOfInsects => "awakening-of-insects",
            Self::SpringEquinox => "spring-equinox",
            Self::ClearAndBright => "clear-and-bright",
            Self::GrainRain => "grain-rain",
            Self::StartOfSummer => "start-of-summer",
            Self::GrainBuds => "grain-buds",
            Self::GrainInEar => "grain-in-ear",
            Self::SummerSolstice => "summer-solstice",
            Self::MinorHeat => "minor-heat",
            Self::MajorHeat => "major-heat",
            Self::StartOfAutumn => "start-of-autumn",
            Self::EndOfHeat => "end-of-heat",
            Self::WhiteDew => "white-dew",
            Self::AutumnEquinox => "autumn-equinox",
            Self::ColdDew => "cold-dew",
            Self::FrostDescent => "frost-descent",
            Self::StartOfWinter => "start-of-winter",
            Self::MinorSnow => "minor-snow",
            Self::MajorSnow => "major-snow",
            Self::WinterSolstice => "winter-solstice",
            Self::MinorCold => "minor-cold",
            Self::MajorCold => "major-cold",
        }
    }

    /// Resolve a term from its key, English name, or Korean name.
    ///
    /// English input is matched case-insensitively with spaces, underscores and
    /// hyphens treated alike; a possessive `'s` is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let normalized: String = trimmed
            .to_ascii_lowercase()
            .replace("'s", "")
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other,
            })
            .collect();
        ALL_SOLAR_TERMS
            .iter()
            .copied()
            .find(|t| t.key() == normalized || t.korean_name() == trimmed)
    }
}

impl FromStr for SolarTerm {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TimeError::UnknownTerm(s.trim().to_string()))
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
