//! Luck periods (daeun): eight consecutive ten-year pillars.
//!
//! The starting age is fixed per gender rather than derived from the distance
//! between birth and the nearest month boundary.

use std::str::FromStr;

use saju_time::{BirthMoment, SolarTermProvider, TimeError};
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::pillar::{Pillar, four_pillars};

/// Number of luck periods produced per chart.
pub const LUCK_PERIOD_COUNT: usize = 8;

/// Years covered by one luck period.
pub const LUCK_PERIOD_YEARS: u32 = 10;

/// Day and hour used when re-deriving a period's pillars.
const PERIOD_PROBE_DAY: u32 = 1;
const PERIOD_PROBE_HOUR: u32 = 12;

/// Gender of the chart owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Age at which the first luck period begins.
    pub const fn start_age(self) -> u32 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" => Ok(Self::Male),
            "female" | "f" | "여" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One ten-year luck period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckPeriod {
    /// Year range label, e.g. `"1991-2000"`.
    pub period: String,
    /// First calendar year, inclusive.
    pub start_year: i32,
    /// Last calendar year, inclusive.
    pub end_year: i32,
    /// Age at which the period starts.
    pub age: u32,
    /// Year pillar of `start_year`.
    pub pillar: Pillar,
    /// Theme of the pillar stem's element.
    pub theme: &'static str,
}

/// Theme associated with an element for luck-period readings.
pub const fn luck_theme(element: Element) -> &'static str {
    match element {
        Element::Wood => "Growth/Expansion",
        Element::Fire => "Passion/Change",
        Element::Earth => "Stability/Foundation",
        Element::Metal => "Organizing/Harvest",
        Element::Water => "Wisdom/Flexibility",
    }
}

/// The eight luck periods following a birth, earliest first.
///
/// Period `i` starts at `start_age + 10 i`; its pillar is the year pillar of
/// the pillars re-derived for the 1st of the birth month at noon in that year.
pub fn luck_periods<P: SolarTermProvider + ?Sized>(
    birth: &BirthMoment,
    gender: Gender,
    terms: &P,
) -> Result<Vec<LuckPeriod>, TimeError> {
    (0..LUCK_PERIOD_COUNT as u32)
        .map(|i| -> Result<LuckPeriod, TimeError> {
            let age = gender.start_age() + LUCK_PERIOD_YEARS * i;
            let start_year = birth.year() + age as i32;
            let end_year = start_year + LUCK_PERIOD_YEARS as i32 - 1;
            let probe =
                BirthMoment::new(start_year, birth.month(), PERIOD_PROBE_DAY, PERIOD_PROBE_HOUR)?;
            let pillar = four_pillars(&probe, terms).year;
            Ok(LuckPeriod {
                period: format!("{start_year}-{end_year}"),
                start_year,
                end_year,
                age,
                pillar,
                theme: luck_theme(pillar.stem.element()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::SolarTermTable;

    #[test]
    fn gender_start_ages() {
        assert_eq!(Gender::Male.start_age(), 1);
        assert_eq!(Gender::Female.start_age(), 2);
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn gender_parses() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" m ".parse::<Gender>(), Ok(Gender::Male));
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn first_period_male_1990() {
        let birth = BirthMoment::new(1990, 5, 15, 10).unwrap();
        let periods = luck_periods(&birth, Gender::Male, SolarTermTable::embedded()).unwrap();
        let first = &periods[0];
        assert_eq!(first.period, "1991-2000");
        assert_eq!(first.age, 1);
        assert_eq!(first.pillar.to_string(), "신미");
        assert_eq!(first.theme, "Organizing/Harvest");
    }

    #[test]
    fn theme_covers_every_element() {
        assert_eq!(luck_theme(Element::Water), "Wisdom/Flexibility");
        assert_eq!(luck_theme(Element::Wood), "Growth/Expansion");
    }
}
