//! Year-keyed solar-term tables.
//!
//! A table maps calendar years to term instants (UTC). Lookups for a year with no
//! entry fall back to the table's default year and return the stored instant
//! unchanged; the fallback is not an error.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TimeError;
use crate::solar_term::{ALL_SOLAR_TERMS, SolarTerm};

/// Default year of the embedded table.
pub const DEFAULT_TABLE_YEAR: i32 = 2024;

/// Source of solar-term instants for the month pillar.
pub trait SolarTermProvider {
    /// Instant of `term` for `year`, after applying any fallback.
    ///
    /// `None` only when the resolved year's table omits the term.
    fn term_instant(&self, year: i32, term: SolarTerm) -> Option<DateTime<Utc>>;

    /// The year whose table actually answers lookups for `year`.
    fn resolved_year(&self, year: i32) -> i32;
}

/// One year's term instants. May be partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolarTermYear {
    instants: BTreeMap<SolarTerm, DateTime<Utc>>,
}

impl SolarTermYear {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the instant of a term.
    pub fn insert(&mut self, term: SolarTerm, instant: DateTime<Utc>) {
        self.instants.insert(term, instant);
    }

    pub fn get(&self, term: SolarTerm) -> Option<DateTime<Utc>> {
        self.instants.get(&term).copied()
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Entries in canonical term order.
    pub fn iter(&self) -> impl Iterator<Item = (SolarTerm, DateTime<Utc>)> + '_ {
        self.instants.iter().map(|(t, i)| (*t, *i))
    }

    /// Check that present entries strictly increase in canonical order.
    pub fn validate(&self, year: i32) -> Result<(), TimeError> {
        let mut prev: Option<DateTime<Utc>> = None;
        for (term, instant) in self.iter() {
            if prev.is_some_and(|p| instant <= p) {
                return Err(TimeError::NonMonotonic { year, term });
            }
            prev = Some(instant);
        }
        Ok(())
    }
}

impl FromIterator<(SolarTerm, DateTime<Utc>)> for SolarTermYear {
    fn from_iter<I: IntoIterator<Item = (SolarTerm, DateTime<Utc>)>>(iter: I) -> Self {
        Self {
            instants: iter.into_iter().collect(),
        }
    }
}

/// Solar-term table: year → term instants, with a designated fallback year.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermTable {
    default_year: i32,
    years: BTreeMap<i32, SolarTermYear>,
}

/// On-disk JSON shape of a table.
#[derive(Serialize, Deserialize)]
struct TableDocument {
    default_year: i32,
    years: BTreeMap<i32, SolarTermYear>,
}

impl SolarTermTable {
    /// Build a table. Every year must be monotonic and `default_year` must be present.
    pub fn new(default_year: i32, years: BTreeMap<i32, SolarTermYear>) -> Result<Self, TimeError> {
        for (year, entries) in &years {
            entries.validate(*year)?;
        }
        if !years.contains_key(&default_year) {
            return Err(TimeError::MissingDefaultYear(default_year));
        }
        Ok(Self {
            default_year,
            years,
        })
    }

    /// The built-in table, constructed once per process.
    pub fn embedded() -> &'static SolarTermTable {
        &**EMBEDDED
    }

    /// Shared handle to the same built-in table.
    pub fn embedded_shared() -> Arc<SolarTermTable> {
        Arc::clone(&*EMBEDDED)
    }

    /// Parse a JSON table document.
    pub fn from_json_str(content: &str) -> Result<Self, TimeError> {
        let doc: TableDocument = serde_json::from_str(content)?;
        Self::new(doc.default_year, doc.years)
    }

    /// Load a JSON table document from a path.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize to the JSON table document format.
    pub fn to_json_string(&self) -> Result<String, TimeError> {
        let doc = TableDocument {
            default_year: self.default_year,
            years: self.years.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Years with their own entries, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Entries for `year`, falling back to the default year.
    pub fn year(&self, year: i32) -> &SolarTermYear {
        let resolved = self.resolved_year(year);
        // default_year presence is a construction invariant
        self.years.get(&resolved).unwrap_or(&EMPTY_YEAR)
    }

    /// Instant of a term given by name, after fallback.
    ///
    /// Fails only when the name is not a solar term.
    pub fn term_instant_by_name(
        &self,
        year: i32,
        name: &str,
    ) -> Result<Option<DateTime<Utc>>, TimeError> {
        let term: SolarTerm = name.parse()?;
        Ok(self.term_instant(year, term))
    }

    /// Add or replace one year's entries.
    pub fn insert_year(&mut self, year: i32, entries: SolarTermYear) -> Result<(), TimeError> {
        entries.validate(year)?;
        self.years.insert(year, entries);
        Ok(())
    }

    /// Overlay another table's years onto this one. The default year is kept.
    pub fn merge(&mut self, other: &SolarTermTable) {
        for (year, entries) in &other.years {
            self.years.insert(*year, entries.clone());
        }
    }
}

impl SolarTermProvider for SolarTermTable {
    fn term_instant(&self, year: i32, term: SolarTerm) -> Option<DateTime<Utc>> {
        self.year(year).get(term)
    }

    fn resolved_year(&self, year: i32) -> i32 {
        if self.years.contains_key(&year) {
            year
        } else {
            debug!(
                requested = year,
                fallback = self.default_year,
                "solar-term year not tabulated, using default"
            );
            self.default_year
        }
    }
}

static EMPTY_YEAR: SolarTermYear = SolarTermYear {
    instants: BTreeMap::new(),
};

static EMBEDDED: LazyLock<Arc<SolarTermTable>> = LazyLock::new(|| {
    let entries: SolarTermYear = ALL_SOLAR_TERMS
        .iter()
        .zip(EMBEDDED_2024.iter())
        .filter_map(|(term, &(y, mo, d, h, mi))| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_opt(h, mi, 0))
                .map(|dt| (*term, dt.and_utc()))
        })
        .collect();
    let mut years = BTreeMap::new();
    years.insert(DEFAULT_TABLE_YEAR, entries);
    Arc::new(SolarTermTable {
        default_year: DEFAULT_TABLE_YEAR,
        years,
    })
});

/// 2024 term instants (UTC, minute precision), canonical order.
/// Minor Cold and Major Cold belong to January 2025.
const EMBEDDED_2024: [(i32, u32, u32, u32, u32); 24] = [
    (2024, 2, 4, 8, 27),
    (2024, 2, 19, 4, 13),
    (2024, 3, 5, 2, 23),
    (2024, 3, 20, 3, 6),
    (2024, 4, 4, 7, 2),
    (2024, 4, 19, 13, 59),
    (2024, 5, 5, 0, 10),
    (2024, 5, 20, 12, 59),
    (2024, 6, 5, 4, 10),
    (2024, 6, 20, 20, 51),
    (2024, 7, 6, 14, 20),
    (2024, 7, 22, 7, 44),
    (2024, 8, 7, 0, 9),
    (2024, 8, 22, 14, 55),
    (2024, 9, 7, 3, 11),
    (2024, 9, 22, 12, 44),
    (2024, 10, 7, 19, 0),
    (2024, 10, 22, 22, 15),
    (2024, 11, 6, 22, 20),
    (2024, 11, 21, 19, 56),
    (2024, 12, 6, 15, 17),
    (2024, 12, 21, 9, 21),
    (2025, 1, 5, 2, 33),
    (2025, 1, 19, 19, 0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn embedded_is_complete_and_monotonic() {
        let table = SolarTermTable::embedded();
        assert_eq!(table.default_year(), DEFAULT_TABLE_YEAR);
        let year = table.year(DEFAULT_TABLE_YEAR);
        assert_eq!(year.len(), 24);
        year.validate(DEFAULT_TABLE_YEAR).unwrap();
    }

    #[test]
    fn embedded_start_of_spring() {
        let table = SolarTermTable::embedded();
        assert_eq!(
            table.term_instant(2024, SolarTerm::StartOfSpring),
            Some(utc(2024, 2, 4, 8, 27))
        );
    }

    #[test]
    fn unknown_year_falls_back() {
        let table = SolarTermTable::embedded();
        assert_eq!(table.resolved_year(1899), DEFAULT_TABLE_YEAR);
        assert_eq!(
            table.term_instant(1899, SolarTerm::MinorCold),
            table.term_instant(DEFAULT_TABLE_YEAR, SolarTerm::MinorCold)
        );
    }

    #[test]
    fn embedded_shared_is_the_same_table() {
        let a = SolarTermTable::embedded_shared();
        let b = SolarTermTable::embedded_shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(std::ptr::eq(&*a, SolarTermTable::embedded()));
    }

    #[test]
    fn lookup_by_name() {
        let table = SolarTermTable::embedded();
        assert_eq!(
            table.term_instant_by_name(2024, "Frost's Descent"),
            Ok(Some(utc(2024, 10, 22, 22, 15)))
        );
        assert_eq!(
            table.term_instant_by_name(1899, "입춘"),
            Ok(table.term_instant(2024, SolarTerm::StartOfSpring))
        );
        assert_eq!(
            table.term_instant_by_name(2024, "midsummer"),
            Err(TimeError::UnknownTerm("midsummer".to_string()))
        );
    }

    #[test]
    fn new_requires_default_year() {
        let err = SolarTermTable::new(2030, BTreeMap::new()).unwrap_err();
        assert_eq!(err, TimeError::MissingDefaultYear(2030));
    }

    #[test]
    fn validate_rejects_decreasing() {
        let mut year = SolarTermYear::new();
        year.insert(SolarTerm::StartOfSpring, utc(2030, 2, 4, 0, 0));
        year.insert(SolarTerm::AwakeningOfInsects, utc(2030, 1, 4, 0, 0));
        assert_eq!(
            year.validate(2030),
            Err(TimeError::NonMonotonic {
                year: 2030,
                term: SolarTerm::AwakeningOfInsects
            })
        );
    }

    #[test]
    fn partial_year_is_allowed() {
        let mut year = SolarTermYear::new();
        year.insert(SolarTerm::StartOfSpring, utc(2030, 2, 4, 2, 8));
        let mut years = BTreeMap::new();
        years.insert(2030, year);
        let table = SolarTermTable::new(2030, years).unwrap();
        assert!(table.term_instant(2030, SolarTerm::StartOfSpring).is_some());
        assert!(table.term_instant(2030, SolarTerm::MajorSnow).is_none());
    }

    #[test]
    fn json_roundtrip_preserves_table() {
        let table = SolarTermTable::embedded();
        let json = table.to_json_string().unwrap();
        assert!(json.contains("\"start-of-spring\""));
        let parsed = SolarTermTable::from_json_str(&json).unwrap();
        assert_eq!(&parsed, table);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            SolarTermTable::from_json_str("{ not json"),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn merge_overlays_years() {
        let mut table = SolarTermTable::embedded().clone();
        let mut extra = SolarTermYear::new();
        extra.insert(SolarTerm::StartOfSpring, utc(2025, 2, 3, 14, 10));
        let mut years = BTreeMap::new();
        years.insert(2025, extra);
        let other = SolarTermTable::new(2025, years).unwrap();
        table.merge(&other);
        assert!(table.contains_year(2025));
        assert_eq!(table.default_year(), DEFAULT_TABLE_YEAR);
        assert_eq!(table.years().collect::<Vec<_>>(), vec![2024, 2025]);
    }
}
