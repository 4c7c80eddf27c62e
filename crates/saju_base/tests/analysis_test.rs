//! Chart analysis and luck-period tests over whole charts.

use saju_base::{
    ALL_ELEMENTS, ALL_POSITIONS, Gender, LUCK_PERIOD_COUNT, MAX_USEFUL_ELEMENTS, PillarPosition,
    PillarSlot, TenRelation, USEFUL_ELEMENT_THRESHOLD, element_counts, four_pillars,
    luck_periods, relation_table, useful_elements,
};
use saju_time::{BirthMoment, SolarTermTable};

fn chart(y: i32, m: u32, d: u32, h: u32) -> saju_base::FourPillars {
    four_pillars(&BirthMoment::new(y, m, d, h).unwrap(), SolarTermTable::embedded())
}

#[test]
fn counts_always_sum_to_eight() {
    for year in (1900..2100).step_by(7) {
        for (month, day, hour) in [(1, 1, 0), (5, 15, 10), (8, 31, 23), (12, 6, 16)] {
            let counts = element_counts(&chart(year, month, day, hour));
            assert_eq!(counts.total(), 8, "{year}-{month}-{day} {hour}h");
        }
    }
}

#[test]
fn useful_elements_respect_limits() {
    for year in (1900..2100).step_by(3) {
        let counts = element_counts(&chart(year, 3, 14, 9));
        let useful = useful_elements(&counts);
        assert!(useful.len() <= MAX_USEFUL_ELEMENTS);
        for e in &useful {
            assert!(counts.get(*e) < USEFUL_ELEMENT_THRESHOLD);
        }
        // order follows element enumeration
        assert!(useful.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn useful_elements_are_the_first_weak_ones() {
    let counts = element_counts(&chart(2024, 5, 15, 10));
    let expected: Vec<_> = ALL_ELEMENTS
        .into_iter()
        .filter(|e| counts.get(*e) < USEFUL_ELEMENT_THRESHOLD)
        .take(MAX_USEFUL_ELEMENTS)
        .collect();
    assert_eq!(useful_elements(&counts), expected);
}

#[test]
fn relation_table_golden_1990() {
    let table = relation_table(&chart(1990, 5, 15, 10));
    use PillarPosition::*;
    use PillarSlot::*;
    let expected = [
        (Year, Stem, TenRelation::Companion),
        (Year, Branch, TenRelation::DirectOfficer),
        (Month, Stem, TenRelation::DirectOfficer),
        (Month, Branch, TenRelation::HurtingOfficer),
        (Day, Stem, TenRelation::Companion),
        (Day, Branch, TenRelation::DirectOfficer),
        (Hour, Stem, TenRelation::RobWealth),
        (Hour, Branch, TenRelation::SevenKillings),
    ];
    for (position, slot, relation) in expected {
        assert_eq!(table.get(position, slot), relation, "{position:?} {slot:?}");
    }
}

#[test]
fn day_stem_always_companion() {
    for day in 1..=28 {
        let table = relation_table(&chart(2001, 2, day, 6));
        assert_eq!(
            table.get(PillarPosition::Day, PillarSlot::Stem),
            TenRelation::Companion
        );
    }
}

#[test]
fn relation_table_has_eight_entries() {
    let table = relation_table(&chart(1975, 10, 3, 18));
    assert_eq!(table.iter().count(), ALL_POSITIONS.len() * 2);
}

#[test]
fn relation_table_serializes_by_position_and_slot() {
    let table = relation_table(&chart(1990, 5, 15, 10));
    let json: serde_json::Value = serde_json::to_value(table).unwrap();
    assert_eq!(json["day_stem"], "companion");
    assert_eq!(json["hour_branch"], "seven_killings");
    assert_eq!(json.as_object().unwrap().len(), 8);
}

// ---------------------------------------------------------------------------
// Luck periods
// ---------------------------------------------------------------------------

#[test]
fn luck_periods_shape() {
    let birth = BirthMoment::new(1990, 5, 15, 10).unwrap();
    for gender in [Gender::Male, Gender::Female] {
        let periods = luck_periods(&birth, gender, SolarTermTable::embedded()).unwrap();
        assert_eq!(periods.len(), LUCK_PERIOD_COUNT);
        assert_eq!(periods[0].age, gender.start_age());
        for pair in periods.windows(2) {
            assert_eq!(pair[1].age, pair[0].age + 10);
            assert_eq!(pair[1].start_year, pair[0].end_year + 1);
        }
        for p in &periods {
            assert_eq!(p.period, format!("{}-{}", p.start_year, p.end_year));
            assert_eq!(p.end_year - p.start_year, 9);
        }
    }
}

#[test]
fn luck_periods_female_1990() {
    let birth = BirthMoment::new(1990, 5, 15, 10).unwrap();
    let periods = luck_periods(&birth, Gender::Female, SolarTermTable::embedded()).unwrap();
    assert_eq!(periods[0].period, "1992-2001");
    assert_eq!(periods[0].pillar.to_string(), "임신");
    assert_eq!(periods[0].theme, "Wisdom/Flexibility");
    assert_eq!(periods[7].period, "2062-2071");
    assert_eq!(periods[7].age, 72);
}

#[test]
fn luck_period_pillar_is_that_years_pillar() {
    let birth = BirthMoment::new(1984, 2, 29, 4).unwrap();
    let periods = luck_periods(&birth, Gender::Male, SolarTermTable::embedded()).unwrap();
    for p in periods {
        assert_eq!(p.pillar, saju_base::year_pillar(p.start_year));
    }
}
