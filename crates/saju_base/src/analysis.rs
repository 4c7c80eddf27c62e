//! Chart analysis: element balance, ten-relation table, useful elements.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::stem::HeavenlyStem;
use crate::ten_relation::TenRelation;

/// A phase counts as weak below this many occurrences.
pub const USEFUL_ELEMENT_THRESHOLD: u8 = 2;

/// At most this many useful elements are recommended.
pub const MAX_USEFUL_ELEMENTS: usize = 2;

/// Occurrences of each element across the eight stems and branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementCounts {
    counts: [u8; 5],
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    pub(crate) fn increment(&mut self, element: Element) {
        let slot = &mut self.counts[element.index() as usize];
        *slot = slot.saturating_add(1);
    }

    /// Sum over all elements (8 for a full chart).
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// `(element, count)` in element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }
}

impl Serialize for ElementCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for (element, count) in self.iter() {
            map.serialize_entry(&element, &count)?;
        }
        map.end()
    }
}

/// Count the element of every stem and branch in the chart.
pub fn element_counts(pillars: &FourPillars) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for (_, pillar) in pillars.iter() {
        counts.increment(pillar.stem.element());
        counts.increment(pillar.branch.element());
    }
    counts
}

/// Which half of a pillar a relation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarSlot {
    Stem,
    Branch,
}

impl PillarSlot {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
        }
    }
}

/// One ten-relation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RelationEntry {
    pub position: PillarPosition,
    pub slot: PillarSlot,
    pub relation: TenRelation,
}

/// Ten relations of all eight stems and branches to the day stem.
///
/// Serialized as a map keyed `"<position>_<slot>"`, e.g. `"year_stem"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationTable {
    entries: [RelationEntry; 8],
}

impl RelationTable {
    pub fn get(&self, position: PillarPosition, slot: PillarSlot) -> TenRelation {
        let offset = match slot {
            PillarSlot::Stem => 0,
            PillarSlot::Branch => 1,
        };
        self.entries[position as usize * 2 + offset].relation
    }

    /// Entries in chart order, stem before branch.
    pub fn iter(&self) -> impl Iterator<Item = &RelationEntry> {
        self.entries.iter()
    }
}

impl Serialize for RelationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(&format!("{}_{}", e.position.key(), e.slot.key()), &e.relation)?;
        }
        map.end()
    }
}

/// Relations to the day stem. Branches are represented by their hidden stem.
pub fn relation_table(pillars: &FourPillars) -> RelationTable {
    let day: HeavenlyStem = pillars.day.stem;
    let entries = std::array::from_fn(|i| {
        let position = ALL_POSITIONS[i / 2];
        let pillar = pillars.get(position);
        let (slot, target) = if i % 2 == 0 {
            (PillarSlot::Stem, pillar.stem)
        } else {
            (PillarSlot::Branch, pillar.branch.hidden_stem())
        };
        RelationEntry {
            position,
            slot,
            relation: TenRelation::between(day, target),
        }
    });
    RelationTable { entries }
}

/// Elements to reinforce: the first weak phases in element order.
///
/// A weak-phase filter only; no strength or seasonal balance is weighed.
pub fn useful_elements(counts: &ElementCounts) -> Vec<Element> {
    counts
        .iter()
        .filter(|(_, c)| *c < USEFUL_ELEMENT_THRESHOLD)
        .map(|(e, _)| e)
        .take(MAX_USEFUL_ELEMENTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::{day_pillar, hour_pillar, month_pillar, year_pillar};

    fn chart_1990() -> FourPillars {
        FourPillars {
            year: year_pillar(1990),
            month: month_pillar(1990, 0),
            day: day_pillar(33_006),
            hour: hour_pillar(33_006, 10),
        }
    }

    #[test]
    fn counts_total_eight() {
        let counts = element_counts(&chart_1990());
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.get(Element::Fire), 4);
        assert_eq!(counts.get(Element::Metal), 3);
        assert_eq!(counts.get(Element::Water), 1);
    }

    #[test]
    fn day_stem_is_companion() {
        let table = relation_table(&chart_1990());
        assert_eq!(
            table.get(PillarPosition::Day, PillarSlot::Stem),
            TenRelation::Companion
        );
    }

    #[test]
    fn relation_entries_in_chart_order() {
        let table = relation_table(&chart_1990());
        let keys: Vec<_> = table
            .iter()
            .map(|e| format!("{}_{}", e.position.key(), e.slot.key()))
            .collect();
        assert_eq!(
            keys,
            [
                "year_stem", "year_branch", "month_stem", "month_branch",
                "day_stem", "day_branch", "hour_stem", "hour_branch"
            ]
        );
    }

    #[test]
    fn useful_elements_picks_first_two_weak() {
        let counts = element_counts(&chart_1990());
        assert_eq!(useful_elements(&counts), vec![Element::Wood, Element::Earth]);
    }

    #[test]
    fn useful_elements_empty_when_balanced() {
        let mut counts = ElementCounts::default();
        for e in ALL_ELEMENTS {
            counts.increment(e);
            counts.increment(e);
        }
        assert!(useful_elements(&counts).is_empty());
    }

    #[test]
    fn counts_serialize_as_map() {
        let json = serde_json::to_string(&element_counts(&chart_1990())).unwrap();
        assert_eq!(json, r#"{"wood":0,"fire":4,"earth":0,"metal":3,"water":1}"#);
    }

    #[test]
    fn increment_saturates() {
        let mut counts = ElementCounts::default();
        for _ in 0..300 {
            counts.increment(Element::Fire);
        }
        assert_eq!(counts.get(Element::Fire), u8::MAX);
        assert_eq!(counts.get(Element::Water), 0);
    }
}
