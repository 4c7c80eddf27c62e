//! Ten relations (sipseong / "ten gods").
//!
//! A relation is fixed by the cyclic offset from the day stem to a target stem:
//! `(target - day + 10) mod 10`. Polarity is not consulted.

use serde::Serialize;

use crate::stem::HeavenlyStem;

/// The 10 relation labels, indexed by cyclic offset from the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TenRelation {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

/// All 10 relations in offset order (offset 0 = Companion).
pub const ALL_TEN_RELATIONS: [TenRelation; 10] = [
    TenRelation::Companion,
    TenRelation::RobWealth,
    TenRelation::EatingGod,
    TenRelation::HurtingOfficer,
    TenRelation::IndirectWealth,
    TenRelation::DirectWealth,
    TenRelation::SevenKillings,
    TenRelation::DirectOfficer,
    TenRelation::IndirectResource,
    TenRelation::DirectResource,
];

impl TenRelation {
    /// Cyclic offset (0..9) this relation stands for.
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Relation for an offset; wraps modulo 10.
    pub const fn from_offset(offset: u8) -> Self {
        ALL_TEN_RELATIONS[(offset % 10) as usize]
    }

    /// Relation of `target` as seen from `day`.
    pub const fn between(day: HeavenlyStem, target: HeavenlyStem) -> Self {
        Self::from_offset((target.index() + 10 - day.index()) % 10)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Companion => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }
}

impl std::fmt::Display for TenRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_relation_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(TenRelation::between(s, s), TenRelation::Companion);
        }
    }

    #[test]
    fn offsets_roundtrip() {
        for (i, r) in ALL_TEN_RELATIONS.iter().enumerate() {
            assert_eq!(r.offset() as usize, i);
            assert_eq!(TenRelation::from_offset(i as u8), *r);
        }
    }

    #[test]
    fn wraps_backwards() {
        // 정(3) seen from 경(6): (3 - 6 + 10) % 10 = 7
        assert_eq!(
            TenRelation::between(HeavenlyStem::Gyeong, HeavenlyStem::Jeong),
            TenRelation::DirectOfficer
        );
        assert_eq!(
            TenRelation::between(HeavenlyStem::Gye, HeavenlyStem::Gap),
            TenRelation::RobWealth
        );
    }
}
