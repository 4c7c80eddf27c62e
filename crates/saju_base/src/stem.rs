//! The ten heavenly stems (cheongan).

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 10 heavenly stems, in cycle order.
///
/// Serialized as the Korean glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeavenlyStem {
    #[serde(rename = "갑")]
    Gap,
    #[serde(rename = "을")]
    Eul,
    #[serde(rename = "병")]
    Byeong,
    #[serde(rename = "정")]
    Jeong,
    #[serde(rename = "무")]
    Mu,
    #[serde(rename = "기")]
    Gi,
    #[serde(rename = "경")]
    Gyeong,
    #[serde(rename = "신")]
    Sin,
    #[serde(rename = "임")]
    Im,
    #[serde(rename = "계")]
    Gye,
}

/// All 10 stems in order (index 0 = 갑).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

impl HeavenlyStem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at an arbitrary cycle position; wraps in both directions.
    pub fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    /// Korean glyph.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Elemental phase. Consecutive pairs share a phase.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn pairs_share_element() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
        }
        assert_eq!(HeavenlyStem::Gyeong.element(), Element::Metal);
    }

    #[test]
    fn from_cycle_wraps_negative() {
        assert_eq!(HeavenlyStem::from_cycle(-1), HeavenlyStem::Gye);
        assert_eq!(HeavenlyStem::from_cycle(1986), HeavenlyStem::Gyeong);
    }

    #[test]
    fn serializes_as_glyph() {
        assert_eq!(serde_json::to_string(&HeavenlyStem::Gyeong).unwrap(), "\"경\"");
    }

    #[test]
    fn hanja_and_all() {
        assert_eq!(HeavenlyStem::Gap.hanja(), "甲");
        assert_eq!(HeavenlyStem::Gye.hanja(), "癸");
        assert_eq!(HeavenlyStem::all().len(), 10);
        assert_eq!(HeavenlyStem::all()[6], HeavenlyStem::Gyeong);
    }
}
