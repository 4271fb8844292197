// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagenary (ganji) arithmetic.
//!
//! | Type | Range | Notes |
//! |------|-------|-------|
//! | [`Stem`] | 10 heavenly stems | 甲 … 癸 |
//! | [`Branch`] | 12 earthly branches | 子 … 亥 |
//! | [`SexagenaryIndex`] | `[0, 60)` | 甲子 = 0 |
//! | [`Pillar`] | validated (stem, branch) | `stem % 2 == branch % 2` |
//!
//! Because `gcd(10, 12) = 2` only half of the 120 stem/branch combinations
//! occur in the cycle. [`Pillar::new`] rejects the other half with
//! [`SajuError::ParityMismatch`] instead of coercing them.

use std::fmt;

use super::error::{Result, SajuError};

/// The five phases.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Yin/yang polarity, following index parity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    #[inline]
    const fn of_index(index: u8) -> Self {
        if index % 2 == 0 {
            Self::Yang
        } else {
            Self::Yin
        }
    }
}

/// Heavenly stem.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_ELEMENT: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    /// Position in the ten-stem cycle.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(SajuError::IndexOutOfRange {
                kind: "stem",
                index: index as u32,
            })
    }

    /// Stem reached after `steps` positions, wrapping around the cycle.
    #[inline]
    pub fn offset(self, steps: i64) -> Self {
        Self::ALL[(self.index() as i64 + steps).rem_euclid(10) as usize]
    }

    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self as usize]
    }

    pub const fn korean_name(self) -> &'static str {
        STEM_KOREAN[self as usize]
    }

    pub const fn element(self) -> Element {
        STEM_ELEMENT[self as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self as u8)
    }
}

/// Earthly branch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_ELEMENT: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(SajuError::IndexOutOfRange {
                kind: "branch",
                index: index as u32,
            })
    }

    #[inline]
    pub fn offset(self, steps: i64) -> Self {
        Self::ALL[(self.index() as i64 + steps).rem_euclid(12) as usize]
    }

    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self as usize]
    }

    pub const fn korean_name(self) -> &'static str {
        BRANCH_KOREAN[self as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENT[self as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self as u8)
    }

    /// Branch of saju month `month_index` (1 = 寅 … 12 = 丑).
    pub fn of_saju_month(month_index: u8) -> Result<Self> {
        if !(1..=12).contains(&month_index) {
            return Err(SajuError::IndexOutOfRange {
                kind: "saju month",
                index: month_index as u32,
            });
        }
        Self::from_index((month_index + 1) % 12)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SexagenaryIndex / Pillar
// ═══════════════════════════════════════════════════════════════════════════

/// Position in the sixty-term cycle, 甲子 = 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct SexagenaryIndex(u8);

impl SexagenaryIndex {
    pub fn new(index: u8) -> Result<Self> {
        if index < 60 {
            Ok(Self(index))
        } else {
            Err(SajuError::IndexOutOfRange {
                kind: "sexagenary",
                index: index as u32,
            })
        }
    }

    /// Reduce any integer into the cycle.
    #[inline]
    pub fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(60) as u8)
    }

    /// Index of the (stem, branch) pair, or `ParityMismatch`.
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)`: `i = (6s − 5b) mod 60`.
    pub fn from_parts(stem: Stem, branch: Branch) -> Result<Self> {
        let (s, b) = (stem.index(), branch.index());
        if s % 2 != b % 2 {
            return Err(SajuError::ParityMismatch { stem: s, branch: b });
        }
        Ok(Self::wrapping(6 * s as i64 - 5 * b as i64))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn stem(self) -> Stem {
        Stem::ALL[(self.0 % 10) as usize]
    }

    #[inline]
    pub fn branch(self) -> Branch {
        Branch::ALL[(self.0 % 12) as usize]
    }

    #[inline]
    pub fn offset(self, steps: i64) -> Self {
        Self::wrapping(self.0 as i64 + steps)
    }
}

impl TryFrom<u8> for SexagenaryIndex {
    type Error = SajuError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SexagenaryIndex> for u8 {
    fn from(index: SexagenaryIndex) -> Self {
        index.0
    }
}

/// One of the four pillars: a parity-valid stem and branch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPillar"))]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPillar {
    stem: Stem,
    branch: Branch,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPillar> for Pillar {
    type Error = SajuError;

    fn try_from(raw: RawPillar) -> Result<Self> {
        Self::new(raw.stem, raw.branch)
    }
}

impl Pillar {
    /// Validate a stem/branch pair.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self> {
        SexagenaryIndex::from_parts(stem, branch)?;
        Ok(Self { stem, branch })
    }

    pub fn from_index(index: SexagenaryIndex) -> Self {
        Self {
            stem: index.stem(),
            branch: index.branch(),
        }
    }

    pub fn index(&self) -> SexagenaryIndex {
        // Both halves share parity by construction.
        SexagenaryIndex::wrapping(6 * self.stem.index() as i64 - 5 * self.branch.index() as i64)
    }

    pub const fn stem(&self) -> Stem {
        self.stem
    }

    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// Hangul reading, e.g. `갑진`.
    pub fn korean_name(&self) -> String {
        format!("{}{}", self.stem.korean_name(), self.branch.korean_name())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Pillar formulas
// ═══════════════════════════════════════════════════════════════════════════

/// Offset aligning the Julian Day Number with the cycle: JDN 2 460 311
/// (2024-01-01) is 甲子.
const DAY_CYCLE_OFFSET: i64 = 49;

/// Month-stem of 寅 month, keyed by `year_stem % 5` (甲己 → 丙, 乙庚 → 戊, …).
const MONTH_START_STEM: [u8; 5] = [2, 4, 6, 8, 0];

/// Hour-stem of 子 hour, keyed by `day_stem % 5` (甲己 → 甲, 乙庚 → 丙, …).
const OJAWON_START_STEM: [u8; 5] = [0, 2, 4, 6, 8];

/// Day pillar of a civil day given its Julian Day Number.
pub fn day_pillar(julian_day_number: i64) -> Pillar {
    Pillar::from_index(SexagenaryIndex::wrapping(julian_day_number + DAY_CYCLE_OFFSET))
}

/// Year pillar of a saju year (which starts at Ipchun).
pub fn year_pillar(saju_year: i32) -> Pillar {
    Pillar::from_index(SexagenaryIndex::wrapping(saju_year as i64 - 4))
}

/// Month pillar from the year stem and saju month index (1 = 寅).
pub fn month_pillar(year_stem: Stem, month_index: u8) -> Result<Pillar> {
    let branch = Branch::of_saju_month(month_index)?;
    let start = Stem::ALL[MONTH_START_STEM[(year_stem.index() % 5) as usize] as usize];
    Pillar::new(start.offset(month_index as i64 - 1), branch)
}

/// Two-hour branch of a clock hour: 23–00 → 子, 01–02 → 丑, …
pub fn hour_branch(hour: u32) -> Branch {
    Branch::ALL[((hour + 1) / 2 % 12) as usize]
}

/// Hour pillar by the five-rat rule.
pub fn hour_pillar(day_stem: Stem, branch: Branch) -> Result<Pillar> {
    let start = Stem::ALL[OJAWON_START_STEM[(day_stem.index() % 5) as usize] as usize];
    Pillar::new(start.offset(branch.index() as i64), branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_pair_maps_back_to_its_index() {
        for i in 0..60 {
            let idx = SexagenaryIndex::new(i).unwrap();
            let pillar = Pillar::from_index(idx);
            assert_eq!(pillar.stem().index() % 2, pillar.branch().index() % 2);
            assert_eq!(pillar.index(), idx);
            assert_eq!(
                SexagenaryIndex::from_parts(pillar.stem(), pillar.branch()).unwrap(),
                idx
            );
        }
    }

    #[test]
    fn mixed_parity_is_rejected() {
        let mut rejected = 0;
        for stem in Stem::ALL {
            for branch in Branch::ALL {
                match Pillar::new(stem, branch) {
                    Ok(_) => assert_eq!(stem.index() % 2, branch.index() % 2),
                    Err(SajuError::ParityMismatch { .. }) => rejected += 1,
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
        assert_eq!(rejected, 60);
    }

    #[test]
    fn index_bounds() {
        assert!(SexagenaryIndex::new(59).is_ok());
        assert!(SexagenaryIndex::new(60).is_err());
        assert_eq!(SexagenaryIndex::wrapping(-1).value(), 59);
        assert!(Stem::from_index(10).is_err());
        assert!(Branch::from_index(12).is_err());
    }

    #[test]
    fn day_pillar_anchor() {
        assert_eq!(day_pillar(2_460_311).index().value(), 0);
        assert_eq!(day_pillar(2_460_311).to_string(), "甲子");
        // 1900-01-01 was 甲戌.
        assert_eq!(day_pillar(2_415_021).to_string(), "甲戌");
        // 2024-02-10 was 甲辰.
        assert_eq!(day_pillar(2_460_351).korean_name(), "갑진");
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(2023).to_string(), "癸卯");
        assert_eq!(year_pillar(4).to_string(), "甲子");
        assert_eq!(year_pillar(-1).to_string(), "己未");
    }

    #[test]
    fn month_pillars_follow_year_stem() {
        // 甲 year: 寅 month is 丙寅, 丑 month is 丁丑.
        assert_eq!(month_pillar(Stem::Gap, 1).unwrap().to_string(), "丙寅");
        assert_eq!(month_pillar(Stem::Gap, 12).unwrap().to_string(), "丁丑");
        // 癸 year: 寅 month is 甲寅.
        assert_eq!(month_pillar(Stem::Gye, 1).unwrap().to_string(), "甲寅");
        // 乙 year: 寅 month is 戊寅.
        assert_eq!(month_pillar(Stem::Eul, 1).unwrap().to_string(), "戊寅");
        assert!(matches!(
            month_pillar(Stem::Gap, 0),
            Err(SajuError::IndexOutOfRange { .. })
        ));
        assert!(month_pillar(Stem::Gap, 13).is_err());
    }

    #[test]
    fn hour_branches_and_five_rat_rule() {
        assert_eq!(hour_branch(23), Branch::Ja);
        assert_eq!(hour_branch(0), Branch::Ja);
        assert_eq!(hour_branch(1), Branch::Chuk);
        assert_eq!(hour_branch(11), Branch::O);
        assert_eq!(hour_branch(12), Branch::O);
        assert_eq!(hour_branch(22), Branch::Hae);

        assert_eq!(hour_pillar(Stem::Gap, Branch::Ja).unwrap().to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Gap, Branch::O).unwrap().to_string(), "庚午");
        assert_eq!(hour_pillar(Stem::Gi, Branch::Ja).unwrap().to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Eul, Branch::Ja).unwrap().to_string(), "丙子");
        assert_eq!(hour_pillar(Stem::Gye, Branch::Hae).unwrap().to_string(), "癸亥");
    }

    #[test]
    fn element_and_polarity_tables() {
        assert_eq!(Stem::Byeong.element(), Element::Fire);
        assert_eq!(Stem::Gye.polarity(), Polarity::Yin);
        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::Mi.element(), Element::Earth);
        assert_eq!(Branch::In.polarity(), Polarity::Yang);
        assert_eq!(Branch::of_saju_month(1).unwrap(), Branch::In);
        assert_eq!(Branch::of_saju_month(12).unwrap(), Branch::Chuk);
    }
}
