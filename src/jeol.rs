// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar terms and saju-month boundaries.
//!
//! The embedded [`JeolBoundaryTable`] covers civil years 1900–2050 in Korea
//! Standard Time (UTC+9). Moments handed to it must already be expressed
//! on that clock.
//!
//! A boundary at or before a moment has taken effect: a birth exactly on
//! Ipchun belongs to the new month. Both directions of search go through
//! [`boundary_search`], a single `partition_point` over that predicate.
//!
//! Outside the table, [`locate_boundary`] degrades through three tiers:
//!
//! | Tier | Years | Source |
//! |------|-------|--------|
//! | [`BoundaryMode::ExactTable`] | 1900–2050 | embedded table |
//! | [`BoundaryMode::Vsop87Calculated`] | −1000–3000 | VSOP87 crossing search |
//! | [`BoundaryMode::ApproximateDay6`] | anything else | 6th of the month, 12:00 |

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use tracing::{debug, warn};

use super::data::jeol_table::{FIRST_YEAR, JEOL_TABLE, LAST_YEAR};
use super::error::{PrecisionWarning, Result, SajuError};
use super::ganji::Branch;
use super::julian_day::CalendarMoment;
use super::period::Interval;
use super::registry::registry;
use super::vsop87::{apparent_solar_longitude, find_longitude_crossing};
use qtty::Days;

/// Civil years the VSOP87 fallback is trusted for.
pub const VSOP87_YEARS: RangeInclusive<i32> = -1000..=3000;

/// Korea Standard Time offset of the table.
const KST_OFFSET: Days = Days::new(9.0 / 24.0);

/// Mean tropical year.
const TROPICAL_YEAR: Days = Days::new(365.242_2);

/// Mean apparent solar motion, degrees per day.
const MEAN_DAILY_MOTION: f64 = 0.985_647;

// ═══════════════════════════════════════════════════════════════════════════
// SolarTerm
// ═══════════════════════════════════════════════════════════════════════════

/// The 24 solar terms in civil-year order, starting at Sohan (285°).
///
/// Even positions are *jeol* (month-starting terms); odd positions are the
/// mid-month *junggi*.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

const TERM_KOREAN: [&str; 24] = [
    "소한", "대한", "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지",
    "소서", "대서", "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지",
];

const TERM_HANJA: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至",
    "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::Sohan,
        SolarTerm::Daehan,
        SolarTerm::Ipchun,
        SolarTerm::Usu,
        SolarTerm::Gyeongchip,
        SolarTerm::Chunbun,
        SolarTerm::Cheongmyeong,
        SolarTerm::Gogu,
        SolarTerm::Ipha,
        SolarTerm::Soman,
        SolarTerm::Mangjong,
        SolarTerm::Haji,
        SolarTerm::Soseo,
        SolarTerm::Daeseo,
        SolarTerm::Ipchu,
        SolarTerm::Cheoseo,
        SolarTerm::Baengno,
        SolarTerm::Chubun,
        SolarTerm::Hallo,
        SolarTerm::Sanggang,
        SolarTerm::Ipdong,
        SolarTerm::Soseol,
        SolarTerm::Daeseol,
        SolarTerm::Dongji,
    ];

    /// The twelve month-starting terms, Sohan first.
    pub fn jeols() -> impl Iterator<Item = SolarTerm> {
        Self::ALL.into_iter().step_by(2)
    }

    /// Position in civil order (Sohan = 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Apparent solar longitude of the term, degrees.
    pub fn longitude(self) -> f64 {
        ((285 + 15 * self.index()) % 360) as f64
    }

    /// Term whose longitude is `deg`, if `deg` is a multiple of 15°.
    pub fn from_longitude(deg: f64) -> Option<Self> {
        let steps = (deg - 285.0).rem_euclid(360.0) / 15.0;
        let rounded = steps.round();
        if (steps - rounded).abs() > 1e-9 {
            return None;
        }
        Self::ALL.get(rounded as usize % 24).copied()
    }

    pub const fn is_jeol(self) -> bool {
        self.index() % 2 == 0
    }

    /// Saju month the term belongs to (1 = 寅 month starting at Ipchun).
    pub const fn saju_month_index(self) -> u8 {
        ((self.index() / 2 + 11) % 12 + 1) as u8
    }

    /// Branch of [`SolarTerm::saju_month_index`].
    pub fn branch(self) -> Branch {
        Branch::ALL[(self.saju_month_index() as usize + 1) % 12]
    }

    pub const fn korean_name(self) -> &'static str {
        TERM_KOREAN[self as usize]
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self as usize]
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JeolBoundary
// ═══════════════════════════════════════════════════════════════════════════

/// A solar-term instant on the KST clock.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JeolBoundary {
    pub term: SolarTerm,
    pub moment: CalendarMoment,
    pub solar_longitude: f64,
    pub saju_month_index: u8,
    pub branch: Branch,
}

impl JeolBoundary {
    pub fn new(term: SolarTerm, moment: CalendarMoment) -> Self {
        Self {
            term,
            moment,
            solar_longitude: term.longitude(),
            saju_month_index: term.saju_month_index(),
            branch: term.branch(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.moment.year()
    }

    pub const fn month(&self) -> u32 {
        self.moment.month()
    }

    pub const fn day(&self) -> u32 {
        self.moment.day()
    }

    pub const fn hour(&self) -> u32 {
        self.moment.hour()
    }

    pub const fn minute(&self) -> u32 {
        self.moment.minute()
    }

    /// Saju year the boundary opens a month of; Sohan belongs to the
    /// previous year.
    pub fn saju_year(&self) -> i32 {
        if self.saju_month_index == 12 && self.moment.month() <= 2 {
            self.moment.year() - 1
        } else {
            self.moment.year()
        }
    }
}

impl fmt::Display for JeolBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} KST", self.term, self.moment)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Search
// ═══════════════════════════════════════════════════════════════════════════

/// Direction of a boundary scan.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// First boundary strictly after the moment.
    Forward,
    /// Last boundary at or before the moment.
    Reverse,
}

/// Boundary adjacent to `moment` in a time-sorted slice.
///
/// Everything at or before `moment` has taken effect; `Forward` returns the
/// first boundary past that split, `Reverse` the last one before it.
pub(crate) fn boundary_search<'a>(
    sorted: &'a [JeolBoundary],
    moment: &CalendarMoment,
    direction: Direction,
) -> Option<&'a JeolBoundary> {
    let split = sorted.partition_point(|b| b.moment <= *moment);
    match direction {
        Direction::Forward => sorted.get(split),
        Direction::Reverse => split.checked_sub(1).and_then(|i| sorted.get(i)),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JeolBoundaryTable
// ═══════════════════════════════════════════════════════════════════════════

/// Embedded solar-term table, 1900–2050, KST.
#[derive(Debug, Clone)]
pub struct JeolBoundaryTable {
    terms: Vec<JeolBoundary>,
    jeols: Vec<JeolBoundary>,
}

fn decode(year: i32, packed: u32) -> Option<CalendarMoment> {
    let (date, clock) = (packed / 10_000, packed % 10_000);
    CalendarMoment::from_ymd_hm(year, date / 100, date % 100, clock / 100, clock % 100).ok()
}

impl JeolBoundaryTable {
    pub(crate) fn from_embedded() -> Self {
        let terms: Vec<JeolBoundary> = JEOL_TABLE
            .iter()
            .flat_map(|(year, row)| {
                row.iter()
                    .zip(SolarTerm::ALL)
                    .filter_map(move |(&packed, term)| {
                        decode(*year, packed).map(|moment| JeolBoundary::new(term, moment))
                    })
            })
            .collect();
        let jeols = terms.iter().filter(|b| b.term.is_jeol()).copied().collect();
        Self { terms, jeols }
    }

    /// The process-wide table.
    pub fn embedded() -> &'static Self {
        registry().jeol()
    }

    /// Number of solar-term instants held.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Civil years covered.
    pub const fn supported_years() -> RangeInclusive<i32> {
        FIRST_YEAR..=LAST_YEAR
    }

    pub fn is_supported_year(&self, year: i32) -> bool {
        Self::supported_years().contains(&year)
    }

    fn check_year(&self, year: i32) -> Result<()> {
        if self.is_supported_year(year) {
            Ok(())
        } else {
            Err(SajuError::YearOutOfRange {
                year,
                min: FIRST_YEAR,
                max: LAST_YEAR,
            })
        }
    }

    /// All 24 term instants of a civil year, in order.
    pub fn terms_for_year(&self, year: i32) -> Result<&[JeolBoundary]> {
        self.check_year(year)?;
        let start = self.terms.partition_point(|b| b.year() < year);
        let end = self.terms.partition_point(|b| b.year() <= year);
        Ok(&self.terms[start..end])
    }

    /// Instant of one term in a civil year.
    pub fn term(&self, year: i32, term: SolarTerm) -> Result<JeolBoundary> {
        self.terms_for_year(year)?
            .iter()
            .find(|b| b.term == term)
            .copied()
            .ok_or(SajuError::YearOutOfRange {
                year,
                min: FIRST_YEAR,
                max: LAST_YEAR,
            })
    }

    /// Ipchun of a year: the start of its saju year.
    pub fn ipchun_of(&self, year: i32) -> Result<JeolBoundary> {
        self.term(year, SolarTerm::Ipchun)
    }

    /// The twelve month-starting boundaries of a civil year keyed by saju
    /// month index (Sohan in January is 12).
    pub fn boundaries_for_year(&self, year: i32) -> Result<BTreeMap<u8, JeolBoundary>> {
        Ok(self
            .terms_for_year(year)?
            .iter()
            .filter(|b| b.term.is_jeol())
            .map(|b| (b.saju_month_index, *b))
            .collect())
    }

    /// Boundary adjacent to a KST moment, if the table has one.
    pub fn search(&self, moment: &CalendarMoment, direction: Direction) -> Option<&JeolBoundary> {
        boundary_search(&self.jeols, moment, direction)
    }

    /// First month boundary strictly after `moment`.
    pub fn next_boundary_after(&self, moment: &CalendarMoment) -> Option<&JeolBoundary> {
        self.search(moment, Direction::Forward)
    }

    /// Last month boundary at or before `moment`.
    pub fn previous_boundary_at_or_before(
        &self,
        moment: &CalendarMoment,
    ) -> Option<&JeolBoundary> {
        self.search(moment, Direction::Reverse)
    }

    /// Saju month index in force at `moment`.
    pub fn saju_month_index_at(&self, moment: &CalendarMoment) -> Option<u8> {
        self.previous_boundary_at_or_before(moment)
            .map(|b| b.saju_month_index)
    }

    /// `[opening boundary, next boundary)` of the saju month containing
    /// `moment`.
    pub fn month_span_at(&self, moment: &CalendarMoment) -> Option<Interval<CalendarMoment>> {
        let start = self.previous_boundary_at_or_before(moment)?;
        let end = self.next_boundary_after(moment)?;
        Some(Interval::new(start.moment, end.moment))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tiered resolution
// ═══════════════════════════════════════════════════════════════════════════

/// Where a boundary came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BoundaryMode {
    ExactTable,
    Vsop87Calculated,
    ApproximateDay6,
}

impl BoundaryMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactTable => "EXACT_TABLE",
            Self::Vsop87Calculated => "VSOP87_CALCULATED",
            Self::ApproximateDay6 => "APPROXIMATE_DAY6",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boundary together with the precision tier that produced it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedBoundary {
    pub boundary: JeolBoundary,
    pub mode: BoundaryMode,
    pub warning: Option<PrecisionWarning>,
}

/// KST instant of a solar term computed from the VSOP87 series.
pub fn solar_term_instant(year: i32, term: SolarTerm) -> Result<CalendarMoment> {
    let target = term.longitude();
    let guess = CalendarMoment::from_ymd(year, 1, 1)?.julian_day()
        + Days::new(5.5)
        + TROPICAL_YEAR * (term.index() as f64 / 24.0);
    let lead = {
        let d = (target - apparent_solar_longitude(guess)).rem_euclid(360.0);
        if d > 180.0 {
            d - 360.0
        } else {
            d
        }
    };
    let start = guess + Days::new(lead / MEAN_DAILY_MOTION - 3.0);
    let crossing = find_longitude_crossing(target, start, 7)?;
    Ok(CalendarMoment::from_julian_day(crossing + KST_OFFSET).round_to_nearest_minute())
}

fn computed_jeols(years: RangeInclusive<i32>) -> Result<Vec<JeolBoundary>> {
    let mut out = Vec::with_capacity(36);
    for year in years {
        for term in SolarTerm::jeols() {
            out.push(JeolBoundary::new(term, solar_term_instant(year, term)?));
        }
    }
    Ok(out)
}

fn approximate_jeols(years: RangeInclusive<i32>) -> Result<Vec<JeolBoundary>> {
    let mut out = Vec::with_capacity(36);
    for year in years {
        for (month, term) in (1..=12).zip(SolarTerm::jeols()) {
            let moment = CalendarMoment::from_ymd_hm(year, month, 6, 12, 0)?;
            out.push(JeolBoundary::new(term, moment));
        }
    }
    Ok(out)
}

/// Month boundary adjacent to a KST moment, degrading through the
/// precision tiers when the table cannot answer.
pub fn locate_boundary(moment: &CalendarMoment, direction: Direction) -> Result<ResolvedBoundary> {
    let year = moment.year();
    let table = JeolBoundaryTable::embedded();
    if table.is_supported_year(year) {
        if let Some(boundary) = table.search(moment, direction) {
            debug!(%moment, ?direction, %boundary, "boundary from table");
            return Ok(ResolvedBoundary {
                boundary: *boundary,
                mode: BoundaryMode::ExactTable,
                warning: None,
            });
        }
    }

    let neighbourhood = year.saturating_sub(1)..=year.saturating_add(1);

    if VSOP87_YEARS.contains(&year) {
        match computed_jeols(neighbourhood.clone()) {
            Ok(computed) => {
                if let Some(boundary) = boundary_search(&computed, moment, direction) {
                    let warning = PrecisionWarning::Vsop87Fallback { year };
                    warn!(%moment, %boundary, code = warning.code(), "{warning}");
                    return Ok(ResolvedBoundary {
                        boundary: *boundary,
                        mode: BoundaryMode::Vsop87Calculated,
                        warning: Some(warning),
                    });
                }
            }
            Err(error) => warn!(%moment, %error, "VSOP87 boundary search failed"),
        }
    }

    let approximated = approximate_jeols(neighbourhood)?;
    let boundary = boundary_search(&approximated, moment, direction).ok_or(
        SajuError::SearchFailed {
            target_deg: f64::NAN,
            near_jd: moment.julian_day().value(),
        },
    )?;
    let warning = PrecisionWarning::ApproximateDay6 { year };
    warn!(%moment, %boundary, code = warning.code(), "{warning}");
    Ok(ResolvedBoundary {
        boundary: *boundary,
        mode: BoundaryMode::ApproximateDay6,
        warning: Some(warning),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kst(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CalendarMoment {
        CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap()
    }

    #[test]
    fn table_is_complete() {
        let table = JeolBoundaryTable::embedded();
        assert_eq!(table.len(), 24 * 151);
        for year in JeolBoundaryTable::supported_years() {
            assert_eq!(table.terms_for_year(year).unwrap().len(), 24, "{year}");
            assert_eq!(table.boundaries_for_year(year).unwrap().len(), 12, "{year}");
        }
    }

    #[test]
    fn terms_strictly_increase_within_and_across_years() {
        let table = JeolBoundaryTable::embedded();
        assert!(table.terms.windows(2).all(|w| w[0].moment < w[1].moment));
    }

    #[test]
    fn published_2024_instants() {
        let table = JeolBoundaryTable::embedded();
        assert_eq!(table.ipchun_of(2024).unwrap().moment, kst(2024, 2, 4, 17, 27));
        assert_eq!(table.term(2024, SolarTerm::Sohan).unwrap().moment, kst(2024, 1, 6, 5, 49));
        assert_eq!(
            table.term(2024, SolarTerm::Gyeongchip).unwrap().moment,
            kst(2024, 3, 5, 11, 23)
        );
        assert_eq!(table.term(2024, SolarTerm::Daeseol).unwrap().moment, kst(2024, 12, 7, 0, 17));
    }

    #[test]
    fn ipchun_tie_break() {
        let table = JeolBoundaryTable::embedded();
        assert_eq!(table.saju_month_index_at(&kst(2024, 2, 4, 17, 26)), Some(12));
        assert_eq!(table.saju_month_index_at(&kst(2024, 2, 4, 17, 27)), Some(1));
        let at = kst(2024, 2, 4, 17, 27);
        assert_eq!(table.previous_boundary_at_or_before(&at).unwrap().moment, at);
        assert_eq!(
            table.next_boundary_after(&at).unwrap().term,
            SolarTerm::Gyeongchip
        );
    }

    #[test]
    fn boundaries_keyed_by_month_index() {
        let map = JeolBoundaryTable::embedded().boundaries_for_year(2024).unwrap();
        assert_eq!(map[&1].term, SolarTerm::Ipchun);
        assert_eq!(map[&12].term, SolarTerm::Sohan);
        assert_eq!(map[&11].term, SolarTerm::Daeseol);
        assert_eq!(map[&1].branch, Branch::In);
        assert_eq!(map[&12].saju_year(), 2023);
        assert_eq!(map[&11].saju_year(), 2024);
    }

    #[test]
    fn month_span_brackets_the_moment() {
        let table = JeolBoundaryTable::embedded();
        let span = table.month_span_at(&kst(2024, 2, 10, 12, 0)).unwrap();
        assert_eq!(span.start, kst(2024, 2, 4, 17, 27));
        assert_eq!(span.end, kst(2024, 3, 5, 11, 23));
        assert!(table.month_span_at(&kst(1900, 1, 2, 0, 0)).is_none());
    }

    #[test]
    fn unsupported_years_are_rejected_by_the_table() {
        let table = JeolBoundaryTable::embedded();
        assert!(matches!(
            table.terms_for_year(1899),
            Err(SajuError::YearOutOfRange { .. })
        ));
        assert!(table.ipchun_of(2051).is_err());
        assert!(!table.is_supported_year(2051));
    }

    #[test]
    fn solar_term_metadata() {
        assert_eq!(SolarTerm::Sohan.longitude(), 285.0);
        assert_eq!(SolarTerm::Ipchun.longitude(), 315.0);
        assert_eq!(SolarTerm::Chunbun.longitude(), 0.0);
        assert_eq!(SolarTerm::Dongji.longitude(), 270.0);
        assert_eq!(SolarTerm::from_longitude(315.0), Some(SolarTerm::Ipchun));
        assert_eq!(SolarTerm::from_longitude(-45.0), Some(SolarTerm::Ipchun));
        assert_eq!(SolarTerm::from_longitude(317.0), None);
        assert_eq!(SolarTerm::jeols().count(), 12);
        assert!(SolarTerm::Ipchun.is_jeol());
        assert!(!SolarTerm::Usu.is_jeol());
        assert_eq!(SolarTerm::Sohan.saju_month_index(), 12);
        assert_eq!(SolarTerm::Daehan.saju_month_index(), 12);
        assert_eq!(SolarTerm::Ipchun.saju_month_index(), 1);
        assert_eq!(SolarTerm::Daeseol.saju_month_index(), 11);
        assert_eq!(SolarTerm::Daeseol.branch(), Branch::Ja);
        assert_eq!(SolarTerm::Ipchun.hanja(), "立春");
        assert_eq!(SolarTerm::Ipchun.to_string(), "입춘");
    }

    #[test]
    fn vsop_reproduces_table_edges() {
        // Agreement with the table at both ends (±1 minute).
        for (year, term, expected) in [
            (1900, SolarTerm::Ipchun, kst(1900, 2, 4, 14, 52)),
            (2050, SolarTerm::Daeseol, kst(2050, 12, 7, 7, 41)),
        ] {
            let computed = solar_term_instant(year, term).unwrap();
            let diff = computed.ordinal_minute() - expected.ordinal_minute();
            assert!(diff.abs() <= 1, "{term} {year}: {computed} vs {expected}");
        }
    }

    #[test]
    fn tiers_follow_the_year() {
        let exact = locate_boundary(&kst(2024, 2, 10, 12, 0), Direction::Reverse).unwrap();
        assert_eq!(exact.mode, BoundaryMode::ExactTable);
        assert_eq!(exact.warning, None);

        let computed = locate_boundary(&kst(1899, 2, 10, 12, 0), Direction::Reverse).unwrap();
        assert_eq!(computed.mode, BoundaryMode::Vsop87Calculated);
        assert_eq!(computed.boundary.term, SolarTerm::Ipchun);
        assert_eq!(computed.boundary.moment.day(), 4);
        assert_eq!(
            computed.warning.map(|w| w.code()),
            Some("VSOP87_FALLBACK")
        );

        let approximate = locate_boundary(&kst(5000, 2, 10, 12, 0), Direction::Reverse).unwrap();
        assert_eq!(approximate.mode, BoundaryMode::ApproximateDay6);
        assert_eq!(approximate.boundary.moment, kst(5000, 2, 6, 12, 0));
        assert_eq!(
            approximate.warning,
            Some(PrecisionWarning::ApproximateDay6 { year: 5000 })
        );
    }

    #[test]
    fn table_edge_falls_back_instead_of_failing() {
        // Before the first tabulated Sohan: previous boundary is 1899 Daeseol.
        let early = locate_boundary(&kst(1900, 1, 2, 0, 0), Direction::Reverse).unwrap();
        assert_eq!(early.mode, BoundaryMode::Vsop87Calculated);
        assert_eq!(early.boundary.term, SolarTerm::Daeseol);
        assert_eq!(early.boundary.year(), 1899);

        // After the last tabulated jeol: next is 2051 Sohan.
        let late = locate_boundary(&kst(2050, 12, 30, 0, 0), Direction::Forward).unwrap();
        assert_eq!(late.mode, BoundaryMode::Vsop87Calculated);
        assert_eq!(late.boundary.term, SolarTerm::Sohan);
        assert_eq!(late.boundary.year(), 2051);
    }
}
