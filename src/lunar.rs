// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Korean lunisolar ↔ Gregorian date conversion.
//!
//! Every lunar month from 1899-12 (first day 1900-01-01) to the end of
//! lunar 2050 is expanded into a flat, time-sorted list carrying its
//! Julian Day Number of day 1. Conversions in both directions are a binary
//! search over that list plus a day offset.
//!
//! A leap month repeats the number of the month before it, so the solar
//! day after lunar 2023-02-30 is *leap* 2023-02-01. [`LunarDate`] keeps the
//! leap flag explicitly; the two readings never collapse.

use std::fmt;
use std::ops::RangeInclusive;

use super::data::lunar_table::{FIRST_YEAR, LUNAR_TABLE};
use super::error::{Result, SajuError};
use super::julian_day::{datetime_to_jd, jd_to_calendar, CalendarMoment};
use super::registry::registry;

/// Lunar years with at least one month in the table.
pub const LUNAR_YEARS: RangeInclusive<i32> = 1899..=2050;

/// Solar years fully covered by the table.
pub const SOLAR_YEARS: RangeInclusive<i32> = 1900..=2050;

/// JDN of 1900-01-01, the first day of lunar 1899-12.
const EPOCH_JDN: i64 = 2_415_021;

/// Length of the lunar month preceding the first table row.
const EPOCH_MONTH_LENGTH: u32 = 30;

/// A date in the Korean lunisolar calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLunarDate"))]
pub struct LunarDate {
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLunarDate {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    is_leap_month: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLunarDate> for LunarDate {
    type Error = SajuError;

    fn try_from(raw: RawLunarDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day, raw.is_leap_month)
    }
}

impl LunarDate {
    /// Range-checked constructor. Whether the month actually exists (and
    /// is long enough) is checked on conversion.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self> {
        if !LUNAR_YEARS.contains(&year) {
            return Err(SajuError::YearOutOfRange {
                year,
                min: *LUNAR_YEARS.start(),
                max: *LUNAR_YEARS.end(),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(SajuError::InvalidLunarMonth(month));
        }
        if !(1..=30).contains(&day) {
            return Err(SajuError::InvalidLunarDay {
                year,
                month,
                day,
                length: 30,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { " (leap)" } else { "" };
        write!(f, "{:04}-{:02}-{:02}{leap}", self.year, self.month, self.day)
    }
}

/// A Gregorian date inside the table range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSolarDate"))]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSolarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSolarDate> for SolarDate {
    type Error = SajuError;

    fn try_from(raw: RawSolarDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl SolarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !SOLAR_YEARS.contains(&year) {
            return Err(SajuError::YearOutOfRange {
                year,
                min: *SOLAR_YEARS.start(),
                max: *SOLAR_YEARS.end(),
            });
        }
        CalendarMoment::from_ymd(year, month, day)?;
        Ok(Self { year, month, day })
    }

    fn from_julian_day_number(jdn: i64) -> Result<Self> {
        let m = jd_to_calendar(jdn as f64);
        Self::new(m.year(), m.month(), m.day())
    }

    /// Julian Day Number of the date.
    pub fn julian_day_number(&self) -> i64 {
        datetime_to_jd(self.year, self.month, self.day, 12, 0, 0.0).round() as i64
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// How to read a lunar date whose leap flag is unknown.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LeapMonthPolicy {
    /// Always the ordinary month.
    #[default]
    Common,
    /// Always the leap month; fails where there is none.
    Leap,
    /// Ordinary month if valid, otherwise the leap month.
    Auto,
}

// ═══════════════════════════════════════════════════════════════════════════
// Expanded table
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct LunarMonth {
    year: i32,
    month: u32,
    is_leap: bool,
    length: u32,
    start_jdn: i64,
}

/// Flat, time-sorted list of every lunar month in range.
#[derive(Debug, Clone)]
pub(crate) struct LunarTable {
    months: Vec<LunarMonth>,
}

impl LunarTable {
    pub(crate) fn from_embedded() -> Self {
        let mut months = Vec::with_capacity(LUNAR_TABLE.len() * 13 + 1);
        months.push(LunarMonth {
            year: FIRST_YEAR - 1,
            month: 12,
            is_leap: false,
            length: EPOCH_MONTH_LENGTH,
            start_jdn: EPOCH_JDN,
        });
        let mut next_jdn = EPOCH_JDN + EPOCH_MONTH_LENGTH as i64;
        for &(year, _, _, mask, leap_ordinal) in LUNAR_TABLE.iter() {
            let count = if leap_ordinal == 0 { 12 } else { 13 };
            for ordinal in 1..=count {
                let (month, is_leap) = match leap_ordinal as u32 {
                    0 => (ordinal, false),
                    leap if ordinal < leap => (ordinal, false),
                    leap if ordinal == leap => (ordinal - 1, true),
                    _ => (ordinal - 1, false),
                };
                let length = if mask & (1 << (13 - ordinal)) != 0 { 30 } else { 29 };
                months.push(LunarMonth {
                    year,
                    month,
                    is_leap,
                    length,
                    start_jdn: next_jdn,
                });
                next_jdn += length as i64;
            }
        }
        Self { months }
    }

    pub(crate) fn month_count(&self) -> usize {
        self.months.len()
    }

    fn year_months(&self, year: i32) -> Result<&[LunarMonth]> {
        let start = self.months.partition_point(|m| m.year < year);
        let end = self.months.partition_point(|m| m.year <= year);
        if start == end {
            return Err(SajuError::YearOutOfRange {
                year,
                min: *LUNAR_YEARS.start(),
                max: *LUNAR_YEARS.end(),
            });
        }
        Ok(&self.months[start..end])
    }

    fn find(&self, year: i32, month: u32, is_leap: bool) -> Result<&LunarMonth> {
        if !(1..=12).contains(&month) {
            return Err(SajuError::InvalidLunarMonth(month));
        }
        let months = self.year_months(year)?;
        match months
            .iter()
            .find(|m| m.month == month && m.is_leap == is_leap)
        {
            Some(found) => Ok(found),
            None if is_leap => Err(SajuError::NoLeapMonth { year, month }),
            None => Err(SajuError::LunarMonthNotTabulated { year, month }),
        }
    }

    fn last_day_jdn(&self) -> i64 {
        self.months
            .last()
            .map_or(EPOCH_JDN, |m| m.start_jdn + m.length as i64 - 1)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Converter
// ═══════════════════════════════════════════════════════════════════════════

/// Bidirectional lunar ↔ solar converter over the embedded table.
#[derive(Debug, Copy, Clone)]
pub struct LunarSolarConverter {
    table: &'static LunarTable,
}

impl Default for LunarSolarConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarSolarConverter {
    pub fn new() -> Self {
        Self {
            table: registry().lunar(),
        }
    }

    /// Gregorian date of a lunar date.
    ///
    /// Fails on a day past the month's length, a leap month the year does
    /// not have, or a result after 2050-12-31.
    pub fn lunar_to_solar(&self, date: &LunarDate) -> Result<SolarDate> {
        let month = self.table.find(date.year, date.month, date.is_leap_month)?;
        if date.day > month.length {
            return Err(SajuError::InvalidLunarDay {
                year: date.year,
                month: date.month,
                day: date.day,
                length: month.length,
            });
        }
        SolarDate::from_julian_day_number(month.start_jdn + date.day as i64 - 1)
    }

    /// Lunar date of a Gregorian date.
    pub fn solar_to_lunar(&self, date: &SolarDate) -> Result<LunarDate> {
        let jdn = date.julian_day_number();
        let out_of_range = SajuError::YearOutOfRange {
            year: date.year,
            min: *SOLAR_YEARS.start(),
            max: *SOLAR_YEARS.end(),
        };
        if jdn > self.table.last_day_jdn() {
            return Err(out_of_range);
        }
        let index = self
            .table
            .months
            .partition_point(|m| m.start_jdn <= jdn)
            .checked_sub(1)
            .ok_or(out_of_range)?;
        let month = &self.table.months[index];
        Ok(LunarDate {
            year: month.year,
            month: month.month,
            day: (jdn - month.start_jdn + 1) as u32,
            is_leap_month: month.is_leap,
        })
    }

    /// Number of the month a year repeats, if any.
    pub fn leap_month(&self, year: i32) -> Result<Option<u32>> {
        Ok(self
            .table
            .year_months(year)?
            .iter()
            .find(|m| m.is_leap)
            .map(|m| m.month))
    }

    /// Days in one lunar month (29 or 30).
    pub fn month_length(&self, year: i32, month: u32, is_leap: bool) -> Result<u32> {
        Ok(self.table.find(year, month, is_leap)?.length)
    }

    /// Days in a full lunar year (353–385). Lunar 1899 is only partly
    /// covered and is rejected.
    pub fn year_length(&self, year: i32) -> Result<u32> {
        if year < FIRST_YEAR {
            return Err(SajuError::YearOutOfRange {
                year,
                min: FIRST_YEAR,
                max: *LUNAR_YEARS.end(),
            });
        }
        Ok(self.table.year_months(year)?.iter().map(|m| m.length).sum())
    }

    /// Build a [`LunarDate`] from raw input under a leap-month policy,
    /// validating it against the table.
    pub fn resolve_lunar_date(
        &self,
        year: i32,
        month: u32,
        day: u32,
        policy: LeapMonthPolicy,
    ) -> Result<LunarDate> {
        let attempt = |is_leap| -> Result<LunarDate> {
            let date = LunarDate::new(year, month, day, is_leap)?;
            self.lunar_to_solar(&date)?;
            Ok(date)
        };
        match policy {
            LeapMonthPolicy::Common => attempt(false),
            LeapMonthPolicy::Leap => attempt(true),
            LeapMonthPolicy::Auto => {
                attempt(false).or_else(|common| attempt(true).map_err(|_| common))
            }
        }
    }
}
