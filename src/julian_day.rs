// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar ↔ Julian Day conversion.
//!
//! The forward and inverse algorithms follow Meeus (*Astronomical
//! Algorithms*, ch. 7) and switch between the Julian and Gregorian calendars
//! at the reform of 1582-10-15 (JD 2 299 161).
//!
//! [`CalendarMoment`] is the civil wall-clock value every other module
//! passes around. Minute shifts go through a carry chain
//! (minute → hour → day → month → year) that honours the real length of
//! each month, so no intermediate value ever leaves the calendar.

use std::cmp::Ordering;
use std::fmt;

use super::error::{Result, SajuError};
use super::instant::{Time, TimeInstant};
use super::scales::{TT, UT};
use qtty::*;

/// First Julian Day of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JD: f64 = 2_299_161.0;

impl Time<TT> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// One Julian millennium expressed in days.
    pub const JULIAN_MILLENNIUM: Days = Days::new(365_250.0);

    /// Julian millennia since J2000.0 (the VSOP87 time argument).
    #[inline]
    pub fn julian_millennia(&self) -> Millennia {
        Millennia::new(((*self - Self::J2000) / Self::JULIAN_MILLENNIUM).simplify().value())
    }

    /// Julian centuries since J2000.0 (nutation arguments).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(((*self - Self::J2000) / Self::JULIAN_CENTURY).simplify().value())
    }
}

/// Whether `(year, month, day)` precedes the Gregorian reform.
#[inline]
fn is_julian_calendar(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) < (1582, 10, 15)
}

/// Leap-year rule of the calendar in force in `year`.
pub fn is_leap_year(year: i32) -> bool {
    if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in `month` of `year` (1-based month).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Julian Day of a civil date and time.
///
/// January and February are counted as months 13 and 14 of the previous
/// year. The Gregorian correction `B = 2 − A + ⌊A/4⌋` is dropped for dates
/// before the reform.
pub fn datetime_to_jd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let b = if is_julian_calendar(year, month, day) {
        0.0
    } else {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    };
    let day_fraction = Hours::new(hour as f64).to::<Day>()
        + Minutes::new(minute as f64).to::<Day>()
        + Seconds::new(second).to::<Day>();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
        + day_fraction.value()
}

/// Civil date and time of a Julian Day.
///
/// Seconds keep their fractional part; use
/// [`CalendarMoment::round_to_nearest_minute`] to snap the result.
pub fn jd_to_calendar(jd: f64) -> CalendarMoment {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let a = if z < GREGORIAN_REFORM_JD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u32;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    let day_length = Days::new(1.0).to::<Second>().value();
    let seconds_of_day = Days::new(f).to::<Second>().value().clamp(0.0, day_length - 1e-6);
    let hour = (seconds_of_day / 3_600.0).floor() as u32;
    let minute = ((seconds_of_day - hour as f64 * 3_600.0) / 60.0).floor() as u32;
    let second = seconds_of_day - hour as f64 * 3_600.0 - minute as f64 * 60.0;

    CalendarMoment {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarMoment
// ═══════════════════════════════════════════════════════════════════════════

/// A validated civil date and wall-clock time.
///
/// Deserialisation goes through [`CalendarMoment::new`], so a payload such
/// as `2024-02-31 25:00` is rejected rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalendarMoment"))]
pub struct CalendarMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

/// Unchecked wire form of a [`CalendarMoment`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCalendarMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    #[serde(default)]
    second: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalendarMoment> for CalendarMoment {
    type Error = SajuError;

    fn try_from(raw: RawCalendarMoment) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

impl CalendarMoment {
    /// Build a moment, rejecting dates and clock values that do not exist.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        let in_reform_gap = year == 1582 && month == 10 && (5..15).contains(&day);
        if !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
            || in_reform_gap
        {
            return Err(SajuError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(SajuError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Minute-resolution shorthand for [`CalendarMoment::new`].
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        Self::new(year, month, day, hour, minute, 0.0)
    }

    /// Midnight at the start of a date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Inverse of [`CalendarMoment::julian_day`].
    pub fn from_julian_day(jd: Time<UT>) -> Self {
        jd_to_calendar(jd.value())
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

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Julian Day of this wall-clock value, read on the UT axis.
    pub fn julian_day(&self) -> Time<UT> {
        Time::new(datetime_to_jd(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ))
    }

    /// Integer Julian Day Number of the civil date (the day starting at
    /// local midnight).
    pub fn julian_day_number(&self) -> i64 {
        (datetime_to_jd(self.year, self.month, self.day, 12, 0, 0.0)).round() as i64
    }

    /// 1-based ordinal day within the year.
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|m| days_in_month(self.year, m))
            .sum::<u32>()
            + self.day
    }

    /// Whole minutes since the Julian Day epoch; a total order on
    /// minute-resolution moments.
    pub fn ordinal_minute(&self) -> i64 {
        self.julian_day_number() * 1_440
            + (self.hour * 60 + self.minute) as i64
    }

    /// Same date at 00:00:00.
    pub fn start_of_day(&self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0.0,
            ..*self
        }
    }

    /// Shift by whole days across month and year ends.
    pub fn add_days(&self, days: i64) -> Self {
        let mut out = *self;
        let mut remaining = days;
        while remaining > 0 {
            let left_in_month = (days_in_month(out.year, out.month) - out.day) as i64;
            if remaining <= left_in_month {
                out.day += remaining as u32;
                break;
            }
            remaining -= left_in_month + 1;
            out.day = 1;
            out.month += 1;
            if out.month > 12 {
                out.month = 1;
                out.year += 1;
            }
        }
        while remaining < 0 {
            if out.day as i64 + remaining >= 1 {
                out.day = (out.day as i64 + remaining) as u32;
                break;
            }
            remaining += out.day as i64;
            out.month -= 1;
            if out.month == 0 {
                out.month = 12;
                out.year -= 1;
            }
            out.day = days_in_month(out.year, out.month);
        }
        out
    }

    /// Shift by a signed number of minutes, carrying into hours and days.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let total_minutes = self.minute as i64 + minutes;
        let total_hours = self.hour as i64 + total_minutes.div_euclid(60);
        let shifted = Self {
            minute: total_minutes.rem_euclid(60) as u32,
            hour: total_hours.rem_euclid(24) as u32,
            ..*self
        };
        shifted.add_days(total_hours.div_euclid(24))
    }

    /// Shift by a signed, possibly fractional, duration.
    pub fn add_seconds(&self, seconds: Seconds) -> Self {
        let total = self.second + seconds.value();
        let carry = (total / 60.0).floor();
        let second = (total - carry * 60.0).clamp(0.0, 60.0 - 1e-9);
        Self { second, ..*self }.add_minutes(carry as i64)
    }

    /// Round to the nearest whole minute; 30 seconds and above round up.
    ///
    /// Rounding up carries through the month and year ends, so
    /// `2023-12-31 23:59:30` becomes `2024-01-01 00:00`.
    pub fn round_to_nearest_minute(&self) -> Self {
        let truncated = Self {
            second: 0.0,
            ..*self
        };
        if self.second >= 30.0 {
            truncated.add_minutes(1)
        } else {
            truncated
        }
    }
}

impl PartialOrd for CalendarMoment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.ordinal_minute().cmp(&other.ordinal_minute()) {
            Ordering::Equal => self.second.partial_cmp(&other.second),
            ord => Some(ord),
        }
    }
}

impl TimeInstant for CalendarMoment {
    /// Includes the fractional seconds.
    type Duration = Minutes;

    fn difference(&self, other: &Self) -> Self::Duration {
        Minutes::new((self.ordinal_minute() - other.ordinal_minute()) as f64)
            + Seconds::new(self.second - other.second).to::<Minute>()
    }
}

impl fmt::Display for CalendarMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        if self.second > 0.0 {
            write!(f, ":{:06.3}", self.second)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CalendarMoment {
        CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap()
    }

    #[test]
    fn j2000_and_known_julian_days() {
        assert_eq!(datetime_to_jd(2000, 1, 1, 12, 0, 0.0), 2_451_545.0);
        assert_eq!(datetime_to_jd(1957, 10, 4, 19, 26, 24.0), 2_436_116.31);
        assert_eq!(datetime_to_jd(1582, 10, 15, 0, 0, 0.0), 2_299_160.5);
        // Last Julian-calendar day is immediately before the reform.
        assert_eq!(datetime_to_jd(1582, 10, 4, 0, 0, 0.0), 2_299_159.5);
    }

    #[test]
    fn inverse_matches_meeus_examples() {
        let m = jd_to_calendar(2_436_116.31);
        assert_eq!((m.year(), m.month(), m.day()), (1957, 10, 4));
        assert_eq!((m.hour(), m.minute()), (19, 26));

        let m = jd_to_calendar(1_842_713.0);
        assert_eq!((m.year(), m.month(), m.day(), m.hour()), (333, 1, 27, 12));
    }

    #[test]
    fn julian_day_number_of_anchor_dates() {
        assert_eq!(moment(2024, 1, 1, 0, 0).julian_day_number(), 2_460_311);
        assert_eq!(moment(2024, 1, 1, 23, 59).julian_day_number(), 2_460_311);
        assert_eq!(moment(1900, 1, 1, 0, 0).julian_day_number(), 2_415_021);
    }

    #[test]
    fn roundtrip_through_julian_day() {
        for (y, mo, d, h, mi) in [
            (1900, 1, 1, 0, 0),
            (1912, 2, 29, 23, 59),
            (1999, 12, 31, 23, 59),
            (2024, 2, 4, 17, 27),
            (2050, 12, 31, 12, 30),
        ] {
            let x = moment(y, mo, d, h, mi);
            let back = CalendarMoment::from_julian_day(x.julian_day()).round_to_nearest_minute();
            assert_eq!(back, x);
        }
    }

    #[test]
    fn rejects_nonexistent_values() {
        assert!(matches!(
            CalendarMoment::from_ymd(2023, 2, 29),
            Err(SajuError::InvalidDate { .. })
        ));
        assert!(CalendarMoment::from_ymd(2024, 2, 29).is_ok());
        assert!(CalendarMoment::from_ymd(1900, 2, 29).is_err());
        assert!(CalendarMoment::from_ymd(2024, 13, 1).is_err());
        assert!(CalendarMoment::from_ymd(1582, 10, 10).is_err());
        assert!(matches!(
            CalendarMoment::from_ymd_hm(2024, 1, 1, 24, 0),
            Err(SajuError::InvalidTime { .. })
        ));
        assert!(CalendarMoment::new(2024, 1, 1, 0, 0, 60.0).is_err());
    }

    #[test]
    fn rounding_carries_across_year_end() {
        let m = CalendarMoment::new(2023, 12, 31, 23, 59, 30.0).unwrap();
        assert_eq!(m.round_to_nearest_minute(), moment(2024, 1, 1, 0, 0));

        let m = CalendarMoment::new(2023, 12, 31, 23, 59, 29.999).unwrap();
        assert_eq!(m.round_to_nearest_minute(), moment(2023, 12, 31, 23, 59));
    }

    #[test]
    fn rounding_respects_leap_february() {
        let m = CalendarMoment::new(2024, 2, 28, 23, 59, 45.0).unwrap();
        assert_eq!(m.round_to_nearest_minute(), moment(2024, 2, 29, 0, 0));

        let m = CalendarMoment::new(2023, 2, 28, 23, 59, 45.0).unwrap();
        assert_eq!(m.round_to_nearest_minute(), moment(2023, 3, 1, 0, 0));
    }

    #[test]
    fn minute_shifts_in_both_directions() {
        let m = moment(2024, 3, 1, 0, 10);
        assert_eq!(m.add_minutes(-11), moment(2024, 2, 29, 23, 59));
        assert_eq!(m.add_minutes(-32), moment(2024, 2, 29, 23, 38));
        assert_eq!(moment(2024, 12, 31, 23, 50).add_minutes(10), moment(2025, 1, 1, 0, 0));
        assert_eq!(moment(2024, 1, 1, 0, 0).add_minutes(-1), moment(2023, 12, 31, 23, 59));
        assert_eq!(m.add_minutes(0), m);
        assert_eq!(moment(2024, 1, 15, 12, 0).add_days(-46), moment(2023, 11, 30, 12, 0));
        assert_eq!(moment(2024, 1, 15, 12, 0).add_days(400), moment(2025, 2, 18, 12, 0));
    }

    #[test]
    fn second_shifts_carry_minutes() {
        let m = moment(2024, 1, 1, 0, 0);
        let shifted = m.add_seconds(Seconds::new(-90.0));
        assert_eq!(
            (shifted.hour(), shifted.minute(), shifted.second()),
            (23, 58, 30.0)
        );
        assert_eq!(shifted.day(), 31);
    }

    #[test]
    fn ordering_follows_time() {
        assert!(moment(2024, 2, 4, 17, 26) < moment(2024, 2, 4, 17, 27));
        assert!(moment(2023, 12, 31, 23, 59) < moment(2024, 1, 1, 0, 0));
        assert_eq!(
            moment(2024, 1, 2, 0, 0).ordinal_minute() - moment(2024, 1, 1, 0, 0).ordinal_minute(),
            1_440
        );
    }

    #[test]
    fn day_of_year_counts_leap_day() {
        assert_eq!(moment(2024, 3, 1, 0, 0).day_of_year(), 61);
        assert_eq!(moment(2023, 3, 1, 0, 0).day_of_year(), 60);
        assert_eq!(moment(2024, 12, 31, 0, 0).day_of_year(), 366);
    }

    #[test]
    fn millennia_since_j2000() {
        let t = Time::<TT>::J2000 + Time::<TT>::JULIAN_MILLENNIUM;
        assert!((t.julian_millennia() - Millennia::new(1.0)).abs() < Millennia::new(1e-12));
        assert!((t.julian_centuries() - Centuries::new(10.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn difference_counts_minutes_and_seconds() {
        let a = CalendarMoment::new(2024, 2, 4, 17, 27, 30.0).unwrap();
        let b = moment(2024, 2, 3, 17, 27);
        assert!((a.difference(&b) - Minutes::new(1_440.5)).abs() < Minutes::new(1e-9));
        assert!((b.difference(&a) - Minutes::new(-1_440.5)).abs() < Minutes::new(1e-9));
    }

    #[test]
    fn display_is_iso_like() {
        assert_eq!(moment(2024, 2, 4, 17, 27).to_string(), "2024-02-04 17:27");
    }
}
