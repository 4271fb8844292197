// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil wall-clock time → local solar time.
//!
//! Three additive minute corrections are applied to the civil clock:
//!
//! | Component | Formula | Switch |
//! |-----------|---------|--------|
//! | longitude (LMT) | `(λ − λ₀) × 4` | `apply_lmt_correction` |
//! | historical DST | `−60` inside a Korean summer-time range | `apply_dst_history` |
//! | equation of time | `9.87 sin 2B − 7.53 cos B − 1.5 sin B` | `include_equation_of_time` |
//!
//! Korean zones use the tabulated summer-time ranges below; any other zone
//! takes its DST offset from the tz database.
//!
//! `λ₀` is the standard meridian of the zone's base (non-DST) UTC offset at
//! the birth date, looked up in the IANA database through `chrono-tz`, so
//! Korea's UTC+8:30 period (1954–1961) moves the meridian to 127.5°.
//!
//! The adjustment also yields the absolute instant on the UTC+9 clock the
//! solar-term table is written in; boundary comparisons use that value,
//! never the longitude-shifted one.

use std::str::FromStr;

use chrono::{NaiveDate, TimeZone};
use chrono_tz::{OffsetComponents, Tz, TzOffset};

use super::config::SajuConfig;
use super::error::{Result, SajuError};
use super::julian_day::CalendarMoment;
use super::period::Interval;
use qtty::{Minute, Minutes, Second, Seconds};

/// Offset of the solar-term table clock (KST), minutes east of UTC.
pub const KST_OFFSET_MINUTES: i64 = 9 * 60;

/// Clock shift during Korean summer time.
const DST_SHIFT: Minutes = Minutes::new(60.0);

/// Korean summer-time ranges on the local wall clock, `[start, end)`,
/// from the tz database `ROK` rules.
#[rustfmt::skip]
const KOREAN_DST: [((i32, u32, u32, u32), (i32, u32, u32, u32)); 12] = [
    ((1948, 6, 1, 0), (1948, 9, 13, 0)),
    ((1949, 4, 3, 0), (1949, 9, 11, 0)),
    ((1950, 4, 1, 0), (1950, 9, 10, 0)),
    ((1951, 5, 6, 0), (1951, 9, 9, 0)),
    ((1955, 5, 5, 0), (1955, 9, 9, 0)),
    ((1956, 5, 20, 0), (1956, 9, 30, 0)),
    ((1957, 5, 5, 0), (1957, 9, 22, 0)),
    ((1958, 5, 4, 0), (1958, 9, 21, 0)),
    ((1959, 5, 3, 0), (1959, 9, 20, 0)),
    ((1960, 5, 1, 0), (1960, 9, 18, 0)),
    ((1987, 5, 10, 2), (1987, 10, 11, 3)),
    ((1988, 5, 8, 2), (1988, 10, 9, 3)),
];

fn dst_range(
    ((y0, m0, d0, h0), (y1, m1, d1, h1)): ((i32, u32, u32, u32), (i32, u32, u32, u32)),
) -> Result<Interval<CalendarMoment>> {
    Ok(Interval::new(
        CalendarMoment::from_ymd_hm(y0, m0, d0, h0, 0)?,
        CalendarMoment::from_ymd_hm(y1, m1, d1, h1, 0)?,
    ))
}

/// Whether a Korean wall-clock moment falls in a summer-time range.
pub fn is_korean_dst(civil: &CalendarMoment) -> Result<bool> {
    for range in KOREAN_DST {
        if dst_range(range)?.contains(civil) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Resolve an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    Tz::from_str(name).map_err(|_| SajuError::UnknownTimezone(name.to_owned()))
}

fn is_korean_zone(tz: Tz) -> bool {
    matches!(tz, Tz::Asia__Seoul | Tz::ROK)
}

fn zone_offset(tz: Tz, civil: &CalendarMoment) -> Result<TzOffset> {
    let naive = NaiveDate::from_ymd_opt(civil.year(), civil.month(), civil.day())
        .and_then(|d| d.and_hms_opt(civil.hour(), civil.minute(), 0))
        .ok_or(SajuError::InvalidDate {
            year: civil.year(),
            month: civil.month(),
            day: civil.day(),
        })?;
    Ok(tz
        .offset_from_local_datetime(&naive)
        .earliest()
        // Wall times skipped by a forward transition: read them as UTC.
        .unwrap_or_else(|| tz.offset_from_utc_datetime(&naive)))
}

/// Base (non-DST) UTC offset of `tz` in force at a wall-clock moment, in
/// seconds.
pub fn base_utc_offset_seconds(tz: Tz, civil: &CalendarMoment) -> Result<i64> {
    Ok(zone_offset(tz, civil)?.base_utc_offset().num_seconds())
}

/// Standard meridian of a zone: 15° per hour of base UTC offset.
pub fn standard_meridian_degrees(timezone: &str, civil: &CalendarMoment) -> Result<f64> {
    let tz = parse_timezone(timezone)?;
    Ok(base_utc_offset_seconds(tz, civil)? as f64 / 240.0)
}

/// How far local mean time runs ahead of the standard meridian, four
/// minutes per degree.
#[inline]
pub fn lmt_offset_minutes(longitude: f64, standard_meridian: f64) -> Minutes {
    Minutes::new((longitude - standard_meridian) * 4.0)
}

/// Equation of time for a 1-based day of the year.
pub fn equation_of_time_minutes(day_of_year: u32) -> Minutes {
    let b = (360.0 * (day_of_year as f64 - 81.0) / 365.0).to_radians();
    Minutes::new(9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin())
}

/// Civil time with every correction component, for auditing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTimeAdjustment {
    /// Wall-clock input.
    pub civil: CalendarMoment,
    /// Wall clock with summer time removed.
    pub standard: CalendarMoment,
    /// Local solar time, rounded to the minute.
    pub adjusted: CalendarMoment,
    /// The same absolute instant on the UTC+9 clock.
    pub kst: CalendarMoment,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub utc_offset_minutes: Minutes,
    pub standard_meridian: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub longitude_correction_minutes: Minutes,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub dst_correction_minutes: Minutes,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub equation_of_time_minutes: Minutes,
}

impl SolarTimeAdjustment {
    /// Sum of the applied corrections.
    pub fn total_correction_minutes(&self) -> Minutes {
        self.longitude_correction_minutes
            + self.dst_correction_minutes
            + self.equation_of_time_minutes
    }
}

/// Applies the configured corrections to civil times.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarTimeAdjuster {
    apply_lmt_correction: bool,
    apply_dst_history: bool,
    include_equation_of_time: bool,
    lmt_baseline_longitude: Option<f64>,
}

impl Default for SolarTimeAdjuster {
    fn default() -> Self {
        Self::from_config(&SajuConfig::default())
    }
}

impl SolarTimeAdjuster {
    pub fn from_config(config: &SajuConfig) -> Self {
        Self {
            apply_lmt_correction: config.apply_lmt_correction,
            apply_dst_history: config.apply_dst_history,
            include_equation_of_time: config.include_equation_of_time,
            lmt_baseline_longitude: config.lmt_baseline_longitude,
        }
    }

    pub fn adjust(
        &self,
        civil: &CalendarMoment,
        timezone: &str,
        longitude: f64,
    ) -> Result<SolarTimeAdjustment> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SajuError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
            });
        }
        let tz = parse_timezone(timezone)?;

        let none = Minutes::new(0.0);
        let dst_correction_minutes = if !self.apply_dst_history {
            none
        } else if is_korean_zone(tz) {
            if is_korean_dst(civil)? {
                none - DST_SHIFT
            } else {
                none
            }
        } else {
            let dst_seconds = zone_offset(tz, civil)?.dst_offset().num_seconds();
            Seconds::new(-(dst_seconds as f64)).to::<Minute>()
        };
        let standard = civil.add_minutes(dst_correction_minutes.value().round() as i64);

        let utc_offset_seconds = base_utc_offset_seconds(tz, &standard)?;
        let utc_offset = Seconds::new(utc_offset_seconds as f64);
        let standard_meridian = utc_offset_seconds as f64 / 240.0;
        let longitude_correction_minutes = if self.apply_lmt_correction {
            let meridian = self.lmt_baseline_longitude.unwrap_or(standard_meridian);
            lmt_offset_minutes(longitude, meridian)
        } else {
            none
        };
        let equation_of_time_minutes = if self.include_equation_of_time {
            equation_of_time_minutes(standard.day_of_year())
        } else {
            none
        };

        let total =
            longitude_correction_minutes + dst_correction_minutes + equation_of_time_minutes;
        let adjusted = civil.add_seconds(total.to::<Second>()).round_to_nearest_minute();
        let kst = standard
            .add_seconds(Seconds::new(-(utc_offset_seconds as f64)))
            .add_minutes(KST_OFFSET_MINUTES);

        Ok(SolarTimeAdjustment {
            civil: *civil,
            standard,
            adjusted,
            kst,
            utc_offset_minutes: utc_offset.to::<Minute>(),
            standard_meridian,
            longitude_correction_minutes,
            dst_correction_minutes,
            equation_of_time_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_minutes(actual: Minutes, expected: f64) {
        assert!((actual - Minutes::new(expected)).abs() < Minutes::new(1e-9), "{actual}");
    }

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CalendarMoment {
        CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap()
    }

    #[test]
    fn seoul_meridian_follows_history() {
        assert_eq!(
            standard_meridian_degrees("Asia/Seoul", &moment(2024, 2, 10, 12, 0)).unwrap(),
            135.0
        );
        assert_eq!(
            standard_meridian_degrees("Asia/Seoul", &moment(1958, 1, 10, 12, 0)).unwrap(),
            127.5
        );
        assert_eq!(
            standard_meridian_degrees("UTC", &moment(2024, 2, 10, 12, 0)).unwrap(),
            0.0
        );
        assert!(matches!(
            standard_meridian_degrees("Mars/Olympus", &moment(2024, 1, 1, 0, 0)),
            Err(SajuError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn lmt_offset_for_seoul() {
        assert_minutes(lmt_offset_minutes(126.98, 135.0), -32.08);
        assert_eq!(lmt_offset_minutes(135.0, 135.0), Minutes::new(0.0));
    }

    #[test]
    fn dst_ranges_are_half_open() {
        assert!(!is_korean_dst(&moment(1987, 5, 10, 1, 59)).unwrap());
        assert!(is_korean_dst(&moment(1987, 5, 10, 2, 0)).unwrap());
        assert!(is_korean_dst(&moment(1987, 10, 11, 2, 59)).unwrap());
        assert!(!is_korean_dst(&moment(1987, 10, 11, 3, 0)).unwrap());
        assert!(is_korean_dst(&moment(1955, 7, 1, 12, 0)).unwrap());
        assert!(!is_korean_dst(&moment(1952, 7, 1, 12, 0)).unwrap());
        assert!(!is_korean_dst(&moment(2024, 7, 1, 12, 0)).unwrap());
    }

    #[test]
    fn equation_of_time_extremes() {
        // Early November: sundial runs ~16 minutes fast.
        assert!((equation_of_time_minutes(307).value() - 16.4).abs() < 0.5);
        // Mid February: ~14 minutes slow.
        assert!((equation_of_time_minutes(43).value() + 14.2).abs() < 1.0);
        assert!(equation_of_time_minutes(81).abs() < Minutes::new(8.0));
    }

    #[test]
    fn default_adjustment_in_seoul() {
        let adj = SolarTimeAdjuster::default()
            .adjust(&moment(2024, 2, 10, 12, 0), "Asia/Seoul", 126.98)
            .unwrap();
        assert_eq!(adj.adjusted, moment(2024, 2, 10, 11, 28));
        assert_eq!(adj.kst, moment(2024, 2, 10, 12, 0));
        assert_eq!(adj.dst_correction_minutes, Minutes::new(0.0));
        assert_eq!(adj.equation_of_time_minutes, Minutes::new(0.0));
        assert_minutes(adj.utc_offset_minutes, 540.0);
        assert_minutes(adj.total_correction_minutes(), -32.08);
    }

    #[test]
    fn summer_time_is_removed_before_comparison() {
        let civil = moment(1988, 7, 1, 12, 0);
        let on = SolarTimeAdjuster::default().adjust(&civil, "Asia/Seoul", 135.0).unwrap();
        assert_eq!(on.dst_correction_minutes, Minutes::new(-60.0));
        assert_eq!(on.standard, moment(1988, 7, 1, 11, 0));
        assert_eq!(on.kst, moment(1988, 7, 1, 11, 0));
        assert_eq!(on.adjusted, moment(1988, 7, 1, 11, 0));

        let config = SajuConfig::default().with_dst_history(false);
        let off = SolarTimeAdjuster::from_config(&config)
            .adjust(&civil, "Asia/Seoul", 135.0)
            .unwrap();
        assert_eq!(off.dst_correction_minutes, Minutes::new(0.0));
        assert_eq!(off.adjusted, civil);
    }

    #[test]
    fn half_hour_offset_years_shift_the_absolute_clock() {
        let civil = moment(1958, 1, 10, 12, 0);
        let adj = SolarTimeAdjuster::default().adjust(&civil, "Asia/Seoul", 127.5).unwrap();
        assert_eq!(adj.standard_meridian, 127.5);
        assert_eq!(adj.longitude_correction_minutes, Minutes::new(0.0));
        assert_eq!(adj.kst, moment(1958, 1, 10, 12, 30));
    }

    #[test]
    fn baseline_override_and_foreign_zones() {
        let config = SajuConfig::default().with_lmt_baseline_longitude(Some(127.5));
        let adj = SolarTimeAdjuster::from_config(&config)
            .adjust(&moment(2024, 2, 10, 12, 0), "Asia/Seoul", 126.98)
            .unwrap();
        assert_minutes(adj.longitude_correction_minutes, -2.08);
        assert_eq!(adj.adjusted, moment(2024, 2, 10, 11, 58));

        let ny = SolarTimeAdjuster::default()
            .adjust(&moment(2024, 7, 1, 12, 0), "America/New_York", -74.0)
            .unwrap();
        assert_eq!(ny.standard_meridian, -75.0);
        assert_minutes(ny.dst_correction_minutes, -60.0);
        assert_eq!(ny.adjusted, moment(2024, 7, 1, 11, 4));
        // 12:00 EDT is 16:00 UTC, 01:00 next day KST.
        assert_eq!(ny.kst, moment(2024, 7, 2, 1, 0));
    }

    #[test]
    fn corrections_carry_across_midnight() {
        let adj = SolarTimeAdjuster::default()
            .adjust(&moment(2024, 1, 1, 0, 10), "Asia/Seoul", 126.98)
            .unwrap();
        assert_eq!(adj.adjusted, moment(2023, 12, 31, 23, 38));
    }

    #[test]
    fn rejects_bad_longitude() {
        let adjuster = SolarTimeAdjuster::default();
        let civil = moment(2024, 1, 1, 0, 0);
        assert!(matches!(
            adjuster.adjust(&civil, "Asia/Seoul", 181.0),
            Err(SajuError::InvalidCoordinate { .. })
        ));
        assert!(adjuster.adjust(&civil, "Asia/Seoul", f64::NAN).is_err());
    }
}
