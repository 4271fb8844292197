// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Four-pillar resolution.
//!
//! The month and year pillars are decided by the absolute birth instant
//! against the jeol boundaries (KST). The day and hour pillars are decided
//! by the local solar time under the configured day-cut convention.

use std::fmt;

use tracing::debug;

use super::config::SajuConfig;
use super::daeun::{compute_daeun_start, DaeunStart};
use super::day_cut::DayCutResolution;
use super::error::{PrecisionWarning, Result, SajuError};
use super::ganji::{month_pillar, year_pillar, Pillar};
use super::jeol::{locate_boundary, BoundaryMode, Direction, JeolBoundary};
use super::julian_day::CalendarMoment;
use super::lunar::{LunarDate, LunarSolarConverter};
use super::solar_time::{SolarTimeAdjuster, SolarTimeAdjustment};
use qtty::Minutes;

/// Normalised birth data: a civil wall-clock time and where it was read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthInput {
    pub civil: CalendarMoment,
    /// IANA zone name, e.g. `Asia/Seoul`.
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl BirthInput {
    pub fn new(
        civil: CalendarMoment,
        timezone: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            civil,
            timezone: timezone.into(),
            latitude,
            longitude,
        }
    }

    /// Birth recorded as a Korean lunar date. The hour and minute are the
    /// wall clock of the birth day.
    pub fn from_lunar(
        lunar: &LunarDate,
        hour: u32,
        minute: u32,
        timezone: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let solar = LunarSolarConverter::new().lunar_to_solar(lunar)?;
        let civil =
            CalendarMoment::from_ymd_hm(solar.year(), solar.month(), solar.day(), hour, minute)?;
        Ok(Self::new(civil, timezone, latitude, longitude))
    }

    /// Like [`BirthInput::from_lunar`] for a raw lunar date whose leap flag
    /// is read according to [`SajuConfig::leap_month_policy`].
    pub fn from_raw_lunar(
        (year, month, day): (i32, u32, u32),
        config: &SajuConfig,
        hour: u32,
        minute: u32,
        timezone: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let lunar = LunarSolarConverter::new().resolve_lunar_date(
            year,
            month,
            day,
            config.leap_month_policy,
        )?;
        Self::from_lunar(&lunar, hour, minute, timezone, latitude, longitude)
    }

    fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SajuError::InvalidCoordinate {
                axis: "latitude",
                value: self.latitude,
            });
        }
        Ok(())
    }
}

/// The year, month, day and hour pillars.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Everything downstream analysis needs from one birth.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PillarResult {
    pub pillars: FourPillars,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub longitude_correction_minutes: Minutes,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub dst_correction_minutes: Minutes,
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub equation_of_time_minutes: Minutes,
    /// 1 = 寅 month … 12 = 丑 month.
    pub saju_month_index: u8,
    /// Year that starts at Ipchun; differs from the civil year in January
    /// and early February.
    pub saju_year: i32,
    pub boundary_mode: BoundaryMode,
    /// Boundary that opened the birth month.
    pub month_boundary: JeolBoundary,
    pub solar_time: SolarTimeAdjustment,
    pub day_cut: DayCutResolution,
    pub warning: Option<PrecisionWarning>,
}

impl PillarResult {
    /// Luck-cycle start from the same birth instant.
    pub fn daeun_start(&self, direction: Direction) -> Result<DaeunStart> {
        compute_daeun_start(&self.solar_time.kst, direction)
    }
}

/// Resolve the four pillars of a birth.
///
/// # Errors
///
/// Invalid coordinates, unknown timezones and invalid configuration are
/// rejected. Boundaries outside the table degrade to computed or
/// approximated ones; the tier is reported in
/// [`PillarResult::boundary_mode`] and [`PillarResult::warning`].
pub fn compute_pillars(input: &BirthInput, config: &SajuConfig) -> Result<PillarResult> {
    config.validate()?;
    input.validate()?;

    let adjuster = SolarTimeAdjuster::from_config(config);
    let solar_time = adjuster.adjust(&input.civil, &input.timezone, input.longitude)?;

    let resolved = locate_boundary(&solar_time.kst, Direction::Reverse)?;
    let saju_year = resolved.boundary.saju_year();
    let saju_month_index = resolved.boundary.saju_month_index;

    let year = year_pillar(saju_year);
    let month = month_pillar(year.stem(), saju_month_index)?;

    let day_cut = config.day_cut_mode.resolve(&solar_time.adjusted);
    let day = day_cut.day_pillar();
    let hour = day_cut.hour_pillar()?;

    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };
    debug!(
        civil = %input.civil,
        timezone = %input.timezone,
        adjusted = %solar_time.adjusted,
        kst = %solar_time.kst,
        mode = %resolved.mode,
        day_cut = config.day_cut_mode.as_str(),
        %pillars,
        "pillars resolved"
    );

    Ok(PillarResult {
        pillars,
        longitude_correction_minutes: solar_time.longitude_correction_minutes,
        dst_correction_minutes: solar_time.dst_correction_minutes,
        equation_of_time_minutes: solar_time.equation_of_time_minutes,
        saju_month_index,
        saju_year,
        boundary_mode: resolved.mode,
        month_boundary: resolved.boundary,
        solar_time,
        day_cut,
        warning: resolved.warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_cut::DayCutMode;
    use crate::jeol::SolarTerm;
    use crate::lunar::LeapMonthPolicy;

    const SEOUL_LAT: f64 = 37.5665;
    const SEOUL_LON: f64 = 126.978;

    fn seoul(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> BirthInput {
        BirthInput::new(
            CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap(),
            "Asia/Seoul",
            SEOUL_LAT,
            SEOUL_LON,
        )
    }

    #[test]
    fn reference_chart() {
        let r = compute_pillars(&seoul(2024, 2, 10, 12, 0), &SajuConfig::default()).unwrap();
        assert_eq!(r.pillars.to_string(), "甲辰 丙寅 甲辰 庚午");
        assert_eq!(r.saju_month_index, 1);
        assert_eq!(r.saju_year, 2024);
        assert_eq!(r.boundary_mode, BoundaryMode::ExactTable);
        assert_eq!(r.month_boundary.term, SolarTerm::Ipchun);
        assert_eq!(r.warning, None);
        let lmt = r.longitude_correction_minutes;
        assert!((lmt - Minutes::new(-32.088)).abs() < Minutes::new(1e-3), "{lmt}");
        assert_eq!(r.dst_correction_minutes, Minutes::new(0.0));
        assert_eq!(r.equation_of_time_minutes, Minutes::new(0.0));
        assert_eq!(
            r.solar_time.adjusted,
            CalendarMoment::from_ymd_hm(2024, 2, 10, 11, 28).unwrap()
        );
    }

    #[test]
    fn month_boundary_is_decided_on_the_kst_clock() {
        // Local solar time is ~32 minutes behind; the boundary is not.
        let before = compute_pillars(&seoul(2024, 2, 4, 17, 26), &SajuConfig::default()).unwrap();
        assert_eq!(before.saju_month_index, 12);
        assert_eq!(before.saju_year, 2023);
        assert_eq!(before.pillars.year.to_string(), "癸卯");
        assert_eq!(before.pillars.month.to_string(), "乙丑");

        let at = compute_pillars(&seoul(2024, 2, 4, 17, 27), &SajuConfig::default()).unwrap();
        assert_eq!(at.saju_month_index, 1);
        assert_eq!(at.saju_year, 2024);
        assert_eq!(at.pillars.year.to_string(), "甲辰");
        assert_eq!(at.pillars.month.to_string(), "丙寅");
    }

    #[test]
    fn day_cut_changes_the_day_pillar() {
        // With LMT off, 23:30 stays 23:30.
        let base = SajuConfig::default().with_lmt_correction(false);
        let input = seoul(2024, 2, 10, 23, 30);
        let midnight = compute_pillars(&input, &base).unwrap();
        let yaza = compute_pillars(
            &input,
            &base.with_day_cut_mode(DayCutMode::Yaza23To01NextDay),
        )
        .unwrap();
        assert_eq!(midnight.pillars.day.to_string(), "甲辰");
        assert_eq!(yaza.pillars.day.to_string(), "乙巳");
        assert_ne!(midnight.pillars.day, yaza.pillars.day);
    }

    #[test]
    fn out_of_table_years_never_report_exact() {
        let r = compute_pillars(&seoul(1890, 5, 20, 9, 0), &SajuConfig::default()).unwrap();
        assert_eq!(r.boundary_mode, BoundaryMode::Vsop87Calculated);
        assert_eq!(r.warning.map(|w| w.code()), Some("VSOP87_FALLBACK"));
        assert_eq!(r.saju_month_index, 4);
    }

    #[test]
    fn rejects_bad_input() {
        let mut input = seoul(2024, 2, 10, 12, 0);
        input.latitude = 95.0;
        assert!(matches!(
            compute_pillars(&input, &SajuConfig::default()),
            Err(SajuError::InvalidCoordinate { axis: "latitude", .. })
        ));

        let mut input = seoul(2024, 2, 10, 12, 0);
        input.timezone = "Mars/Olympus".into();
        assert!(matches!(
            compute_pillars(&input, &SajuConfig::default()),
            Err(SajuError::UnknownTimezone(_))
        ));

        let bad = SajuConfig::default().with_lmt_baseline_longitude(Some(-500.0));
        assert!(matches!(
            compute_pillars(&seoul(2024, 2, 10, 12, 0), &bad),
            Err(SajuError::InvalidConfig(_))
        ));
    }

    #[test]
    fn lunar_birth_input() {
        // Lunar 2024-01-01 is Seollal, 2024-02-10.
        let lunar = LunarDate::new(2024, 1, 1, false).unwrap();
        let input =
            BirthInput::from_lunar(&lunar, 12, 0, "Asia/Seoul", SEOUL_LAT, SEOUL_LON).unwrap();
        assert_eq!(input, seoul(2024, 2, 10, 12, 0));

        // 2023 has a leap second month; the configured policy picks one.
        let config = SajuConfig::default();
        assert_eq!(config.leap_month_policy, LeapMonthPolicy::Common);
        let auto = BirthInput::from_raw_lunar(
            (2023, 2, 1),
            &config,
            0,
            0,
            "Asia/Seoul",
            SEOUL_LAT,
            SEOUL_LON,
        )
        .unwrap();
        let leap_config = config.with_leap_month_policy(LeapMonthPolicy::Leap);
        let leap = BirthInput::from_raw_lunar(
            (2023, 2, 1),
            &leap_config,
            0,
            0,
            "Asia/Seoul",
            SEOUL_LAT,
            SEOUL_LON,
        )
        .unwrap();
        assert_eq!(auto.civil, CalendarMoment::from_ymd(2023, 2, 20).unwrap());
        assert_eq!(leap.civil, CalendarMoment::from_ymd(2023, 3, 22).unwrap());
    }

    #[test]
    fn daeun_from_result() {
        let r = compute_pillars(&seoul(2024, 2, 10, 12, 0), &SajuConfig::default()).unwrap();
        let d = r.daeun_start(Direction::Forward).unwrap();
        assert_eq!(d.boundary.term, SolarTerm::Gyeongchip);
        assert_eq!(d.traditional_start_age, 8);
    }
}
