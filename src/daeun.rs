// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daeun (ten-year luck cycle) start timing.
//!
//! The distance from birth to the adjacent month boundary, in the
//! direction supplied by the caller, is converted at a fixed ratio: 360
//! minutes of real time count as one month of age (three days per year).
//! The boundary tier used is always carried in the result.

use tracing::debug;

use super::error::{PrecisionWarning, Result};
use super::instant::TimeInstant;
use super::jeol::{locate_boundary, BoundaryMode, Direction, JeolBoundary};
use super::julian_day::CalendarMoment;
use qtty::{Day, Days, Minutes, Simplify};

/// Real time that counts as one luck month.
pub const MINUTES_PER_LUCK_MONTH: Minutes = Minutes::new(360.0);

/// Real time per year of the traditional daeun number.
const DAEUN_YEAR: Days = Days::new(3.0);

/// When the first luck cycle begins.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaeunStart {
    pub direction: Direction,
    pub boundary: JeolBoundary,
    pub boundary_mode: BoundaryMode,
    /// Absolute distance from birth to `boundary`.
    #[cfg_attr(feature = "serde", serde(with = "crate::instant::minutes_serde"))]
    pub minutes_to_boundary: Minutes,
    pub luck_months: f64,
    pub start_years: u32,
    pub start_months: u32,
    /// Conventional daeun number: `round(days / 3)`, at least 1.
    pub traditional_start_age: u32,
    pub warning: Option<PrecisionWarning>,
}

/// Luck-cycle start for a birth moment on the KST clock.
pub fn compute_daeun_start(birth_kst: &CalendarMoment, direction: Direction) -> Result<DaeunStart> {
    let resolved = locate_boundary(birth_kst, direction)?;
    let minutes_to_boundary = resolved.boundary.moment.difference(birth_kst).abs();
    let luck_months = (minutes_to_boundary / MINUTES_PER_LUCK_MONTH).simplify().value();
    let daeun_years = (minutes_to_boundary.to::<Day>() / DAEUN_YEAR).simplify().value();
    let start = DaeunStart {
        direction,
        boundary: resolved.boundary,
        boundary_mode: resolved.mode,
        minutes_to_boundary,
        luck_months,
        start_years: (luck_months / 12.0).floor() as u32,
        start_months: (luck_months % 12.0).floor() as u32,
        traditional_start_age: (daeun_years.round() as u32).max(1),
        warning: resolved.warning,
    };
    debug!(
        birth = %birth_kst,
        ?direction,
        boundary = %start.boundary,
        mode = %start.boundary_mode,
        start_years = start.start_years,
        start_months = start.start_months,
        "daeun start resolved"
    );
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jeol::SolarTerm;

    fn kst(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CalendarMoment {
        CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap()
    }

    #[test]
    fn forward_to_next_jeol() {
        // 2024-02-10 12:00 → Gyeongchip 2024-03-05 11:23.
        let s = compute_daeun_start(&kst(2024, 2, 10, 12, 0), Direction::Forward).unwrap();
        assert_eq!(s.boundary.term, SolarTerm::Gyeongchip);
        assert_eq!(s.boundary_mode, BoundaryMode::ExactTable);
        assert_eq!(s.minutes_to_boundary, Minutes::new(24.0 * 1_440.0 - 37.0));
        assert!((s.luck_months - 34_523.0 / 360.0).abs() < 1e-9);
        // 34 523 minutes = 95.9 luck months = 7 years 11 months.
        assert_eq!((s.start_years, s.start_months), (7, 11));
        assert_eq!(s.traditional_start_age, 8);
        assert_eq!(s.warning, None);
    }

    #[test]
    fn reverse_to_previous_jeol() {
        // 2024-02-10 12:00 → Ipchun 2024-02-04 17:27.
        let s = compute_daeun_start(&kst(2024, 2, 10, 12, 0), Direction::Reverse).unwrap();
        assert_eq!(s.boundary.term, SolarTerm::Ipchun);
        assert_eq!(s.minutes_to_boundary, Minutes::new(5.0 * 1_440.0 + 18.0 * 60.0 + 33.0));
        assert_eq!((s.start_years, s.start_months), (1, 11));
        assert_eq!(s.traditional_start_age, 2);
    }

    #[test]
    fn birth_on_the_boundary() {
        let at = kst(2024, 2, 4, 17, 27);
        let reverse = compute_daeun_start(&at, Direction::Reverse).unwrap();
        assert_eq!(reverse.minutes_to_boundary, Minutes::new(0.0));
        assert_eq!(reverse.traditional_start_age, 1);

        let forward = compute_daeun_start(&at, Direction::Forward).unwrap();
        assert_eq!(forward.boundary.term, SolarTerm::Gyeongchip);
    }

    #[test]
    fn degraded_tiers_carry_a_warning() {
        let s = compute_daeun_start(&kst(1850, 6, 15, 12, 0), Direction::Forward).unwrap();
        assert_eq!(s.boundary_mode, BoundaryMode::Vsop87Calculated);
        assert_eq!(s.boundary.term, SolarTerm::Soseo);
        assert!(s.warning.is_some());

        let s = compute_daeun_start(&kst(4000, 6, 15, 12, 0), Direction::Reverse).unwrap();
        assert_eq!(s.boundary_mode, BoundaryMode::ApproximateDay6);
        assert_eq!(s.boundary.moment, kst(4000, 6, 6, 12, 0));
        assert_eq!(s.minutes_to_boundary, Minutes::new(9.0 * 1_440.0));
        assert_eq!(s.traditional_start_age, 3);
        assert_eq!(s.warning.map(|w| w.code()), Some("APPROXIMATE_DAY6"));
    }
}
