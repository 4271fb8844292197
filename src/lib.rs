// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Saju Temporal
//!
//! Temporal resolution for the four-pillar (saju) calendar: Julian days,
//! solar-term boundaries, local solar time, day-cut conventions, sexagenary
//! arithmetic and the Korean lunisolar calendar.
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDay`] — type alias for `Time<UT>`.
//! - [`JulianEphemerisDay`] — type alias for `Time<TT>`.
//! - [`CalendarMoment`] — validated proleptic civil date-time with minute
//!   carry arithmetic.
//! - [`Interval<T>`] — half-open interval over any [`TimeInstant`].
//! - [`SolarTerm`], [`JeolBoundary`], [`JeolBoundaryTable`] — the 24 solar
//!   terms and their KST instants for 1900–2050.
//! - [`Stem`], [`Branch`], [`SexagenaryIndex`], [`Pillar`] — the sexagenary
//!   cycle.
//! - [`SolarTimeAdjuster`] — civil clock to local solar time.
//! - [`DayCutMode`] — midnight conventions for the day and hour pillars.
//! - [`LunarSolarConverter`] — Korean lunar ↔ Gregorian dates.
//! - [`compute_pillars`] — the full pipeline, returning a [`PillarResult`].
//! - [`compute_daeun_start`] — luck-cycle start timing.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`UT`] | Universal Time (civil Julian Day) |
//! | [`TT`] | Terrestrial Time (ephemeris argument) |
//!
//! # Precision tiers
//!
//! Solar-term boundaries come from the embedded table for 1900–2050. Other
//! years fall back to the VSOP87 series (years −1000 to 3000) and, beyond
//! that, to a fixed 6th-of-the-month approximation. The tier used is always
//! reported as a [`BoundaryMode`], with a [`PrecisionWarning`] for the two
//! degraded ones.
//!
//! ```
//! use saju_temporal::{compute_pillars, BirthInput, CalendarMoment, SajuConfig};
//!
//! let civil = CalendarMoment::from_ymd_hm(2024, 2, 10, 12, 0).unwrap();
//! let input = BirthInput::new(civil, "Asia/Seoul", 37.5665, 126.978);
//! let result = compute_pillars(&input, &SajuConfig::default()).unwrap();
//!
//! assert_eq!(result.pillars.to_string(), "甲辰 丙寅 甲辰 庚午");
//! assert_eq!(result.saju_month_index, 1);
//! ```

mod config;
mod daeun;
mod data;
mod day_cut;
mod delta_t;
mod error;
mod ganji;
pub(crate) mod instant;
mod jeol;
mod julian_day;
mod lunar;
mod period;
mod pillars;
mod registry;
pub(crate) mod scales;
mod solar_time;
mod vsop87;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::SajuConfig;
pub use daeun::{compute_daeun_start, DaeunStart, MINUTES_PER_LUCK_MONTH};
pub use day_cut::{DayCutMode, DayCutResolution, ZiSubHour};
pub use error::{PrecisionWarning, Result, SajuError};
pub use ganji::{
    day_pillar, hour_branch, hour_pillar, month_pillar, year_pillar, Branch, Element, Pillar,
    Polarity, SexagenaryIndex, Stem,
};
pub use instant::{Time, TimeInstant, TimeScale};
pub use jeol::{
    locate_boundary, solar_term_instant, BoundaryMode, Direction, JeolBoundary,
    JeolBoundaryTable, ResolvedBoundary, SolarTerm, VSOP87_YEARS,
};
pub use julian_day::{
    datetime_to_jd, days_in_month, is_leap_year, jd_to_calendar, CalendarMoment,
    GREGORIAN_REFORM_JD,
};
pub use lunar::{
    LeapMonthPolicy, LunarDate, LunarSolarConverter, SolarDate, LUNAR_YEARS, SOLAR_YEARS,
};
pub use period::{Interval, Period};
pub use pillars::{compute_pillars, BirthInput, FourPillars, PillarResult};
pub use scales::{TT, UT};
pub use solar_time::{
    equation_of_time_minutes, is_korean_dst, lmt_offset_minutes, parse_timezone,
    standard_meridian_degrees, SolarTimeAdjuster, SolarTimeAdjustment, KST_OFFSET_MINUTES,
};
pub use vsop87::{apparent_solar_longitude, find_longitude_crossing, normalize_degrees};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day on the Universal Time scale, the civil day count.
///
/// This is a type alias for [`Time<UT>`].
pub type JulianDay = Time<UT>;

/// Julian Ephemeris Day, the argument of the VSOP87 series.
///
/// This is a type alias for [`Time<TT>`].
pub type JulianEphemerisDay = Time<TT>;
