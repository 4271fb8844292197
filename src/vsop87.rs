// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent solar longitude from VSOP87D
//!
//! Abridged VSOP87D series for the Earth (Meeus, *Astronomical Algorithms*,
//! appendix III) turned into the geocentric apparent longitude of the Sun:
//!
//! 1. JD(UT) → JD(TT) through ΔT ([`Time::to`]);
//! 2. heliocentric ecliptic longitude `L` and radius `R` of the Earth, one
//!    periodic series per power of the time argument `τ` (Julian millennia);
//! 3. `L + 180°`, the FK5 frame correction, nutation in longitude from the
//!    four dominant terms, and annual aberration `−20.4898″ / R`.
//!
//! Agreement with the full theory is a few arc-seconds between −1000 and
//! 3000, i.e. a few minutes of time on a solar-term crossing. Only years
//! outside the embedded boundary table reach this code.
//!
//! Crossing instants are located by a one-day forward scan followed by
//! bisection on the signed angular distance to the target.

use super::error::{Result, SajuError};
use super::instant::Time;
use super::registry::registry;
use super::scales::{TT, UT};
use qtty::Days;

/// Coefficient scale of the packed series (amplitudes are in 1e-8 rad / AU).
const AMPLITUDE_SCALE: f64 = 1e-8;

/// Bisection steps after bracketing; 2⁻⁴⁰ day is far below a second.
const BISECTION_STEPS: usize = 40;

/// One expanded periodic term `A·cos(B + C·τ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PeriodicTerm {
    amplitude: f64,
    phase: f64,
    frequency: f64,
}

/// Expanded series, one entry per power of `τ`.
#[derive(Debug, Clone)]
pub(crate) struct Vsop87Series {
    longitude: Vec<Vec<PeriodicTerm>>,
    radius: Vec<Vec<PeriodicTerm>>,
}

#[rustfmt::skip]
const L0: &[(f64, f64, f64)] = &[
    (175347046.0, 0.0, 0.0), (3341656.0, 4.6692568, 6283.07585), (34894.0, 4.6261, 12566.1517),
    (3497.0, 2.7441, 5753.3849), (3418.0, 2.8289, 3.5231), (3136.0, 3.6277, 77713.7715),
    (2676.0, 4.4181, 7860.4194), (2343.0, 6.1352, 3930.2097), (1324.0, 0.7425, 11506.7698),
    (1273.0, 2.0371, 529.691), (1199.0, 1.1096, 1577.3435), (990.0, 5.233, 5884.927),
    (902.0, 2.045, 26.298), (857.0, 3.508, 398.149), (780.0, 1.179, 5223.694),
    (753.0, 2.533, 5507.553), (505.0, 4.583, 18849.228), (492.0, 4.205, 775.523),
    (357.0, 2.92, 0.067), (317.0, 5.849, 11790.629), (284.0, 1.899, 796.298),
    (271.0, 0.315, 10977.079), (243.0, 0.345, 5486.778), (206.0, 4.806, 2544.314),
    (205.0, 1.869, 5573.143), (202.0, 2.458, 6069.777), (156.0, 0.833, 213.299),
    (132.0, 3.411, 2942.463), (126.0, 1.083, 20.775), (115.0, 0.645, 0.98),
    (103.0, 0.636, 4694.003), (102.0, 0.976, 15720.839), (102.0, 4.267, 7.114),
    (99.0, 6.21, 2146.17), (98.0, 0.68, 155.42), (86.0, 5.98, 161000.69),
    (85.0, 1.3, 6275.96), (85.0, 3.67, 71430.7), (80.0, 1.81, 17260.15),
    (79.0, 3.04, 12036.46), (75.0, 1.76, 5088.63), (74.0, 3.5, 3154.69),
    (74.0, 4.68, 801.82), (70.0, 0.83, 9437.76), (62.0, 3.98, 8827.39),
    (61.0, 1.82, 7084.9), (57.0, 2.78, 6286.6), (56.0, 4.39, 14143.5),
    (56.0, 3.47, 6279.55), (52.0, 0.19, 12139.55), (52.0, 1.33, 1748.02),
    (51.0, 0.28, 5856.48), (49.0, 0.49, 1194.45), (41.0, 5.37, 8429.24),
    (41.0, 2.4, 19651.05), (39.0, 6.17, 10447.39), (37.0, 6.04, 10213.29),
    (37.0, 2.57, 1059.38), (36.0, 1.71, 2352.87), (36.0, 1.78, 6812.77),
    (33.0, 0.59, 17789.85), (30.0, 0.44, 83996.85), (30.0, 2.74, 1349.87),
    (25.0, 3.16, 4690.48),
];

#[rustfmt::skip]
const L1: &[(f64, f64, f64)] = &[
    (628331966747.0, 0.0, 0.0), (206059.0, 2.678235, 6283.07585), (4303.0, 2.6351, 12566.1517),
    (425.0, 1.59, 3.523), (119.0, 5.796, 26.298), (109.0, 2.966, 1577.344),
    (93.0, 2.59, 18849.23), (72.0, 1.14, 529.69), (68.0, 1.87, 398.15),
    (67.0, 4.41, 5507.55), (59.0, 2.89, 5223.69), (56.0, 2.17, 155.42),
    (45.0, 0.4, 796.3), (36.0, 0.47, 775.52), (29.0, 2.65, 7.11),
    (21.0, 5.34, 0.98), (19.0, 1.85, 5486.78), (19.0, 4.97, 213.3),
    (17.0, 2.99, 6275.96), (16.0, 0.03, 2544.31), (16.0, 1.43, 2146.17),
    (15.0, 1.21, 10977.08), (12.0, 2.83, 1748.02), (12.0, 3.26, 5088.63),
    (12.0, 5.27, 1194.45), (12.0, 2.08, 4694.0), (11.0, 0.77, 553.57),
    (10.0, 1.3, 6286.6), (10.0, 4.24, 1349.87), (9.0, 2.7, 242.73),
    (9.0, 5.64, 951.72), (8.0, 5.3, 2352.87), (6.0, 2.65, 9437.76),
    (6.0, 4.67, 4690.48),
];

#[rustfmt::skip]
const L2: &[(f64, f64, f64)] = &[
    (52919.0, 0.0, 0.0), (8720.0, 1.0721, 6283.0758), (309.0, 0.867, 12566.152),
    (27.0, 0.05, 3.52), (16.0, 5.19, 26.3), (16.0, 3.68, 155.42),
    (10.0, 0.76, 18849.23), (9.0, 2.06, 77713.77), (7.0, 0.83, 775.52),
    (5.0, 4.66, 1577.34), (4.0, 1.03, 7.11), (4.0, 3.44, 5573.14),
    (3.0, 5.14, 796.3), (3.0, 6.05, 5507.55), (3.0, 1.19, 242.73),
    (3.0, 6.12, 529.69), (3.0, 0.31, 398.15), (3.0, 2.28, 553.57),
    (2.0, 4.38, 5223.69), (2.0, 3.75, 0.98),
];

#[rustfmt::skip]
const L3: &[(f64, f64, f64)] = &[
    (289.0, 5.844, 6283.076), (35.0, 0.0, 0.0), (17.0, 5.49, 12566.15),
    (3.0, 5.2, 155.42), (1.0, 4.72, 3.52), (1.0, 5.3, 18849.23),
    (1.0, 5.97, 242.73),
];

#[rustfmt::skip]
const L4: &[(f64, f64, f64)] = &[
    (114.0, 3.142, 0.0), (8.0, 4.13, 6283.08), (1.0, 3.84, 12566.15),
];

#[rustfmt::skip]
const L5: &[(f64, f64, f64)] = &[
    (1.0, 3.14, 0.0),
];

#[rustfmt::skip]
const R0: &[(f64, f64, f64)] = &[
    (100013989.0, 0.0, 0.0), (1670700.0, 3.0984635, 6283.07585), (13956.0, 3.05525, 12566.1517),
    (3084.0, 5.1985, 77713.7715), (1628.0, 1.1739, 5753.3849), (1576.0, 2.8469, 7860.4194),
    (925.0, 5.453, 11506.77), (542.0, 4.564, 3930.21), (472.0, 3.661, 5884.927),
    (346.0, 0.964, 5507.553), (329.0, 5.9, 5223.694), (307.0, 0.299, 5573.143),
    (243.0, 4.273, 11790.629), (212.0, 5.847, 1577.344), (186.0, 5.022, 10977.079),
    (175.0, 3.012, 18849.228), (110.0, 5.055, 5486.778), (98.0, 0.89, 6069.78),
    (86.0, 5.69, 15720.84), (86.0, 1.27, 161000.69), (65.0, 0.27, 17260.15),
    (63.0, 0.92, 529.69), (57.0, 2.01, 83996.85), (56.0, 5.24, 71430.7),
    (49.0, 3.25, 2544.31), (47.0, 2.58, 775.52), (45.0, 5.54, 9437.76),
    (43.0, 6.01, 6275.96), (39.0, 5.36, 4694.0), (38.0, 2.39, 8827.39),
    (37.0, 0.83, 19651.05), (37.0, 4.9, 12139.55), (36.0, 1.67, 12036.46),
    (35.0, 1.84, 2942.46), (33.0, 0.24, 7084.9), (32.0, 0.18, 5088.63),
    (32.0, 1.78, 398.15), (28.0, 1.21, 6286.6), (28.0, 1.9, 6279.55),
    (26.0, 4.59, 10447.39),
];

#[rustfmt::skip]
const R1: &[(f64, f64, f64)] = &[
    (103019.0, 1.10749, 6283.07585), (1721.0, 1.0644, 12566.1517), (702.0, 3.142, 0.0),
    (32.0, 1.02, 18849.23), (31.0, 2.84, 5507.55), (25.0, 1.32, 5223.69),
    (18.0, 1.42, 1577.34), (10.0, 5.91, 10977.08), (9.0, 1.42, 6275.96),
    (9.0, 0.27, 5486.78),
];

#[rustfmt::skip]
const R2: &[(f64, f64, f64)] = &[
    (4359.0, 5.7846, 6283.0758), (124.0, 5.579, 12566.152), (12.0, 3.14, 0.0),
    (9.0, 3.63, 77713.77), (6.0, 1.87, 5573.14), (3.0, 5.47, 18849.23),
];

#[rustfmt::skip]
const R3: &[(f64, f64, f64)] = &[
    (145.0, 4.273, 6283.076), (7.0, 3.92, 12566.15),
];

#[rustfmt::skip]
const R4: &[(f64, f64, f64)] = &[
    (4.0, 2.56, 6283.08),
];

fn expand(packed: &[&[(f64, f64, f64)]]) -> Vec<Vec<PeriodicTerm>> {
    packed
        .iter()
        .map(|series| {
            series
                .iter()
                .map(|&(a, b, c)| PeriodicTerm {
                    amplitude: a * AMPLITUDE_SCALE,
                    phase: b,
                    frequency: c,
                })
                .collect()
        })
        .collect()
}

/// `Σₙ τⁿ · Σ A·cos(B + C·τ)`.
fn evaluate(series: &[Vec<PeriodicTerm>], tau: f64) -> f64 {
    series.iter().rev().fold(0.0, |acc, terms| {
        let sum: f64 = terms
            .iter()
            .map(|t| t.amplitude * (t.phase + t.frequency * tau).cos())
            .sum();
        acc * tau + sum
    })
}

impl Vsop87Series {
    /// Expand the packed Earth series.
    pub(crate) fn earth() -> Self {
        Self {
            longitude: expand(&[L0, L1, L2, L3, L4, L5]),
            radius: expand(&[R0, R1, R2, R3, R4]),
        }
    }

    /// Heliocentric ecliptic longitude (radians, unwrapped) and radius (AU).
    fn heliocentric(&self, jde: Time<TT>) -> (f64, f64) {
        let tau = jde.julian_millennia().value();
        (evaluate(&self.longitude, tau), evaluate(&self.radius, tau))
    }

    pub(crate) fn term_count(&self) -> usize {
        self.longitude.iter().chain(&self.radius).map(Vec::len).sum()
    }
}

/// Normalise an angle in degrees to `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Signed smallest angle `a − b` in degrees, in `(−180, 180]`.
#[inline]
fn angular_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Nutation in longitude Δψ in arc-seconds (four-term abridgement).
fn nutation_in_longitude(centuries: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * centuries).to_radians();
    let sun = (280.466_5 + 36_000.769_8 * centuries).to_radians();
    let moon = (218.316_5 + 481_267.881_3 * centuries).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees in `[0, 360)`.
pub fn apparent_solar_longitude(jd: Time<UT>) -> f64 {
    let jde: Time<TT> = jd.to::<TT>();
    let (l, r) = registry().vsop87().heliocentric(jde);
    let geometric = l.to_degrees() + 180.0 - 0.090_33 / 3_600.0;
    let nutation = nutation_in_longitude(jde.julian_centuries().value()) / 3_600.0;
    let aberration = -20.489_8 / 3_600.0 / r;
    normalize_degrees(geometric + nutation + aberration)
}

/// First instant at or after `from` where the apparent solar longitude
/// reaches `target_deg`, scanning at most `window_days`.
pub fn find_longitude_crossing(
    target_deg: f64,
    from: Time<UT>,
    window_days: u32,
) -> Result<Time<UT>> {
    let offset = |t: Time<UT>| angular_difference(apparent_solar_longitude(t), target_deg);

    let mut lo = from;
    let mut f_lo = offset(lo);
    let mut bracket = None;
    for _ in 0..window_days {
        let hi = lo + Days::new(1.0);
        let f_hi = offset(hi);
        if f_lo < 0.0 && f_hi >= 0.0 {
            bracket = Some((lo, hi));
            break;
        }
        lo = hi;
        f_lo = f_hi;
    }
    let (mut a, mut b) = bracket.ok_or(SajuError::SearchFailed {
        target_deg,
        near_jd: from.value(),
    })?;

    for _ in 0..BISECTION_STEPS {
        let mid = a.mean(b);
        if offset(mid) < 0.0 {
            a = mid;
        } else {
            b = mid;
        }
    }
    Ok(a.mean(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarMoment;

    #[test]
    fn meeus_example_25b() {
        // 1992-10-13 00:00 TD; apparent longitude 199.906 06°.
        let jde = Time::<TT>::new(2_448_908.5);
        let lon = apparent_solar_longitude(jde.to::<UT>());
        assert!((lon - 199.906_06).abs() < 0.000_5, "λ = {lon}");
    }

    #[test]
    fn equinox_and_solstice_longitudes() {
        // 2024-03-20 03:06 UTC (March equinox).
        let jd = CalendarMoment::from_ymd_hm(2024, 3, 20, 3, 6).unwrap().julian_day();
        assert!(angular_difference(apparent_solar_longitude(jd), 0.0).abs() < 0.01);
        // 2024-12-21 09:20 UTC (December solstice).
        let jd = CalendarMoment::from_ymd_hm(2024, 12, 21, 9, 20).unwrap().julian_day();
        assert!((apparent_solar_longitude(jd) - 270.0).abs() < 0.01);
    }

    #[test]
    fn crossing_search_lands_on_ipchun_2024() {
        // Ipchun 2024: 2024-02-04 17:27 KST = 08:27 UTC.
        let from = CalendarMoment::from_ymd(2024, 1, 28).unwrap().julian_day();
        let hit = find_longitude_crossing(315.0, from, 20).unwrap();
        let utc = CalendarMoment::from_julian_day(hit).round_to_nearest_minute();
        assert_eq!((utc.month(), utc.day(), utc.hour()), (2, 4, 8));
        assert!((utc.minute() as i32 - 27).abs() <= 1, "{utc}");
    }

    #[test]
    fn crossing_search_fails_when_window_is_too_short() {
        let from = CalendarMoment::from_ymd(2024, 1, 1).unwrap().julian_day();
        assert!(matches!(
            find_longitude_crossing(315.0, from, 5),
            Err(SajuError::SearchFailed { .. })
        ));
    }

    #[test]
    fn normalisation_and_difference() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(angular_difference(1.0, 359.0), 2.0);
        assert_eq!(angular_difference(359.0, 1.0), -2.0);
    }

    #[test]
    fn registry_expands_every_term() {
        let series = registry().vsop87();
        let packed = [L0, L1, L2, L3, L4, L5, R0, R1, R2, R3, R4]
            .iter()
            .map(|s| s.len())
            .sum::<usize>();
        assert_eq!(series.term_count(), packed);
    }
}
