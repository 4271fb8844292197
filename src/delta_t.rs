// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — UT↔TT Correction Layer
//!
//! Piecewise polynomial model for **ΔT = TT − UT** published by Espenak &
//! Meeus (NASA *Five Millennium Canon of Solar Eclipses*, 2006).
//!
//! The correction is applied automatically by the [`UT`](super::UT) scale
//! whenever a civil Julian Day is converted to [`TT`](super::TT), which is
//! the only place the solar-longitude series needs it.
//!
//! ## Valid Time Range
//! Every segment below 2150 is a fitted polynomial; beyond that the long
//! term parabola `−20 + 32·u²` takes over. Uncertainty is under one second
//! across 1900–2005 and grows to a few seconds by 2050, well below the
//! minute resolution of solar-term boundaries.

use super::instant::Time;
use super::scales::UT;
use qtty::{Days, Seconds, Simplify};

const J2000: Days = Days::new(2_451_545.0);
const DAYS_PER_JULIAN_YEAR: Days = Days::new(365.25);

#[inline]
fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

/// Decimal year of a Julian Day on the UT axis.
#[inline]
fn decimal_year(jd_ut: Days) -> f64 {
    2000.0 + days_ratio(jd_ut - J2000, DAYS_PER_JULIAN_YEAR)
}

/// Evaluate `c[0] + c[1]·t + c[2]·t² + …` by Horner's rule.
#[inline]
fn horner(t: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Long-term parabola used outside the fitted segments.
#[inline]
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

// ------------------------------------------------------------------------------------
// ΔT segments by decimal year
// ------------------------------------------------------------------------------------

/// **Years −500 … 1600**
fn delta_t_ancient(y: f64) -> f64 {
    if y < 500.0 {
        horner(
            y / 100.0,
            &[
                10_583.6,
                -1_014.41,
                33.783_11,
                -5.952_053,
                -0.179_845_2,
                0.022_174_192,
                0.009_031_652_1,
            ],
        )
    } else {
        horner(
            (y - 1000.0) / 100.0,
            &[
                1_574.2,
                -556.01,
                71.234_72,
                0.319_781,
                -0.850_346_3,
                -0.005_050_998,
                0.008_357_207_3,
            ],
        )
    }
}

/// **Years 1600 … 1900**
fn delta_t_telescopic(y: f64) -> f64 {
    match y {
        y if y < 1700.0 => horner(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]),
        y if y < 1800.0 => horner(
            y - 1700.0,
            &[8.83, 0.1603, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0],
        ),
        y if y < 1860.0 => horner(
            y - 1800.0,
            &[
                13.72,
                -0.332_447,
                0.006_861_2,
                0.004_111_6,
                -0.000_374_36,
                0.000_012_127_2,
                -0.000_000_169_9,
                0.000_000_000_875,
            ],
        ),
        y => horner(
            y - 1860.0,
            &[
                7.62,
                0.5737,
                -0.251_754,
                0.016_806_68,
                -0.000_447_362_4,
                1.0 / 233_174.0,
            ],
        ),
    }
}

/// **Years 1900 … 2005**
fn delta_t_modern(y: f64) -> f64 {
    match y {
        y if y < 1920.0 => horner(
            y - 1900.0,
            &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197],
        ),
        y if y < 1941.0 => horner(y - 1920.0, &[21.20, 0.844_93, -0.076_100, 0.002_093_6]),
        y if y < 1961.0 => horner(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]),
        y if y < 1986.0 => horner(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
        y => horner(
            y - 2000.0,
            &[
                63.86,
                0.3345,
                -0.060_374,
                0.001_727_5,
                0.000_651_814,
                0.000_023_735_99,
            ],
        ),
    }
}

/// **Years 2005 and later**
fn delta_t_extrapolated(y: f64) -> f64 {
    match y {
        y if y < 2050.0 => horner(y - 2000.0, &[62.92, 0.322_17, 0.005_589]),
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Returns **ΔT** for a Julian Day on the **UT** axis.
pub(crate) fn delta_t_seconds_from_ut(jd_ut: Days) -> Seconds {
    let y = decimal_year(jd_ut);
    let seconds = match y {
        y if y < -500.0 => long_term(y),
        y if y < 1600.0 => delta_t_ancient(y),
        y if y < 1900.0 => delta_t_telescopic(y),
        y if y < 2005.0 => delta_t_modern(y),
        y => delta_t_extrapolated(y),
    };
    Seconds::new(seconds)
}

impl Time<UT> {
    /// Returns **ΔT = TT − UT** for this UT epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds_from_ut(self.quantity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd_of_year(year: f64) -> Days {
        J2000 + DAYS_PER_JULIAN_YEAR * (year - 2000.0)
    }

    fn assert_close(dt: Seconds, expected: f64) {
        assert!((dt - Seconds::new(expected)).abs() < Seconds::new(1e-9), "{dt}");
    }

    #[test]
    fn segment_anchors() {
        assert_close(delta_t_seconds_from_ut(jd_of_year(1900.0)), -2.79);
        assert_close(delta_t_seconds_from_ut(jd_of_year(1950.0)), 29.07);
        assert_close(delta_t_seconds_from_ut(jd_of_year(2000.0)), 63.86);
    }

    #[test]
    fn continuity_at_segment_joins() {
        let joins = [
            1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0,
        ];
        for join in joins {
            let before = delta_t_seconds_from_ut(jd_of_year(join - 1e-6));
            let after = delta_t_seconds_from_ut(jd_of_year(join + 1e-6));
            assert!(
                (before - after).abs() < Seconds::new(3.0),
                "discontinuity of {} at {join}",
                before - after
            );
        }
    }

    #[test]
    fn plausible_modern_values() {
        let dt_2024 = delta_t_seconds_from_ut(jd_of_year(2024.0)).value();
        assert!((69.0..76.0).contains(&dt_2024), "ΔT(2024) = {dt_2024}");
        assert_close(delta_t_seconds_from_ut(jd_of_year(1800.0)), 13.72);
    }

    #[test]
    fn ancient_epochs_are_large_and_positive() {
        let dt = delta_t_seconds_from_ut(jd_of_year(0.0));
        assert!((dt - Seconds::new(10_583.6)).abs() < Seconds::new(1e-6));
        assert!(delta_t_seconds_from_ut(jd_of_year(-1000.0)) > Seconds::new(20_000.0));
    }

    #[test]
    fn convenience_accessor_matches() {
        let ut = Time::<UT>::from_days(J2000);
        assert_close(ut.delta_t(), 63.86);
    }
}
