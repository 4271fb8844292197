// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Relation to JD(TT) |
//! |--------|-------------|--------------------|
//! | [`UT`] | Civil / Universal Julian Day | `+ ΔT` |
//! | [`TT`] | Terrestrial (dynamical) Julian Day | identity |

use super::delta_t::delta_t_seconds_from_ut;
use super::instant::{Time, TimeScale};
use qtty::{Day, Days};

/// Universal Time — the axis civil calendars are counted on.
///
/// `to_jd_tt` adds ΔT; the inverse solves `ut + ΔT(ut) = tt` by fixed-point
/// iteration.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "JD(UT)";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        ut_value + delta_t_seconds_from_ut(ut_value).to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        // dΔT/dJD is ~1e-8, so three passes are exact to the ulp.
        let mut ut = jd_tt;
        for _ in 0..3 {
            ut = jd_tt - delta_t_seconds_from_ut(ut).to::<Day>();
        }
        ut
    }
}

/// Terrestrial Time — the uniform axis the VSOP87 series expects.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "JDE(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

impl From<Time<UT>> for Time<TT> {
    #[inline]
    fn from(t: Time<UT>) -> Self {
        t.to::<TT>()
    }
}

impl From<Time<TT>> for Time<UT> {
    #[inline]
    fn from(t: Time<TT>) -> Self {
        t.to::<UT>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Second, Seconds};

    #[test]
    fn ut_to_tt_adds_delta_t() {
        let ut = Time::<UT>::new(2_451_545.0);
        let tt: Time<TT> = ut.into();
        let offset = (tt.quantity() - ut.quantity()).to::<Second>();
        assert!((offset - Seconds::new(63.86)).abs() < Seconds::new(0.5), "ΔT = {offset}");
    }

    #[test]
    fn ut_tt_roundtrip() {
        let tt = Time::<TT>::new(2_460_345.25);
        let ut: Time<UT> = tt.into();
        let back: Time<TT> = ut.into();
        assert!((back - tt).abs() < Days::new(1e-12));
    }

    #[test]
    fn tt_is_identity() {
        let j2000 = Days::new(2_451_545.0);
        assert_eq!(TT::to_jd_tt(j2000), j2000);
        assert_eq!(TT::from_jd_tt(j2000), j2000);
    }
}
