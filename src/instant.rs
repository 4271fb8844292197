// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a quantity in [`Days`] whose *meaning* is fixed by the
//! compile-time marker `S: TimeScale`. Civil calendar arithmetic lives on
//! the [`UT`](super::UT) axis; the solar series are evaluated on the
//! [`TT`](super::TT) axis. Converting between the two applies ΔT.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A scale provides a display label and a pair of conversions between its
/// native quantity (in [`Days`]) and **Julian Date in TT**, the canonical
/// axis.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity on this scale to an absolute JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// Convert an absolute JD(TT) back to this scale's quantity.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`, stored as a single [`Days`] quantity.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute JD(TT) of this instant.
    #[inline]
    pub fn julian_day_tt(&self) -> Days {
        S::to_jd_tt(self.quantity)
    }

    /// Build an instant from an absolute JD(TT).
    #[inline]
    pub fn from_julian_day_tt(jd_tt: Days) -> Self {
        Self::from_days(S::from_jd_tt(jd_tt))
    }

    /// Convert this instant to another time scale through JD(TT).
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day_tt(S::to_jd_tt(self.quantity))
    }

    /// Signed distance to `earlier`.
    #[inline]
    pub fn minutes_since(&self, earlier: Self) -> Minutes {
        (*self - earlier).to::<Minute>()
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use super::scales::UT;
        let jd_ut = self.to::<UT>().quantity();
        let seconds_since_epoch = (jd_ut - UNIX_EPOCH_JD).to::<Second>().value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos.min(999_999_999))
    }

    /// Build an instant from a `chrono::DateTime<Utc>` read as Universal
    /// Time.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use super::scales::UT;
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        let jd_ut = UNIX_EPOCH_JD + (seconds_since_epoch + nanos).to::<Day>();
        Time::<UT>::from_days(jd_ut).to::<S>()
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Earlier of two instants.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Later of two instants.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }

    /// Midpoint between two instants, used by the bisection searches.
    #[inline]
    pub const fn mean(self, other: Self) -> Self {
        Self::from_days(self.quantity.const_add(other.quantity).const_div(2.0))
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

/// Serde adapter for [`Minutes`] fields, written as plain numbers.
#[cfg(feature = "serde")]
pub(crate) mod minutes_serde {
    use qtty::Minutes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(m: &Minutes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(m.value())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Minutes, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Minutes::new)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for points in time usable as [`Interval`](super::Interval)
/// endpoints.
pub trait TimeInstant: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// The duration type returned by [`TimeInstant::difference`].
    type Duration;

    /// Signed distance `self − other`.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{TT, UT};
    use super::*;

    #[test]
    fn arithmetic_in_days() {
        let mut jd = Time::<UT>::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.value(), 2_451_545.5);
        assert_eq!((jd + Days::new(2.0)) - jd, Days::new(2.0));
        assert_eq!((jd - Days::new(0.25)).value(), 2_451_545.25);
    }

    #[test]
    fn minutes_between_instants() {
        let a = Time::<UT>::new(2_460_345.0);
        let b = a + Hours::new(1.0).to::<Day>();
        assert!((b.minutes_since(a) - Minutes::new(60.0)).abs() < Minutes::new(1e-6));
        assert!((a.minutes_since(b) + Minutes::new(60.0)).abs() < Minutes::new(1e-6));
    }

    #[test]
    fn min_max_mean() {
        let a = Time::<TT>::new(10.0);
        let b = Time::<TT>::new(14.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(a.mean(b).value(), 12.0);
        assert_eq!(b.mean(a).value(), 12.0);
    }

    #[test]
    fn utc_roundtrip_is_stable() {
        // 2000-01-01T12:00:00Z
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let tt = Time::<TT>::from_utc(datetime);
        let back = tt.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {delta_ns} ns");
    }

    #[test]
    fn from_utc_on_ut_axis_is_plain_julian_day() {
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let ut = Time::<UT>::from_utc(datetime);
        assert!((ut.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn from_utc_on_tt_axis_applies_delta_t() {
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let tt = Time::<TT>::from_utc(datetime);
        let offset = (tt.quantity() - Days::new(2_451_545.0)).to::<Second>();
        assert!((offset - Seconds::new(63.83)).abs() < Seconds::new(1.0), "{offset}");
    }

    #[test]
    fn display_carries_label() {
        let s = format!("{}", Time::<UT>::new(2_451_545.0));
        assert!(s.starts_with("JD(UT)"));
    }
}
