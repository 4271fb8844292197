// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic half-open interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`
//!
//! Intervals describe historical DST ranges (on the wall clock) and the
//! span of a saju month (between two consecutive jeol boundaries).

use super::instant::{Time, TimeInstant, TimeScale};
use std::fmt;

/// A half-open interval `[start, end)` between two instants.
///
/// # Examples
///
/// ```
/// use saju_temporal::{CalendarMoment, Interval};
///
/// let start = CalendarMoment::from_ymd_hm(1987, 5, 10, 2, 0).unwrap();
/// let end = CalendarMoment::from_ymd_hm(1987, 10, 11, 3, 0).unwrap();
/// let summer = Interval::new(start, end);
///
/// assert!(summer.contains(&start));
/// assert!(!summer.contains(&end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias, e.g. `Period<UT>`.
pub type Period<S> = Interval<Time<S>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Whether `instant` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant < self.end
    }

    /// Returns the duration of the interval as the difference between end
    /// and start.
    ///
    /// ```
    /// use saju_temporal::{Interval, JulianDay};
    ///
    /// let span = Interval::new(JulianDay::new(2_451_545.0), JulianDay::new(2_451_546.5));
    /// assert_eq!(span.duration().value(), 1.5);
    /// ```
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Returns the overlapping sub-interval between `self` and `other`.
    ///
    /// If one interval ends exactly when the other starts, the intersection
    /// is empty and `None` is returned.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = if self.start >= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end <= other.end {
            self.end
        } else {
            other.end
        };

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Convert this period to another time scale.
    ///
    /// Each endpoint is converted preserving the represented absolute
    /// interval.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Interval<Time<T>> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalendarMoment, TT, UT};
    use qtty::{Days, Minutes};

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CalendarMoment {
        CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap()
    }

    #[test]
    fn test_contains_is_half_open() {
        let span = Interval::new(moment(2024, 2, 4, 17, 27), moment(2024, 3, 5, 11, 23));
        assert!(span.contains(&moment(2024, 2, 4, 17, 27)));
        assert!(span.contains(&moment(2024, 3, 5, 11, 22)));
        assert!(!span.contains(&moment(2024, 3, 5, 11, 23)));
        assert!(!span.contains(&moment(2024, 2, 4, 17, 26)));
    }

    #[test]
    fn test_calendar_duration_in_minutes() {
        let span = Interval::new(moment(2024, 2, 28, 23, 0), moment(2024, 3, 1, 1, 0));
        assert_eq!(span.duration(), Minutes::new((24.0 + 2.0) * 60.0));
    }

    #[test]
    fn test_period_duration_in_days() {
        let period = Period::new(Time::<UT>::new(2451545.0), Time::<UT>::new(2451546.5));
        assert_eq!(period.duration(), Days::new(1.5));
    }

    #[test]
    fn test_period_scale_conversion_keeps_length() {
        let period = Period::new(Time::<UT>::new(2_460_000.0), Time::<UT>::new(2_460_001.0));
        let tt = period.to::<TT>();
        assert!((tt.duration() - Days::new(1.0)).abs() < Days::new(1e-9));
        assert!(tt.start.value() > period.start.value());
    }

    #[test]
    fn test_intersection_overlap_and_touching() {
        let a = Interval::new(moment(1987, 5, 10, 2, 0), moment(1987, 10, 11, 3, 0));
        let b = Interval::new(moment(1987, 10, 1, 0, 0), moment(1987, 12, 1, 0, 0));
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.start, moment(1987, 10, 1, 0, 0));
        assert_eq!(overlap.end, moment(1987, 10, 11, 3, 0));

        let c = Interval::new(moment(1987, 10, 11, 3, 0), moment(1988, 1, 1, 0, 0));
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_display() {
        let span = Interval::new(moment(1948, 6, 1, 0, 0), moment(1948, 9, 13, 0, 0));
        assert_eq!(span.to_string(), "1948-06-01 00:00 to 1948-09-13 00:00");
    }
}
