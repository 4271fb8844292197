// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error and warning types.
//!
//! Every validation failure surfaces as a [`SajuError`]; nothing is clamped
//! or coerced. Reduced precision is not an error: it travels alongside the
//! value as a [`PrecisionWarning`].

use std::fmt;

/// Errors produced by calendar construction, conversion, and pillar
/// resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SajuError {
    /// The civil date does not exist (e.g. February 30).
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Hour, minute, or second outside the clock range.
    #[error("invalid clock time {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },

    /// Year outside the range a table or type supports.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Lunar month number outside `1..=12`.
    #[error("lunar month {0} outside 1..=12")]
    InvalidLunarMonth(u32),

    /// Lunar day outside the length of its month.
    #[error("lunar day {day} invalid for {year}-{month:02} ({length} days)")]
    InvalidLunarDay {
        year: i32,
        month: u32,
        day: u32,
        length: u32,
    },

    /// A leap month was requested where the year has none.
    #[error("lunar year {year} has no leap month {month}")]
    NoLeapMonth { year: i32, month: u32 },

    /// An ordinary lunar month that precedes the first tabulated one.
    #[error("lunar month {year}-{month:02} precedes the table")]
    LunarMonthNotTabulated { year: i32, month: u32 },

    /// Stem and branch of different parity never form a sexagenary pair.
    ///
    /// This indicates a programming defect upstream, not bad user input.
    #[error("stem {stem} and branch {branch} differ in parity")]
    ParityMismatch { stem: u8, branch: u8 },

    /// Index outside a closed enumeration.
    #[error("{kind} index {index} out of range")]
    IndexOutOfRange { kind: &'static str, index: u32 },

    /// Unknown IANA timezone name.
    #[error("unknown timezone `{0}`")]
    UnknownTimezone(String),

    /// Geographic coordinate outside its range or not finite.
    #[error("invalid {axis} {value}")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    /// Configuration value rejected by [`SajuConfig::validate`](crate::SajuConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A solar-longitude crossing could not be bracketed.
    #[error("no crossing of {target_deg}° found near JD {near_jd}")]
    SearchFailed { target_deg: f64, near_jd: f64 },
}

/// Crate-wide result alias.
pub type Result<T, E = SajuError> = std::result::Result<T, E>;

/// Machine-readable marker attached to results computed below table
/// precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecisionWarning {
    /// The boundary came from the VSOP87 series instead of the table.
    Vsop87Fallback { year: i32 },
    /// The boundary was assumed to fall on the 6th of its month at 12:00.
    ApproximateDay6 { year: i32 },
}

impl PrecisionWarning {
    /// Stable identifier for programmatic checks.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Vsop87Fallback { .. } => "VSOP87_FALLBACK",
            Self::ApproximateDay6 { .. } => "APPROXIMATE_DAY6",
        }
    }
}

impl fmt::Display for PrecisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vsop87Fallback { year } => write!(
                f,
                "solar-term boundary for {year} computed from the VSOP87 series; \
                 minute precision is not guaranteed"
            ),
            Self::ApproximateDay6 { year } => write!(
                f,
                "solar-term boundary for {year} approximated as the 6th of the month at 12:00; \
                 error may reach two days"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SajuError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid calendar date 2023-02-29");

        let err = SajuError::ParityMismatch { stem: 0, branch: 1 };
        assert!(err.to_string().contains("parity"));
    }

    #[test]
    fn warning_codes_are_stable() {
        assert_eq!(
            PrecisionWarning::ApproximateDay6 { year: 3500 }.code(),
            "APPROXIMATE_DAY6"
        );
        let text = PrecisionWarning::ApproximateDay6 { year: 3500 }.to_string();
        assert!(text.contains("6th"));
        assert_eq!(
            PrecisionWarning::Vsop87Fallback { year: 1850 }.code(),
            "VSOP87_FALLBACK"
        );
    }
}
