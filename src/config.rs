// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pillar-resolution options.

use super::day_cut::DayCutMode;
use super::error::{Result, SajuError};
use super::lunar::LeapMonthPolicy;

/// Options controlling time correction and day-cut resolution.
///
/// With the `serde` feature every field is optional on input and falls back
/// to [`SajuConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SajuConfig {
    /// Midnight convention. Default: [`DayCutMode::Midnight00`].
    pub day_cut_mode: DayCutMode,
    /// Remove historical summer time before resolving. Default: true.
    pub apply_dst_history: bool,
    /// Add the equation of time to local mean time. Default: false.
    pub include_equation_of_time: bool,
    /// Shift the clock by the longitude offset from the standard meridian.
    /// Default: true.
    pub apply_lmt_correction: bool,
    /// Meridian to measure the longitude offset from, instead of the one
    /// implied by the timezone. Default: none.
    pub lmt_baseline_longitude: Option<f64>,
    /// Reading of lunar input whose leap flag is unknown. Default:
    /// [`LeapMonthPolicy::Common`].
    pub leap_month_policy: LeapMonthPolicy,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            day_cut_mode: DayCutMode::Midnight00,
            apply_dst_history: true,
            include_equation_of_time: false,
            apply_lmt_correction: true,
            lmt_baseline_longitude: None,
            leap_month_policy: LeapMonthPolicy::Common,
        }
    }
}

impl SajuConfig {
    pub fn with_day_cut_mode(mut self, mode: DayCutMode) -> Self {
        self.day_cut_mode = mode;
        self
    }

    pub fn with_dst_history(mut self, apply: bool) -> Self {
        self.apply_dst_history = apply;
        self
    }

    pub fn with_equation_of_time(mut self, include: bool) -> Self {
        self.include_equation_of_time = include;
        self
    }

    pub fn with_lmt_correction(mut self, apply: bool) -> Self {
        self.apply_lmt_correction = apply;
        self
    }

    pub fn with_lmt_baseline_longitude(mut self, longitude: Option<f64>) -> Self {
        self.lmt_baseline_longitude = longitude;
        self
    }

    pub fn with_leap_month_policy(mut self, policy: LeapMonthPolicy) -> Self {
        self.leap_month_policy = policy;
        self
    }

    /// Reject values no computation could use.
    pub fn validate(&self) -> Result<()> {
        if let Some(lon) = self.lmt_baseline_longitude {
            if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
                return Err(SajuError::InvalidConfig(
                    "lmt_baseline_longitude must lie within -180..=180",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SajuConfig::default();
        assert_eq!(c.day_cut_mode, DayCutMode::Midnight00);
        assert!(c.apply_dst_history);
        assert!(!c.include_equation_of_time);
        assert!(c.apply_lmt_correction);
        assert_eq!(c.lmt_baseline_longitude, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let c = SajuConfig::default()
            .with_day_cut_mode(DayCutMode::JojaSplit)
            .with_dst_history(false)
            .with_equation_of_time(true)
            .with_lmt_correction(false)
            .with_lmt_baseline_longitude(Some(127.5))
            .with_leap_month_policy(LeapMonthPolicy::Auto);
        assert_eq!(c.day_cut_mode, DayCutMode::JojaSplit);
        assert!(!c.apply_dst_history);
        assert!(c.include_equation_of_time);
        assert!(!c.apply_lmt_correction);
        assert_eq!(c.lmt_baseline_longitude, Some(127.5));
        assert_eq!(c.leap_month_policy, LeapMonthPolicy::Auto);
    }

    #[test]
    fn validate_rejects_bad_baseline() {
        let c = SajuConfig::default().with_lmt_baseline_longitude(Some(200.0));
        assert!(matches!(c.validate(), Err(SajuError::InvalidConfig(_))));
        let c = SajuConfig::default().with_lmt_baseline_longitude(Some(f64::INFINITY));
        assert!(c.validate().is_err());
    }
}
