// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Midnight conventions for the day and hour pillars.
//!
//! | Mode | Day pillar | 子 hour |
//! |------|------------|---------|
//! | `Midnight00` | civil date | 23:00–00:59 |
//! | `Yaza23To01NextDay` | 23:00 onward counts as the next day | 23:00–00:59 |
//! | `Yaza2330To0130NextDay` | 23:30 onward counts as the next day | 23:30–01:29 |
//! | `JojaSplit` | civil date | 23:xx is late 子 (next day's stem), 00:xx early 子 |
//!
//! Results under different modes are not comparable.

use super::error::Result;
use super::ganji::{day_pillar, hour_branch, hour_pillar, Branch, Pillar};
use super::julian_day::CalendarMoment;

/// Which convention decides the day a late-night moment belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCutMode {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "MIDNIGHT_00"))]
    Midnight00,
    #[cfg_attr(feature = "serde", serde(rename = "YAZA_23_TO_01_NEXTDAY"))]
    Yaza23To01NextDay,
    #[cfg_attr(feature = "serde", serde(rename = "YAZA_23_30_TO_01_30_NEXTDAY"))]
    Yaza2330To0130NextDay,
    #[cfg_attr(feature = "serde", serde(rename = "JOJA_SPLIT"))]
    JojaSplit,
}

/// Half of the split 子 hour under [`DayCutMode::JojaSplit`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZiSubHour {
    /// 00:00–00:59, jo-ja.
    Early,
    /// 23:00–23:59, ya-ja.
    Late,
}

/// Which civil days feed the day and hour pillars.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayCutResolution {
    /// Day whose pillar is the day pillar (at 00:00).
    pub effective_date: CalendarMoment,
    pub hour_branch: Branch,
    /// Day whose stem seeds the five-rat hour formula (at 00:00).
    pub hour_stem_source: CalendarMoment,
    pub zi_sub_hour: Option<ZiSubHour>,
    pub shifted_to_next_day: bool,
}

impl DayCutResolution {
    pub fn day_pillar(&self) -> Pillar {
        day_pillar(self.effective_date.julian_day_number())
    }

    pub fn hour_pillar(&self) -> Result<Pillar> {
        let stem = day_pillar(self.hour_stem_source.julian_day_number()).stem();
        hour_pillar(stem, self.hour_branch)
    }
}

impl DayCutMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Midnight00 => "MIDNIGHT_00",
            Self::Yaza23To01NextDay => "YAZA_23_TO_01_NEXTDAY",
            Self::Yaza2330To0130NextDay => "YAZA_23_30_TO_01_30_NEXTDAY",
            Self::JojaSplit => "JOJA_SPLIT",
        }
    }

    /// Resolve a (solar-time adjusted) moment under this convention.
    pub fn resolve(self, moment: &CalendarMoment) -> DayCutResolution {
        let today = moment.start_of_day();
        let tomorrow = today.add_days(1);
        let minute_of_day = moment.hour() * 60 + moment.minute();

        let (effective_date, hour_stem_source, zi_sub_hour, branch) = match self {
            Self::Midnight00 => (today, today, None, hour_branch(moment.hour())),
            Self::Yaza23To01NextDay => {
                let day = if moment.hour() == 23 { tomorrow } else { today };
                (day, day, None, hour_branch(moment.hour()))
            }
            Self::Yaza2330To0130NextDay => {
                let day = if minute_of_day >= 23 * 60 + 30 {
                    tomorrow
                } else {
                    today
                };
                // Every branch window starts half an hour late.
                let branch = hour_branch(moment.add_minutes(-30).hour());
                (day, day, None, branch)
            }
            Self::JojaSplit => match moment.hour() {
                23 => (today, tomorrow, Some(ZiSubHour::Late), Branch::Ja),
                0 => (today, today, Some(ZiSubHour::Early), Branch::Ja),
                h => (today, today, None, hour_branch(h)),
            },
        };

        DayCutResolution {
            effective_date,
            hour_branch: branch,
            hour_stem_source,
            zi_sub_hour,
            shifted_to_next_day: effective_date != today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CalendarMoment {
        CalendarMoment::from_ymd_hm(y, mo, d, h, mi).unwrap()
    }

    #[test]
    fn midnight_mode_never_shifts() {
        let r = DayCutMode::Midnight00.resolve(&moment(2024, 2, 10, 23, 30));
        assert!(!r.shifted_to_next_day);
        assert_eq!(r.day_pillar().to_string(), "甲辰");
        assert_eq!(r.hour_branch, Branch::Ja);
        // 甲 day: 子 hour is 甲子.
        assert_eq!(r.hour_pillar().unwrap().to_string(), "甲子");
    }

    #[test]
    fn yaza_moves_the_day_at_23() {
        let r = DayCutMode::Yaza23To01NextDay.resolve(&moment(2024, 2, 10, 23, 30));
        assert!(r.shifted_to_next_day);
        assert_eq!(r.effective_date, moment(2024, 2, 11, 0, 0));
        assert_eq!(r.day_pillar().to_string(), "乙巳");
        // 乙 day: 子 hour is 丙子.
        assert_eq!(r.hour_pillar().unwrap().to_string(), "丙子");

        let r = DayCutMode::Yaza23To01NextDay.resolve(&moment(2024, 2, 10, 22, 59));
        assert!(!r.shifted_to_next_day);
        assert_eq!(r.hour_branch, Branch::Hae);
    }

    #[test]
    fn yaza_2330_windows() {
        let mode = DayCutMode::Yaza2330To0130NextDay;
        let r = mode.resolve(&moment(2024, 2, 10, 23, 29));
        assert!(!r.shifted_to_next_day);
        assert_eq!(r.hour_branch, Branch::Hae);

        let r = mode.resolve(&moment(2024, 2, 10, 23, 30));
        assert!(r.shifted_to_next_day);
        assert_eq!(r.hour_branch, Branch::Ja);

        let r = mode.resolve(&moment(2024, 2, 11, 1, 29));
        assert_eq!(r.hour_branch, Branch::Ja);
        let r = mode.resolve(&moment(2024, 2, 11, 1, 30));
        assert_eq!(r.hour_branch, Branch::Chuk);
        let r = mode.resolve(&moment(2024, 2, 11, 0, 10));
        assert_eq!(r.hour_branch, Branch::Ja);
        assert!(!r.shifted_to_next_day);
    }

    #[test]
    fn joja_split_keeps_day_but_advances_late_hour_stem() {
        let late = DayCutMode::JojaSplit.resolve(&moment(2024, 2, 10, 23, 30));
        assert!(!late.shifted_to_next_day);
        assert_eq!(late.zi_sub_hour, Some(ZiSubHour::Late));
        assert_eq!(late.day_pillar().to_string(), "甲辰");
        assert_eq!(late.hour_pillar().unwrap().to_string(), "丙子");

        let early = DayCutMode::JojaSplit.resolve(&moment(2024, 2, 11, 0, 30));
        assert_eq!(early.zi_sub_hour, Some(ZiSubHour::Early));
        assert_eq!(early.day_pillar().to_string(), "乙巳");
        assert_eq!(early.hour_pillar().unwrap().to_string(), "丙子");

        let noon = DayCutMode::JojaSplit.resolve(&moment(2024, 2, 11, 12, 0));
        assert_eq!(noon.zi_sub_hour, None);
        assert_eq!(noon.hour_branch, Branch::O);
    }

    #[test]
    fn next_day_carries_over_year_end() {
        let r = DayCutMode::Yaza23To01NextDay.resolve(&moment(2023, 12, 31, 23, 5));
        assert_eq!(r.effective_date, moment(2024, 1, 1, 0, 0));
        assert_eq!(r.day_pillar().to_string(), "甲子");
    }
}
