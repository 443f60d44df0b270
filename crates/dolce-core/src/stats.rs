//! Raw usage statistics.
//!
//! `UserStatistics` is the single per-user aggregate of everything the
//! achievement engine counts: distinct countries and desserts viewed,
//! timer and calorie-calculator usage, the mirrored favorites count,
//! and the set of calendar days with any activity. It holds no unlock
//! logic; the engine reads it to recompute achievement progress.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format for activity-day keys.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Today's activity-day key in the local timezone.
pub fn today_key() -> String {
    Local::now().format(DAY_FORMAT).to_string()
}

/// Raw per-user usage counters and sets.
///
/// Sets are `BTreeSet` so the serialized form is deterministic and the
/// persisted round-trip compares bit-for-bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatistics {
    pub viewed_countries: BTreeSet<String>,
    pub viewed_desserts: BTreeSet<String>,
    pub timer_usages: u32,
    pub calorie_calculations: u32,
    pub favorites_count: u32,
    /// One entry per calendar day the app was used, "YYYY-MM-DD".
    pub activity_days: BTreeSet<String>,
    /// Every dessert view counts, repeats included.
    pub total_views: u32,
}

impl UserStatistics {
    /// Add a country to the viewed set. Repeat views are no-ops.
    pub fn record_country_view(&mut self, country_id: &str) {
        self.viewed_countries.insert(country_id.to_string());
    }

    /// Add a dessert to the viewed set and bump the total-views
    /// counter. The counter increments even for repeat views.
    pub fn record_dessert_view(&mut self, dessert_id: &str) {
        self.viewed_desserts.insert(dessert_id.to_string());
        self.total_views += 1;
    }

    pub fn record_timer_usage(&mut self) {
        self.timer_usages += 1;
    }

    pub fn record_calorie_calculation(&mut self) {
        self.calorie_calculations += 1;
    }

    /// Absolute set of the favorites count.
    pub fn set_favorites_count(&mut self, n: u32) {
        self.favorites_count = n;
    }

    /// Add a calendar-day key to the activity set if not already present.
    pub fn record_daily_activity(&mut self, day: &str) {
        if !self.activity_days.contains(day) {
            self.activity_days.insert(day.to_string());
        }
    }

    /// Length of the trailing run of consecutive calendar days, ending
    /// at the latest *recorded* day.
    ///
    /// This is not "days since today": if the most recent activity was
    /// three consecutive days last week, the streak still reads 3.
    /// Returns 0 when no activity is recorded. Day keys that fail to
    /// parse are skipped.
    pub fn consecutive_streak(&self) -> u32 {
        let mut days: Vec<NaiveDate> = self
            .activity_days
            .iter()
            .filter_map(|d| NaiveDate::parse_from_str(d, DAY_FORMAT).ok())
            .collect();
        days.sort_unstable();
        let Some(mut last) = days.last().copied() else {
            return 0;
        };

        let mut streak = 1u32;
        for day in days.iter().rev().skip(1) {
            if *day == last - chrono::Days::new(1) {
                streak += 1;
                last = *day;
            } else {
                break;
            }
        }
        streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn country_views_deduplicate() {
        let mut stats = UserStatistics::default();
        stats.record_country_view("italy");
        stats.record_country_view("italy");
        stats.record_country_view("france");
        assert_eq!(stats.viewed_countries.len(), 2);
    }

    #[test]
    fn dessert_views_count_repeats() {
        let mut stats = UserStatistics::default();
        stats.record_dessert_view("tiramisu");
        stats.record_dessert_view("tiramisu");
        stats.record_dessert_view("cannoli");
        assert_eq!(stats.viewed_desserts.len(), 2);
        assert_eq!(stats.total_views, 3);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let mut stats = UserStatistics::default();
        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            stats.record_daily_activity(day);
        }
        assert_eq!(stats.consecutive_streak(), 3);
    }

    #[test]
    fn streak_gap_breaks_run() {
        let mut stats = UserStatistics::default();
        stats.record_daily_activity("2024-01-01");
        stats.record_daily_activity("2024-01-03");
        assert_eq!(stats.consecutive_streak(), 1);
    }

    #[test]
    fn streak_empty_and_single() {
        let mut stats = UserStatistics::default();
        assert_eq!(stats.consecutive_streak(), 0);
        stats.record_daily_activity("2024-06-15");
        assert_eq!(stats.consecutive_streak(), 1);
    }

    #[test]
    fn streak_spans_month_boundary() {
        let mut stats = UserStatistics::default();
        for day in ["2024-01-30", "2024-01-31", "2024-02-01", "2024-02-02"] {
            stats.record_daily_activity(day);
        }
        assert_eq!(stats.consecutive_streak(), 4);
    }

    #[test]
    fn streak_ignores_days_before_gap() {
        let mut stats = UserStatistics::default();
        for day in [
            "2024-03-01",
            "2024-03-02",
            "2024-03-03",
            "2024-03-07",
            "2024-03-08",
        ] {
            stats.record_daily_activity(day);
        }
        assert_eq!(stats.consecutive_streak(), 2);
    }

    #[test]
    fn streak_ends_at_latest_recorded_day_not_today() {
        // Days entirely in the past still produce a streak.
        let mut stats = UserStatistics::default();
        stats.record_daily_activity("2020-05-01");
        stats.record_daily_activity("2020-05-02");
        assert_eq!(stats.consecutive_streak(), 2);
    }

    #[test]
    fn daily_activity_deduplicates() {
        let mut stats = UserStatistics::default();
        stats.record_daily_activity("2024-01-01");
        stats.record_daily_activity("2024-01-01");
        assert_eq!(stats.activity_days.len(), 1);
    }

    #[test]
    fn unparseable_days_are_skipped() {
        let mut stats = UserStatistics::default();
        stats.record_daily_activity("not-a-date");
        stats.record_daily_activity("2024-01-01");
        stats.record_daily_activity("2024-01-02");
        assert_eq!(stats.consecutive_streak(), 2);
    }

    #[test]
    fn serde_roundtrip_is_exact() {
        let mut stats = UserStatistics::default();
        stats.record_dessert_view("baklava");
        stats.record_country_view("turkiye");
        stats.record_timer_usage();
        stats.record_daily_activity("2024-04-01");

        let json = serde_json::to_string(&stats).unwrap();
        let loaded: UserStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, stats);
        // Deterministic serialization: encoding again yields identical bytes.
        assert_eq!(serde_json::to_string(&loaded).unwrap(), json);
    }

    proptest! {
        /// total_views equals the number of view calls; the distinct
        /// set tracks unique ids only.
        #[test]
        fn total_views_counts_every_call(ids in proptest::collection::vec("[a-z]{1,8}", 0..50)) {
            let mut stats = UserStatistics::default();
            for id in &ids {
                stats.record_dessert_view(id);
            }
            let distinct: BTreeSet<&String> = ids.iter().collect();
            prop_assert_eq!(stats.total_views as usize, ids.len());
            prop_assert_eq!(stats.viewed_desserts.len(), distinct.len());
        }
    }
}
