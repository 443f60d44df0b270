//! Achievement engine implementation.
//!
//! The engine observes user actions through tracking calls, mutates
//! the raw statistics, recomputes affected achievement records and
//! fires unlock transitions. Each record is a tiny state machine:
//!
//! ```text
//! Locked(progress) -> Unlocked(progress, timestamp)
//! ```
//!
//! The transition fires exactly once and there is no way back. Once a
//! record is unlocked its progress is frozen; tracking calls that
//! would otherwise raise or lower it are no-ops.
//!
//! Every tracking call persists the full state before returning. A
//! failed write is logged and ignored; the in-memory state stays
//! authoritative and the next mutation re-attempts a full write.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::{catalog, AchievementCategory, AchievementDefinition};
use crate::events::Event;
use crate::notify::{Notifier, NullNotifier};
use crate::stats::{today_key, UserStatistics};
use crate::storage::database::{KEY_ACHIEVEMENTS, KEY_STATISTICS};
use crate::storage::Database;

/// Live unlock state for one achievement, keyed by category.
///
/// Metadata lives in the catalog; only progress and unlock state are
/// persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub category: AchievementCategory,
    pub progress: u32,
    pub unlocked: bool,
    /// Set once at unlock, immutable after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl AchievementRecord {
    fn fresh(category: AchievementCategory) -> Self {
        Self {
            category,
            progress: 0,
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Catalog metadata joined with the live record, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub category: AchievementCategory,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub progress: u32,
    pub target: u32,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Achievement and progress tracking engine.
///
/// Owns the fixed catalog, one record per category, the raw user
/// statistics and the persistence handle. One instance per process;
/// the owner of the UI event dispatch holds it and serializes all
/// calls through it.
pub struct AchievementEngine {
    catalog: Vec<AchievementDefinition>,
    records: BTreeMap<AchievementCategory, AchievementRecord>,
    stats: UserStatistics,
    db: Database,
    notifier: Box<dyn Notifier>,
    notify_delay: Duration,
    events: Vec<Event>,
}

impl AchievementEngine {
    /// Build an engine over the given database, with notifications
    /// discarded. `country_total` sizes the completionist target.
    ///
    /// Persisted records and statistics are loaded and merged with the
    /// fixed catalog. Decode failures mean "no prior data" and are
    /// never fatal.
    pub fn new(db: Database, country_total: u32) -> Self {
        Self::with_notifier(db, country_total, Box::new(NullNotifier), Duration::ZERO)
    }

    /// Build an engine that schedules a local notification on each
    /// unlock through `notifier`.
    pub fn with_notifier(
        db: Database,
        country_total: u32,
        notifier: Box<dyn Notifier>,
        notify_delay: Duration,
    ) -> Self {
        let catalog = catalog(country_total);
        let records = load_records(&db, &catalog);
        let stats = load_stats(&db);
        Self {
            catalog,
            records,
            stats,
            db,
            notifier,
            notify_delay,
            events: Vec::new(),
        }
    }

    // ── Tracking calls ───────────────────────────────────────────────

    /// A dessert recipe was opened.
    ///
    /// Counts the view (repeats included), registers the dessert's
    /// country, marks today as an activity day and re-evaluates every
    /// affected record.
    pub fn track_dessert_view(&mut self, dessert_id: &str, country_id: &str) {
        self.stats.record_dessert_view(dessert_id);
        self.stats.record_country_view(country_id);
        self.stats.record_daily_activity(&today_key());

        self.bump(AchievementCategory::FirstView, 1);
        self.bump(AchievementCategory::RecipeCollector, 1);

        // Country-based progress is an absolute recompute over the
        // viewed set, never an increment.
        let countries = self.stats.viewed_countries.len() as u32;
        self.set_progress(AchievementCategory::CountryExplorer, countries);
        self.set_progress(AchievementCategory::Completionist, countries);

        let streak = self.stats.consecutive_streak();
        self.set_progress(AchievementCategory::WeeklyStreak, streak);

        self.persist();
    }

    /// The cooking timer was started.
    pub fn track_timer_usage(&mut self) {
        self.stats.record_timer_usage();
        self.bump(AchievementCategory::TimeKeeper, 1);
        self.persist();
    }

    /// The calorie calculator was invoked.
    pub fn track_calorie_calculation(&mut self) {
        self.stats.record_calorie_calculation();
        self.bump(AchievementCategory::CalorieTracker, 1);
        self.persist();
    }

    /// A dessert was added to favorites.
    pub fn track_favorite_added(&mut self) {
        let count = self.stats.favorites_count.saturating_add(1);
        self.stats.set_favorites_count(count);
        self.set_progress(AchievementCategory::FavoriteCollector, count);
        self.persist();
    }

    /// A dessert was removed from favorites. Removing below a
    /// previously reached threshold never re-locks the achievement.
    pub fn track_favorite_removed(&mut self) {
        let count = self.stats.favorites_count.saturating_sub(1);
        self.stats.set_favorites_count(count);
        self.set_progress(AchievementCategory::FavoriteCollector, count);
        self.persist();
    }

    /// The app was opened. Extends the activity-day set and the
    /// weekly streak without requiring a dessert view.
    pub fn track_app_open(&mut self) {
        self.stats.record_daily_activity(&today_key());
        let streak = self.stats.consecutive_streak();
        self.set_progress(AchievementCategory::WeeklyStreak, streak);
        self.persist();
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn stats(&self) -> &UserStatistics {
        &self.stats
    }

    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.catalog
    }

    pub fn record(&self, category: AchievementCategory) -> Option<&AchievementRecord> {
        self.records.get(&category)
    }

    /// All achievements joined with their live state, catalog order.
    pub fn statuses(&self) -> Vec<AchievementStatus> {
        self.catalog
            .iter()
            .map(|def| {
                let rec = &self.records[&def.category];
                AchievementStatus {
                    category: def.category,
                    title: def.title.clone(),
                    description: def.description.clone(),
                    icon: def.icon.clone(),
                    progress: rec.progress,
                    target: def.target,
                    unlocked: rec.unlocked,
                    unlocked_at: rec.unlocked_at,
                }
            })
            .collect()
    }

    /// Unlocked achievements ordered by unlock time.
    ///
    /// Derived view over the records; there is no separately mutated
    /// unlocked list to fall out of sync.
    pub fn unlocked(&self) -> Vec<AchievementStatus> {
        let mut unlocked: Vec<AchievementStatus> = self
            .statuses()
            .into_iter()
            .filter(|s| s.unlocked)
            .collect();
        unlocked.sort_by_key(|s| s.unlocked_at);
        unlocked
    }

    /// Take all queued events. The presentation layer calls this after
    /// each tracking call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Underlying database handle (shared with the favorites set and
    /// the CLI's persisted timer).
    pub fn db(&self) -> &Database {
        &self.db
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Increment a counter-style record. No-op once unlocked.
    fn bump(&mut self, category: AchievementCategory, by: u32) {
        let Some(rec) = self.records.get_mut(&category) else {
            return;
        };
        if rec.unlocked {
            return;
        }
        rec.progress += by;
        self.maybe_unlock(category);
    }

    /// Absolute recompute of a record's progress. While locked the
    /// value may decrease; once unlocked it is frozen.
    fn set_progress(&mut self, category: AchievementCategory, value: u32) {
        let Some(rec) = self.records.get_mut(&category) else {
            return;
        };
        if rec.unlocked {
            return;
        }
        rec.progress = value;
        self.maybe_unlock(category);
    }

    fn maybe_unlock(&mut self, category: AchievementCategory) {
        let Some(def) = self.catalog.iter().find(|d| d.category == category) else {
            return;
        };
        let target = def.target;
        let (title, description, icon) =
            (def.title.clone(), def.description.clone(), def.icon.clone());

        let Some(rec) = self.records.get_mut(&category) else {
            return;
        };
        if rec.unlocked || rec.progress < target {
            return;
        }

        rec.unlocked = true;
        rec.unlocked_at = Some(Utc::now());
        let progress = rec.progress;

        self.events.push(Event::AchievementUnlocked {
            category,
            title: title.clone(),
            description: description.clone(),
            icon,
            progress,
            target,
            at: rec.unlocked_at.unwrap_or_else(Utc::now),
        });

        // Best effort; unlock state never depends on delivery.
        let _ = self.notifier.schedule(
            &format!("Achievement unlocked: {title}"),
            &description,
            self.notify_delay,
        );
    }

    /// Write the full state back. Failures leave the in-memory state
    /// authoritative; the next mutation re-attempts a full write.
    fn persist(&self) {
        let records: Vec<&AchievementRecord> = self.records.values().collect();
        let result = serde_json::to_string(&records)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.db
                    .kv_set(KEY_ACHIEVEMENTS, &json)
                    .map_err(|e| e.to_string())
            })
            .and_then(|()| {
                serde_json::to_string(&self.stats).map_err(|e| e.to_string())
            })
            .and_then(|json| {
                self.db
                    .kv_set(KEY_STATISTICS, &json)
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            if std::env::var("DOLCE_DEBUG").is_ok() {
                eprintln!("persist failed (state kept in memory): {e}");
            }
        }
    }
}

/// Merge persisted records with the fixed catalog.
///
/// The catalog is authoritative for metadata and for which categories
/// exist; a persisted record is authoritative for progress, unlocked
/// flag and timestamp. Entries are parsed individually so an unknown
/// category (or a malformed entry) is dropped silently without
/// poisoning the rest.
fn load_records(
    db: &Database,
    catalog: &[AchievementDefinition],
) -> BTreeMap<AchievementCategory, AchievementRecord> {
    let mut records: BTreeMap<AchievementCategory, AchievementRecord> = catalog
        .iter()
        .map(|d| (d.category, AchievementRecord::fresh(d.category)))
        .collect();

    let raw = match db.kv_get(KEY_ACHIEVEMENTS) {
        Ok(Some(json)) => json,
        _ => return records,
    };
    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(_) => return records,
    };
    for entry in entries {
        if let Ok(rec) = serde_json::from_value::<AchievementRecord>(entry) {
            if records.contains_key(&rec.category) {
                records.insert(rec.category, rec);
            }
        }
    }
    records
}

fn load_stats(db: &Database) -> UserStatistics {
    match db.kv_get(KEY_STATISTICS) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
        _ => UserStatistics::default(),
    }
}
