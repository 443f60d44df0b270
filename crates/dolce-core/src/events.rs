use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementCategory;

/// Every state change in the system produces an Event.
/// The UI polls for events after each tracking call; it never observes
/// engine state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An achievement transitioned from locked to unlocked.
    /// Emitted exactly once per achievement.
    AchievementUnlocked {
        category: AchievementCategory,
        title: String,
        description: String,
        icon: String,
        progress: u32,
        target: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerCompleted {
        at: DateTime<Utc>,
    },
    /// Timer cancelled before completion.
    TimerStopped {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
}
