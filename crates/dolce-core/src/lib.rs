//! # Dolce Core Library
//!
//! Core business logic for Dolce, a dessert-recipe companion. The
//! presentation layer (mobile UI or the CLI crate) is a thin shell
//! over this library: every user action becomes a tracking call into
//! the achievement engine, and the UI drains events afterwards.
//!
//! ## Architecture
//!
//! - **Achievement Engine**: maps tracked actions to progress updates
//!   over a fixed eight-entry catalog and fires unlock transitions
//!   exactly once
//! - **Statistics**: raw usage counters, viewed-country/dessert sets
//!   and the consecutive-day streak computation
//! - **Countdown Timer**: a wall-clock-based state machine that
//!   requires the caller to periodically invoke `tick()`
//! - **Storage**: SQLite-backed key-value persistence and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`AchievementEngine`]: tracking calls, unlock detection, persistence
//! - [`UserStatistics`]: raw counters and the streak algorithm
//! - [`FavoritesSet`]: persisted dessert-id set feeding the engine
//! - [`CountdownTimer`]: cooking countdown state machine

pub mod achievements;
pub mod error;
pub mod events;
pub mod favorites;
pub mod notify;
pub mod stats;
pub mod storage;
pub mod timer;

pub use achievements::{
    catalog, AchievementCategory, AchievementDefinition, AchievementEngine, AchievementRecord,
    AchievementStatus,
};
pub use error::{ConfigError, CoreError, DatabaseError};
pub use events::Event;
pub use favorites::{FavoriteChange, FavoritesSet};
pub use notify::{Notifier, NullNotifier, StderrNotifier};
pub use stats::UserStatistics;
pub use storage::{Config, Database};
pub use timer::{CountdownTimer, TimerState};
