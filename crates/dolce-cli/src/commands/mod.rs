pub mod achievements;
pub mod favorite;
pub mod stats;
pub mod timer;
pub mod track;

use std::time::Duration;

use dolce_core::storage::Database;
use dolce_core::{AchievementEngine, Config, Event, NullNotifier, StderrNotifier};

/// Number of countries in the bundled dessert catalog.
/// Becomes the completionist target.
pub const COUNTRY_TOTAL: u32 = 12;

/// Open the shared database and build the engine with the configured
/// notifier.
pub fn open_engine() -> Result<AchievementEngine, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load();
    let engine = if config.notifications.enabled {
        AchievementEngine::with_notifier(
            db,
            COUNTRY_TOTAL,
            Box::new(StderrNotifier),
            Duration::from_secs(config.notifications.delay_secs),
        )
    } else {
        AchievementEngine::with_notifier(db, COUNTRY_TOTAL, Box::new(NullNotifier), Duration::ZERO)
    };
    Ok(engine)
}

/// Drain queued events and print unlock announcements.
pub fn report_unlocks(engine: &mut AchievementEngine) {
    for event in engine.drain_events() {
        if let Event::AchievementUnlocked {
            title, description, ..
        } = event
        {
            println!("Achievement unlocked: {title} - {description}");
        }
    }
}
