//! Achievement catalog and the engine that unlocks it.

mod catalog;
mod engine;

pub use catalog::{catalog, AchievementCategory, AchievementDefinition};
pub use engine::{AchievementEngine, AchievementRecord, AchievementStatus};
