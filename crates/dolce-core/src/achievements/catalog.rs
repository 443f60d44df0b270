//! Achievement definitions.
//!
//! The catalog built here is the canonical source of truth for
//! achievement metadata. Categories are stable across versions; their
//! snake_case string form is what gets persisted.

use serde::{Deserialize, Serialize};

/// The eight achievement kinds. One record exists per category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    FirstView,
    CountryExplorer,
    TimeKeeper,
    RecipeCollector,
    CalorieTracker,
    FavoriteCollector,
    WeeklyStreak,
    Completionist,
}

impl AchievementCategory {
    /// Stable string form, matching the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::FirstView => "first_view",
            AchievementCategory::CountryExplorer => "country_explorer",
            AchievementCategory::TimeKeeper => "time_keeper",
            AchievementCategory::RecipeCollector => "recipe_collector",
            AchievementCategory::CalorieTracker => "calorie_tracker",
            AchievementCategory::FavoriteCollector => "favorite_collector",
            AchievementCategory::WeeklyStreak => "weekly_streak",
            AchievementCategory::Completionist => "completionist",
        }
    }
}

/// Immutable catalog entry: display metadata plus the unlock target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub category: AchievementCategory,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub target: u32,
}

impl AchievementDefinition {
    fn new(
        category: AchievementCategory,
        title: &str,
        description: &str,
        icon: &str,
        target: u32,
    ) -> Self {
        Self {
            category,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            target,
        }
    }
}

/// Build the fixed eight-entry catalog.
///
/// `country_total` is the number of countries in the dessert catalog;
/// it becomes the completionist target. All other targets are fixed.
pub fn catalog(country_total: u32) -> Vec<AchievementDefinition> {
    use AchievementCategory::*;
    vec![
        AchievementDefinition::new(
            FirstView,
            "First Taste",
            "View your first dessert recipe.",
            "star.fill",
            1,
        ),
        AchievementDefinition::new(
            CountryExplorer,
            "Country Explorer",
            "Discover desserts from 5 different countries.",
            "globe",
            5,
        ),
        AchievementDefinition::new(
            TimeKeeper,
            "Time Keeper",
            "Use the cooking timer 10 times.",
            "timer",
            10,
        ),
        AchievementDefinition::new(
            RecipeCollector,
            "Recipe Collector",
            "View 20 dessert recipes.",
            "book.fill",
            20,
        ),
        AchievementDefinition::new(
            CalorieTracker,
            "Calorie Tracker",
            "Estimate calories 15 times.",
            "flame.fill",
            15,
        ),
        AchievementDefinition::new(
            FavoriteCollector,
            "Sweet Collector",
            "Keep 10 desserts in your favorites.",
            "heart.fill",
            10,
        ),
        AchievementDefinition::new(
            WeeklyStreak,
            "Weekly Streak",
            "Use the app 7 days in a row.",
            "calendar",
            7,
        ),
        AchievementDefinition::new(
            Completionist,
            "World Tour",
            "Discover desserts from every country.",
            "crown.fill",
            country_total,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_fixed_entries() {
        let defs = catalog(12);
        assert_eq!(defs.len(), 8);

        let target_of = |c: AchievementCategory| {
            defs.iter().find(|d| d.category == c).unwrap().target
        };
        assert_eq!(target_of(AchievementCategory::FirstView), 1);
        assert_eq!(target_of(AchievementCategory::CountryExplorer), 5);
        assert_eq!(target_of(AchievementCategory::TimeKeeper), 10);
        assert_eq!(target_of(AchievementCategory::RecipeCollector), 20);
        assert_eq!(target_of(AchievementCategory::CalorieTracker), 15);
        assert_eq!(target_of(AchievementCategory::FavoriteCollector), 10);
        assert_eq!(target_of(AchievementCategory::WeeklyStreak), 7);
        assert_eq!(target_of(AchievementCategory::Completionist), 12);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&AchievementCategory::WeeklyStreak).unwrap();
        assert_eq!(json, "\"weekly_streak\"");
        assert_eq!(AchievementCategory::WeeklyStreak.as_str(), "weekly_streak");
    }
}
