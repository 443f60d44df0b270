//! Persisted favorites set.
//!
//! A plain set of dessert identifiers. It holds no unlock logic; the
//! caller forwards each toggle outcome to the achievement engine so
//! the favorites count stays mirrored into the statistics.

use std::collections::BTreeSet;

use crate::storage::database::KEY_FAVORITES;
use crate::storage::Database;

/// Outcome of a toggle, to be forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Set of favorited dessert ids, persisted as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: BTreeSet<String>,
}

impl FavoritesSet {
    /// Load the persisted set. Missing or corrupt data yields an
    /// empty set.
    pub fn load(db: &Database) -> Self {
        let ids = match db.kv_get(KEY_FAVORITES) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            _ => BTreeSet::new(),
        };
        Self { ids }
    }

    /// Toggle membership of `id` and persist the new set.
    ///
    /// Returns whether the id was added or removed so the caller can
    /// notify the engine.
    pub fn toggle(&mut self, db: &Database, id: &str) -> FavoriteChange {
        let change = if self.ids.remove(id) {
            FavoriteChange::Removed
        } else {
            self.ids.insert(id.to_string());
            FavoriteChange::Added
        };
        self.save(db);
        change
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn all(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn save(&self, db: &Database) {
        let result = serde_json::to_string(&self.ids)
            .map_err(|e| e.to_string())
            .and_then(|json| db.kv_set(KEY_FAVORITES, &json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            if std::env::var("DOLCE_DEBUG").is_ok() {
                eprintln!("favorites persist failed (state kept in memory): {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let db = Database::open_memory().unwrap();
        let mut favorites = FavoritesSet::load(&db);

        assert_eq!(favorites.toggle(&db, "tiramisu"), FavoriteChange::Added);
        assert!(favorites.is_favorite("tiramisu"));
        assert_eq!(favorites.len(), 1);

        assert_eq!(favorites.toggle(&db, "tiramisu"), FavoriteChange::Removed);
        assert!(!favorites.is_favorite("tiramisu"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let db = Database::open_memory().unwrap();
        let mut favorites = FavoritesSet::load(&db);
        favorites.toggle(&db, "baklava");
        let before = favorites.clone();

        favorites.toggle(&db, "mochi");
        favorites.toggle(&db, "mochi");
        assert_eq!(favorites, before);
    }

    #[test]
    fn persists_across_reload() {
        let db = Database::open_memory().unwrap();
        let mut favorites = FavoritesSet::load(&db);
        favorites.toggle(&db, "churros");
        favorites.toggle(&db, "sachertorte");

        let reloaded = FavoritesSet::load(&db);
        assert_eq!(reloaded, favorites);
        assert!(reloaded.is_favorite("churros"));
    }

    #[test]
    fn corrupt_data_loads_empty() {
        let db = Database::open_memory().unwrap();
        db.kv_set(KEY_FAVORITES, "][").unwrap();
        let favorites = FavoritesSet::load(&db);
        assert!(favorites.is_empty());
    }
}
