use clap::Subcommand;

use dolce_core::{FavoriteChange, FavoritesSet};

use super::{open_engine, report_unlocks};

#[derive(Subcommand)]
pub enum FavoriteAction {
    /// Toggle a dessert in the favorites set
    Toggle {
        /// Dessert identifier
        id: String,
    },
    /// List favorited dessert ids as JSON
    List,
}

pub fn run(action: FavoriteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;
    let mut favorites = FavoritesSet::load(engine.db());

    match action {
        FavoriteAction::Toggle { id } => {
            match favorites.toggle(engine.db(), &id) {
                FavoriteChange::Added => {
                    engine.track_favorite_added();
                    println!("Added {id} to favorites ({})", favorites.len());
                }
                FavoriteChange::Removed => {
                    engine.track_favorite_removed();
                    println!("Removed {id} from favorites ({})", favorites.len());
                }
            }
            report_unlocks(&mut engine);
        }
        FavoriteAction::List => {
            println!("{}", serde_json::to_string_pretty(favorites.all())?);
        }
    }
    Ok(())
}
