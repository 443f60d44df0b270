use clap::Subcommand;

use super::open_engine;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// All achievements with progress, catalog order
    List,
    /// Unlocked achievements ordered by unlock time
    Unlocked,
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;

    match action {
        AchievementsAction::List => {
            println!("{}", serde_json::to_string_pretty(&engine.statuses())?);
        }
        AchievementsAction::Unlocked => {
            println!("{}", serde_json::to_string_pretty(&engine.unlocked())?);
        }
    }
    Ok(())
}
