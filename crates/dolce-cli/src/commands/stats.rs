use clap::Subcommand;

use super::open_engine;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Full user statistics as JSON
    Show,
    /// Current consecutive-day streak
    Streak,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(engine.stats())?);
        }
        StatsAction::Streak => {
            println!(
                "{}",
                serde_json::json!({ "streak": engine.stats().consecutive_streak() })
            );
        }
    }
    Ok(())
}
