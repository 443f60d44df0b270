use clap::Subcommand;

use super::{open_engine, report_unlocks};

#[derive(Subcommand)]
pub enum TrackAction {
    /// Record a dessert recipe view
    View {
        /// Dessert identifier
        dessert_id: String,
        /// Country identifier the dessert belongs to
        country_id: String,
    },
    /// Record a cooking-timer usage
    Timer,
    /// Record a calorie calculation
    Calories,
    /// Record an app open (extends the daily streak)
    Open,
}

pub fn run(action: TrackAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        TrackAction::View {
            dessert_id,
            country_id,
        } => {
            engine.track_dessert_view(&dessert_id, &country_id);
            println!(
                "Viewed {dessert_id} ({country_id}); total views: {}",
                engine.stats().total_views
            );
        }
        TrackAction::Timer => {
            engine.track_timer_usage();
            println!("Timer usages: {}", engine.stats().timer_usages);
        }
        TrackAction::Calories => {
            engine.track_calorie_calculation();
            println!(
                "Calorie calculations: {}",
                engine.stats().calorie_calculations
            );
        }
        TrackAction::Open => {
            engine.track_app_open();
            println!("Streak: {}", engine.stats().consecutive_streak());
        }
    }

    report_unlocks(&mut engine);
    Ok(())
}
