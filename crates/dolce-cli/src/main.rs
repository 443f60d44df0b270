use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dolce-cli", version, about = "Dolce CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tracking calls (dessert views, timer, calories, app opens)
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Favorites management
    Favorite {
        #[command(subcommand)]
        action: commands::favorite::FavoriteAction,
    },
    /// Achievement catalog and unlock state
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Usage statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Cooking countdown timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Track { action } => commands::track::run(action),
        Commands::Favorite { action } => commands::favorite::run(action),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Timer { action } => commands::timer::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
