use clap::Subcommand;

use dolce_core::storage::database::KEY_TIMER;
use dolce_core::storage::Database;
use dolce_core::{Config, CountdownTimer, TimerState};

use super::{open_engine, report_unlocks};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a countdown (also counts as a timer usage)
    Start {
        /// Duration in minutes (defaults to the configured value)
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Cancel the countdown
    Stop,
    /// Print current timer state as JSON
    Status,
}

fn load_timer(db: &Database) -> Option<CountdownTimer> {
    let json = db.kv_get(KEY_TIMER).ok()??;
    serde_json::from_str(&json).ok()
}

fn save_timer(db: &Database, timer: &CountdownTimer) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(timer)?;
    db.kv_set(KEY_TIMER, &json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        TimerAction::Start { minutes } => {
            let minutes = minutes.unwrap_or_else(|| Config::load().timer.default_minutes);
            let mut timer = CountdownTimer::new(u64::from(minutes) * 60);
            timer.start();
            save_timer(engine.db(), &timer)?;
            engine.track_timer_usage();
            println!("Timer started: {minutes} min");
            report_unlocks(&mut engine);
        }
        TimerAction::Pause => {
            let Some(mut timer) = load_timer(engine.db()) else {
                return Err("no timer running".into());
            };
            if timer.pause().is_none() {
                return Err("timer is not running".into());
            }
            save_timer(engine.db(), &timer)?;
            println!("Paused with {} ms remaining", timer.remaining_ms());
        }
        TimerAction::Resume => {
            let Some(mut timer) = load_timer(engine.db()) else {
                return Err("no timer running".into());
            };
            if timer.resume().is_none() {
                return Err("timer is not paused".into());
            }
            save_timer(engine.db(), &timer)?;
            println!("Resumed with {} ms remaining", timer.remaining_ms());
        }
        TimerAction::Stop => {
            let Some(mut timer) = load_timer(engine.db()) else {
                return Err("no timer running".into());
            };
            timer.stop();
            save_timer(engine.db(), &timer)?;
            println!("Timer stopped");
        }
        TimerAction::Status => {
            let Some(mut timer) = load_timer(engine.db()) else {
                println!("{}", serde_json::json!({ "state": "idle" }));
                return Ok(());
            };
            // Flush wall-clock time so the printed state is current.
            timer.tick();
            save_timer(engine.db(), &timer)?;
            if timer.state() == TimerState::Completed {
                println!("{}", serde_json::json!({ "state": "completed" }));
            } else {
                println!("{}", serde_json::to_string_pretty(&timer)?);
            }
        }
    }
    Ok(())
}
