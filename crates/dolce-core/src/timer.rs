//! Cooking countdown timer.
//!
//! The timer is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically, and for stopping the tick source once the timer is
//! stopped so no periodic work outlives the owning screen.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused) -> Completed
//!           ^            |
//!           +--- stop ---+--> Idle
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Countdown timer for a single cooking step.
///
/// Operates on wall-clock deltas -- no internal thread. Serializable
/// so a CLI invocation can persist it between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    state: TimerState,
    /// Full duration in milliseconds.
    duration_ms: u64,
    /// Remaining time in milliseconds.
    remaining_ms: u64,
    /// Timestamp (ms since epoch) when the timer was last
    /// resumed/started. Used to compute elapsed time between ticks.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl CountdownTimer {
    /// Create an idle timer for the given duration.
    pub fn new(duration_secs: u64) -> Self {
        let duration_ms = duration_secs * 1000;
        Self {
            state: TimerState::Idle,
            duration_ms,
            remaining_ms: duration_ms,
            last_tick_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms as f64 / self.duration_ms as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Completed => {
                self.remaining_ms = self.duration_ms;
                self.state = TimerState::Running;
                self.last_tick_epoch_ms = Some(now_ms());
                Some(Event::TimerStarted {
                    duration_secs: self.duration_ms / 1000,
                    at: Utc::now(),
                })
            }
            _ => None, // Already running or paused.
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.flush_elapsed();
                self.state = TimerState::Paused;
                self.last_tick_epoch_ms = None;
                Some(Event::TimerPaused {
                    remaining_ms: self.remaining_ms,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    pub fn resume(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.last_tick_epoch_ms = Some(now_ms());
                Some(Event::TimerResumed {
                    remaining_ms: self.remaining_ms,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Cancel the countdown. Clears the wall-clock anchor so an
    /// abandoned timer holds no scheduling state; the caller must
    /// stop its tick source.
    pub fn stop(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running | TimerState::Paused => {
                self.flush_elapsed();
                let remaining_ms = self.remaining_ms;
                self.state = TimerState::Idle;
                self.remaining_ms = self.duration_ms;
                self.last_tick_epoch_ms = None;
                Some(Event::TimerStopped {
                    remaining_ms,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Call periodically while running. Returns
    /// `Some(Event::TimerCompleted)` when the countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed();
        if self.remaining_ms == 0 {
            self.state = TimerState::Completed;
            self.last_tick_epoch_ms = None;
            return Some(Event::TimerCompleted { at: Utc::now() });
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self) {
        if let Some(last) = self.last_tick_epoch_ms {
            let now = now_ms();
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_resume() {
        let mut timer = CountdownTimer::new(600);
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);

        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);

        assert!(timer.resume().is_some());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut timer = CountdownTimer::new(600);
        assert!(timer.start().is_some());
        assert!(timer.start().is_none());
    }

    #[test]
    fn stop_returns_to_idle_and_resets() {
        let mut timer = CountdownTimer::new(600);
        timer.start();
        let event = timer.stop();
        assert!(matches!(event, Some(Event::TimerStopped { .. })));
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_ms(), 600_000);
        // The wall-clock anchor is gone; a later tick does nothing.
        assert!(timer.tick().is_none());
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut timer = CountdownTimer::new(0);
        timer.start();
        let event = timer.tick();
        assert!(matches!(event, Some(Event::TimerCompleted { .. })));
        assert_eq!(timer.state(), TimerState::Completed);
    }

    #[test]
    fn pause_preserves_remaining_time() {
        let mut timer = CountdownTimer::new(600);
        timer.start();
        timer.pause();
        let remaining = timer.remaining_ms();
        assert!(remaining <= 600_000);
        // Paused timers do not drain.
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_ms(), remaining);
    }

    #[test]
    fn serde_roundtrip_preserves_state() {
        let mut timer = CountdownTimer::new(300);
        timer.start();
        timer.pause();

        let json = serde_json::to_string(&timer).unwrap();
        let loaded: CountdownTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.state(), TimerState::Paused);
        assert_eq!(loaded.remaining_ms(), timer.remaining_ms());
    }
}
