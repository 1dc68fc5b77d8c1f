//! Stopwatch state structure and management

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::{events::ControlEvent, format::format_hms};

/// Everything the controller owns apart from its timer registration
#[derive(Debug, Clone)]
pub struct StopwatchState {
    /// Completed ticks since the last reset
    pub elapsed_seconds: u64,
    /// Presentational flag only; never consulted for behaviour
    pub paused: bool,
    /// Last control event applied, and when
    pub last_action: Option<ControlEvent>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub created_at: Instant,
}

impl StopwatchState {
    /// Create a zeroed, unpaused state
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            paused: false,
            last_action: None,
            last_action_time: None,
            created_at: Instant::now(),
        }
    }

    /// Count one completed tick
    pub fn increment(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    /// Zero the counter and clear the paused flag
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.paused = false;
    }

    /// Record which control event was applied last
    pub fn record_action(&mut self, action: ControlEvent) {
        self.last_action = Some(action);
        self.last_action_time = Some(Utc::now());
    }

    /// The current display text
    pub fn display_text(&self) -> String {
        format_hms(self.elapsed_seconds)
    }

    /// Time since the widget was wired, as a short human string
    pub fn uptime(&self) -> String {
        let secs = self.created_at.elapsed().as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_counter_and_flag() {
        let mut state = StopwatchState::new();
        state.increment();
        state.increment();
        state.paused = true;
        assert_eq!(state.display_text(), "00:00:02");

        state.reset();
        assert_eq!(state.elapsed_seconds, 0);
        assert!(!state.paused);
    }

    #[test]
    fn increment_saturates() {
        let mut state = StopwatchState::new();
        state.elapsed_seconds = u64::MAX;
        state.increment();
        assert_eq!(state.elapsed_seconds, u64::MAX);
    }

    #[test]
    fn record_action_stamps_time() {
        let mut state = StopwatchState::new();
        assert!(state.last_action_time.is_none());
        state.record_action(ControlEvent::Pause);
        assert_eq!(state.last_action, Some(ControlEvent::Pause));
        assert!(state.last_action_time.is_some());
    }

    #[test]
    fn fresh_uptime_is_in_seconds() {
        assert!(StopwatchState::new().uptime().ends_with('s'));
    }
}
