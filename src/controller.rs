//! Stopwatch controller
//!
//! Owns the elapsed-seconds counter and the single active timer registration,
//! and maps start/pause/reset and ticks onto state transitions. A timer handle
//! is held if and only if the stopwatch is running.

use tracing::{debug, info};

use crate::{
    display::DisplaySurface,
    error::SetupError,
    events::ControlEvent,
    format::TICK_PERIOD,
    scheduler::{Scheduler, TimerHandle},
    state::{StatusSnapshot, StopwatchState},
};

/// Stopwatch controller wired to a display surface and a scheduler
#[derive(Debug)]
pub struct StopwatchController<D: DisplaySurface, S: Scheduler> {
    state: StopwatchState,
    timer: Option<TimerHandle>,
    display: D,
    scheduler: S,
}

impl<D: DisplaySurface, S: Scheduler> StopwatchController<D, S> {
    /// Wire a controller and render the zero value
    pub fn new(display: D, scheduler: S) -> Self {
        let mut controller = Self {
            state: StopwatchState::new(),
            timer: None,
            display,
            scheduler,
        };
        controller.refresh();
        controller
    }

    /// Start a fail-fast builder
    pub fn builder() -> ControllerBuilder<D, S> {
        ControllerBuilder::default()
    }

    /// Begin (or restart) ticking; the counter is kept
    pub fn start(&mut self) {
        // A second start restarts the cadence rather than stacking registrations
        self.cancel_timer();
        self.timer = Some(self.scheduler.register(TICK_PERIOD));
        self.state.paused = false;
        self.state.record_action(ControlEvent::Start);
        info!("Stopwatch started at {}", self.state.display_text());
        self.refresh();
    }

    /// Stop ticking and mark the display paused
    pub fn pause(&mut self) {
        self.cancel_timer();
        self.state.paused = true;
        self.state.record_action(ControlEvent::Pause);
        info!("Stopwatch paused at {}", self.state.display_text());
        self.refresh();
    }

    /// Stop ticking and return to zero
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.state.reset();
        self.state.record_action(ControlEvent::Reset);
        info!("Stopwatch reset");
        self.refresh();
    }

    /// Apply one tick; ticks from any registration but the active one are dropped
    pub fn tick(&mut self, handle: TimerHandle) {
        if self.timer != Some(handle) {
            debug!("Ignoring stale tick from {}", handle);
            return;
        }

        self.state.increment();
        debug!("Tick: {}", self.state.elapsed_seconds);
        self.refresh();
    }

    /// Dispatch a control event
    pub fn handle(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Start => self.start(),
            ControlEvent::Pause => self.pause(),
            ControlEvent::Reset => self.reset(),
        }
    }

    /// Completed ticks since the last reset
    pub fn elapsed_seconds(&self) -> u64 {
        self.state.elapsed_seconds
    }

    /// Whether a timer registration is active
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the paused styling is on
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Active registration, if running
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// The formatted `HH:MM:SS` value
    pub fn display_text(&self) -> String {
        self.state.display_text()
    }

    /// Capture a status snapshot
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot::capture(&self.state, self.is_running())
    }

    /// The wired display surface
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The wired scheduler
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn refresh(&mut self) {
        self.display.set_paused(self.state.paused);
        self.display.render(&self.state.display_text());
    }
}

/// Collects collaborators and refuses to build until all are present
#[derive(Debug)]
pub struct ControllerBuilder<D, S> {
    display: Option<D>,
    scheduler: Option<S>,
}

impl<D, S> Default for ControllerBuilder<D, S> {
    fn default() -> Self {
        Self {
            display: None,
            scheduler: None,
        }
    }
}

impl<D: DisplaySurface, S: Scheduler> ControllerBuilder<D, S> {
    /// Wire the display surface
    pub fn display(mut self, display: D) -> Self {
        self.display = Some(display);
        self
    }

    /// Wire the scheduler
    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build the controller, failing if a collaborator is missing
    pub fn build(self) -> Result<StopwatchController<D, S>, SetupError> {
        let display = self.display.ok_or(SetupError::MissingDisplay)?;
        let scheduler = self.scheduler.ok_or(SetupError::MissingScheduler)?;
        Ok(StopwatchController::new(display, scheduler))
    }
}
