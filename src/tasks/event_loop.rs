//! Event loop driving the stopwatch controller

use std::future::Future;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info, warn};

use crate::{
    controller::StopwatchController,
    display::DisplaySurface,
    error::SetupError,
    events::Event,
    scheduler::Scheduler,
};

/// Apply events to the controller in arrival order until quit, shutdown, or channel close.
///
/// Returns the controller so the caller can inspect its final state, or
/// [`SetupError::NoControls`] when input ended before any control arrived.
pub async fn event_loop<D, S, F>(
    mut controller: StopwatchController<D, S>,
    mut events: UnboundedReceiver<Event>,
    shutdown: F,
) -> Result<StopwatchController<D, S>, SetupError>
where
    D: DisplaySurface,
    S: Scheduler,
    F: Future<Output = ()>,
{
    info!("Starting stopwatch event loop");
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }

            event = events.recv() => match event {
                Some(Event::Control(control)) => controller.handle(control),
                Some(Event::Tick(handle)) => controller.tick(handle),
                Some(Event::Status) => log_status(&controller),
                Some(Event::Quit) => {
                    info!("Quit requested");
                    break;
                }
                Some(Event::ControlsUnavailable) => {
                    error!("No controls available, leaving event loop");
                    return Err(SetupError::NoControls);
                }
                None => {
                    warn!("Event channel closed, leaving event loop");
                    break;
                }
            },
        }
    }

    Ok(controller)
}

fn log_status<D: DisplaySurface, S: Scheduler>(controller: &StopwatchController<D, S>) {
    match serde_json::to_string(&controller.status()) {
        Ok(status) => info!("Status: {}", status),
        Err(e) => warn!("Failed to serialize status: {}", e),
    }
}
