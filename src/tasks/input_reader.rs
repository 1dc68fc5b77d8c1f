//! Reads control commands from user input

use std::{
    io::BufRead,
    thread::{self, JoinHandle},
};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info, warn};

use crate::events::Event;

/// Forward every recognised line of `input` as an event.
///
/// Returns the number of events forwarded once input ends, a read fails, or
/// the event channel is closed. With `require_controls`, input that ends
/// before anything was forwarded posts [`Event::ControlsUnavailable`].
pub fn read_commands<R: BufRead>(
    input: R,
    events: &UnboundedSender<Event>,
    require_controls: bool,
) -> usize {
    let mut forwarded = 0;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Event>() {
            Ok(event) => {
                debug!("Input event: {:?}", event);
                if events.send(event).is_err() {
                    debug!("Event loop gone, stopping input reader");
                    return forwarded;
                }
                forwarded += 1;
            }
            Err(e) => warn!("{} (use start, pause, reset, status or quit)", e),
        }
    }

    if forwarded == 0 && require_controls {
        error!("Input closed before any command was read, nothing can start the stopwatch");
        let _ = events.send(Event::ControlsUnavailable);
    } else {
        info!("Input closed, controls are no longer available");
    }
    forwarded
}

/// Read commands on a dedicated thread so blocking reads never stall the runtime
pub fn spawn_input_reader<R>(
    input: R,
    events: UnboundedSender<Event>,
    require_controls: bool,
) -> std::io::Result<JoinHandle<usize>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || read_commands(input, &events, require_controls))
}
