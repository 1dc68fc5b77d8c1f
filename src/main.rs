//! Stopwatch Widget - a terminal-hosted stopwatch
//!
//! This is the main entry point for the stopwatch-widget application.

use std::io::{self, BufReader, IsTerminal};

use tokio::sync::mpsc;
use tracing::{error, info};

use stopwatch_widget::{
    config::{Config, OutputMode},
    controller::StopwatchController,
    display::{DisplaySurface, JsonLinesDisplay, TerminalDisplay},
    scheduler::TokioScheduler,
    tasks::{event_loop, spawn_input_reader},
    utils::{shutdown_signal, LogWriter},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout is the display surface. When both share a
    // terminal, each log clears the clock line first.
    let shared_terminal = config.output == OutputMode::Text
        && io::stdout().is_terminal()
        && io::stderr().is_terminal();
    tracing_subscriber::fmt()
        .with_writer(LogWriter::stderr(shared_terminal))
        .with_env_filter(format!("stopwatch_widget={}", config.log_level()))
        .init();

    info!("Starting stopwatch-widget v1.0.0");
    info!("Configuration: output={:?}, color={}, autostart={}",
          config.output, !config.no_color, config.autostart);

    let (events_tx, events_rx) = mpsc::unbounded_channel();

    let display: Box<dyn DisplaySurface> = match config.output {
        OutputMode::Text => Box::new(TerminalDisplay::stdout(!config.no_color)),
        OutputMode::Json => Box::new(JsonLinesDisplay::stdout()),
    };

    // Wiring problems are fatal: there is nothing to fall back to
    let mut controller = StopwatchController::builder()
        .display(display)
        .scheduler(TokioScheduler::new(events_tx.clone()))
        .build()?;

    // Without autostart, input that closes before any command leaves nothing to drive the stopwatch
    spawn_input_reader(BufReader::new(io::stdin()), events_tx, !config.autostart)?;

    info!("Commands (one per line):");
    info!("  start  | s - start or resume counting");
    info!("  pause  | p - pause counting");
    info!("  reset  | r - stop and return to 00:00:00");
    info!("  status     - log the current status");
    info!("  quit   | q - exit");

    if config.autostart {
        controller.start();
    }

    let shutdown = async {
        if let Err(e) = shutdown_signal().await {
            error!("Failed to install signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let result = event_loop(controller, events_rx, shutdown).await;

    if config.output == OutputMode::Text {
        println!();
    }
    let controller = result?;
    info!("Stopwatch stopped at {}", controller.display_text());
    Ok(())
}
