//! JSON-lines display for scripted hosts

use std::io::{self, Stdout, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::DisplaySurface;

/// One rendered frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub display: String,
    pub paused: bool,
    pub timestamp: DateTime<Utc>,
}

/// Emits one JSON object per render
#[derive(Debug)]
pub struct JsonLinesDisplay<W: Write> {
    out: W,
    paused: bool,
}

impl JsonLinesDisplay<Stdout> {
    /// Emit frames on stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLinesDisplay<W> {
    /// Emit frames on any writer
    pub fn new(out: W) -> Self {
        Self { out, paused: false }
    }

    /// Take back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for JsonLinesDisplay<W> {
    fn render(&mut self, text: &str) {
        let frame = Frame {
            display: text.to_string(),
            paused: self.paused,
            timestamp: Utc::now(),
        };
        if let Err(e) = self.write_frame(&frame) {
            warn!("Failed to write display frame: {}", e);
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
