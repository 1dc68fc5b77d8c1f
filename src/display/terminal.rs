//! Terminal display: one self-rewriting line

use std::io::{self, IsTerminal, Stdout, Write};

use tracing::warn;

use super::DisplaySurface;

const PAUSED_STYLE: &str = "\x1b[31m";
const RESET_STYLE: &str = "\x1b[0m";

/// Writes the clock to a terminal, colouring it red while paused
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
    interactive: bool,
    color: bool,
    paused: bool,
}

impl TerminalDisplay<Stdout> {
    /// Display on stdout; falls back to one line per render when stdout is not a terminal
    pub fn stdout(color: bool) -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self::new(out, interactive, color && interactive)
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Display on any writer; `interactive` rewrites one line in place
    pub fn new(out: W, interactive: bool, color: bool) -> Self {
        Self {
            out,
            interactive,
            color,
            paused: false,
        }
    }

    /// Take back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let (start, end) = if self.color && self.paused {
            (PAUSED_STYLE, RESET_STYLE)
        } else {
            ("", "")
        };

        if self.interactive {
            // Clear the line so a shorter value leaves no residue
            write!(self.out, "\r\x1b[2K{}{}{}", start, text, end)?;
        } else {
            writeln!(self.out, "{}{}{}", start, text, end)?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn render(&mut self, text: &str) {
        if let Err(e) = self.write_line(text) {
            warn!("Failed to write display: {}", e);
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
