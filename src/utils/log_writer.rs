//! Log writer that keeps stderr output off the live clock line

use std::io::{self, Stderr, Write};

use tracing_subscriber::fmt::MakeWriter;

const CLEAR_LINE: &[u8] = b"\r\x1b[2K";

/// Hands tracing one writer per log event.
///
/// With `clear_line` set, each event first wipes the terminal line so a log
/// never lands on the end of the clock; the next render redraws the clock
/// below it.
#[derive(Debug, Clone, Copy)]
pub struct LogWriter {
    clear_line: bool,
}

impl LogWriter {
    /// Log to stderr, optionally clearing the current line before each event
    pub fn stderr(clear_line: bool) -> Self {
        Self { clear_line }
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LineClearing<Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        LineClearing::new(io::stderr(), self.clear_line)
    }
}

/// Writer that emits a clear-line sequence before its first byte
#[derive(Debug)]
pub struct LineClearing<W: Write> {
    inner: W,
    pending_clear: bool,
}

impl<W: Write> LineClearing<W> {
    /// Wrap `inner`; nothing extra is written when `clear_line` is false
    pub fn new(inner: W, clear_line: bool) -> Self {
        Self {
            inner,
            pending_clear: clear_line,
        }
    }

    /// Take back the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for LineClearing<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.pending_clear && !buf.is_empty() {
            self.inner.write_all(CLEAR_LINE)?;
            self.pending_clear = false;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
