//! Progress reporting for bulk lookups.
//!
//! The bulk path emits one [`ProgressEvent`] per domain, in order. How an event
//! is shown is up to the [`ProgressSink`]: an interactive terminal redraws a
//! single line, anything else gets debug log lines.

use std::fmt;
use std::io::{IsTerminal, Write};

use log::debug;

/// Position within a batch: `current` of `total`, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

/// Receives progress events from a bulk run.
pub trait ProgressSink {
    fn on_progress(&mut self, event: ProgressEvent);

    /// Called once after the last event.
    fn finish(&mut self) {}
}

/// Redraws `Progress: i/n` in place on a terminal.
pub struct TerminalProgress<W: Write> {
    out: W,
    drawn: bool,
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, drawn: false }
    }
}

impl<W: Write> ProgressSink for TerminalProgress<W> {
    fn on_progress(&mut self, event: ProgressEvent) {
        // Progress is cosmetic; a failed redraw must not stop the run
        let _ = write!(self.out, "\rProgress: {event}");
        let _ = self.out.flush();
        self.drawn = true;
    }

    fn finish(&mut self) {
        if self.drawn {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }
}

/// Logs each event at debug level.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&mut self, event: ProgressEvent) {
        debug!("Progress: {event}");
    }
}

impl ProgressSink for Vec<ProgressEvent> {
    fn on_progress(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// Picks the sink for the current stdout: in-place redraws on a terminal, log
/// lines otherwise.
pub fn progress_for_stdout() -> Box<dyn ProgressSink> {
    let stdout = std::io::stdout();
    if stdout.is_terminal() {
        Box::new(TerminalProgress::new(stdout))
    } else {
        Box::new(LogProgress)
    }
}
