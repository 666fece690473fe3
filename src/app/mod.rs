//! Console presentation helpers used by the lookup run.

pub mod progress;

// Re-export public API
pub use progress::{progress_for_stdout, LogProgress, ProgressEvent, ProgressSink, TerminalProgress};
