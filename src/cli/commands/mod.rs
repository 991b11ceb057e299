//! Command implementations for tomata.

mod completions;

pub use completions::completions;

use crate::cli::args::OutputFormat;
use crate::config::Durations;
use crate::error::TomataError;
use crate::output::{format_plan, format_snapshot};
use crate::scheduler::{upcoming_sessions, Snapshot};

/// Execute the plan command: list the upcoming session cadence.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn plan(sessions: u32, format: OutputFormat) -> Result<String, TomataError> {
    let entries = upcoming_sessions(&Durations::standard(), sessions);
    format_plan(&entries, format)
}

/// Format the end-of-run summary printed after the timer exits.
///
/// An untouched timer (quit without ever starting) prints nothing.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn summary(snapshot: &Snapshot, format: OutputFormat) -> Result<String, TomataError> {
    if snapshot.total_seconds == 0 && snapshot.completed_work_sessions == 0 {
        return Ok(String::new());
    }
    format_snapshot(snapshot, format)
}
