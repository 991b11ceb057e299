//! Output formatting for tomata.
//!
//! Formats the cadence plan and end-of-run summaries as colored text or
//! JSON, selected by the global `--output` flag.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TomataError;
use crate::scheduler::{PlannedSession, Snapshot};

pub use json::to_json;

/// Format the cadence plan based on output format.
///
/// # Errors
///
/// Returns `TomataError::Serialization` if JSON serialization fails.
pub fn format_plan(
    entries: &[PlannedSession],
    format: OutputFormat,
) -> Result<String, TomataError> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_plan_pretty(entries)),
        OutputFormat::Json => to_json(&entries),
    }
}

/// Format a scheduler snapshot based on output format.
///
/// # Errors
///
/// Returns `TomataError::Serialization` if JSON serialization fails.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, TomataError> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_snapshot_pretty(snapshot)),
        OutputFormat::Json => to_json(snapshot),
    }
}
