//! Derived display values.
//!
//! Pure functions of a snapshot, never stored state, so the display can
//! never diverge from the scheduler.

/// Format a second count as `MM:SS`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One checkmark per completed work session.
#[must_use]
pub fn checkmarks(completed_work_sessions: u32) -> String {
    "✔".repeat(completed_work_sessions as usize)
}
