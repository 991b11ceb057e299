//! Human-readable colored output.

use colored::Colorize;

use crate::scheduler::format::{checkmarks, format_mmss};
use crate::scheduler::{PlannedSession, SessionKind, Snapshot};

/// Format the cadence plan as a table.
#[must_use]
pub fn format_plan_pretty(entries: &[PlannedSession]) -> String {
    let mut output = Vec::new();
    output.push("🍅 Upcoming sessions".bold().to_string());
    output.push("─".repeat(32));

    for entry in entries {
        // Pad before coloring so the escape codes don't skew the columns
        let padded = format!("{:<12}", entry.kind.display_name());
        let name = if entry.kind.is_break() {
            padded.green()
        } else {
            padded.red()
        };
        output.push(format!(
            "{:>3}. {} {}",
            entry.repetition,
            name,
            format_mmss(entry.seconds)
        ));
    }

    output.join("\n")
}

/// Format an end-of-run snapshot summary.
#[must_use]
pub fn format_snapshot_pretty(snapshot: &Snapshot) -> String {
    let mut output = Vec::new();

    let marks = checkmarks(snapshot.completed_work_sessions);
    output.push(format!(
        "Completed work sessions: {} {}",
        snapshot.completed_work_sessions,
        marks.green()
    ));

    if snapshot.kind != SessionKind::Idle {
        output.push(format!(
            "Left off in {} with {} remaining",
            snapshot.kind.display_name(),
            format_mmss(snapshot.remaining_seconds)
        ));
    }

    output.join("\n")
}
