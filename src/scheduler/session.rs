//! Session kinds and the cadence rule.

use serde::{Deserialize, Serialize};

use crate::config::Durations;

/// Kind of session the timer can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// A focused work session.
    Work,
    /// A short break between work sessions.
    ShortBreak,
    /// The long break closing a full cycle.
    LongBreak,
    /// No countdown active; the initial and post-reset state.
    Idle,
}

impl SessionKind {
    /// The session kind for the given repetition, counting from 1.
    ///
    /// Every 8th repetition is a long break, every other even repetition a
    /// short break, and every odd repetition a work session, so the cycle
    /// runs work, short break, work, short break, ... long break - four
    /// work sessions per cycle.
    #[must_use]
    pub const fn for_repetition(repetition: u32) -> Self {
        if repetition % 8 == 0 {
            Self::LongBreak
        } else if repetition % 2 == 0 {
            Self::ShortBreak
        } else {
            Self::Work
        }
    }

    /// Header title shown above the countdown.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak | Self::LongBreak => "Break",
            Self::Idle => "Pomodoro",
        }
    }

    /// Subtitle shown under the title.
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::Work => "Focus time 💪",
            Self::ShortBreak => "Short break ☕",
            Self::LongBreak => "Long break 🌿",
            Self::Idle => "Ready",
        }
    }

    /// Name used in status messages and the plan listing.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
            Self::Idle => "Idle",
        }
    }

    /// Check if this is a break kind.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One entry in the cadence listing produced by `upcoming_sessions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedSession {
    /// Repetition number, counting from 1.
    pub repetition: u32,
    /// The session kind the cadence rule selects.
    pub kind: SessionKind,
    /// Planned length in seconds.
    pub seconds: u32,
}

/// List the first `count` sessions the cadence rule yields from a fresh
/// start. A pure function of the rule; starting the timer and letting it
/// run produces exactly this sequence.
#[must_use]
pub fn upcoming_sessions(durations: &Durations, count: u32) -> Vec<PlannedSession> {
    (1..=count)
        .map(|repetition| {
            let kind = SessionKind::for_repetition(repetition);
            PlannedSession {
                repetition,
                kind,
                seconds: durations.seconds_for(kind),
            }
        })
        .collect()
}
