//! Session duration settings.

use chrono::Duration;

use crate::error::TomataError;
use crate::scheduler::SessionKind;

/// Length of each session kind, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    work: Duration,
    short_break: Duration,
    long_break: Duration,
}

impl Durations {
    /// The classic cadence: 25 minute work sessions, 5 minute short breaks,
    /// 15 minute long breaks.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            work: Duration::minutes(25),
            short_break: Duration::minutes(5),
            long_break: Duration::minutes(15),
        }
    }

    /// Create a set of durations, rejecting misconfiguration eagerly.
    ///
    /// # Errors
    ///
    /// Returns `TomataError::Config` if any duration is zero or negative;
    /// a countdown must have at least one second to count.
    pub fn new(
        work: Duration,
        short_break: Duration,
        long_break: Duration,
    ) -> Result<Self, TomataError> {
        for (name, duration) in [
            ("work", work),
            ("short break", short_break),
            ("long break", long_break),
        ] {
            if duration.num_seconds() <= 0 {
                return Err(TomataError::Config(format!(
                    "{name} duration must be positive, got {}s",
                    duration.num_seconds()
                )));
            }
        }

        Ok(Self {
            work,
            short_break,
            long_break,
        })
    }

    /// Duration of a session of the given kind. Idle has no countdown.
    #[must_use]
    pub fn for_kind(&self, kind: SessionKind) -> Duration {
        match kind {
            SessionKind::Work => self.work,
            SessionKind::ShortBreak => self.short_break,
            SessionKind::LongBreak => self.long_break,
            SessionKind::Idle => Duration::zero(),
        }
    }

    /// Countdown length in whole seconds for the given kind.
    #[must_use]
    pub fn seconds_for(&self, kind: SessionKind) -> u32 {
        u32::try_from(self.for_kind(kind).num_seconds().max(0)).unwrap_or(u32::MAX)
    }
}
