//! Pomodoro session scheduling.
//!
//! `SessionScheduler` owns all timer state - the current session kind, the
//! countdown, the repetition count - and enforces the cadence between work
//! and break sessions. The presentation layer drives it through
//! `start`/`pause`/`reset` plus a regular `poll`, and reads `Snapshot`s;
//! it never mutates state directly.
//!
//! The countdown is a single cancellable tick deadline. `start` arms it
//! only when no tick is outstanding, and `pause`/`reset` clear it before
//! touching anything else, so a stale tick can never mutate state after a
//! transition.

pub mod clock;
pub mod format;
pub mod session;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::Durations;

pub use clock::{Clock, SystemClock};
pub use session::{upcoming_sessions, PlannedSession, SessionKind};

/// Interval between countdown ticks.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Read-only view of the scheduler for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session currently displayed or counting.
    pub kind: SessionKind,
    /// Seconds left in the current session.
    pub remaining_seconds: u32,
    /// Seconds the current session started with.
    pub total_seconds: u32,
    /// Whether the countdown is actively ticking.
    pub is_running: bool,
    /// Completed work sessions; always derived from the repetition count.
    pub completed_work_sessions: u32,
}

/// Emitted exactly once when a session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionAlert {
    /// The session that just finished.
    pub finished: SessionKind,
    /// The session that starts in its place.
    pub next: SessionKind,
}

/// All mutable timer state, owned exclusively by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SchedulerState {
    repetitions: u32,
    kind: SessionKind,
    remaining_seconds: u32,
    total_seconds: u32,
    is_running: bool,
}

impl SchedulerState {
    const fn idle() -> Self {
        Self {
            repetitions: 0,
            kind: SessionKind::Idle,
            remaining_seconds: 0,
            total_seconds: 0,
            is_running: false,
        }
    }
}

/// The Pomodoro state machine and its countdown.
#[derive(Debug)]
pub struct SessionScheduler<C: Clock = SystemClock> {
    durations: Durations,
    state: SchedulerState,
    clock: C,
    /// Deadline of the single outstanding tick, if any.
    next_tick: Option<Instant>,
}

impl SessionScheduler<SystemClock> {
    /// Create an idle scheduler on the system clock.
    #[must_use]
    pub fn new(durations: Durations) -> Self {
        Self::with_clock(durations, SystemClock)
    }
}

impl<C: Clock> SessionScheduler<C> {
    /// Create an idle scheduler with an explicit time source.
    #[must_use]
    pub fn with_clock(durations: Durations, clock: C) -> Self {
        Self {
            durations,
            state: SchedulerState::idle(),
            clock,
            next_tick: None,
        }
    }

    /// Begin or resume counting down.
    ///
    /// No-op while already running, so a second tick can never be armed.
    /// A paused session resumes with its remaining time intact; otherwise
    /// the cadence rule selects and starts the next session.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        if self.state.remaining_seconds > 0 && self.state.total_seconds > 0 {
            self.state.is_running = true;
        } else {
            self.advance();
        }
        self.next_tick = Some(self.clock.now() + TICK_INTERVAL);
    }

    /// Stop the countdown, keeping the remaining time for resume.
    ///
    /// Idempotent. The pending tick is cancelled before anything else so it
    /// cannot fire late.
    pub fn pause(&mut self) {
        self.next_tick = None;
        self.state.is_running = false;
    }

    /// Return to the idle state, forgetting all progress.
    pub fn reset(&mut self) {
        self.next_tick = None;
        self.state = SchedulerState::idle();
    }

    /// Run every tick that has come due, returning one alert per completed
    /// session.
    ///
    /// Ticks are rescheduled one interval after their deadline, not one
    /// interval after the host got around to polling, so a stalled event
    /// loop loses no countdown seconds.
    pub fn poll(&mut self) -> Vec<SessionAlert> {
        let mut alerts = Vec::new();
        while let Some(deadline) = self.next_tick {
            if self.clock.now() < deadline {
                break;
            }
            self.next_tick = Some(deadline + TICK_INTERVAL);
            if let Some(alert) = self.tick() {
                alerts.push(alert);
            }
        }
        alerts
    }

    /// Read the current state for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.state.kind,
            remaining_seconds: self.state.remaining_seconds,
            total_seconds: self.state.total_seconds,
            is_running: self.state.is_running,
            completed_work_sessions: self.state.repetitions / 2,
        }
    }

    /// One countdown step. A freshly started session keeps its full
    /// duration until the first tick; the tick that empties the countdown
    /// completes the session and chains straight into the next one, with
    /// no idle gap.
    fn tick(&mut self) -> Option<SessionAlert> {
        if !self.state.is_running {
            // Stray tick after a cancellation in the same turn.
            return None;
        }
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        }
        if self.state.remaining_seconds == 0 {
            let finished = self.state.kind;
            self.advance();
            return Some(SessionAlert {
                finished,
                next: self.state.kind,
            });
        }
        None
    }

    /// The cadence rule: bump the repetition count and begin the session
    /// it selects.
    fn advance(&mut self) {
        self.state.repetitions += 1;
        let kind = SessionKind::for_repetition(self.state.repetitions);
        let seconds = self.durations.seconds_for(kind);
        self.state.kind = kind;
        self.state.total_seconds = seconds;
        self.state.remaining_seconds = seconds;
        self.state.is_running = true;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration as ChronoDuration;

    use super::clock::testing::ManualClock;
    use super::*;

    fn standard() -> SessionScheduler<ManualClock> {
        SessionScheduler::with_clock(Durations::standard(), ManualClock::new())
    }

    /// Tiny durations (3s work, 2s short break, 4s long break) so cycle
    /// tests stay readable.
    fn tiny() -> SessionScheduler<ManualClock> {
        let durations = Durations::new(
            ChronoDuration::seconds(3),
            ChronoDuration::seconds(2),
            ChronoDuration::seconds(4),
        )
        .unwrap();
        SessionScheduler::with_clock(durations, ManualClock::new())
    }

    fn assert_invariants(snapshot: &Snapshot) {
        assert!(snapshot.remaining_seconds <= snapshot.total_seconds);
        if snapshot.is_running {
            assert!(snapshot.total_seconds > 0);
        }
        if snapshot.kind == SessionKind::Idle {
            assert_eq!(snapshot.total_seconds, 0);
            assert!(!snapshot.is_running);
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let scheduler = standard();
        let snapshot = scheduler.snapshot();

        assert_eq!(snapshot.kind, SessionKind::Idle);
        assert_eq!(snapshot.remaining_seconds, 0);
        assert_eq!(snapshot.total_seconds, 0);
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.completed_work_sessions, 0);
    }

    #[test]
    fn test_first_start_begins_work_at_full_duration() {
        let mut scheduler = standard();
        scheduler.start();
        let snapshot = scheduler.snapshot();

        assert_eq!(snapshot.kind, SessionKind::Work);
        assert_eq!(snapshot.remaining_seconds, 25 * 60);
        assert_eq!(snapshot.total_seconds, 25 * 60);
        assert!(snapshot.is_running);
        assert_eq!(snapshot.completed_work_sessions, 0);
    }

    #[test]
    fn test_fresh_session_shows_full_duration_until_first_tick() {
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();

        // Display shows the full duration immediately after start.
        assert_eq!(scheduler.snapshot().remaining_seconds, 25 * 60);

        clock.advance_secs(1);
        assert!(scheduler.poll().is_empty());
        assert_eq!(scheduler.snapshot().remaining_seconds, 25 * 60 - 1);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();
        let before = scheduler.snapshot();

        scheduler.start();
        scheduler.start();
        assert_eq!(scheduler.snapshot(), before);

        // No second tick was armed: one elapsed second is one decrement.
        clock.advance_secs(1);
        scheduler.poll();
        assert_eq!(scheduler.snapshot().remaining_seconds, 25 * 60 - 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut scheduler = standard();
        scheduler.start();
        scheduler.pause();
        let once = scheduler.snapshot();
        scheduler.pause();
        assert_eq!(scheduler.snapshot(), once);

        // Pausing an idle scheduler is also a no-op.
        let mut idle = standard();
        idle.pause();
        assert_eq!(idle.snapshot().kind, SessionKind::Idle);
    }

    #[test]
    fn test_no_tick_fires_while_paused() {
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();
        clock.advance_secs(3);
        scheduler.poll();
        assert_eq!(scheduler.snapshot().remaining_seconds, 25 * 60 - 3);

        scheduler.pause();
        clock.advance_secs(120);
        assert!(scheduler.poll().is_empty());

        let snapshot = scheduler.snapshot();
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.remaining_seconds, 25 * 60 - 3);
    }

    #[test]
    fn test_resume_preserves_remaining_exactly() {
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();
        clock.advance_secs(10);
        scheduler.poll();

        scheduler.pause();
        clock.advance_secs(300);
        scheduler.start();

        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.kind, SessionKind::Work);
        assert_eq!(snapshot.remaining_seconds, 25 * 60 - 10);
        assert!(snapshot.is_running);

        // The countdown picks up where it left off, one second per second.
        clock.advance_secs(1);
        scheduler.poll();
        assert_eq!(scheduler.snapshot().remaining_seconds, 25 * 60 - 11);
    }

    #[test]
    fn test_reset_returns_to_idle_from_any_state() {
        // From running.
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();
        clock.advance_secs(5);
        scheduler.poll();
        scheduler.reset();
        assert_eq!(scheduler.snapshot(), standard().snapshot());

        // From paused.
        let mut scheduler = standard();
        scheduler.start();
        scheduler.pause();
        scheduler.reset();
        assert_eq!(scheduler.snapshot(), standard().snapshot());

        // From idle.
        let mut scheduler = standard();
        scheduler.reset();
        assert_eq!(scheduler.snapshot(), standard().snapshot());
    }

    #[test]
    fn test_stale_deadline_never_fires_after_reset() {
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();

        // A tick is armed; reset cancels it before it comes due.
        scheduler.reset();
        clock.advance_secs(600);
        assert!(scheduler.poll().is_empty());
        assert_eq!(scheduler.snapshot().kind, SessionKind::Idle);
        assert_eq!(scheduler.snapshot().remaining_seconds, 0);
    }

    #[test]
    fn test_stray_tick_while_paused_does_nothing() {
        let mut scheduler = standard();
        scheduler.start();
        scheduler.pause();
        let before = scheduler.snapshot();

        assert!(scheduler.tick().is_none());
        assert_eq!(scheduler.snapshot(), before);
    }

    #[test]
    fn test_exact_tick_count_completes_work_into_short_break() {
        let mut scheduler = standard();
        scheduler.start();

        let mut alerts = Vec::new();
        for _ in 0..25 * 60 {
            alerts.extend(scheduler.tick());
        }

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].finished, SessionKind::Work);
        assert_eq!(alerts[0].next, SessionKind::ShortBreak);

        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.kind, SessionKind::ShortBreak);
        assert_eq!(snapshot.remaining_seconds, 5 * 60);
        assert_eq!(snapshot.total_seconds, 5 * 60);
        assert!(snapshot.is_running);
        assert_eq!(snapshot.completed_work_sessions, 1);
    }

    #[test]
    fn test_poll_catches_up_after_a_stall() {
        let mut scheduler = standard();
        let clock = scheduler.clock.clone();
        scheduler.start();

        clock.advance_secs(7);
        assert!(scheduler.poll().is_empty());
        assert_eq!(scheduler.snapshot().remaining_seconds, 25 * 60 - 7);
    }

    #[test]
    fn test_completion_chains_with_no_idle_gap() {
        let mut scheduler = tiny();
        let clock = scheduler.clock.clone();
        scheduler.start();

        clock.advance_secs(3);
        let alerts = scheduler.poll();
        assert_eq!(alerts.len(), 1);

        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.kind, SessionKind::ShortBreak);
        assert!(snapshot.is_running);
        assert_eq!(snapshot.remaining_seconds, snapshot.total_seconds);
    }

    #[test]
    fn test_eighth_repetition_is_the_long_break() {
        let mut scheduler = tiny();
        scheduler.start();
        assert_eq!(scheduler.snapshot().kind, SessionKind::Work);

        let mut completions = Vec::new();
        while completions.len() < 7 {
            if let Some(alert) = scheduler.tick() {
                completions.push(alert);
            }
        }

        // Work, short, work, short, work, short, work have finished; the
        // eighth repetition begins.
        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.kind, SessionKind::LongBreak);
        assert_eq!(snapshot.total_seconds, 4);
        assert_eq!(snapshot.completed_work_sessions, 4);
        assert_eq!(completions[6].next, SessionKind::LongBreak);

        // And the cycle repeats: the long break completes into work.
        let mut after_long = None;
        while after_long.is_none() {
            after_long = scheduler.tick();
        }
        assert_eq!(scheduler.snapshot().kind, SessionKind::Work);
    }

    #[test]
    fn test_one_alert_per_completion_over_a_full_cycle() {
        let mut scheduler = tiny();
        scheduler.start();

        // 3+2 repeated three times, one more work, then the long break:
        // 8 sessions, 3*5 + 3 + 4 = 22 ticks.
        let mut alerts = Vec::new();
        for _ in 0..22 {
            alerts.extend(scheduler.tick());
        }
        assert_eq!(alerts.len(), 8);
        let breaks = alerts.iter().filter(|a| a.next.is_break()).count();
        assert_eq!(breaks, 4);
    }

    #[test]
    fn test_completed_work_is_always_half_the_repetitions() {
        let mut scheduler = tiny();
        scheduler.start();

        let mut completions = 0_u32;
        for _ in 0..200 {
            if scheduler.tick().is_some() {
                completions += 1;
                // Repetitions = completions + 1 (the initial start counts).
                assert_eq!(
                    scheduler.snapshot().completed_work_sessions,
                    (completions + 1) / 2
                );
            }
        }
        assert!(completions > 8);
    }

    #[test]
    fn test_invariants_hold_across_operation_sequences() {
        // Scripted op mixes; 0 = start, 1 = pause, 2 = reset, 3 = tick.
        let scripts: &[&[u8]] = &[
            &[0, 3, 3, 1, 0, 3, 2, 0],
            &[1, 2, 0, 0, 3, 1, 1, 3, 0, 3],
            &[0, 3, 3, 3, 3, 2, 2, 0, 1, 3],
            &[3, 3, 0, 1, 0, 3, 3, 3, 1, 2],
        ];

        for script in scripts {
            let mut scheduler = tiny();
            for &op in *script {
                match op {
                    0 => scheduler.start(),
                    1 => scheduler.pause(),
                    2 => scheduler.reset(),
                    _ => {
                        scheduler.tick();
                    }
                }
                assert_invariants(&scheduler.snapshot());
            }
        }
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut scheduler = standard();
        scheduler.start();
        let snapshot = scheduler.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
