//! Application state for the TUI.

use crate::config::Durations;
use crate::scheduler::{SessionAlert, SessionScheduler};

/// Application state.
pub struct App {
    /// The scheduler owning all timer state.
    pub scheduler: SessionScheduler,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app with an idle scheduler.
    #[must_use]
    pub fn new(durations: Durations) -> Self {
        Self {
            scheduler: SessionScheduler::new(durations),
            status: Some("Press s to start, ? for help".to_string()),
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        let was_running = self.scheduler.snapshot().is_running;
        self.scheduler.start();
        if !was_running {
            let kind = self.scheduler.snapshot().kind;
            self.status = Some(format!("{} started", kind.display_name()));
        }
    }

    /// Pause the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        let snapshot = self.scheduler.snapshot();
        self.scheduler.pause();
        if snapshot.is_running {
            self.status = Some(format!("Paused ({}) ⏸", snapshot.kind.display_name()));
        }
    }

    /// Reset the timer to idle.
    pub fn reset(&mut self) {
        self.scheduler.reset();
        self.status = Some("Reset".to_string());
    }

    /// Record a completed session in the status line.
    pub fn on_alert(&mut self, alert: &SessionAlert) {
        let message = if alert.finished.is_break() {
            format!("Break is over! {} starts now.", alert.next.display_name())
        } else {
            format!(
                "Work session complete! Time for a {}.",
                alert.next.display_name().to_lowercase()
            )
        };
        self.status = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{SessionAlert, SessionKind};

    #[test]
    fn test_start_sets_status() {
        let mut app = App::new(Durations::standard());
        app.start();
        assert_eq!(app.status.as_deref(), Some("Work started"));
    }

    #[test]
    fn test_pause_names_the_paused_session() {
        let mut app = App::new(Durations::standard());
        app.start();
        app.pause();
        assert_eq!(app.status.as_deref(), Some("Paused (Work) ⏸"));
    }

    #[test]
    fn test_pause_while_idle_keeps_status() {
        let mut app = App::new(Durations::standard());
        app.pause();
        assert_eq!(app.status.as_deref(), Some("Press s to start, ? for help"));
    }

    #[test]
    fn test_alert_messages() {
        let mut app = App::new(Durations::standard());

        app.on_alert(&SessionAlert {
            finished: SessionKind::Work,
            next: SessionKind::ShortBreak,
        });
        assert_eq!(
            app.status.as_deref(),
            Some("Work session complete! Time for a short break.")
        );

        app.on_alert(&SessionAlert {
            finished: SessionKind::ShortBreak,
            next: SessionKind::Work,
        });
        assert_eq!(app.status.as_deref(), Some("Break is over! Work starts now."));
    }
}
