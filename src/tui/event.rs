//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TomataError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or resume the countdown.
    Start,
    /// Pause the countdown.
    Pause,
    /// Reset the timer to idle.
    Reset,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, TomataError> {
    // Poll with a short timeout so the countdown keeps moving
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TomataError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TomataError::Terminal(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer controls
                KeyCode::Char('s') | KeyCode::Enter => return Ok(Some(Action::Start)),
                KeyCode::Char('p') => return Ok(Some(Action::Pause)),
                KeyCode::Char('r') => return Ok(Some(Action::Reset)),

                // Help
                KeyCode::Char('?') => {
                    app.status =
                        Some("s:start | p:pause | r:reset | q:quit".to_string());
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
