//! Terminal user interface for the timer.
//!
//! A full-screen countdown with a session header, progress gauge, and a
//! checkmark tally of completed work sessions. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Durations;
use crate::error::TomataError;
use crate::scheduler::Snapshot;

/// Run the timer TUI until the user quits.
///
/// Returns the final snapshot so the caller can print a summary.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(durations: Durations) -> Result<Snapshot, TomataError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TomataError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomataError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomataError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(durations);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.scheduler.snapshot())
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TomataError> {
    loop {
        // Run any countdown ticks that came due since the last pass
        let alerts = app.scheduler.poll();
        for alert in alerts {
            app.on_alert(&alert);
            ring_bell();
        }

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomataError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Start => app.start(),
                event::Action::Pause => app.pause(),
                event::Action::Reset => app.reset(),
            }
        }
    }

    Ok(())
}

/// The single audible cue for a completed session.
fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
