//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::scheduler::format::{checkmarks, format_mmss};
use crate::scheduler::{SessionKind, Snapshot};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let snapshot = app.scheduler.snapshot();

    // Create layout: header, countdown, progress, checkmarks, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Min(1),    // Checkmarks
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, &snapshot, chunks[0]);
    render_countdown(frame, &snapshot, chunks[1]);
    render_progress(frame, &snapshot, chunks[2]);
    render_checkmarks(frame, &snapshot, chunks[3]);
    render_status_bar(frame, app, &snapshot, chunks[4]);
}

/// Accent color for a session kind.
const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Red,
        SessionKind::ShortBreak | SessionKind::LongBreak => Color::Green,
        SessionKind::Idle => Color::Cyan,
    }
}

/// Render the session title and subtitle.
fn render_header(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let color = kind_color(snapshot.kind);

    let lines = vec![
        Line::from(Span::styled(
            snapshot.kind.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            snapshot.kind.subtitle(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(header, area);
}

/// Render the countdown as MM:SS.
fn render_countdown(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let style = if snapshot.is_running {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let countdown = Paragraph::new(Line::from(Span::styled(
        format_mmss(snapshot.remaining_seconds),
        style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the elapsed-time gauge for the current session.
fn render_progress(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let ratio = if snapshot.total_seconds == 0 {
        0.0
    } else {
        f64::from(snapshot.total_seconds - snapshot.remaining_seconds)
            / f64::from(snapshot.total_seconds)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(kind_color(snapshot.kind)))
        .ratio(ratio.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

/// Render one checkmark per completed work session.
fn render_checkmarks(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let marks = Paragraph::new(Line::from(Span::styled(
        checkmarks(snapshot.completed_work_sessions),
        Style::default().fg(Color::Green),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(marks, area);
}

/// Render the status bar; the hints mirror whether the timer is running.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, snapshot: &Snapshot, area: Rect) {
    let hints = if snapshot.is_running {
        "p:pause | r:reset | q:quit"
    } else {
        "s:start | r:reset | q:quit"
    };
    let status_text = app.status.as_deref().unwrap_or(hints);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
