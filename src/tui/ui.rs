//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::features::focus::{format_clock, format_duration, TimerPhase};
use crate::output::NO_SESSIONS;
use crate::tui::app::{App, Tab};
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.tab {
        Tab::Focus => render_focus(frame, app, chunks[1]),
        Tab::Stats => render_stats(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let tabs = Tabs::new(Tab::TITLES.to_vec())
        .select(app.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" QuestChat ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

const fn phase_color(phase: TimerPhase) -> Color {
    match phase {
        TimerPhase::Idle => Color::White,
        TimerPhase::Running => Color::Cyan,
        TimerPhase::Paused => Color::Yellow,
        TimerPhase::Finished => Color::Green,
    }
}

fn render_focus(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let engine = &app.engine;
    let phase = engine.phase();
    let color = phase_color(phase);

    let block = Block::default()
        .title(format!(" Focus · {} ", format_duration(engine.total_seconds())))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Phase
            Constraint::Length(1),
            Constraint::Length(3), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let clock = Paragraph::new(Line::from(Span::styled(
        format_clock(engine.seconds_remaining()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(clock, rows[1]);

    let label = match phase {
        TimerPhase::Finished => "Session complete".to_string(),
        _ => phase.to_string(),
    };
    let phase_line = Paragraph::new(Line::from(Span::styled(label, Style::default().fg(color))))
        .alignment(Alignment::Center);
    frame.render_widget(phase_line, rows[2]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(engine.progress().clamp(0.0, 1.0));
    frame.render_widget(gauge, rows[4]);
}

fn render_stats(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if app.stats.is_empty() {
        let empty = Paragraph::new(NO_SESSIONS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().title(" Stats ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let summary = Paragraph::new(app.stats.summary().format())
        .block(Block::default().title(" Summary ").borders(Borders::ALL));
    frame.render_widget(summary, chunks[0]);

    let items: Vec<ListItem<'_>> = app
        .stats
        .sessions()
        .iter()
        .map(|session| {
            ListItem::new(Line::from(vec![
                Span::raw(
                    session
                        .started_at_local()
                        .format("%Y-%m-%d %H:%M")
                        .to_string(),
                ),
                Span::styled(
                    format!("  {}", format_duration(session.duration_seconds())),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Sessions ({}) ", app.stats.sessions().len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or(HELP);
    let style = if app.pending_reset {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
