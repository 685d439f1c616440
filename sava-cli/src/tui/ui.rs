//! UI rendering using ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sava_core::{CountdownState, DisplaySection, TargetInstant};

use crate::render;

/// Primary text color
const ACCENT: Color = Color::White;
/// Secondary color for captions
const SECONDARY: Color = Color::Gray;
/// Dim text color
const DIM: Color = Color::DarkGray;

/// Render the reservation card
pub fn render(
    frame: &mut Frame,
    display: &DisplaySection,
    target: &TargetInstant,
    state: &CountdownState,
) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline + tagline
            Constraint::Min(9),    // Countdown card
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_heading(frame, display, rows[0]);
    render_card(frame, display, target, state, rows[1]);
    render_hints(frame, rows[2]);
}

fn render_heading(frame: &mut Frame, display: &DisplaySection, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            display.headline.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            display.tagline.as_str(),
            Style::default().fg(SECONDARY),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(heading, area);
}

fn render_card(
    frame: &mut Frame,
    display: &DisplaySection,
    target: &TargetInstant,
    state: &CountdownState,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIM))
        .title(Span::styled(
            format!(" {} ", render::timeline_caption(state)),
            Style::default().fg(SECONDARY),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Ship note + date
            Constraint::Length(2), // Counters
            Constraint::Min(0),
        ])
        .split(inner);

    let ship = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display.ship_note.as_str(),
            Style::default().fg(SECONDARY),
        )),
        Line::from(Span::styled(
            target.label(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(ship, sections[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(sections[1]);

    for ((value, unit), column) in render::counters(state).into_iter().zip(columns.iter()) {
        let counter = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(unit, Style::default().fg(SECONDARY))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(counter, *column);
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("q", Style::default().fg(ACCENT)),
        Span::styled(" quit", Style::default().fg(DIM)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}
