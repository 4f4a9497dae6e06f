//! Input form, mode selector and status line

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::all_presets;
use crate::view_state::{DisplayMode, ErrorKind, ViewState};

/// Cursor drawn after the focused field's text
const CURSOR: &str = "▏";

fn field_line(name: &str, text: &str, focused: bool) -> Line<'static> {
    let (value_style, cursor) = if focused {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            CURSOR,
        )
    } else {
        (Style::default().fg(Color::White), "")
    };

    Line::from(vec![
        Span::styled(format!("{:<11}", name), Style::default().fg(Color::Gray)),
        Span::raw("["),
        Span::styled(format!("{}{}", text, cursor), value_style),
        Span::raw("]"),
    ])
}

fn preset_line() -> Line<'static> {
    let mut spans = vec![Span::styled("Presets:   ", Style::default().fg(Color::Gray))];
    for (i, preset) in all_presets().iter().enumerate() {
        spans.push(Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!("{}  ", preset.name)));
    }
    Line::from(spans)
}

/// Coordinate fields and preset shortcuts
pub fn coordinate_lines(app: &App) -> Vec<Line<'static>> {
    let input = app.view.input();
    vec![
        field_line("Latitude:", &input.latitude, app.focus == Focus::Latitude),
        field_line("Longitude:", &input.longitude, app.focus == Focus::Longitude),
        preset_line(),
    ]
}

/// Mode selector, plus the hour selector in single-hour mode
pub fn mode_line(view: &ViewState) -> Line<'static> {
    let mut spans = vec![Span::styled("Display: ", Style::default().fg(Color::Gray))];

    for mode in [DisplayMode::Aggregate, DisplayMode::SingleHour] {
        if mode == view.display_mode() {
            spans.push(Span::styled(
                format!("[{}]", mode.label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", mode.label()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if view.display_mode() == DisplayMode::SingleHour {
        spans.push(Span::styled("   Hour: ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("◀ {:>2} ▶", view.selected_hour().value()),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Error banner, or a loading notice while a fetch is in flight
pub fn status_line(view: &ViewState) -> Option<Line<'static>> {
    if let Some(banner) = view.error() {
        let label = match banner.kind {
            ErrorKind::Validation => "Error: ",
            ErrorKind::Fetch => "Fetch error: ",
        };
        return Some(Line::from(vec![
            Span::styled(
                label,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(banner.message.clone(), Style::default().fg(Color::Red)),
        ]));
    }

    if view.is_loading() {
        return Some(Line::from(Span::styled(
            "Loading forecast...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    None
}

/// Renders the input form block
pub fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Location ");

    let mut lines = coordinate_lines(app);
    lines.push(mode_line(&app.view));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the status line; an empty area when there is nothing to say
pub fn render_status(frame: &mut Frame, area: Rect, view: &ViewState) {
    if let Some(line) = status_line(view) {
        frame.render_widget(Paragraph::new(line), area);
    }
}
