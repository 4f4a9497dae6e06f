//! UI rendering module for hourcast
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. Rendering only reads the
//! [`App`]; every change goes through the view state.

pub mod controls;
pub mod forecast_chart;
pub mod help_overlay;
pub mod hour_panel;
pub mod widgets;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::view_state::DisplayMode;

pub use help_overlay::render as render_help_overlay;

/// Renders the whole screen
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `app` - The application state
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // location form + mode selector
            Constraint::Length(1), // status
            Constraint::Min(0),    // chart or hour panel
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    controls::render_inputs(frame, chunks[0], app);
    controls::render_status(frame, chunks[1], &app.view);
    render_body(frame, chunks[2], app);
    render_footer(frame, chunks[3], app.focus);

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Draws the mounted chart or the selected hour; nothing before the first
/// successful fetch
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.view.display_mode() {
        DisplayMode::Aggregate => {
            if let Some(chart) = app.chart.current() {
                forecast_chart::render(frame, area, chart.series());
            }
        }
        DisplayMode::SingleHour => {
            if let (Some(forecast), Some(reading)) =
                (app.view.forecast(), app.view.current_reading())
            {
                hour_panel::render(frame, area, forecast, &reading);
            }
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, focus: Focus) {
    let hints = match focus {
        Focus::None => "Tab edit  1-3 preset  m mode  ←/→ hour  ? help  q quit",
        Focus::Latitude | Focus::Longitude => "Type to edit  Tab next field  Esc/Enter done",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{loaded_app, offline_app};
    use crate::cli::StartupConfig;
    use crate::data::{forecast::fixtures::forecast, CoordinateInput, Hour};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_app(app: &App) -> String {
        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn test_aggregate_mode_shows_chart() {
        let app = loaded_app(StartupConfig::default(), forecast(0.0));
        let content = render_app(&app);

        assert!(content.contains("Location"));
        assert!(content.contains("Temperature (°C)"));
        assert!(content.contains("Precipitation Probability (%)"));
        assert!(!content.contains("Selected Hour"));
    }

    #[tokio::test]
    async fn test_single_hour_mode_shows_panel() {
        let config = StartupConfig {
            display_mode: DisplayMode::SingleHour,
            selected_hour: Hour::new(3).unwrap(),
            ..StartupConfig::default()
        };
        let app = loaded_app(config, forecast(0.0));
        let content = render_app(&app);

        assert!(content.contains("Selected Hour"));
        assert!(content.contains("Hour 3:"));
        assert!(content.contains("Temperature: 3°C"));
        assert!(!content.contains("Hourly Forecast"));
        assert!(app.chart.current().is_none());
    }

    #[tokio::test]
    async fn test_nothing_rendered_without_forecast() {
        let (mut app, _rx) = offline_app(StartupConfig {
            input: CoordinateInput::new("", "0"),
            ..StartupConfig::default()
        });
        app.start();
        let content = render_app(&app);

        assert!(content.contains("Invalid latitude or longitude value"));
        assert!(!content.contains("Hourly Forecast"));
        assert!(!content.contains("Selected Hour"));
    }

    #[tokio::test]
    async fn test_help_overlay_drawn_on_top() {
        let (mut app, _rx) = offline_app(StartupConfig::default());
        app.show_help = true;
        let content = render_app(&app);
        assert!(content.contains("Keyboard Shortcuts"));
    }

    #[tokio::test]
    async fn test_footer_changes_while_editing() {
        let (mut app, _rx) = offline_app(StartupConfig::default());
        app.focus = Focus::Latitude;
        let content = render_app(&app);
        assert!(content.contains("Type to edit"));
    }
}
