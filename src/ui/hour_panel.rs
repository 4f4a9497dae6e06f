//! Single-hour panel
//!
//! Shows the four scalar readings for the selected hour, with a temperature
//! sparkline of the whole day underneath marking where that hour sits.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::{ForecastData, HourReading};
use crate::ui::widgets::HourSparkline;

/// Same hue as the temperature line of the chart
const TEMPERATURE_COLOR: Color = Color::Rgb(255, 99, 132);

/// Builds the panel text
///
/// Values are printed as delivered; whole numbers have no decimals.
pub fn reading_lines(reading: &HourReading) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("Hour {}:", reading.hour),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        value_line("Temperature", format!("{}°C", reading.temperature_c)),
        value_line(
            "Precipitation Probability",
            format!("{}%", reading.precipitation_probability_pct),
        ),
        value_line(
            "Surface Pressure",
            format!("{} hPa", reading.surface_pressure_hpa),
        ),
        value_line("Visibility", format!("{} km", reading.visibility_km)),
    ]
}

fn value_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Renders the panel for the selected hour of `forecast`
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - Area to draw in
/// * `forecast` - Loaded forecast
/// * `reading` - Values for the selected hour
pub fn render(frame: &mut Frame, area: Rect, forecast: &ForecastData, reading: &HourReading) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Selected Hour ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // readings
            Constraint::Length(1), // spacer
            Constraint::Length(1), // sparkline
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(reading_lines(reading)), chunks[0]);

    let sparkline = HourSparkline::new(forecast.temperature_c())
        .marker(reading.hour.index())
        .style(Style::default().fg(TEMPERATURE_COLOR));
    frame.render_widget(sparkline, chunks[2]);
}
