//! Aggregate chart: temperature and precipitation probability across the day

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::chart::ChartSeries;

/// Line colors, in series order
const SERIES_COLORS: [Color; 2] = [Color::Rgb(255, 99, 132), Color::Rgb(54, 162, 235)];

/// Below this width every hour label would collide with its neighbours
const MIN_WIDTH_FOR_ALL_LABELS: u16 = 80;

/// Renders the mounted chart
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - Area to draw in
/// * `series` - Labels and the two series from the mounted chart
pub fn render(frame: &mut Frame, area: Rect, series: &ChartSeries) {
    let points: Vec<Vec<(f64, f64)>> = series.series.iter().map(|line| line.points()).collect();

    let datasets: Vec<Dataset> = series
        .series
        .iter()
        .zip(points.iter())
        .zip(SERIES_COLORS)
        .map(|((line, data), color)| {
            Dataset::default()
                .name(line.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let title = match series.date {
        Some(date) => format!(" Hourly Forecast {} ", date.format("%Y-%m-%d")),
        None => " Hourly Forecast ".to_string(),
    };

    let [low, high] = series.y_bounds();
    let last_hour = series.labels.len().saturating_sub(1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(
            Axis::default()
                .title("Hour")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last_hour])
                .labels(x_labels(&series.labels, area.width)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(y_labels(low, high)),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// Axis labels are spaced evenly, so only the full set or the two ends
/// line up with their hours
fn x_labels(labels: &[u8], width: u16) -> Vec<String> {
    if width >= MIN_WIDTH_FOR_ALL_LABELS {
        labels.iter().map(|hour| hour.to_string()).collect()
    } else {
        labels
            .first()
            .into_iter()
            .chain(labels.last())
            .map(|hour| hour.to_string())
            .collect()
    }
}

fn y_labels(low: f64, high: f64) -> Vec<String> {
    let mid = (low + high) / 2.0;
    [low, mid, high]
        .iter()
        .map(|value| format!("{:.0}", value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart_series;
    use crate::data::forecast::fixtures::forecast;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(series: &ChartSeries, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), series))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_chart_renders_legend_labels() {
        let series = build_chart_series(&forecast(0.0));
        let content = render_to_string(&series, 120, 30);

        assert!(content.contains("Temperature (°C)"));
        assert!(content.contains("Precipitation Probability (%)"));
        assert!(content.contains("Hourly Forecast"));
    }

    #[test]
    fn test_chart_title_includes_date() {
        let data = forecast(0.0).with_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        let series = build_chart_series(&data);
        let content = render_to_string(&series, 120, 30);
        assert!(content.contains("2024-07-15"));
    }

    #[test]
    fn test_x_labels_full_set_when_wide() {
        let labels: Vec<u8> = (0..24).collect();
        let wide = x_labels(&labels, 120);
        assert_eq!(wide.len(), 24);
        assert_eq!(wide[23], "23");
    }

    #[test]
    fn test_x_labels_ends_when_narrow() {
        let labels: Vec<u8> = (0..24).collect();
        assert_eq!(x_labels(&labels, 40), vec!["0", "23"]);
    }

    #[test]
    fn test_y_labels_span_bounds() {
        assert_eq!(y_labels(0.0, 100.0), vec!["0", "50", "100"]);
    }

    #[test]
    fn test_narrow_chart_does_not_panic() {
        let series = build_chart_series(&forecast(0.0));
        let content = render_to_string(&series, 20, 6);
        assert!(!content.trim().is_empty());
    }
}
