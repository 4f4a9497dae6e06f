//! Chart series building and the chart slot
//!
//! [`build_chart_series`] is a pure projection of a forecast into what the
//! aggregate chart draws: one label per hour and two aligned series.
//! [`ChartSlot`] holds at most one built chart; mounting a new one releases
//! the previous instance first.

use chrono::NaiveDate;
use tracing::debug;

use crate::data::{ForecastData, HOURS_PER_DAY};

/// Legend label of the temperature series
pub const TEMPERATURE_LABEL: &str = "Temperature (°C)";
/// Legend label of the precipitation probability series
pub const PRECIPITATION_LABEL: &str = "Precipitation Probability (%)";

/// One line of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    pub label: &'static str,
    pub values: Vec<f64>,
}

impl SeriesLine {
    /// `(hour, value)` pairs for plotting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(hour, value)| (hour as f64, *value))
            .collect()
    }
}

/// Everything the aggregate chart needs
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Hour labels, `0..=23`
    pub labels: Vec<u8>,
    /// Temperature first, then precipitation probability
    pub series: [SeriesLine; 2],
    /// Forecast date for the title, when known
    pub date: Option<NaiveDate>,
}

impl ChartSeries {
    /// Y-axis range starting at zero, or lower when a value is negative
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self.series.iter().flat_map(|line| line.values.iter().copied());
        let (min, max) = values.fold((0.0_f64, 0.0_f64), |(min, max), v| (min.min(v), max.max(v)));

        let lower = min.floor();
        let upper = max.ceil();
        if upper > lower {
            [lower, upper]
        } else {
            [lower, lower + 1.0]
        }
    }
}

/// Builds the aggregate chart structure from a forecast
pub fn build_chart_series(forecast: &ForecastData) -> ChartSeries {
    ChartSeries {
        labels: (0..HOURS_PER_DAY as u8).collect(),
        series: [
            SeriesLine {
                label: TEMPERATURE_LABEL,
                values: forecast.temperature_c().to_vec(),
            },
            SeriesLine {
                label: PRECIPITATION_LABEL,
                values: forecast.precipitation_probability_pct().to_vec(),
            },
        ],
        date: forecast.date(),
    }
}

/// A mounted chart instance
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    series: ChartSeries,
}

impl ChartHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }
}

/// Holds the single live chart
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<ChartHandle>,
    next_id: u64,
    released: u64,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases any live chart, then mounts one built from `series`
    pub fn mount(&mut self, series: ChartSeries) -> u64 {
        self.release();

        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(ChartHandle { id, series });
        debug!(chart = id, "chart mounted");
        id
    }

    /// Tears down the live chart; returns whether there was one
    pub fn release(&mut self) -> bool {
        match self.current.take() {
            Some(handle) => {
                self.released += 1;
                debug!(chart = handle.id, "chart released");
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    /// Number of charts torn down so far
    pub fn released_count(&self) -> u64 {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::forecast::fixtures::forecast;

    #[test]
    fn test_labels_are_hours_0_to_23() {
        let chart = build_chart_series(&forecast(0.0));
        assert_eq!(chart.labels, (0..24).collect::<Vec<u8>>());
    }

    #[test]
    fn test_two_series_match_source() {
        let data = forecast(0.25);
        let chart = build_chart_series(&data);

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, TEMPERATURE_LABEL);
        assert_eq!(chart.series[0].values, data.temperature_c());
        assert_eq!(chart.series[1].label, PRECIPITATION_LABEL);
        assert_eq!(chart.series[1].values, data.precipitation_probability_pct());
        for line in &chart.series {
            assert_eq!(line.values.len(), 24);
        }
    }

    #[test]
    fn test_pressure_and_visibility_are_not_charted() {
        let data = forecast(0.0);
        let chart = build_chart_series(&data);
        for line in &chart.series {
            assert_ne!(line.values, data.surface_pressure_hpa());
            assert_ne!(line.values, data.visibility_km());
        }
    }

    #[test]
    fn test_points_pair_hour_with_value() {
        let chart = build_chart_series(&forecast(0.0));
        let points = chart.series[0].points();
        assert_eq!(points.len(), 24);
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[23], (23.0, 23.0));
    }

    #[test]
    fn test_y_bounds_begin_at_zero() {
        let chart = build_chart_series(&forecast(0.0));
        // Precipitation fixture runs 100..=123
        assert_eq!(chart.y_bounds(), [0.0, 123.0]);
    }

    #[test]
    fn test_y_bounds_extend_below_zero() {
        let chart = build_chart_series(&forecast(-10.5));
        assert_eq!(chart.y_bounds()[0], -11.0);
    }

    #[test]
    fn test_y_bounds_for_all_zero_data() {
        let chart = ChartSeries {
            labels: (0..24).collect(),
            series: [
                SeriesLine {
                    label: TEMPERATURE_LABEL,
                    values: vec![0.0; 24],
                },
                SeriesLine {
                    label: PRECIPITATION_LABEL,
                    values: vec![0.0; 24],
                },
            ],
            date: None,
        };
        assert_eq!(chart.y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_slot_starts_empty() {
        let slot = ChartSlot::new();
        assert!(slot.current().is_none());
        assert_eq!(slot.released_count(), 0);
    }

    #[test]
    fn test_mount_replaces_previous_chart() {
        let mut slot = ChartSlot::new();
        let first = slot.mount(build_chart_series(&forecast(0.0)));
        let second = slot.mount(build_chart_series(&forecast(1.0)));

        assert_ne!(first, second);
        assert_eq!(slot.released_count(), 1);
        let current = slot.current().unwrap();
        assert_eq!(current.id(), second);
        assert_eq!(current.series().series[0].values[0], 1.0);
    }

    #[test]
    fn test_release_tears_down_once() {
        let mut slot = ChartSlot::new();
        slot.mount(build_chart_series(&forecast(0.0)));

        assert!(slot.release());
        assert!(!slot.release());
        assert!(slot.current().is_none());
        assert_eq!(slot.released_count(), 1);
    }
}
