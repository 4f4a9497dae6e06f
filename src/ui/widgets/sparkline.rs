//! Hourly sparkline widget for inline visualization

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Block characters for different levels (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A one-row sparkline with one cell per hour
pub struct HourSparkline<'a> {
    /// Value for each hour
    values: &'a [f64],
    /// Smallest value, maps to the lowest block
    min: f64,
    /// Largest value, maps to the full block
    max: f64,
    /// Highlighted hour (index into values)
    marker: Option<usize>,
    /// Style for the sparkline
    style: Style,
    /// Style for the highlighted hour
    marker_style: Style,
}

impl<'a> HourSparkline<'a> {
    /// Creates a sparkline scaled to the range of `values`
    pub fn new(values: &'a [f64]) -> Self {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        Self {
            values,
            min,
            max,
            marker: None,
            style: Style::default().fg(Color::Cyan),
            marker_style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn marker(mut self, index: usize) -> Self {
        self.marker = Some(index);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn value_to_block(&self, value: f64) -> char {
        let span = self.max - self.min;
        // Flat series sit in the middle
        if span <= 0.0 {
            return BLOCKS[3];
        }
        let normalized = ((value - self.min) / span).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }
}

impl<'a> Widget for HourSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;

        for (i, value) in self.values.iter().take(width).enumerate() {
            let block = self.value_to_block(*value);
            let x = area.x + i as u16;

            let style = if self.marker == Some(i) {
                self.marker_style
            } else {
                self.style
            };

            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(block).set_style(style);
            }
        }
    }
}
