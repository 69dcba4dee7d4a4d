//! Output trace widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::TRACE_SIZE;

/// Vertical bounds covering every value, padded so flat traces stay visible
pub fn value_bounds(values: &[f64]) -> [f64; 2] {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(0.5);
    [min - pad, max + pad]
}

/// Render the most recent generator outputs
pub fn render_trace(frame: &mut Frame, area: Rect, values: &[f64]) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL);

    let data: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let bounds = value_bounds(values);
    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, TRACE_SIZE as f64])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(bounds)
                .labels(vec![format!("{:.1}", bounds[0]), format!("{:.1}", bounds[1])])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_empty() {
        assert_eq!(value_bounds(&[]), [-1.0, 1.0]);
    }

    #[test]
    fn test_bounds_flat() {
        assert_eq!(value_bounds(&[2.0, 2.0]), [1.5, 2.5]);
    }

    #[test]
    fn test_bounds_cover_range() {
        let [lo, hi] = value_bounds(&[-3.0, 1.0, 7.0]);
        assert!(lo < -3.0);
        assert!(hi > 7.0);
    }
}
