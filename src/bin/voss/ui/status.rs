//! Status bar widget

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::ScopeInfo;

/// Render the status bar
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    info: &ScopeInfo,
    step: Option<i64>,
    value: Option<f64>,
    slope: Option<f64>,
) {
    let block = Block::default()
        .title(" Voss ")
        .borders(Borders::ALL);

    let label = Style::default().fg(Color::DarkGray);
    let field = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Mode: ", label),
        Span::styled(info.mode, field),
        Span::styled("  Octaves: ", label),
        Span::styled(info.octaves.to_string(), field),
        Span::styled("  Seed: ", label),
        Span::styled(info.seed.to_string(), field),
    ];
    if let Some(floor) = info.floor {
        spans.push(Span::styled("  Floor: ", label));
        spans.push(Span::styled(format!("{:.2}", floor), field));
    }
    spans.extend([
        Span::styled("  Step: ", label),
        Span::styled(step.map_or_else(|| "-".to_string(), |s| s.to_string()), field),
        Span::styled("  Value: ", label),
        Span::styled(value.map_or_else(|| "-".to_string(), |v| format!("{:+.3}", v)), field),
        Span::styled("  Slope: ", label),
        Span::styled(
            slope.map_or_else(|| "-".to_string(), |s| format!("{:+.2}", s)),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
