//! Dashboard record panel component
//!
//! Renders one `Label: value` line per field.

use super::super::state::DashboardState;
use super::super::utils::label_color;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_record_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .fields
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label),
                    Style::default()
                        .fg(label_color(field.label))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(field.value.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let block = Block::default()
        .title("STUDENT RECORD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
