//! Help screen
//!
//! Static reference for key bindings and the conversion factors the
//! calculator uses.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Help screen component
#[derive(Debug, Default)]
pub struct HelpScreen;

impl HelpScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the help screen
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ])
            .split(frame.size());

        let title = Paragraph::new("Help")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let lines = vec![
            Line::from("Keys"),
            Line::from("  ↑/k ↓/j     move between fields"),
            Line::from("  Enter       edit a value, open a selector, or calculate"),
            Line::from("  Esc         close a selector, finish editing, or quit"),
            Line::from("  ?, F1       toggle this screen"),
            Line::from("  q, Ctrl+C   quit"),
            Line::from(""),
            Line::from("Conversion factors"),
            Line::from("  1 GB   = 1024 MB"),
            Line::from("  1 MB   = 8 megabits"),
            Line::from("  1 Gbps = 1000 Mbps"),
            Line::from("  1 GB/s = 8192 Mbps"),
            Line::from(""),
            Line::from("Results step up automatically: sizes of 1024 MB or more"),
            Line::from("display as GB, speeds of 1000 Mbps or more as Gbps."),
        ];
        let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, chunks[1]);

        let footer = Paragraph::new("Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }
}
