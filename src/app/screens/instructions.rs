//! Instructions screen implementation
//!
//! Shows the long instructional copy for the chosen mode before setup.

use crate::quiz::QuizMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Instructions screen component
#[derive(Debug, Default)]
pub struct InstructionsScreen;

impl InstructionsScreen {
    /// Create a new instructions screen
    pub fn new() -> Self {
        Self
    }

    /// Render the instructions for the chosen mode
    pub fn render(&self, f: &mut Frame, mode: QuizMode) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Instruction text
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new(mode.title())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        let body = Paragraph::new(mode.instructions())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("How to Play"));
        f.render_widget(body, chunks[1]);

        let help = Paragraph::new("Enter: Continue | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }
}
