//! Result screen implementation
//!
//! Displays the frozen final tally of a completed run.

use crate::quiz::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Result screen component
#[derive(Debug, Default)]
pub struct ResultScreen;

impl ResultScreen {
    /// Create a new result screen
    pub fn new() -> Self {
        Self
    }

    /// Render the final score for a finished session
    pub fn render(&self, f: &mut Frame, session: &Session) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(7),    // Score area
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new("Drill Complete")
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

        self.render_score(f, chunks[1], session);

        let help = Paragraph::new("Enter: Home | Q: Quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }

    fn render_score(&self, f: &mut Frame, area: Rect, session: &Session) {
        let score = session.score();
        let total = session.total_questions();
        let percentage = score * 100 / total;

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} / {}", score, total),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{}% correct in {}", percentage, session.mode().title())),
        ];

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Final Score"));
        f.render_widget(widget, area);
    }
}
