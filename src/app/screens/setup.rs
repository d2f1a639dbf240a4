//! Setup screen implementation
//!
//! Question-count entry for the chosen mode. Anything typed here is
//! resolved leniently when the run starts: empty or non-numeric entries
//! fall back to the configured default, and values clamp to the allowed
//! range.

use crate::quiz::QuizMode;
use crate::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Setup screen component
#[derive(Debug, Default)]
pub struct SetupScreen;

impl SetupScreen {
    /// Create a new setup screen
    pub fn new() -> Self {
        Self
    }

    /// Render the setup screen for the chosen mode
    pub fn render(&self, f: &mut Frame, mode: QuizMode, count_entry: &str, default_count: u32) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(7),    // Entry area
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new(format!("Setup - {}", mode.title()))
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

        self.render_entry(f, chunks[1], count_entry, default_count);

        let help = Paragraph::new("0-9: Type count | Backspace: Erase | Enter: Start | Esc: Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }

    fn render_entry(&self, f: &mut Frame, area: Rect, count_entry: &str, default_count: u32) {
        let entry_area = centered_rect(40, 5, area);

        let entry_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(entry_area);

        let shown = if count_entry.is_empty() {
            format!("(default: {})", default_count)
        } else {
            count_entry.to_string()
        };
        let entry_style = if count_entry.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let entry = Paragraph::new(shown)
            .style(entry_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Number of Questions"),
            );
        f.render_widget(entry, entry_chunks[0]);

        let hint = Paragraph::new(format!(
            "Between {} and {} questions",
            MIN_QUESTION_COUNT, MAX_QUESTION_COUNT
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        f.render_widget(hint, entry_chunks[1]);
    }
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(popup_layout[1])[1]
}
