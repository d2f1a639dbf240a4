//! Quiz screen implementation
//!
//! Displays the question header, the target letter, the typed digit
//! buffer, and a keypad panel matching the active input method. Purely
//! presentational: answers are evaluated by the session.

use crate::quiz::{InputMethod, Outcome, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Quiz screen component
#[derive(Debug, Default)]
pub struct QuizScreen;

impl QuizScreen {
    /// Create a new quiz screen
    pub fn new() -> Self {
        Self
    }

    /// Render the active question
    pub fn render(&self, f: &mut Frame, session: &Session) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header: progress and score
                Constraint::Length(5), // Target letter
                Constraint::Length(2), // Instruction + typed buffer
                Constraint::Min(6),    // Keypad panel
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_header(f, chunks[0], session);
        self.render_letter(f, chunks[1], session);
        self.render_entry_line(f, chunks[2], session);
        self.render_keypad(f, chunks[3], session);
        self.render_help(f, chunks[4], session);
    }

    /// Render question progress and the running score
    fn render_header(&self, f: &mut Frame, area: Rect, session: &Session) {
        let score_style = match session.last_outcome() {
            Some(Outcome::Correct) => Style::default().fg(Color::Green),
            Some(Outcome::Wrong) => Style::default().fg(Color::Red),
            None => Style::default().fg(Color::White),
        };

        let header = Line::from(vec![
            Span::raw(format!(
                "Question {}/{}",
                session.current_index(),
                session.total_questions()
            )),
            Span::raw("    "),
            Span::raw("Score: "),
            Span::styled(
                session.score().to_string(),
                score_style.add_modifier(Modifier::BOLD),
            ),
        ]);

        let widget = Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(session.mode().title()),
            );
        f.render_widget(widget, area);
    }

    /// Render the big target letter
    fn render_letter(&self, f: &mut Frame, area: Rect, session: &Session) {
        let letter = session
            .current_letter()
            .map(String::from)
            .unwrap_or_default();

        let widget = Paragraph::new(Line::from(Span::styled(
            letter,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, centered_rect(9, 5, area));
    }

    /// Render the per-question instruction and, in digit mode, the buffer
    fn render_entry_line(&self, f: &mut Frame, area: Rect, session: &Session) {
        let mut line = vec![Span::styled(
            session.mode().question_instruction(),
            Style::default().fg(Color::White),
        )];

        // The typed display only exists in digit mode
        if session.mode().input_method() == InputMethod::DigitKeypad {
            line.push(Span::raw("   "));
            line.push(Span::styled(
                format!("[{:<2}]", session.typed_input()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let widget = Paragraph::new(Line::from(line)).alignment(Alignment::Center);
        f.render_widget(widget, area);
    }

    /// Render the keypad panel for the active input method
    fn render_keypad(&self, f: &mut Frame, area: Rect, session: &Session) {
        let lines = match session.mode().input_method() {
            InputMethod::LetterKeypad => letter_keypad_lines(),
            InputMethod::DigitKeypad => digit_keypad_lines(),
        };

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Keypad"));
        f.render_widget(widget, area);
    }

    /// Render help text
    fn render_help(&self, f: &mut Frame, area: Rect, session: &Session) {
        let keys = match session.mode().input_method() {
            InputMethod::LetterKeypad => "A-Z: Answer | Esc: Abandon run",
            InputMethod::DigitKeypad => "0-9: Type | Backspace: Erase | Esc: Abandon run",
        };

        let help = Paragraph::new(keys)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

fn key_span(label: String) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Cyan))
}

/// Alphabet keypad, rendered as rows mirroring an on-screen letter grid
fn letter_keypad_lines() -> Vec<Line<'static>> {
    const ROWS: &[&str] = &["ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZ"];

    ROWS.iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| key_span(format!(" {} ", c)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Phone-dialer keypad with a wide zero and a delete key
fn digit_keypad_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            key_span(" 1 ".into()),
            key_span(" 2 ".into()),
            key_span(" 3 ".into()),
        ]),
        Line::from(vec![
            key_span(" 4 ".into()),
            key_span(" 5 ".into()),
            key_span(" 6 ".into()),
        ]),
        Line::from(vec![
            key_span(" 7 ".into()),
            key_span(" 8 ".into()),
            key_span(" 9 ".into()),
        ]),
        Line::from(vec![
            key_span("  0   ".into()),
            Span::styled(" ⌫ ", Style::default().fg(Color::Red)),
        ]),
    ]
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
