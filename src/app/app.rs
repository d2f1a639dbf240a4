//! Main application controller
//!
//! Owns the terminal wrapper, the quiz controller, and the screen
//! components, and maps raw key presses to semantic quiz events.

use crate::{
    app::{
        screens::{HomeScreen, InstructionsScreen, QuizScreen, ResultScreen, SetupScreen},
        tui::Tui,
    },
    config::AppConfig,
    quiz::{Controller, InputMethod, QuizEvent, Screen},
    LetterDrillError, Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Quiz controller: navigation plus the active session
    controller: Controller,
    /// Screen components
    home_screen: HomeScreen,
    instructions_screen: InstructionsScreen,
    setup_screen: SetupScreen,
    quiz_screen: QuizScreen,
    result_screen: ResultScreen,
}

impl App {
    /// Create a new application instance from loaded configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            controller: Controller::new(config.default_question_count),
            home_screen: HomeScreen::new(),
            instructions_screen: InstructionsScreen::new(),
            setup_screen: SetupScreen::new(),
            quiz_screen: QuizScreen::new(),
            result_screen: ResultScreen::new(),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init().map_err(|e| {
            LetterDrillError::TuiError(format!("Failed to initialize terminal: {}", e))
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.controller.should_quit() {
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let controller = &self.controller;
        let home_screen = &mut self.home_screen;
        let instructions_screen = &self.instructions_screen;
        let setup_screen = &self.setup_screen;
        let quiz_screen = &self.quiz_screen;
        let result_screen = &self.result_screen;

        self.tui.draw(|f| match controller.screen() {
            Screen::Home => home_screen.render(f),
            Screen::Instructions => {
                if let Some(mode) = controller.selected_mode() {
                    instructions_screen.render(f, mode);
                }
            }
            Screen::Setup => {
                if let Some(mode) = controller.selected_mode() {
                    setup_screen.render(
                        f,
                        mode,
                        controller.count_entry(),
                        controller.default_count(),
                    );
                }
            }
            Screen::Quiz => {
                if let Some(session) = controller.session() {
                    quiz_screen.render(f, session);
                }
            }
            Screen::Result => {
                if let Some(session) = controller.session() {
                    result_screen.render(f, session);
                }
            }
        })
    }

    /// Handle keyboard events and feed the controller
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.poll_key()? {
            // Ctrl+C quits everywhere, including mid-question
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.controller.handle_event(QuizEvent::Quit);
                return Ok(());
            }

            match self.controller.screen() {
                Screen::Home => self.handle_home_key(key),
                Screen::Instructions => self.handle_instructions_key(key),
                Screen::Setup => self.handle_setup_key(key),
                Screen::Quiz => self.handle_quiz_key(key),
                Screen::Result => self.handle_result_key(key),
            }
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.home_screen.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.home_screen.select_next(),
            KeyCode::Enter => self
                .controller
                .handle_event(QuizEvent::ModeChosen(self.home_screen.selected_mode())),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.controller.handle_event(QuizEvent::Back)
            }
            _ => {}
        }
    }

    fn handle_instructions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.controller.handle_event(QuizEvent::ProceedToSetup),
            KeyCode::Esc | KeyCode::Backspace => self.controller.handle_event(QuizEvent::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.controller.handle_event(QuizEvent::Quit)
            }
            _ => {}
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => self
                .controller
                .handle_event(QuizEvent::CountDigit(c as u8 - b'0')),
            KeyCode::Backspace => self.controller.handle_event(QuizEvent::CountBackspace),
            KeyCode::Enter => self.controller.handle_event(QuizEvent::StartRun),
            KeyCode::Esc => self.controller.handle_event(QuizEvent::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.controller.handle_event(QuizEvent::Quit)
            }
            _ => {}
        }
    }

    /// Quiz keys depend on the active mode; letters and digits are
    /// answers here, so no letter doubles as a shortcut
    fn handle_quiz_key(&mut self, key: KeyEvent) {
        match self.controller.active_input_method() {
            Some(InputMethod::LetterKeypad) => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.controller.handle_event(QuizEvent::Letter(c))
                }
                KeyCode::Esc => self.controller.handle_event(QuizEvent::GoHome),
                _ => {}
            },
            Some(InputMethod::DigitKeypad) => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => self
                    .controller
                    .handle_event(QuizEvent::Digit(c as u8 - b'0')),
                KeyCode::Backspace => self.controller.handle_event(QuizEvent::DeleteDigit),
                KeyCode::Esc => self.controller.handle_event(QuizEvent::GoHome),
                _ => {}
            },
            None => {
                if key.code == KeyCode::Esc {
                    self.controller.handle_event(QuizEvent::GoHome);
                }
            }
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => {
                self.controller.handle_event(QuizEvent::GoHome)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.controller.handle_event(QuizEvent::Quit)
            }
            _ => {}
        }
    }
}
