//! Quiz event controller
//!
//! All input events dispatch through [`Controller::handle_event`], which
//! owns screen navigation, the active session, and the setup entry buffer.
//! Rendering reads controller state and performs no transitions of its
//! own, so the whole flow is unit-testable without a terminal.

use crate::quiz::modes::{InputMethod, QuizMode};
use crate::quiz::session::{resolve_question_count, Session};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Question-count entries longer than this are meaningless: anything past
/// three characters already clamps to the maximum
const MAX_COUNT_ENTRY_LEN: usize = 3;

/// Application screens
///
/// There is no history stack: "back" always returns to Home. This mirrors
/// the simple navigation model the drill was designed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection cards
    Home,
    /// Long instructions for the chosen mode
    Instructions,
    /// Question count entry
    Setup,
    /// The drill itself
    Quiz,
    /// Final tally
    Result,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Home
    }
}

/// Semantic input events fed to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// A mode card was chosen on the home screen
    ModeChosen(QuizMode),
    /// Continue from instructions to setup
    ProceedToSetup,
    /// Back button: always returns to Home, or quits from Home
    Back,
    /// Home button on the result screen, or abandoning a run
    GoHome,
    /// A digit typed into the question-count entry
    CountDigit(u8),
    /// Backspace in the question-count entry
    CountBackspace,
    /// Begin the drill with the entered question count
    StartRun,
    /// A letter answer during a question
    Letter(char),
    /// A digit answer during a question
    Digit(u8),
    /// Delete the last buffered digit during a question
    DeleteDigit,
    /// Quit the application
    Quit,
}

/// Owner of navigation state and the active session
///
/// The random generator is the only source of nondeterminism; construct
/// with [`Controller::with_seed`] for reproducible runs under test.
#[derive(Debug)]
pub struct Controller {
    screen: Screen,
    should_quit: bool,
    selected_mode: Option<QuizMode>,
    session: Option<Session>,
    count_entry: String,
    default_count: u32,
    rng: SmallRng,
}

impl Controller {
    /// Create a controller with an entropy-seeded generator
    pub fn new(default_count: u32) -> Self {
        Self::from_rng(default_count, SmallRng::from_entropy())
    }

    /// Create a controller with a fixed seed for deterministic behavior
    pub fn with_seed(default_count: u32, seed: u64) -> Self {
        Self::from_rng(default_count, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(default_count: u32, rng: SmallRng) -> Self {
        Self {
            screen: Screen::Home,
            should_quit: false,
            selected_mode: None,
            session: None,
            count_entry: String::new(),
            default_count,
            rng,
        }
    }

    /// The currently active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the application should exit its main loop
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The mode chosen on the home screen, if any
    pub fn selected_mode(&self) -> Option<QuizMode> {
        self.selected_mode
    }

    /// The active session, if a run is in progress or just finished
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Raw question-count entry shown on the setup screen
    pub fn count_entry(&self) -> &str {
        &self.count_entry
    }

    /// Count used when the entry is empty or not a number
    pub fn default_count(&self) -> u32 {
        self.default_count
    }

    /// Input method of the active question, when a run is in progress
    pub fn active_input_method(&self) -> Option<InputMethod> {
        self.session.as_ref().map(|s| s.mode().input_method())
    }

    /// Activate exactly one screen
    fn show(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Return to Home and discard any session
    fn go_home(&mut self) {
        self.session = None;
        self.show(Screen::Home);
    }

    /// Process one input event
    ///
    /// Events that do not apply to the active screen or input method are
    /// silently ignored; nothing here is an error.
    pub fn handle_event(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Quit => {
                self.should_quit = true;
            }
            QuizEvent::ModeChosen(mode) => {
                if self.screen == Screen::Home {
                    self.selected_mode = Some(mode);
                    self.show(Screen::Instructions);
                }
            }
            QuizEvent::ProceedToSetup => {
                if self.screen == Screen::Instructions && self.selected_mode.is_some() {
                    self.show(Screen::Setup);
                }
            }
            QuizEvent::Back => {
                if self.screen == Screen::Home {
                    self.should_quit = true;
                } else {
                    self.go_home();
                }
            }
            QuizEvent::GoHome => {
                self.go_home();
            }
            QuizEvent::CountDigit(digit) => {
                if self.screen == Screen::Setup
                    && digit <= 9
                    && self.count_entry.len() < MAX_COUNT_ENTRY_LEN
                {
                    self.count_entry.push((b'0' + digit) as char);
                }
            }
            QuizEvent::CountBackspace => {
                if self.screen == Screen::Setup {
                    self.count_entry.pop();
                }
            }
            QuizEvent::StartRun => {
                if self.screen == Screen::Setup {
                    self.start_run();
                }
            }
            QuizEvent::Letter(letter) => {
                if self.screen == Screen::Quiz
                    && self.active_input_method() == Some(InputMethod::LetterKeypad)
                {
                    let outcome = self
                        .session
                        .as_mut()
                        .and_then(|s| s.submit_letter(letter));
                    if outcome.is_some() {
                        self.advance();
                    }
                }
            }
            QuizEvent::Digit(digit) => {
                if self.screen == Screen::Quiz
                    && self.active_input_method() == Some(InputMethod::DigitKeypad)
                {
                    let outcome = self.session.as_mut().and_then(|s| s.press_digit(digit));
                    if outcome.is_some() {
                        self.advance();
                    }
                }
            }
            QuizEvent::DeleteDigit => {
                if self.screen == Screen::Quiz
                    && self.active_input_method() == Some(InputMethod::DigitKeypad)
                {
                    if let Some(session) = self.session.as_mut() {
                        session.delete_digit();
                    }
                }
            }
        }
    }

    fn start_run(&mut self) {
        let Some(mode) = self.selected_mode else {
            return;
        };
        let total = resolve_question_count(&self.count_entry, self.default_count);
        let mut session = Session::new(mode, total);
        session.next_question(&mut self.rng);
        self.session = Some(session);
        self.show(Screen::Quiz);
    }

    /// Move to the next question, or to the result screen on exhaustion
    fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.next_question(&mut self.rng) {
            self.show(Screen::Result);
        }
    }
}
