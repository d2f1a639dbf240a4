//! Quiz session state
//!
//! Holds the mutable run state for one drill attempt: question index,
//! score, the current target letter, the digit buffer, and the input
//! gate. Also owns question generation and answer evaluation.

use crate::quiz::modes::QuizMode;
use crate::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
use rand::Rng;

/// Longest expected answer is two digits ("10".."26")
const MAX_TYPED_DIGITS: usize = 2;

/// Result of evaluating one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

/// Mutable run state for one drill attempt
///
/// Invariants: `score <= current_index <= total_questions`, and the digit
/// buffer never grows past two characters. `accepting_input` is true only
/// while a question is displayed and unanswered.
#[derive(Debug)]
pub struct Session {
    mode: QuizMode,
    total_questions: u32,
    current_index: u32,
    score: u32,
    current_letter: Option<char>,
    typed_input: String,
    accepting_input: bool,
    last_outcome: Option<Outcome>,
}

impl Session {
    /// Create a fresh session; the question count is clamped to the
    /// allowed range
    pub fn new(mode: QuizMode, total_questions: u32) -> Self {
        Self {
            mode,
            total_questions: total_questions.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT),
            current_index: 0,
            score: 0,
            current_letter: None,
            typed_input: String::new(),
            accepting_input: false,
            last_outcome: None,
        }
    }

    /// The mode this session runs in
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Total number of questions in the run
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// 1-based index of the current question; 0 before the first question
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// Number of correct answers so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The letter currently displayed, if a question is active
    pub fn current_letter(&self) -> Option<char> {
        self.current_letter
    }

    /// Digits typed so far for the current question
    pub fn typed_input(&self) -> &str {
        &self.typed_input
    }

    /// Whether answer events are currently processed
    pub fn is_accepting_input(&self) -> bool {
        self.accepting_input
    }

    /// Outcome of the most recently evaluated answer, for transient feedback
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Whether the run has exhausted its questions and stopped
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.total_questions && !self.accepting_input
    }

    /// Start the next question with a caller-chosen target letter.
    ///
    /// Returns false without mutating the question state when the run is
    /// already exhausted. Exposed separately from [`Session::next_question`]
    /// so forced letter sequences can drive deterministic tests.
    pub fn begin_question(&mut self, letter: char) -> bool {
        if self.current_index >= self.total_questions {
            self.accepting_input = false;
            return false;
        }
        self.current_index += 1;
        self.current_letter = Some(letter.to_ascii_uppercase());
        self.typed_input.clear();
        self.accepting_input = true;
        true
    }

    /// Draw a uniformly random letter and start the next question.
    ///
    /// Returns false when the run is exhausted; consecutive identical
    /// letters are allowed.
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.current_index >= self.total_questions {
            self.accepting_input = false;
            return false;
        }
        self.begin_question(random_letter(rng))
    }

    /// Evaluate a single-letter answer (letter keypad mode).
    ///
    /// Exactly one submission is evaluated per question: the first call
    /// locks input, and later events return None without effect.
    pub fn submit_letter(&mut self, letter: char) -> Option<Outcome> {
        if !self.accepting_input {
            return None;
        }
        let target = self.current_letter?;
        self.accepting_input = false;
        let expected = self.mode.expected_answer(target);
        let correct = letter.to_ascii_uppercase().to_string() == expected;
        Some(self.record(correct))
    }

    /// Append a digit to the buffer (digit keypad mode) and run the
    /// auto-submit check.
    ///
    /// Evaluation fires exactly when the buffer length matches the expected
    /// answer's length: one digit for "1".."9", two for "10".."26". A full
    /// buffer ignores further digits.
    pub fn press_digit(&mut self, digit: u8) -> Option<Outcome> {
        if !self.accepting_input || digit > 9 {
            return None;
        }
        if self.typed_input.len() >= MAX_TYPED_DIGITS {
            return None;
        }
        self.typed_input.push((b'0' + digit) as char);
        self.check_auto_submit()
    }

    /// Remove the last buffered digit; no-op on an empty buffer and never
    /// triggers evaluation
    pub fn delete_digit(&mut self) {
        if !self.accepting_input {
            return;
        }
        self.typed_input.pop();
    }

    fn check_auto_submit(&mut self) -> Option<Outcome> {
        let target = self.current_letter?;
        let expected = self.mode.expected_answer(target);
        if self.typed_input.len() != expected.len() {
            return None;
        }
        self.accepting_input = false;
        let correct = self.typed_input == expected;
        Some(self.record(correct))
    }

    fn record(&mut self, correct: bool) -> Outcome {
        let outcome = if correct {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Wrong
        };
        self.last_outcome = Some(outcome);
        outcome
    }
}

/// Draw a uniformly random letter in A-Z, 26 equally likely outcomes
pub fn random_letter<R: Rng>(rng: &mut R) -> char {
    (b'A' + rng.gen_range(0..26u8)) as char
}

/// Resolve a free-text question-count entry to a usable total.
///
/// Non-numeric or empty entries fall back to `fallback`; the result is
/// always clamped to the allowed range. Never an error.
pub fn resolve_question_count(entry: &str, fallback: u32) -> u32 {
    let requested = entry.trim().parse::<u32>().unwrap_or(fallback);
    requested.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT)
}

/// Resolve an entry against the standard default count
pub fn resolve_question_count_default(entry: &str) -> u32 {
    resolve_question_count(entry, DEFAULT_QUESTION_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(QuizMode::OppositeLetters, 10);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.current_letter().is_none());
        assert!(!session.is_accepting_input());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_new_session_clamps_total() {
        assert_eq!(Session::new(QuizMode::LetterPlaces, 0).total_questions(), 1);
        assert_eq!(Session::new(QuizMode::LetterPlaces, 999).total_questions(), 50);
        assert_eq!(Session::new(QuizMode::LetterPlaces, 30).total_questions(), 30);
    }

    #[test]
    fn test_begin_question_advances_and_unlocks() {
        let mut session = Session::new(QuizMode::OppositeLetters, 3);
        assert!(session.begin_question('q'));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_letter(), Some('Q'));
        assert!(session.is_accepting_input());
    }

    #[test]
    fn test_single_letter_correct_and_lock() {
        let mut session = Session::new(QuizMode::OppositeLetters, 2);
        session.begin_question('A');
        assert_eq!(session.submit_letter('Z'), Some(Outcome::Correct));
        assert_eq!(session.score(), 1);
        assert!(!session.is_accepting_input());

        // Late/duplicate events are silently dropped
        assert_eq!(session.submit_letter('Z'), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_single_letter_wrong_keeps_score() {
        let mut session = Session::new(QuizMode::OppositeLetters, 2);
        session.begin_question('B');
        assert_eq!(session.submit_letter('X'), Some(Outcome::Wrong));
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_outcome(), Some(Outcome::Wrong));
    }

    #[test]
    fn test_auto_submit_fires_at_expected_length_one() {
        let mut session = Session::new(QuizMode::LetterPlaces, 2);
        // E is position 5; a single digit must evaluate immediately
        session.begin_question('E');
        assert_eq!(session.press_digit(5), Some(Outcome::Correct));
        assert!(!session.is_accepting_input());
    }

    #[test]
    fn test_auto_submit_waits_for_two_digits() {
        let mut session = Session::new(QuizMode::LetterPlaces, 2);
        // J is position 10; the first digit must NOT evaluate
        session.begin_question('J');
        assert_eq!(session.press_digit(1), None);
        assert!(session.is_accepting_input());
        assert_eq!(session.typed_input(), "1");
        assert_eq!(session.press_digit(0), Some(Outcome::Correct));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_auto_submit_length_driven_not_fixed_two() {
        let mut session = Session::new(QuizMode::LetterPlaces, 2);
        // Expected "5" has length 1: typing "0" evaluates (as wrong)
        session.begin_question('E');
        assert_eq!(session.press_digit(0), Some(Outcome::Wrong));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_delete_digit_no_op_and_no_evaluation() {
        let mut session = Session::new(QuizMode::LetterPlaces, 2);
        session.begin_question('J');

        // Delete on empty buffer is a no-op
        session.delete_digit();
        assert_eq!(session.typed_input(), "");

        session.press_digit(2);
        session.delete_digit();
        assert_eq!(session.typed_input(), "");
        assert!(session.is_accepting_input());

        // Correct the entry after deleting
        session.press_digit(1);
        assert_eq!(session.press_digit(0), Some(Outcome::Correct));
    }

    #[test]
    fn test_digit_buffer_capped_at_two() {
        let mut session = Session::new(QuizMode::LetterPlaces, 2);
        session.begin_question('Z'); // expected "26"
        session.press_digit(2);
        assert_eq!(session.press_digit(5), Some(Outcome::Wrong));
        // Buffer is full and input is locked: both guards drop this
        assert_eq!(session.press_digit(9), None);
        assert_eq!(session.typed_input(), "25");
    }

    #[test]
    fn test_input_ignored_while_locked() {
        let mut session = Session::new(QuizMode::LetterPlaces, 2);
        session.begin_question('E');
        session.press_digit(5);
        assert_eq!(session.press_digit(3), None);
        session.delete_digit();
        assert_eq!(session.typed_input(), "5");
    }

    #[test]
    fn test_run_ends_exactly_at_total() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut session = Session::new(QuizMode::OppositeLetters, 3);
        for expected_index in 1..=3 {
            assert!(session.next_question(&mut rng));
            assert_eq!(session.current_index(), expected_index);
            let target = session.current_letter().unwrap();
            let answer = QuizMode::OppositeLetters.expected_answer(target);
            session.submit_letter(answer.chars().next().unwrap());
        }
        assert!(!session.next_question(&mut rng));
        assert!(session.is_finished());
        assert_eq!(session.score(), 3);
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn test_score_never_exceeds_index() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut session = Session::new(QuizMode::LetterPlaces, 20);
        while session.next_question(&mut rng) {
            assert!(session.score() <= session.current_index());
            assert!(session.current_index() <= session.total_questions());
            let target = session.current_letter().unwrap();
            let expected = QuizMode::LetterPlaces.expected_answer(target);
            // Alternate correct and deliberately wrong answers
            if session.current_index() % 2 == 0 {
                for c in expected.bytes() {
                    session.press_digit(c - b'0');
                }
            } else {
                session.press_digit(0);
                if session.is_accepting_input() {
                    session.press_digit(0);
                }
            }
            assert!(session.score() <= session.current_index());
        }
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_random_letter_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let letter = random_letter(&mut rng);
            assert!(letter.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_resolve_question_count() {
        assert_eq!(resolve_question_count_default("0"), 1);
        assert_eq!(resolve_question_count_default("abc"), 30);
        assert_eq!(resolve_question_count_default(""), 30);
        assert_eq!(resolve_question_count_default("999"), 50);
        assert_eq!(resolve_question_count_default("25"), 25);
        assert_eq!(resolve_question_count(" 12 ", 30), 12);
        assert_eq!(resolve_question_count("", 45), 45);
        assert_eq!(resolve_question_count("x", 200), 50);
    }

    #[test]
    fn test_forced_scenario_three_questions() {
        // total=3, LetterPlaces, targets forced to A, J, Z
        let mut session = Session::new(QuizMode::LetterPlaces, 3);

        session.begin_question('A'); // expected "1"
        assert_eq!(session.press_digit(1), Some(Outcome::Correct));
        assert_eq!(session.score(), 1);

        session.begin_question('J'); // expected "10"
        assert_eq!(session.press_digit(1), None);
        assert_eq!(session.press_digit(0), Some(Outcome::Correct));
        assert_eq!(session.score(), 2);

        session.begin_question('Z'); // expected "26", answer 25 is wrong
        assert_eq!(session.press_digit(2), None);
        assert_eq!(session.press_digit(5), Some(Outcome::Wrong));
        assert_eq!(session.score(), 2);

        assert!(!session.begin_question('A'));
        assert!(session.is_finished());
        assert_eq!(session.score(), 2);
        assert_eq!(session.total_questions(), 3);
    }
}
