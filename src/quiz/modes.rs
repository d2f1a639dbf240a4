//! Quiz mode registry
//!
//! Defines the two drill variants and their pure answer-derivation rules.
//! Both rules are only meaningful for uppercase A-Z; the question
//! generator never produces anything else.

/// Quiz mode variants for the two drill types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    /// Identify the reverse-alphabet pair of the shown letter (A-Z, B-Y, M-N)
    OppositeLetters,
    /// Identify the 1-based alphabet position of the shown letter (A=1 .. Z=26)
    LetterPlaces,
}

/// Input method used to answer questions in a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    /// A single letter key answers the question outright
    LetterKeypad,
    /// Digits accumulate in a buffer that auto-submits
    DigitKeypad,
}

impl QuizMode {
    /// Get all available modes, in home-screen order
    pub fn all() -> Vec<Self> {
        vec![Self::OppositeLetters, Self::LetterPlaces]
    }

    /// Display title for the mode
    pub fn title(&self) -> &'static str {
        match self {
            Self::OppositeLetters => "Opposite Letters",
            Self::LetterPlaces => "Letter Places",
        }
    }

    /// Long instructional copy shown on the instructions screen
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::OppositeLetters => {
                "You will be shown a letter. Identify its reverse pair in the \
                 alphabet (e.g. A and Z, B and Y, M and N).\n\n\
                 Press the matching letter key to answer. Each question takes \
                 exactly one answer."
            }
            Self::LetterPlaces => {
                "You will be shown a letter. Identify its numerical position \
                 in the alphabet (e.g. A = 1, S = 19, Z = 26).\n\n\
                 Type the number with the digit keys. The answer submits \
                 automatically once you have typed the right number of digits."
            }
        }
    }

    /// Short instruction line shown above the keypad during a question
    pub fn question_instruction(&self) -> &'static str {
        match self {
            Self::OppositeLetters => "Select the opposite letter",
            Self::LetterPlaces => "Enter the position (1-26)",
        }
    }

    /// How answers are entered in this mode
    pub fn input_method(&self) -> InputMethod {
        match self {
            Self::OppositeLetters => InputMethod::LetterKeypad,
            Self::LetterPlaces => InputMethod::DigitKeypad,
        }
    }

    /// Expected answer for a target letter, as the string the player must enter
    pub fn expected_answer(&self, letter: char) -> String {
        match self {
            Self::OppositeLetters => {
                // A(65) + Z(90) = 155, so the pair of `letter` is 155 - code
                let mirrored = b'A' + (b'Z' - letter as u8);
                String::from(mirrored as char)
            }
            Self::LetterPlaces => {
                let position = letter as u8 - b'A' + 1;
                position.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(letter: char) -> u32 {
        letter as u32 - 'A' as u32 + 1
    }

    #[test]
    fn test_opposite_pairs_sum_to_27() {
        for code in b'A'..=b'Z' {
            let letter = code as char;
            let answer = QuizMode::OppositeLetters.expected_answer(letter);
            assert_eq!(answer.len(), 1);
            let pair = answer.chars().next().unwrap();
            assert!(pair.is_ascii_uppercase());
            assert_eq!(position(letter) + position(pair), 27);
        }
    }

    #[test]
    fn test_opposite_known_pairs() {
        assert_eq!(QuizMode::OppositeLetters.expected_answer('A'), "Z");
        assert_eq!(QuizMode::OppositeLetters.expected_answer('B'), "Y");
        assert_eq!(QuizMode::OppositeLetters.expected_answer('M'), "N");
        assert_eq!(QuizMode::OppositeLetters.expected_answer('N'), "M");
        assert_eq!(QuizMode::OppositeLetters.expected_answer('Z'), "A");
    }

    #[test]
    fn test_letter_places_positions() {
        for code in b'A'..=b'Z' {
            let letter = code as char;
            let answer = QuizMode::LetterPlaces.expected_answer(letter);
            assert_eq!(answer, position(letter).to_string());
            assert!(!answer.starts_with('0'));
            if position(letter) <= 9 {
                assert_eq!(answer.len(), 1);
            } else {
                assert_eq!(answer.len(), 2);
            }
        }
    }

    #[test]
    fn test_letter_places_known_positions() {
        assert_eq!(QuizMode::LetterPlaces.expected_answer('A'), "1");
        assert_eq!(QuizMode::LetterPlaces.expected_answer('J'), "10");
        assert_eq!(QuizMode::LetterPlaces.expected_answer('S'), "19");
        assert_eq!(QuizMode::LetterPlaces.expected_answer('Z'), "26");
    }

    #[test]
    fn test_input_methods() {
        assert_eq!(
            QuizMode::OppositeLetters.input_method(),
            InputMethod::LetterKeypad
        );
        assert_eq!(QuizMode::LetterPlaces.input_method(), InputMethod::DigitKeypad);
    }

    #[test]
    fn test_mode_list_order() {
        let modes = QuizMode::all();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0], QuizMode::OppositeLetters);
        assert_eq!(modes[1], QuizMode::LetterPlaces);
    }
}
