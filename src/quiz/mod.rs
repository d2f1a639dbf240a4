//! Quiz core module
//!
//! Contains the mode registry, session state with question generation
//! and scoring, and the event controller that drives screen navigation.

pub mod controller;
pub mod modes;
pub mod session;

// Re-export commonly used types
pub use controller::{Controller, QuizEvent, Screen};
pub use modes::{InputMethod, QuizMode};
pub use session::{random_letter, resolve_question_count, Outcome, Session};
