//! TUI screen components
//!
//! Contains individual screen implementations for the five application
//! screens. Screens only render; all transitions go through the quiz
//! controller.

pub mod home;
pub mod instructions;
pub mod quiz;
pub mod result;
pub mod setup;

pub use home::HomeScreen;
pub use instructions::InstructionsScreen;
pub use quiz::QuizScreen;
pub use result::ResultScreen;
pub use setup::SetupScreen;
