//! TUI application module
//!
//! Contains the terminal wrapper, the per-screen render components, and
//! the main application loop.

pub mod app;
pub mod screens;
pub mod tui;

pub use app::App;
pub use tui::Tui;
