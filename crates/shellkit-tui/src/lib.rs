//! shellkit-tui - Terminal UI for the application shell
//!
//! Renders a [`shellkit_app::ShellState`] with ratatui, converts crossterm
//! events into shell messages and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
