//! Theme system for the shell TUI.
//!
//! - `palette` - colours derived from the validated theme
//! - `styles` - semantic style builder functions
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
