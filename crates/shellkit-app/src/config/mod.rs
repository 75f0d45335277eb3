//! Configuration file parsing for shellkit
//!
//! Reads `.shellkit/config.toml` (or a path given on the command line).

pub mod settings;
pub mod types;

pub use settings::{
    config_path, load_from_path, load_settings, resolve_config_relative, save_settings,
    CONFIG_FILENAME, SHELLKIT_DIR,
};
pub use types::*;
