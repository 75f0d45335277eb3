//! shellkit-app - Shell state and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! application shell: responsive panel stores, the layout state reducer and
//! its persistence, keyboard shortcuts, shell composition, per-region error
//! isolation and configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod icon;
pub mod input_key;
pub mod layout_state;
pub mod message;
pub mod nav;
pub mod panel;
pub mod process;
pub mod providers;
pub mod region;
pub mod shell;
pub mod shortcuts;
pub mod signals;
pub mod state;
pub mod storage;
pub mod team_switcher;
pub mod user_menu;
pub mod viewport;

// Re-export primary types
pub use config::{IconMode, ShellConfig};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use layout_state::{AppLayoutAction, AppLayoutState, AppLayoutStore};
pub use message::Message;
pub use panel::{PanelKind, PanelStatus, PanelStore};
pub use providers::Providers;
pub use region::{Region, RegionGuard};
pub use shell::{compose, PanelPresentation, ShellLayout, TriggerState};
pub use state::{FocusArea, ShellState};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStore};
