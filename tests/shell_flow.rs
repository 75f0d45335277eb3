//! End-to-end flows through config, state, persistence and rendering
//!
//! Run with: cargo test --test shell_flow

use std::path::{Path, PathBuf};

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use shellkit_app::config::{self, ShellConfig};
use shellkit_app::layout_state::AppLayoutAction;
use shellkit_app::process::process_message;
use shellkit_app::storage::{self, FileStore, SharedStore};
use shellkit_app::{InputKey, Message, ShellState};
use shellkit_core::Team;

// ─────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shell")
}

fn mounted(config: ShellConfig, columns: u16, storage: Option<SharedStore>) -> ShellState {
    let mut state = ShellState::new(config, Path::new("."), storage);
    process_message(&mut state, Message::Mounted { columns });
    state
}

/// Render the whole shell and return the screen as text
fn screen(state: &ShellState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| shellkit_tui::view(frame, state))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn sidebar_status(state: &ShellState) -> &'static str {
    if state.sidebar.is_open() {
        "open"
    } else {
        "closed"
    }
}

// ─────────────────────────────────────────────────────────
// Team switcher
// ─────────────────────────────────────────────────────────

#[test]
fn test_no_teams_renders_no_switcher() {
    let state = mounted(ShellConfig::default(), 160, None);
    assert!(!state.team_switcher.is_visible());

    let text = screen(&state, 160, 30);
    assert!(!text.contains("Select a Team"));
}

#[test]
fn test_single_team_shown_selected() {
    let mut config = ShellConfig::default();
    config.teams = vec![Team::new("Acme Inc", "A")];
    let mut state = mounted(config, 160, None);

    assert_eq!(state.team_switcher.label(), "Acme Inc");
    assert!(screen(&state, 160, 30).contains("[A] Acme Inc"));

    process_message(&mut state, Message::Key(InputKey::Char('t')));
    let text = screen(&state, 160, 30);
    assert!(text.contains("* [A] Acme Inc"));
    assert!(text.contains("⌘1"));
}

// ─────────────────────────────────────────────────────────
// Sidebar toggling
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_sidebar_twice_round_trips() {
    let mut state = mounted(ShellConfig::default(), 160, None);
    assert_eq!(sidebar_status(&state), "open");

    process_message(&mut state, Message::ToggleSidebar);
    assert_eq!(sidebar_status(&state), "closed");

    process_message(&mut state, Message::ToggleSidebar);
    assert_eq!(sidebar_status(&state), "open");
}

#[test]
fn test_toggle_sidebar_action_twice_round_trips() {
    let mut config = ShellConfig::default();
    config.sidebar.bind_to_store = true;
    let mut state = mounted(config, 160, None);
    let store_status = |state: &ShellState| {
        if state.layout_store.state().sidebar_open {
            "open"
        } else {
            "closed"
        }
    };
    assert_eq!(store_status(&state), "open");

    process_message(&mut state, Message::Layout(AppLayoutAction::ToggleSidebar));
    assert_eq!(store_status(&state), "closed");
    assert_eq!(sidebar_status(&state), "closed");

    process_message(&mut state, Message::Layout(AppLayoutAction::ToggleSidebar));
    assert_eq!(store_status(&state), "open");
    assert_eq!(sidebar_status(&state), "open");
}

#[test]
fn test_shortcut_and_store_stay_in_sync_when_bound() {
    let mut config = ShellConfig::default();
    config.sidebar.bind_to_store = true;
    let mut state = mounted(config, 160, None);
    assert!(state.layout_store.state().sidebar_open);

    process_message(&mut state, Message::Key(InputKey::CharCtrl('b')));
    assert!(!state.sidebar.is_open());
    assert!(!state.layout_store.state().sidebar_open);
}

// ─────────────────────────────────────────────────────────
// Config fixture
// ─────────────────────────────────────────────────────────

#[test]
fn test_fixture_config_renders() {
    let dir = fixture_dir();
    let config = config::load_from_path(&dir.join("config.toml")).expect("fixture loads");
    assert_eq!(config.site.name, "Acme Console");
    assert_eq!(config.settings_panel.mid_width_band(), Some((1000, 1170)));

    let mut state = ShellState::new(config, &dir, None);
    process_message(&mut state, Message::Mounted { columns: 160 });

    assert_eq!(state.content.as_deref(), Some("All systems nominal.\n"));
    let text = screen(&state, 160, 30);
    assert!(text.contains("Acme Console"));
    assert!(text.contains("Deployments"));
    assert!(text.contains("All systems nominal."));
    assert!(text.contains("Preferences"));
    assert!(text.contains("Email digests are on."));
    assert!(text.contains("(JO) jordan"));
}

#[test]
fn test_missing_config_path_is_an_error() {
    let result = config::load_from_path(&fixture_dir().join("nope.toml"));
    assert!(result.is_err());
}

// ─────────────────────────────────────────────────────────
// Persistence
// ─────────────────────────────────────────────────────────

#[test]
fn test_sidebar_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let open_store = || storage::shared(FileStore::open(dir.path()).unwrap());

    let mut first = mounted(ShellConfig::default(), 160, Some(open_store()));
    process_message(&mut first, Message::ToggleSidebar);
    process_message(&mut first, Message::CycleTheme);
    assert_eq!(sidebar_status(&first), "closed");
    first.unmount();

    let raw = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["sidebar_state"]["value"], "false");
    assert!(json["app-layout-state"]["value"]
        .as_str()
        .unwrap()
        .contains("\"theme\":\"light\""));

    let second = mounted(ShellConfig::default(), 160, Some(open_store()));
    assert_eq!(sidebar_status(&second), "closed");
    assert_eq!(
        second.layout_store.state().theme,
        shellkit_core::ThemeMode::Light
    );
}

// ─────────────────────────────────────────────────────────
// Mobile
// ─────────────────────────────────────────────────────────

#[test]
fn test_mobile_sheet_opens_and_dismisses() {
    let mut config = ShellConfig::default();
    config.teams = vec![Team::new("Acme Inc", "A")];
    // 90 columns = 720px, below the 1024px breakpoint
    let mut state = mounted(config, 90, None);
    assert!(!screen(&state, 90, 30).contains("Acme Inc"));

    process_message(&mut state, Message::Key(InputKey::CharCtrl('b')));
    assert!(screen(&state, 90, 30).contains("Acme Inc"));
    // The desktop track is untouched
    assert_eq!(sidebar_status(&state), "open");

    process_message(&mut state, Message::Key(InputKey::Esc));
    assert!(!screen(&state, 90, 30).contains("Acme Inc"));
}
