//! Message types for the shell (TEA pattern)

use crate::input_key::InputKey;
use crate::layout_state::AppLayoutAction;
use crate::region::Region;
use crate::shortcuts::ShortcutAction;

/// All possible messages/actions in the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal resized to `columns` cells
    Resize { columns: u16 },

    /// The first frame has been drawn at `columns` cells
    Mounted { columns: u16 },

    /// Tick event for debounce timers
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// A registered keyboard shortcut fired
    Shortcut(ShortcutAction),

    // ─────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────
    ToggleSidebar,
    ToggleSettingsPanel,
    /// Esc: dismiss sheets and open menus
    Dismiss,

    // ─────────────────────────────────────────────────────────
    // Focus and navigation
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    CursorUp,
    CursorDown,
    Activate,
    /// Follow the logo link
    ActivateLogo,

    // ─────────────────────────────────────────────────────────
    // Team switcher
    // ─────────────────────────────────────────────────────────
    ToggleTeamMenu,
    TeamMenuUp,
    TeamMenuDown,
    TeamMenuActivate,
    SelectTeam(usize),

    // ─────────────────────────────────────────────────────────
    // User menu
    // ─────────────────────────────────────────────────────────
    ToggleUserMenu,
    UserMenuUp,
    UserMenuDown,
    UserMenuActivate,

    // ─────────────────────────────────────────────────────────
    // Layout state
    // ─────────────────────────────────────────────────────────
    /// Apply a layout store action
    Layout(AppLayoutAction),
    CycleTheme,
    ToggleHighContrast,
    MarkNotificationsRead,
    ResetLayout,

    // ─────────────────────────────────────────────────────────
    // Regions
    // ─────────────────────────────────────────────────────────
    /// Result of loading a region's caller-supplied content
    RegionLoaded {
        region: Region,
        result: Result<Option<String>, String>,
    },
    /// Clear failed regions and load them again
    RetryRegions,
}
