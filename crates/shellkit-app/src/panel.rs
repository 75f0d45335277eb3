//! Panel state store shared by the sidebar and the settings panel
//!
//! A panel has two independent tracks:
//! - desktop: `open`, controlled by the caller or held privately ([`OpenMode`])
//! - mobile: `open_mobile`, always self-managed and never persisted
//!
//! `toggle()` flips exactly one of them depending on the viewport. The
//! settings panel additionally honours a mid-width band in which it is
//! unavailable on desktop.

use std::time::Instant;

use shellkit_core::prelude::*;

use crate::shortcuts::{KeyCombo, KeyboardDispatcher, ShortcutAction};
use crate::storage::{
    read_flag, write_flag, SharedStore, SETTINGS_PANEL_COOKIE_NAME, SIDEBAR_COOKIE_NAME,
};
use crate::viewport::{mid_width, BreakpointWatcher, DebouncedQuery, DEFAULT_PANEL_BREAKPOINT};

/// Which panel a store drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Sidebar,
    SettingsPanel,
}

impl PanelKind {
    pub fn cookie_name(&self) -> &'static str {
        match self {
            PanelKind::Sidebar => SIDEBAR_COOKIE_NAME,
            PanelKind::SettingsPanel => SETTINGS_PANEL_COOKIE_NAME,
        }
    }

    pub fn shortcut(&self) -> KeyCombo {
        match self {
            PanelKind::Sidebar => KeyCombo::ctrl('b'),
            PanelKind::SettingsPanel => KeyCombo::ctrl('s'),
        }
    }

    pub fn action(&self) -> ShortcutAction {
        match self {
            PanelKind::Sidebar => ShortcutAction::ToggleSidebar,
            PanelKind::SettingsPanel => ShortcutAction::ToggleSettingsPanel,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Sidebar => "sidebar",
            PanelKind::SettingsPanel => "settings panel",
        }
    }
}

/// Two-valued presentation status derived from `open`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    Expanded,
    Collapsed,
}

impl PanelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelStatus::Expanded => "expanded",
            PanelStatus::Collapsed => "collapsed",
        }
    }
}

/// Ownership of the desktop `open` value.
pub enum OpenMode {
    /// The store owns the value.
    Uncontrolled { open: bool },
    /// The caller owns the value. The store reports requested changes through
    /// `on_change` and learns the outcome from [`PanelStore::sync_controlled`].
    Controlled {
        open: bool,
        on_change: Box<dyn FnMut(bool)>,
    },
}

impl OpenMode {
    fn value(&self) -> bool {
        match self {
            OpenMode::Uncontrolled { open } | OpenMode::Controlled { open, .. } => *open,
        }
    }
}

impl std::fmt::Debug for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenMode::Uncontrolled { open } => {
                f.debug_struct("Uncontrolled").field("open", open).finish()
            }
            OpenMode::Controlled { open, .. } => {
                f.debug_struct("Controlled").field("open", open).finish()
            }
        }
    }
}

/// Construction options for a [`PanelStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    /// Initial desktop value when uncontrolled and nothing is persisted
    pub default_open: bool,
    /// Viewport width below which the panel becomes an overlay sheet
    pub breakpoint: u32,
    /// Inclusive band in which the panel is unavailable on desktop
    pub mid_width: Option<(u32, u32)>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            default_open: true,
            breakpoint: DEFAULT_PANEL_BREAKPOINT,
            mid_width: None,
        }
    }
}

/// Open/close state of one panel.
#[derive(Debug)]
pub struct PanelStore {
    kind: PanelKind,
    mode: OpenMode,
    open_mobile: bool,
    mobile: BreakpointWatcher,
    mid_width_query: Option<DebouncedQuery>,
    mid_width_active: bool,
    storage: Option<SharedStore>,
    shortcut_bound: bool,
}

impl PanelStore {
    /// A store that owns its `open` value. Restores it from the persisted
    /// flag when one exists, else starts at `options.default_open`.
    pub fn uncontrolled(kind: PanelKind, options: PanelOptions, storage: Option<SharedStore>) -> Self {
        let restored = storage.as_ref().and_then(|s| read_flag(s, kind.cookie_name()));
        if let Some(open) = restored {
            debug!("Restored {} open={} from storage", kind.label(), open);
        }
        let open = restored.unwrap_or(options.default_open);
        Self::with_mode(kind, OpenMode::Uncontrolled { open }, options, storage)
    }

    /// A store whose `open` value is owned by the caller.
    pub fn controlled(
        kind: PanelKind,
        open: bool,
        on_change: Box<dyn FnMut(bool)>,
        options: PanelOptions,
        storage: Option<SharedStore>,
    ) -> Self {
        Self::with_mode(kind, OpenMode::Controlled { open, on_change }, options, storage)
    }

    fn with_mode(
        kind: PanelKind,
        mode: OpenMode,
        options: PanelOptions,
        storage: Option<SharedStore>,
    ) -> Self {
        Self {
            kind,
            mode,
            open_mobile: false,
            mobile: BreakpointWatcher::new(options.breakpoint),
            mid_width_query: options.mid_width.map(|(min, max)| mid_width(min, max)),
            mid_width_active: false,
            storage,
            shortcut_bound: false,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, OpenMode::Controlled { .. })
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// First completed render: start watching the viewport and bind the shortcut.
    pub fn mount(
        &mut self,
        width: u32,
        now: Instant,
        dispatcher: &mut KeyboardDispatcher,
    ) -> Result<()> {
        dispatcher.register(self.kind.shortcut(), self.kind.action())?;
        self.shortcut_bound = true;
        self.mobile.mount(width);
        if let Some(q) = self.mid_width_query.as_mut() {
            q.mount(width, now);
        }
        Ok(())
    }

    pub fn unmount(&mut self, dispatcher: &mut KeyboardDispatcher) {
        if self.shortcut_bound {
            dispatcher.unregister(self.kind.shortcut());
            self.shortcut_bound = false;
        }
        self.mobile.unmount();
        if let Some(q) = self.mid_width_query.as_mut() {
            q.unmount();
        }
        self.mid_width_active = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mobile.is_mounted()
    }

    /// Feed a new viewport width
    pub fn resize(&mut self, width: u32, now: Instant) {
        if self.mobile.resize(width) {
            debug!(
                "{} is now {}",
                self.kind.label(),
                if self.mobile.is_below() { "mobile" } else { "desktop" }
            );
        }
        if let Some(q) = self.mid_width_query.as_mut() {
            q.observe(width, now);
        }
    }

    /// Advance the mid-width debounce timer
    pub fn tick(&mut self, now: Instant) {
        let active = match self.mid_width_query.as_mut() {
            Some(q) => {
                q.tick(now);
                q.matches()
            }
            None => return,
        };
        self.set_mid_width_active(active);
    }

    // ─────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────

    /// The authoritative desktop value
    pub fn is_open(&self) -> bool {
        self.mode.value()
    }

    pub fn open_mobile(&self) -> bool {
        self.open_mobile
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile.is_below()
    }

    /// `expanded` iff `open`
    pub fn status(&self) -> PanelStatus {
        if self.is_open() {
            PanelStatus::Expanded
        } else {
            PanelStatus::Collapsed
        }
    }

    pub fn is_mid_width_active(&self) -> bool {
        self.mid_width_active
    }

    /// Whether the desktop panel may be open at the current width
    pub fn is_open_allowed(&self) -> bool {
        !(self.mid_width_active && !self.is_mobile())
    }

    /// What the layout should use: the mobile track on mobile, otherwise
    /// `open` gated by [`Self::is_open_allowed`].
    pub fn effective_open(&self) -> bool {
        if self.is_mobile() {
            self.open_mobile
        } else {
            self.is_open() && self.is_open_allowed()
        }
    }

    pub fn trigger_disabled(&self) -> bool {
        !self.is_open_allowed()
    }

    // ─────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────

    /// Request a desktop value. Clamped to `false` while the band forbids
    /// opening. Always persists the resulting flag.
    pub fn set_open(&mut self, open: bool) {
        let open = open && self.is_open_allowed();
        self.apply_open(open);
    }

    fn apply_open(&mut self, open: bool) {
        match &mut self.mode {
            OpenMode::Uncontrolled { open: current } => *current = open,
            OpenMode::Controlled { on_change, .. } => on_change(open),
        }
        if let Some(storage) = &self.storage {
            write_flag(storage, self.kind.cookie_name(), open);
        }
    }

    pub fn set_open_mobile(&mut self, open: bool) {
        self.open_mobile = open;
    }

    /// Caller-side update of a controlled value. Ignored when uncontrolled.
    pub fn sync_controlled(&mut self, value: bool) {
        if let OpenMode::Controlled { open, .. } = &mut self.mode {
            *open = value;
        }
    }

    pub fn open(&mut self) {
        if self.is_mobile() {
            self.set_open_mobile(true);
        } else {
            self.set_open(true);
        }
    }

    pub fn close(&mut self) {
        if self.is_mobile() {
            self.set_open_mobile(false);
        } else {
            self.set_open(false);
        }
    }

    /// Flip the mobile track on mobile, the desktop track otherwise.
    pub fn toggle(&mut self) {
        if self.is_mobile() {
            self.open_mobile = !self.open_mobile;
        } else if !self.is_open_allowed() {
            self.set_open(false);
        } else {
            let next = !self.is_open();
            self.set_open(next);
        }
        trace!(
            "Toggled {}: open={} open_mobile={}",
            self.kind.label(),
            self.is_open(),
            self.open_mobile
        );
    }

    /// Enter or leave the mid-width band. Entering it on desktop while open
    /// closes the panel once.
    pub fn set_mid_width_active(&mut self, active: bool) {
        if active == self.mid_width_active {
            return;
        }
        self.mid_width_active = active;
        if active && !self.is_mobile() && self.is_open() {
            info!("Mid-width band entered, closing {}", self.kind.label());
            self.apply_open(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, MemoryStore, MockKeyValueStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn desktop(kind: PanelKind) -> (PanelStore, KeyboardDispatcher) {
        let mut store = PanelStore::uncontrolled(kind, PanelOptions::default(), None);
        let mut d = KeyboardDispatcher::new();
        store.mount(1280, Instant::now(), &mut d).unwrap();
        (store, d)
    }

    #[test]
    fn test_status_follows_open() {
        let (mut store, _d) = desktop(PanelKind::Sidebar);
        assert_eq!(store.status(), PanelStatus::Expanded);
        store.set_open(false);
        assert_eq!(store.status().as_str(), "collapsed");
    }

    #[test]
    fn test_double_toggle_restores_desktop() {
        let (mut store, _d) = desktop(PanelKind::Sidebar);
        let before = store.is_open();
        store.toggle();
        assert_ne!(store.is_open(), before);
        store.toggle();
        assert_eq!(store.is_open(), before);
        assert!(!store.open_mobile());
    }

    #[test]
    fn test_mobile_toggle_only_touches_open_mobile() {
        let mut store = PanelStore::uncontrolled(PanelKind::Sidebar, PanelOptions::default(), None);
        let mut d = KeyboardDispatcher::new();
        store.mount(600, Instant::now(), &mut d).unwrap();
        assert!(store.is_mobile());

        store.toggle();
        assert!(store.open_mobile());
        assert!(store.is_open());
        store.toggle();
        assert!(!store.open_mobile());
        assert!(store.is_open());
    }

    #[test]
    fn test_desktop_before_mount() {
        let store = PanelStore::uncontrolled(PanelKind::Sidebar, PanelOptions::default(), None);
        assert!(!store.is_mobile());
        assert!(store.effective_open());
    }

    #[test]
    fn test_mid_width_band_blocks_open() {
        let options = PanelOptions {
            mid_width: Some((1000, 1170)),
            ..Default::default()
        };
        let mut store = PanelStore::uncontrolled(PanelKind::SettingsPanel, options, None);
        let mut d = KeyboardDispatcher::new();
        store.mount(1100, Instant::now(), &mut d).unwrap();

        store.set_mid_width_active(true);
        assert!(!store.is_open(), "entering the band closes the panel");
        assert!(store.trigger_disabled());

        for _ in 0..3 {
            store.toggle();
            assert!(!store.is_open());
        }
        store.set_open(true);
        assert!(!store.is_open());
        assert!(!store.effective_open());

        store.set_mid_width_active(false);
        store.toggle();
        assert!(store.is_open());
    }

    #[test]
    fn test_mid_width_band_ignored_on_mobile() {
        let options = PanelOptions {
            mid_width: Some((100, 2000)),
            breakpoint: 1024,
            ..Default::default()
        };
        let mut store = PanelStore::uncontrolled(PanelKind::SettingsPanel, options, None);
        let mut d = KeyboardDispatcher::new();
        store.mount(800, Instant::now(), &mut d).unwrap();
        store.set_mid_width_active(true);

        assert!(!store.trigger_disabled());
        store.toggle();
        assert!(store.open_mobile());
    }

    #[test]
    fn test_mid_width_follows_debounced_tick() {
        let t0 = Instant::now();
        let options = PanelOptions {
            mid_width: Some((1000, 1170)),
            ..Default::default()
        };
        let mut store = PanelStore::uncontrolled(PanelKind::SettingsPanel, options, None);
        let mut d = KeyboardDispatcher::new();
        store.mount(1100, t0, &mut d).unwrap();

        store.tick(t0 + std::time::Duration::from_millis(50));
        assert!(!store.is_mid_width_active());
        store.tick(t0 + std::time::Duration::from_millis(200));
        assert!(store.is_mid_width_active());
        assert!(!store.is_open());
    }

    #[test]
    fn test_controlled_reports_through_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut store = PanelStore::controlled(
            PanelKind::Sidebar,
            true,
            Box::new(move |v| sink.borrow_mut().push(v)),
            PanelOptions::default(),
            None,
        );
        store.toggle();
        assert_eq!(*seen.borrow(), vec![false]);
        assert!(store.is_open(), "controlled value only moves on sync");

        store.sync_controlled(false);
        assert_eq!(store.status(), PanelStatus::Collapsed);
        store.toggle();
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_set_open_persists_flag() {
        let storage = shared(MemoryStore::new());
        let mut store =
            PanelStore::uncontrolled(PanelKind::Sidebar, PanelOptions::default(), Some(storage.clone()));
        store.set_open(false);
        assert_eq!(read_flag(&storage, SIDEBAR_COOKIE_NAME), Some(false));
    }

    #[test]
    fn test_restores_from_flag() {
        let storage = shared(MemoryStore::new());
        write_flag(&storage, SETTINGS_PANEL_COOKIE_NAME, false);
        let store = PanelStore::uncontrolled(
            PanelKind::SettingsPanel,
            PanelOptions::default(),
            Some(storage),
        );
        assert!(!store.is_open());
    }

    #[test]
    fn test_mobile_track_is_never_persisted() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set().never();
        let storage = shared(mock);

        let mut store =
            PanelStore::uncontrolled(PanelKind::Sidebar, PanelOptions::default(), Some(storage));
        let mut d = KeyboardDispatcher::new();
        store.mount(500, Instant::now(), &mut d).unwrap();
        store.toggle();
        store.set_open_mobile(false);
    }

    #[test]
    fn test_mount_binds_and_unmount_releases_shortcut() {
        let (mut store, mut d) = desktop(PanelKind::SettingsPanel);
        assert_eq!(
            d.dispatch(&crate::input_key::InputKey::CharCtrl('s')),
            Some(ShortcutAction::ToggleSettingsPanel)
        );
        store.unmount(&mut d);
        assert!(d.is_empty());
        assert!(!store.is_mounted());
    }
}
