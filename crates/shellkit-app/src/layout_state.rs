//! Application layout state: a reducer store for cross-cutting UI flags
//!
//! Every transition is a pure function ([`reduce`]). The store wraps it with
//! optional persistence of the full snapshot under [`STORAGE_KEY`].
//!
//! Initial state precedence: defaults < restored snapshot < caller override.

use serde::{Deserialize, Deserializer, Serialize};
use shellkit_core::prelude::*;
use shellkit_core::{Team, ThemeMode};

use crate::storage::SharedStore;

/// Storage key of the persisted snapshot
pub const STORAGE_KEY: &str = "app-layout-state";

/// Notification counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notifications {
    pub count: u32,
    pub has_unread: bool,
}

/// Cross-cutting layout flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLayoutState {
    pub sidebar_open: bool,
    pub settings_panel_open: bool,
    pub active_section: Option<String>,
    pub theme: ThemeMode,
    pub high_contrast: bool,
    pub active_team: Option<Team>,
    pub notifications: Notifications,
}

impl Default for AppLayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            settings_panel_open: false,
            active_section: None,
            theme: ThemeMode::System,
            high_contrast: false,
            active_team: None,
            notifications: Notifications::default(),
        }
    }
}

/// Distinguishes an absent field from an explicit `null`.
fn explicit_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A partial [`AppLayoutState`], shallow-merged over a full one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppLayoutStatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_panel_open: Option<bool>,
    #[serde(
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_section: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_team: Option<Option<Team>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Notifications>,
}

impl AppLayoutStatePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge: every present field replaces the target's.
    pub fn apply_to(&self, state: &mut AppLayoutState) {
        if let Some(v) = self.sidebar_open {
            state.sidebar_open = v;
        }
        if let Some(v) = self.settings_panel_open {
            state.settings_panel_open = v;
        }
        if let Some(v) = &self.active_section {
            state.active_section = v.clone();
        }
        if let Some(v) = self.theme {
            state.theme = v;
        }
        if let Some(v) = self.high_contrast {
            state.high_contrast = v;
        }
        if let Some(v) = &self.active_team {
            state.active_team = v.clone();
        }
        if let Some(v) = &self.notifications {
            state.notifications = v.clone();
        }
    }
}

/// The closed set of state transitions.
///
/// JSON form is `{"type": "SET_THEME", "payload": "dark"}`; an unrecognised
/// `type` becomes [`AppLayoutAction::Unknown`], which changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppLayoutAction {
    ToggleSidebar,
    SetSidebar(bool),
    ToggleSettings,
    SetSettings(bool),
    SetActiveSection(Option<String>),
    SetTheme(ThemeMode),
    ToggleHighContrast,
    SetHighContrast(bool),
    SetActiveTeam(Option<Team>),
    SetNotificationCount(u32),
    MarkNotificationsRead,
    ResetState,
    #[serde(other)]
    Unknown,
}

/// Pure transition function
pub fn reduce(state: &AppLayoutState, action: &AppLayoutAction) -> AppLayoutState {
    let mut next = state.clone();
    match action {
        AppLayoutAction::ToggleSidebar => next.sidebar_open = !state.sidebar_open,
        AppLayoutAction::SetSidebar(open) => next.sidebar_open = *open,
        AppLayoutAction::ToggleSettings => next.settings_panel_open = !state.settings_panel_open,
        AppLayoutAction::SetSettings(open) => next.settings_panel_open = *open,
        AppLayoutAction::SetActiveSection(section) => next.active_section = section.clone(),
        AppLayoutAction::SetTheme(theme) => next.theme = *theme,
        AppLayoutAction::ToggleHighContrast => next.high_contrast = !state.high_contrast,
        AppLayoutAction::SetHighContrast(enabled) => next.high_contrast = *enabled,
        AppLayoutAction::SetActiveTeam(team) => next.active_team = team.clone(),
        AppLayoutAction::SetNotificationCount(count) => {
            next.notifications.count = *count;
            next.notifications.has_unread = *count > 0;
        }
        AppLayoutAction::MarkNotificationsRead => next.notifications.has_unread = false,
        AppLayoutAction::ResetState => next = AppLayoutState::default(),
        AppLayoutAction::Unknown => {}
    }
    next
}

/// Construction options for [`AppLayoutStore`]
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Explicit caller override, applied over any restored snapshot
    pub initial_state: Option<AppLayoutStatePatch>,
    /// Never read from nor write to storage
    pub disable_persistence: bool,
}

/// Reducer store with optional snapshot persistence.
#[derive(Debug)]
pub struct AppLayoutStore {
    state: AppLayoutState,
    storage: Option<SharedStore>,
    mounted: bool,
}

impl AppLayoutStore {
    pub fn new(options: StoreOptions, storage: Option<SharedStore>) -> Self {
        let storage = if options.disable_persistence {
            None
        } else {
            storage
        };

        let mut state = AppLayoutState::default();
        if let Some(restored) = storage.as_ref().and_then(restore_snapshot) {
            restored.apply_to(&mut state);
        }
        if let Some(initial) = &options.initial_state {
            initial.apply_to(&mut state);
        }

        Self {
            state,
            storage,
            mounted: false,
        }
    }

    pub fn state(&self) -> &AppLayoutState {
        &self.state
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Writes the initial snapshot.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.persist();
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Apply an action. Returns true if the state changed.
    pub fn dispatch(&mut self, action: AppLayoutAction) -> bool {
        if action == AppLayoutAction::Unknown {
            debug!("Ignoring unknown layout action");
            return false;
        }
        let next = reduce(&self.state, &action);
        if next == self.state {
            return false;
        }
        trace!("Layout action {:?}", action);
        self.state = next;
        if self.mounted {
            self.persist();
        }
        true
    }

    /// Apply an action given in JSON form. Malformed actions are logged and ignored.
    pub fn dispatch_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<AppLayoutAction>(json) {
            Ok(action) => self.dispatch(action),
            Err(e) => {
                warn!("Ignoring malformed layout action {}: {}", json, e);
                false
            }
        }
    }

    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize app layout state: {}", e);
                return;
            }
        };
        if let Err(e) = storage.borrow_mut().set(STORAGE_KEY, &json, None) {
            error!("Failed to save app layout state: {}", e);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Slices
    // ─────────────────────────────────────────────────────────

    pub fn sidebar(&mut self) -> PanelSlice<'_> {
        PanelSlice {
            store: self,
            settings: false,
        }
    }

    pub fn settings_panel(&mut self) -> PanelSlice<'_> {
        PanelSlice {
            store: self,
            settings: true,
        }
    }

    pub fn theme(&mut self) -> ThemeSlice<'_> {
        ThemeSlice { store: self }
    }

    pub fn active_team(&mut self) -> ActiveTeamSlice<'_> {
        ActiveTeamSlice { store: self }
    }

    pub fn notifications(&mut self) -> NotificationsSlice<'_> {
        NotificationsSlice { store: self }
    }
}

fn restore_snapshot(storage: &SharedStore) -> Option<AppLayoutStatePatch> {
    let saved = match storage.borrow().get(STORAGE_KEY) {
        Ok(Some(saved)) => saved,
        Ok(None) => return None,
        Err(e) => {
            error!("Failed to read saved app layout state: {}", e);
            return None;
        }
    };
    match serde_json::from_str::<AppLayoutStatePatch>(&saved) {
        Ok(patch) => {
            debug!("Restored app layout state");
            Some(patch)
        }
        Err(e) => {
            error!(
                "{}",
                Error::storage_corrupt(STORAGE_KEY, format!("Failed to parse saved state: {e}"))
            );
            None
        }
    }
}

/// Open/close view over one of the two panel flags
pub struct PanelSlice<'a> {
    store: &'a mut AppLayoutStore,
    settings: bool,
}

impl PanelSlice<'_> {
    pub fn is_open(&self) -> bool {
        if self.settings {
            self.store.state.settings_panel_open
        } else {
            self.store.state.sidebar_open
        }
    }

    pub fn toggle(&mut self) -> bool {
        let action = if self.settings {
            AppLayoutAction::ToggleSettings
        } else {
            AppLayoutAction::ToggleSidebar
        };
        self.store.dispatch(action)
    }

    pub fn set(&mut self, open: bool) -> bool {
        let action = if self.settings {
            AppLayoutAction::SetSettings(open)
        } else {
            AppLayoutAction::SetSidebar(open)
        };
        self.store.dispatch(action)
    }

    pub fn open(&mut self) -> bool {
        self.set(true)
    }

    pub fn close(&mut self) -> bool {
        self.set(false)
    }
}

/// Theme preference view
pub struct ThemeSlice<'a> {
    store: &'a mut AppLayoutStore,
}

impl ThemeSlice<'_> {
    pub fn theme(&self) -> ThemeMode {
        self.store.state.theme
    }

    pub fn high_contrast(&self) -> bool {
        self.store.state.high_contrast
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> bool {
        self.store.dispatch(AppLayoutAction::SetTheme(theme))
    }

    pub fn toggle_high_contrast(&mut self) -> bool {
        self.store.dispatch(AppLayoutAction::ToggleHighContrast)
    }

    pub fn set_high_contrast(&mut self, enabled: bool) -> bool {
        self.store.dispatch(AppLayoutAction::SetHighContrast(enabled))
    }
}

/// Active team view
pub struct ActiveTeamSlice<'a> {
    store: &'a mut AppLayoutStore,
}

impl ActiveTeamSlice<'_> {
    pub fn get(&self) -> Option<&Team> {
        self.store.state.active_team.as_ref()
    }

    pub fn set(&mut self, team: Option<Team>) -> bool {
        self.store.dispatch(AppLayoutAction::SetActiveTeam(team))
    }
}

/// Notification counter view
pub struct NotificationsSlice<'a> {
    store: &'a mut AppLayoutStore,
}

impl NotificationsSlice<'_> {
    pub fn count(&self) -> u32 {
        self.store.state.notifications.count
    }

    pub fn has_unread(&self) -> bool {
        self.store.state.notifications.has_unread
    }

    pub fn set_count(&mut self, count: u32) -> bool {
        self.store.dispatch(AppLayoutAction::SetNotificationCount(count))
    }

    pub fn mark_read(&mut self) -> bool {
        self.store.dispatch(AppLayoutAction::MarkNotificationsRead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, KeyValueStore, MemoryStore, MockKeyValueStore};

    fn store_with(saved: &str) -> SharedStore {
        let mut mem = MemoryStore::new();
        mem.set(STORAGE_KEY, saved, None).unwrap();
        shared(mem)
    }

    #[test]
    fn test_defaults() {
        let s = AppLayoutState::default();
        assert!(s.sidebar_open);
        assert!(!s.settings_panel_open);
        assert_eq!(s.active_section, None);
        assert_eq!(s.theme, ThemeMode::System);
        assert!(!s.high_contrast);
        assert_eq!(s.active_team, None);
        assert_eq!(s.notifications, Notifications::default());
    }

    #[test]
    fn test_notification_count_derives_unread() {
        let s = reduce(&AppLayoutState::default(), &AppLayoutAction::SetNotificationCount(3));
        assert_eq!(s.notifications.count, 3);
        assert!(s.notifications.has_unread);

        let s = reduce(&s, &AppLayoutAction::MarkNotificationsRead);
        assert_eq!(s.notifications.count, 3, "mark read keeps the count");
        assert!(!s.notifications.has_unread);

        let s = reduce(&s, &AppLayoutAction::SetNotificationCount(0));
        assert!(!s.notifications.has_unread);
    }

    #[test]
    fn test_reset_state_returns_defaults() {
        let mut s = AppLayoutState::default();
        s.high_contrast = true;
        s.active_section = Some("billing".into());
        assert_eq!(
            reduce(&s, &AppLayoutAction::ResetState),
            AppLayoutState::default()
        );
    }

    #[test]
    fn test_double_toggle_restores() {
        let s = AppLayoutState::default();
        let once = reduce(&s, &AppLayoutAction::ToggleSettings);
        assert!(once.settings_panel_open);
        assert_eq!(reduce(&once, &AppLayoutAction::ToggleSettings), s);

        let once = reduce(&s, &AppLayoutAction::ToggleSidebar);
        assert!(!once.sidebar_open);
        assert_eq!(reduce(&once, &AppLayoutAction::ToggleSidebar), s);
    }

    #[test]
    fn test_action_json_form() {
        let a: AppLayoutAction =
            serde_json::from_str(r#"{"type":"SET_THEME","payload":"dark"}"#).unwrap();
        assert_eq!(a, AppLayoutAction::SetTheme(ThemeMode::Dark));

        let a: AppLayoutAction = serde_json::from_str(r#"{"type":"TOGGLE_SIDEBAR"}"#).unwrap();
        assert_eq!(a, AppLayoutAction::ToggleSidebar);

        let a: AppLayoutAction =
            serde_json::from_str(r#"{"type":"SET_ACTIVE_TEAM","payload":null}"#).unwrap();
        assert_eq!(a, AppLayoutAction::SetActiveTeam(None));
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let a: AppLayoutAction = serde_json::from_str(r#"{"type":"FROBNICATE"}"#).unwrap();
        assert_eq!(a, AppLayoutAction::Unknown);

        let mut store = AppLayoutStore::new(StoreOptions::default(), None);
        let before = store.state().clone();
        assert!(!store.dispatch(a));
        assert!(!store.dispatch_json("not json"));
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn test_restores_partial_snapshot() {
        let storage = store_with(r#"{"sidebarOpen":false,"theme":"dark"}"#);
        let store = AppLayoutStore::new(StoreOptions::default(), Some(storage));
        let s = store.state();
        assert!(!s.sidebar_open);
        assert_eq!(s.theme, ThemeMode::Dark);
        assert!(!s.settings_panel_open);
        assert!(!s.high_contrast);
        assert_eq!(s.notifications, Notifications::default());
    }

    #[test]
    fn test_caller_override_beats_storage() {
        let storage = store_with(r#"{"sidebarOpen":false,"highContrast":true}"#);
        let options = StoreOptions {
            initial_state: Some(AppLayoutStatePatch {
                sidebar_open: Some(true),
                ..Default::default()
            }),
            disable_persistence: false,
        };
        let store = AppLayoutStore::new(options, Some(storage));
        assert!(store.state().sidebar_open);
        assert!(store.state().high_contrast);
    }

    #[test]
    fn test_corrupt_snapshot_treated_as_absent() {
        let storage = store_with("{definitely not json");
        let store = AppLayoutStore::new(StoreOptions::default(), Some(storage));
        assert_eq!(*store.state(), AppLayoutState::default());
    }

    #[test]
    fn test_disable_persistence_never_touches_storage() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().never();
        mock.expect_set().never();
        mock.expect_remove().never();
        let options = StoreOptions {
            initial_state: None,
            disable_persistence: true,
        };
        let mut store = AppLayoutStore::new(options, Some(shared(mock)));
        store.mount();
        store.dispatch(AppLayoutAction::ToggleSidebar);
        assert!(!store.is_persistent());
    }

    #[test]
    fn test_persists_at_mount_and_on_change() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().times(1).returning(|_| Ok(None));
        mock.expect_set()
            .withf(|key, _, expires| key == STORAGE_KEY && expires.is_none())
            .times(2)
            .returning(|_, _, _| Ok(()));
        let mut store = AppLayoutStore::new(StoreOptions::default(), Some(shared(mock)));
        store.mount();
        store.dispatch(AppLayoutAction::SetTheme(ThemeMode::Light));
        // no change, no write
        store.dispatch(AppLayoutAction::SetTheme(ThemeMode::Light));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Err(Error::storage("offline")));
        mock.expect_set()
            .returning(|_, _, _| Err(Error::storage("offline")));
        let mut store = AppLayoutStore::new(StoreOptions::default(), Some(shared(mock)));
        store.mount();
        assert!(store.dispatch(AppLayoutAction::ToggleHighContrast));
        assert!(store.state().high_contrast);
    }

    #[test]
    fn test_snapshot_is_camel_case() {
        let storage = shared(MemoryStore::new());
        let mut store = AppLayoutStore::new(StoreOptions::default(), Some(storage.clone()));
        store.mount();
        store.notifications().set_count(2);
        let saved = storage.borrow().get(STORAGE_KEY).unwrap().unwrap();
        assert!(saved.contains("\"sidebarOpen\":true"));
        assert!(saved.contains("\"hasUnread\":true"));
        assert!(saved.contains("\"activeTeam\":null"));
    }

    #[test]
    fn test_slices() {
        let mut store = AppLayoutStore::new(StoreOptions::default(), None);
        store.sidebar().close();
        assert!(!store.sidebar().is_open());
        store.settings_panel().toggle();
        assert!(store.settings_panel().is_open());
        store.theme().set_theme(ThemeMode::Dark);
        store.theme().toggle_high_contrast();
        assert_eq!(store.theme().theme(), ThemeMode::Dark);
        assert!(store.theme().high_contrast());
        store.active_team().set(Some(Team::new("Acme", "A")));
        assert_eq!(store.active_team().get().map(|t| t.name.as_str()), Some("Acme"));
        store.notifications().set_count(5);
        store.notifications().mark_read();
        assert_eq!(store.notifications().count(), 5);
        assert!(!store.notifications().has_unread());
    }

    #[test]
    fn test_patch_explicit_null_clears() {
        let patch: AppLayoutStatePatch =
            serde_json::from_str(r#"{"activeSection":null}"#).unwrap();
        assert_eq!(patch.active_section, Some(None));
        let mut s = AppLayoutState::default();
        s.active_section = Some("x".into());
        patch.apply_to(&mut s);
        assert_eq!(s.active_section, None);

        let empty: AppLayoutStatePatch = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
