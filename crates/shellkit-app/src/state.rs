//! Shell state (Model in TEA pattern)

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use shellkit_core::prelude::*;
use shellkit_core::{create_high_contrast_theme, validate_theme, ThemeConfig};

use crate::config::ShellConfig;
use crate::layout_state::{AppLayoutAction, AppLayoutStatePatch, AppLayoutStore, StoreOptions};
use crate::nav::SidebarNav;
use crate::panel::{PanelKind, PanelStore};
use crate::providers::Providers;
use crate::region::{Region, RegionGuard};
use crate::shell::{compose, PanelPresentation, ShellLayout, ShellOptions};
use crate::shortcuts::KeyboardDispatcher;
use crate::storage::SharedStore;
use crate::team_switcher::TeamSwitcherState;
use crate::user_menu::UserMenuState;
use crate::viewport::columns_to_px;

/// Which part of the shell receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    Sidebar,
    #[default]
    Content,
    SettingsPanel,
}

/// A settings panel section as shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: String,
    /// `None` until loaded
    pub body: Option<String>,
}

type ActionQueue = Rc<RefCell<VecDeque<AppLayoutAction>>>;

/// Complete shell state
#[derive(Debug)]
pub struct ShellState {
    pub config: ShellConfig,

    /// Directory the config was read from; relative content paths resolve against it
    pub config_dir: PathBuf,

    pub dispatcher: KeyboardDispatcher,
    pub sidebar: PanelStore,
    pub settings_panel: PanelStore,
    pub layout_store: AppLayoutStore,

    /// Open requests from store-bound panels, applied after each change
    pending_layout: ActionQueue,

    pub team_switcher: TeamSwitcherState,
    pub nav: SidebarNav,
    pub user_menu: UserMenuState,

    pub regions: RegionGuard,
    pub content: Option<String>,
    pub sections: Vec<SettingsSection>,

    pub focus: FocusArea,
    pub content_scroll: u16,
    pub settings_scroll: u16,

    /// Last viewport width in px, `None` before the first frame
    pub viewport_width: Option<u32>,

    /// One-line feedback shown in the content header
    pub notice: Option<String>,

    quitting: bool,
    fatal_error: Option<Error>,
}

/// The caller override for the layout store: `[initial_state]`, with the
/// first configured team as the active one unless the override names one.
fn initial_layout(config: &ShellConfig) -> Option<AppLayoutStatePatch> {
    let mut patch = config.initial_state.clone().unwrap_or_default();
    if patch.active_team.is_none() {
        patch.active_team = config.teams.first().cloned().map(Some);
    }
    (!patch.is_empty()).then_some(patch)
}

impl ShellState {
    /// Build the shell from config. `storage` is `None` when persistence is off.
    pub fn new(config: ShellConfig, config_dir: &Path, storage: Option<SharedStore>) -> Self {
        let layout_store = AppLayoutStore::new(
            StoreOptions {
                initial_state: initial_layout(&config),
                disable_persistence: storage.is_none(),
            },
            storage.clone(),
        );
        let pending_layout: ActionQueue = Rc::new(RefCell::new(VecDeque::new()));

        let sidebar = if config.sidebar.bind_to_store {
            let queue = pending_layout.clone();
            PanelStore::controlled(
                PanelKind::Sidebar,
                layout_store.state().sidebar_open,
                Box::new(move |open| {
                    queue
                        .borrow_mut()
                        .push_back(AppLayoutAction::SetSidebar(open))
                }),
                config.sidebar.panel_options(),
                storage.clone(),
            )
        } else {
            PanelStore::uncontrolled(
                PanelKind::Sidebar,
                config.sidebar.panel_options(),
                storage.clone(),
            )
        };

        let settings_panel = if config.settings_panel.bind_to_store {
            let queue = pending_layout.clone();
            PanelStore::controlled(
                PanelKind::SettingsPanel,
                layout_store.state().settings_panel_open,
                Box::new(move |open| {
                    queue
                        .borrow_mut()
                        .push_back(AppLayoutAction::SetSettings(open))
                }),
                config.settings_panel.panel_options(),
                storage.clone(),
            )
        } else {
            PanelStore::uncontrolled(
                PanelKind::SettingsPanel,
                config.settings_panel.panel_options(),
                storage.clone(),
            )
        };

        let sidebar_data = config.sidebar_data();
        let team_switcher = TeamSwitcherState::new(config.teams.clone());
        let nav = SidebarNav::from_data(sidebar_data.as_ref());
        let user_menu = UserMenuState::new(config.user.clone());
        let sections = config
            .settings_panel
            .sections
            .iter()
            .map(|s| SettingsSection {
                title: s.title.clone(),
                body: None,
            })
            .collect();

        let mut state = Self {
            config,
            config_dir: config_dir.to_path_buf(),
            dispatcher: KeyboardDispatcher::new(),
            sidebar,
            settings_panel,
            layout_store,
            pending_layout,
            team_switcher,
            nav,
            user_menu,
            regions: RegionGuard::new(),
            content: None,
            sections,
            focus: FocusArea::default(),
            content_scroll: 0,
            settings_scroll: 0,
            viewport_width: None,
            notice: None,
            quitting: false,
            fatal_error: None,
        };
        state.sync_from_store();
        state
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn is_mounted(&self) -> bool {
        self.sidebar.is_mounted()
    }

    /// First completed render: bind shortcuts, start watching the viewport
    /// and write the initial layout snapshot.
    pub fn mount(&mut self, columns: u16, now: Instant) -> Result<()> {
        if self.is_mounted() {
            return Ok(());
        }
        let width = self.columns_to_width(columns);
        self.viewport_width = Some(width);
        self.sidebar.mount(width, now, &mut self.dispatcher)?;
        if self.settings_panel_shown() {
            self.settings_panel.mount(width, now, &mut self.dispatcher)?;
        }
        self.layout_store.mount();
        info!("Shell mounted at {}px ({} columns)", width, columns);
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.sidebar.unmount(&mut self.dispatcher);
        self.settings_panel.unmount(&mut self.dispatcher);
        self.layout_store.unmount();
    }

    pub fn resize(&mut self, columns: u16, now: Instant) {
        let width = self.columns_to_width(columns);
        self.viewport_width = Some(width);
        self.sidebar.resize(width, now);
        self.settings_panel.resize(width, now);
        self.clamp_focus();
    }

    pub fn tick(&mut self, now: Instant) {
        self.sidebar.tick(now);
        self.settings_panel.tick(now);
        self.sync_from_store();
        self.clamp_focus();
    }

    fn columns_to_width(&self, columns: u16) -> u32 {
        columns_to_px(columns, self.config.ui.px_per_column)
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// Record an error that must end the program
    pub fn fail_fatal(&mut self, err: Error) {
        error!("Fatal: {}", err);
        self.fatal_error = Some(err);
        self.quitting = true;
    }

    pub fn take_fatal_error(&mut self) -> Option<Error> {
        self.fatal_error.take()
    }

    // ─────────────────────────────────────────────────────────
    // Composition
    // ─────────────────────────────────────────────────────────

    pub fn settings_panel_shown(&self) -> bool {
        self.config.settings_panel.show && self.config.settings_panel.has_content()
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            show_settings_panel: self.config.settings_panel.show,
            show_settings_trigger: self.config.settings_panel.show_trigger,
            has_settings_content: self.config.settings_panel.has_content(),
        }
    }

    pub fn providers(&self) -> Providers<'_> {
        let providers = Providers::new()
            .with_sidebar(&self.sidebar)
            .with_layout_store(&self.layout_store);
        if self.settings_panel_shown() {
            providers.with_settings_panel(&self.settings_panel)
        } else {
            providers
        }
    }

    pub fn layout(&self) -> Result<ShellLayout> {
        compose(&self.providers(), &self.shell_options())
    }

    /// Validated theme for the current mode, high-contrast applied when enabled
    pub fn theme(&self) -> ThemeConfig {
        let layout = self.layout_store.state();
        let is_dark = layout.theme.is_dark(self.config.appearance.dark_base);
        let theme = validate_theme(self.config.theme.as_ref(), is_dark);
        if layout.high_contrast {
            create_high_contrast_theme(&theme)
        } else {
            theme
        }
    }

    // ─────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────

    pub fn panel_mut(&mut self, kind: PanelKind) -> &mut PanelStore {
        match kind {
            PanelKind::Sidebar => &mut self.sidebar,
            PanelKind::SettingsPanel => &mut self.settings_panel,
        }
    }

    pub fn toggle_panel(&mut self, kind: PanelKind) {
        if kind == PanelKind::SettingsPanel && !self.settings_panel_shown() {
            return;
        }
        let panel = self.panel_mut(kind);
        panel.toggle();
        let revealed_sheet = panel.is_mobile() && panel.open_mobile();
        self.sync_from_store();
        if revealed_sheet {
            self.focus = match kind {
                PanelKind::Sidebar => FocusArea::Sidebar,
                PanelKind::SettingsPanel => FocusArea::SettingsPanel,
            };
        }
        self.clamp_focus();
    }

    /// Close visible sheets and menus. Returns true if anything closed.
    pub fn dismiss(&mut self) -> bool {
        let mut closed = false;
        if self.team_switcher.is_menu_open() {
            self.team_switcher.close_menu();
            closed = true;
        }
        if self.user_menu.is_open() {
            self.user_menu.close();
            closed = true;
        }
        for kind in [PanelKind::Sidebar, PanelKind::SettingsPanel] {
            let panel = self.panel_mut(kind);
            if panel.is_mobile() && panel.open_mobile() {
                panel.set_open_mobile(false);
                closed = true;
            }
        }
        self.clamp_focus();
        closed
    }

    // ─────────────────────────────────────────────────────────
    // Layout store
    // ─────────────────────────────────────────────────────────

    pub fn dispatch_layout(&mut self, action: AppLayoutAction) -> bool {
        let changed = self.layout_store.dispatch(action);
        self.sync_from_store();
        changed
    }

    /// Apply queued panel requests to the store, then reflect the store back
    /// into store-bound panels and the widgets that mirror it.
    pub fn sync_from_store(&mut self) {
        loop {
            let next = self.pending_layout.borrow_mut().pop_front();
            match next {
                Some(action) => {
                    self.layout_store.dispatch(action);
                }
                None => break,
            }
        }

        let layout = self.layout_store.state();
        if self.config.sidebar.bind_to_store {
            self.sidebar.sync_controlled(layout.sidebar_open);
        }
        if self.config.settings_panel.bind_to_store {
            self.settings_panel.sync_controlled(layout.settings_panel_open);
        }
        self.team_switcher.sync_active(layout.active_team.as_ref());
        self.nav.set_active(layout.active_section.as_deref());
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    /// Areas that can take focus in the current layout, in Tab order
    pub fn focusable_areas(&self) -> Vec<FocusArea> {
        let mut areas = Vec::with_capacity(3);
        let Ok(layout) = self.layout() else {
            return vec![FocusArea::Content];
        };
        if is_showing(layout.sidebar) {
            areas.push(FocusArea::Sidebar);
        }
        areas.push(FocusArea::Content);
        if layout.settings_panel.is_some_and(is_showing) {
            areas.push(FocusArea::SettingsPanel);
        }
        areas
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, step: isize) {
        let areas = self.focusable_areas();
        let n = areas.len() as isize;
        let current = areas.iter().position(|a| *a == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(n) as usize;
        self.focus = areas[next];
    }

    fn clamp_focus(&mut self) {
        if !self.focusable_areas().contains(&self.focus) {
            self.focus = FocusArea::Content;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Regions
    // ─────────────────────────────────────────────────────────

    /// Every region with caller-supplied content
    pub fn loadable_regions(&self) -> Vec<Region> {
        let mut regions = vec![Region::Content];
        regions.extend((0..self.sections.len()).map(Region::SettingsSection));
        regions
    }

    pub fn set_region_content(&mut self, region: Region, body: Option<String>) {
        match region {
            Region::Content => self.content = body,
            Region::SettingsSection(i) => {
                if let Some(section) = self.sections.get_mut(i) {
                    section.body = body;
                }
            }
            Region::Sidebar | Region::Header => {}
        }
    }
}

fn is_showing(presentation: PanelPresentation) -> bool {
    matches!(
        presentation,
        PanelPresentation::Inline { expanded: true } | PanelPresentation::Sheet { visible: true }
    )
}
